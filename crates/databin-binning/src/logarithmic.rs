//! Equal-ratio binning in log space
//!
//! Boundaries form a geometric progression from `min` to `max`, so every bin
//! spans the same multiplicative range. Since the bins have unequal widths,
//! the raw weight of each bin is turned into a density (weight / width) and
//! all densities are rescaled by one common ratio so that the bin values sum
//! to the total weight of the table.

use crate::limits::{assign, total_weight, Assignment, KeyRange, Spacing};
use crate::traits::DataBinning;
use crate::types::DataBin;
use databin_core::{Error, Key, Result, Weight};
use std::collections::BTreeMap;
use tracing::{instrument, trace};

/// Fixed-count logarithmic binning producing rescaled densities
///
/// All keys must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogarithmicBinning {
    bins: usize,
    base: f64,
}

impl LogarithmicBinning {
    /// Create a new logarithmic binning
    ///
    /// `bins` must be at least 1 and `base` at least 2.
    pub fn new(bins: usize, base: f64) -> Result<Self> {
        if bins < 1 {
            return Err(Error::invalid_bin_count(bins));
        }
        Ok(Self {
            bins,
            base: check_base(base)?,
        })
    }

    /// Get the number of bins
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Get the base of the logarithm
    pub fn base(&self) -> f64 {
        self.base
    }
}

impl<K: Key, W: Weight> DataBinning<K, W> for LogarithmicBinning {
    type Value = f64;

    #[instrument(level = "trace", skip_all, fields(bins = self.bins, base = self.base, keys = table.len()))]
    fn bin(&self, table: &BTreeMap<K, W>) -> Result<Vec<DataBin<f64>>> {
        let range = KeyRange::of(table)?;
        let limits = Spacing::Logarithmic { base: self.base }.limits(&range, self.bins)?;
        let assignment = assign(table, &limits);

        Ok(density_bins(&limits, &assignment, total_weight(table), self.base))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.bins)
    }
}

/// Validate a logarithm base
pub(crate) fn check_base(base: f64) -> Result<f64> {
    // Written so that NaN fails too
    if !(base >= 2.0) || base.is_infinite() {
        return Err(Error::invalid_base(base));
    }
    Ok(base)
}

/// Convert per-bin weights into densities rescaled to the table total
///
/// Each bin is centered on the geometric mean of its edges.
pub(crate) fn density_bins<W: Weight>(
    limits: &[f64],
    assignment: &Assignment<W>,
    total: f64,
    base: f64,
) -> Vec<DataBin<f64>> {
    let densities: Vec<f64> = limits
        .windows(2)
        .zip(&assignment.sums)
        .map(|(edges, sum)| sum.as_f64() / (edges[1] - edges[0]))
        .collect();

    let density_sum: f64 = densities.iter().sum();
    let ratio = if density_sum > 0.0 { total / density_sum } else { 0.0 };
    trace!(density_sum, ratio, "rescaling densities");

    let log_base = base.ln();
    limits
        .windows(2)
        .zip(densities)
        .map(|(edges, density)| {
            let (left, right) = (edges[0], edges[1]);
            let center = base.powf(0.5 * (left * right).ln() / log_base);
            DataBin::with_center(ratio * density, left, right, center)
        })
        .collect()
}
