//! Equal-width binning
//!
//! Both policies here split `[min, max]` of the table keys into a fixed
//! number of equal-width bins. [`LinearBinning`] sums the weight falling in
//! each bin; [`LinearAverageBinning`] divides that sum by the number of
//! distinct keys in the bin.

use crate::limits::{assign, Assignment, KeyRange, Spacing};
use crate::traits::DataBinning;
use crate::types::DataBin;
use databin_core::{Error, Key, Result, Weight};
use std::collections::BTreeMap;
use tracing::{instrument, trace};

/// Fixed-count, equal-width binning that sums weights
///
/// Bin values have the weight type of the table, so integral tables are
/// aggregated exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearBinning {
    bins: usize,
}

impl LinearBinning {
    /// Create a new linear binning with the given number of bins
    pub fn new(bins: usize) -> Result<Self> {
        if bins < 1 {
            return Err(Error::invalid_bin_count(bins));
        }
        Ok(Self { bins })
    }

    /// Get the number of bins
    pub fn bins(&self) -> usize {
        self.bins
    }
}

impl<K: Key, W: Weight> DataBinning<K, W> for LinearBinning {
    type Value = W;

    #[instrument(level = "trace", skip_all, fields(bins = self.bins, keys = table.len()))]
    fn bin(&self, table: &BTreeMap<K, W>) -> Result<Vec<DataBin<W>>> {
        let range = KeyRange::of(table)?;
        let limits = Spacing::Linear.limits(&range, self.bins)?;
        let assignment = assign(table, &limits);
        trace!(sums = ?assignment.sums, "assigned weights");

        Ok(sum_bins(&limits, assignment))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.bins)
    }
}

/// Fixed-count, equal-width binning that averages weights per distinct key
///
/// A bin with no keys has no average; its value is NaN. Use
/// [`MaximumLinearAverageBinning`](crate::MaximumLinearAverageBinning) to pick
/// a bin count with no empty bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearAverageBinning {
    bins: usize,
}

impl LinearAverageBinning {
    /// Create a new linear average binning with the given number of bins
    pub fn new(bins: usize) -> Result<Self> {
        if bins < 1 {
            return Err(Error::invalid_bin_count(bins));
        }
        Ok(Self { bins })
    }

    /// Get the number of bins
    pub fn bins(&self) -> usize {
        self.bins
    }
}

impl<K: Key, W: Weight> DataBinning<K, W> for LinearAverageBinning {
    type Value = f64;

    #[instrument(level = "trace", skip_all, fields(bins = self.bins, keys = table.len()))]
    fn bin(&self, table: &BTreeMap<K, W>) -> Result<Vec<DataBin<f64>>> {
        let range = KeyRange::of(table)?;
        let limits = Spacing::Linear.limits(&range, self.bins)?;
        let assignment = assign(table, &limits);

        Ok(limits
            .windows(2)
            .zip(assignment.sums.iter().zip(&assignment.members))
            .map(|(edges, (sum, &members))| {
                DataBin::new(sum.as_f64() / members as f64, edges[0], edges[1])
            })
            .collect())
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.bins)
    }
}

/// Build arithmetic-midpoint bins holding the raw weight sums
pub(crate) fn sum_bins<W: Weight>(limits: &[f64], assignment: Assignment<W>) -> Vec<DataBin<W>> {
    limits
        .windows(2)
        .zip(assignment.sums)
        .map(|(edges, sum)| DataBin::new(sum, edges[0], edges[1]))
        .collect()
}
