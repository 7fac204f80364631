//! Binnings that pick the largest bin count with no empty bin
//!
//! The search bins the table at 2 bins, then at 3, 4, ... and stops at the
//! first candidate whose assignment scan meets a bin with zero weight, at
//! which point the previous candidate is returned. The 2-bin result is always
//! accepted as a floor. A table with `n` distinct keys cannot fill more than
//! `n` bins, so the search never tries more than `n`.

use crate::limits::{assign, scan, total_weight, Assignment, KeyRange, ScanOutcome, Spacing};
use crate::linear::{sum_bins, LinearAverageBinning};
use crate::logarithmic::{check_base, density_bins};
use crate::traits::DataBinning;
use crate::types::DataBin;
use databin_core::{Key, Result, Weight};
use std::collections::BTreeMap;
use tracing::{debug, instrument, trace};

/// Outcome of a maximum bin count search
struct Search<W> {
    limits: Vec<f64>,
    assignment: Assignment<W>,
}

impl<W> Search<W> {
    fn bins(&self) -> usize {
        self.assignment.sums.len()
    }
}

/// Find the largest bin count whose scan meets no empty bin
fn search<K: Key, W: Weight>(table: &BTreeMap<K, W>, spacing: Spacing) -> Result<Search<W>> {
    let range = KeyRange::of(table)?;
    let limits = spacing.limits(&range, 2)?;
    let assignment = assign(table, &limits);
    let mut best = Search { limits, assignment };

    for count in 3..=range.distinct {
        let limits = spacing.limits(&range, count)?;
        match scan(table, &limits) {
            ScanOutcome::Complete(assignment) => {
                trace!(count, "no empty bin");
                best = Search { limits, assignment };
            }
            ScanOutcome::EmptyBin(bin) => {
                trace!(count, bin, "empty bin");
                break;
            }
        }
    }

    debug!(bins = best.bins(), keys = range.distinct, "maximum bin count found");
    Ok(best)
}

/// Equal-width binning with the largest bin count that leaves no bin empty
///
/// Bin values are weight sums, as with [`LinearBinning`](crate::LinearBinning).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaximumLinearBinning;

impl MaximumLinearBinning {
    /// Create a new maximum linear binning
    pub fn new() -> Self {
        Self
    }
}

impl<K: Key, W: Weight> DataBinning<K, W> for MaximumLinearBinning {
    type Value = W;

    #[instrument(level = "debug", skip_all, fields(keys = table.len()))]
    fn bin(&self, table: &BTreeMap<K, W>) -> Result<Vec<DataBin<W>>> {
        let found = search(table, Spacing::Linear)?;
        Ok(sum_bins(&found.limits, found.assignment))
    }
}

/// Logarithmic binning with the largest bin count that leaves no bin empty
///
/// Bin values are rescaled densities, as with
/// [`LogarithmicBinning`](crate::LogarithmicBinning).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaximumLogarithmicBinning {
    base: f64,
}

impl MaximumLogarithmicBinning {
    /// Create a new maximum logarithmic binning; `base` must be at least 2
    pub fn new(base: f64) -> Result<Self> {
        Ok(Self {
            base: check_base(base)?,
        })
    }

    /// Get the base of the logarithm
    pub fn base(&self) -> f64 {
        self.base
    }
}

impl<K: Key, W: Weight> DataBinning<K, W> for MaximumLogarithmicBinning {
    type Value = f64;

    #[instrument(level = "debug", skip_all, fields(base = self.base, keys = table.len()))]
    fn bin(&self, table: &BTreeMap<K, W>) -> Result<Vec<DataBin<f64>>> {
        let found = search(table, Spacing::Logarithmic { base: self.base })?;
        Ok(density_bins(
            &found.limits,
            &found.assignment,
            total_weight(table),
            self.base,
        ))
    }
}

/// Equal-width average binning at the maximal non-empty bin count
///
/// The bin count is discovered with [`MaximumLinearBinning`], which sums
/// weights and so never divides by an empty bin; the table is then binned
/// again with [`LinearAverageBinning`] at that count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaximumLinearAverageBinning;

impl MaximumLinearAverageBinning {
    /// Create a new maximum linear average binning
    pub fn new() -> Self {
        Self
    }
}

impl<K: Key, W: Weight> DataBinning<K, W> for MaximumLinearAverageBinning {
    type Value = f64;

    #[instrument(level = "debug", skip_all, fields(keys = table.len()))]
    fn bin(&self, table: &BTreeMap<K, W>) -> Result<Vec<DataBin<f64>>> {
        let bins = MaximumLinearBinning.bin(table)?.len();
        LinearAverageBinning::new(bins)?.bin(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinearBinning;
    use approx::assert_relative_eq;
    use databin_core::Error;

    fn uniform(keys: impl IntoIterator<Item = u64>) -> BTreeMap<u64, u64> {
        keys.into_iter().map(|k| (k, 1)).collect()
    }

    #[test]
    fn test_four_evenly_spaced_points() {
        let bins = MaximumLinearBinning.bin(&uniform(1..=4)).unwrap();
        assert_eq!(bins.len(), 3);
        assert_eq!(bins.iter().map(|b| b.value).collect::<Vec<_>>(), vec![1, 1, 2]);
        assert_relative_eq!(bins[0].right, 2.0);

        // With 4 bins key 2 passes the still-empty second bin
        let next = LinearBinning::new(4).unwrap().bin(&uniform(1..=4)).unwrap();
        assert_eq!(next.iter().map(|b| b.value).collect::<Vec<_>>(), vec![1, 0, 1, 2]);
    }

    #[test]
    fn test_two_keys_floor() {
        let bins = MaximumLinearBinning.bin(&uniform([1, 100])).unwrap();
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].value + bins[1].value, 2);
    }

    #[test]
    fn test_gap_stops_search() {
        // Keys cluster at both ends; 4 bins leave one between 1 and 9 empty
        let bins = MaximumLinearBinning.bin(&uniform([0, 1, 9, 10])).unwrap();
        assert_eq!(bins.len(), 3);
        assert_eq!(bins.iter().map(|b| b.value).collect::<Vec<_>>(), vec![1, 1, 2]);

        let next = LinearBinning::new(4).unwrap().bin(&uniform([0, 1, 9, 10])).unwrap();
        assert!(next.iter().any(|b| b.value == 0));
    }

    #[test]
    fn test_search_bounded_by_distinct_keys() {
        let table = uniform(0..50);
        let bins = MaximumLinearBinning.bin(&table).unwrap();
        assert!(bins.len() <= 50);
        assert!(bins.iter().all(|b| b.value > 0));
        assert_eq!(bins.iter().map(|b| b.value).sum::<u64>(), 50);
    }

    #[test]
    fn test_average_matches_discovered_count() {
        let table: BTreeMap<u64, u64> = [(1, 2), (2, 4), (3, 6), (4, 8)].into_iter().collect();
        let averaged = MaximumLinearAverageBinning.bin(&table).unwrap();
        let summed = MaximumLinearBinning.bin(&table).unwrap();

        assert_eq!(averaged.len(), 3);
        assert_eq!(averaged.len(), summed.len());
        for ((avg, sum), expected) in averaged.iter().zip(&summed).zip([2.0, 4.0, 7.0]) {
            assert_relative_eq!(avg.value, expected);
            assert_eq!(avg.left, sum.left);
        }
    }

    #[test]
    fn test_logarithmic_search() {
        let table: BTreeMap<u64, u64> = [(1, 100), (10, 10), (100, 1), (1000, 1)].into_iter().collect();
        let bins = MaximumLogarithmicBinning::new(10.0).unwrap().bin(&table).unwrap();
        assert!(bins.len() >= 2);
        assert!(bins.iter().all(|b| b.value > 0.0));

        let total: f64 = bins.iter().map(|b| b.value).sum();
        assert_relative_eq!(total, 112.0, epsilon = 1e-6);
    }

    #[test]
    fn test_logarithmic_rejections() {
        assert!(matches!(MaximumLogarithmicBinning::new(1.5), Err(Error::InvalidParameter(_))));

        let binning = MaximumLogarithmicBinning::new(2.0).unwrap();
        let table: BTreeMap<i64, u64> = [(0, 1), (8, 1)].into_iter().collect();
        assert!(matches!(binning.bin(&table), Err(Error::Domain(_))));

        let single: BTreeMap<i64, u64> = [(8, 1)].into_iter().collect();
        assert!(matches!(binning.bin(&single), Err(Error::InsufficientData { .. })));
    }
}
