//! Running frequency table

use crate::distribution::Distribution;
use crate::table::{above, below, centers, mode_of, Table};
use databin_binning::DataBinning;
use databin_core::{Error, Result, Weight};
use ordered_float::OrderedFloat;
use tracing::debug;

/// A sorted count of how many times each observation was seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frequency {
    counts: Table<u64>,
}

impl Frequency {
    /// Create an empty frequency table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `value`
    pub fn add(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::non_finite("observation"));
        }
        *self.counts.entry(OrderedFloat(value)).or_insert(0) += 1;
        Ok(())
    }

    /// Count every observation of `values`, stopping at the first non-finite one
    pub fn add_all<I: IntoIterator<Item = f64>>(&mut self, values: I) -> Result<()> {
        values.into_iter().try_for_each(|value| self.add(value))
    }

    /// Get the sorted mapping
    pub fn map(&self) -> &Table<u64> {
        &self.counts
    }

    /// Get the count of `value`
    pub fn count(&self, value: f64) -> u64 {
        self.counts.get(&OrderedFloat(value)).copied().unwrap_or(0)
    }

    /// Get the number of distinct observations
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing was observed
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Get the total number of observations
    pub fn sum(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Get the most frequent observation
    pub fn mode(&self) -> Result<f64> {
        mode_of(&self.counts)
    }

    /// Bin the counts, mapping each bin center to the bin value
    pub fn bin<B>(&self, binning: &B) -> Result<Distribution>
    where
        B: DataBinning<OrderedFloat<f64>, u64>,
        B::Value: Weight,
    {
        let bins = binning.bin(&self.counts)?;
        debug!(observations = self.len(), bins = bins.len(), "binned frequency table");
        centers(bins)
    }

    /// Convert the counts to real weights
    pub fn to_distribution(&self) -> Distribution {
        Distribution::from_table(
            self.counts
                .iter()
                .map(|(value, &count)| (*value, count as f64))
                .collect(),
        )
    }

    /// Create a copy holding only observations strictly greater than `value`
    pub fn tail(&self, value: f64) -> Frequency {
        Self {
            counts: above(&self.counts, value),
        }
    }

    /// Create a copy holding only observations strictly less than `value`
    pub fn head(&self, value: f64) -> Frequency {
        Self {
            counts: below(&self.counts, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use databin_binning::{LinearBinning, MaximumLinearBinning};

    #[test]
    fn test_mode() {
        let mut f = Frequency::new();
        f.add_all([1.0, 2.0, 3.0, 3.0, 2.0]).unwrap();
        assert_relative_eq!(f.mode().unwrap(), 2.0, epsilon = 1e-4);
        assert_eq!(f.sum(), 5);
        assert_eq!(f.len(), 3);
        assert_eq!(f.count(3.0), 2);
        assert_eq!(f.count(4.0), 0);
    }

    #[test]
    fn test_add_rejects_non_finite() {
        let mut f = Frequency::new();
        assert!(matches!(f.add(f64::NAN), Err(Error::InvalidInput(_))));
        assert!(matches!(f.add(f64::NEG_INFINITY), Err(Error::InvalidInput(_))));
        assert!(f.add_all([1.0, f64::INFINITY, 2.0]).is_err());
        assert_eq!(f.sum(), 1);
    }

    #[test]
    fn test_head_and_tail() {
        let mut f = Frequency::new();
        f.add_all([1.0, 2.0, 2.0, 3.0]).unwrap();
        assert_eq!(f.tail(1.5).sum(), 3);
        assert_eq!(f.head(2.0).sum(), 1);
        assert_eq!(f.tail(2.0).head(2.0).len(), 0);
    }

    #[test]
    fn test_to_distribution() {
        let mut f = Frequency::new();
        f.add_all([1.0, 1.0, 4.0]).unwrap();
        let d = f.to_distribution();
        assert_eq!(d.get(1.0), Some(2.0));
        assert_eq!(d.get(4.0), Some(1.0));
        assert_relative_eq!(d.sum(), 3.0);
    }

    #[test]
    fn test_bin() {
        let mut f = Frequency::new();
        f.add_all([1.0, 2.0, 3.0, 4.0]).unwrap();

        let d = f.bin(&LinearBinning::new(2).unwrap()).unwrap();
        assert_eq!(d.get(1.75), Some(1.0));
        assert_eq!(d.get(3.25), Some(3.0));

        let d = f.bin(&MaximumLinearBinning).unwrap();
        assert_eq!(d.len(), 3);
        assert_relative_eq!(d.sum(), 4.0);
    }
}
