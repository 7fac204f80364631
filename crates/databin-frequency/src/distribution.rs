//! Real-valued weight table

use crate::table::{above, below, centers, mode_of, Table};
use databin_binning::DataBinning;
use databin_core::{Error, Result, Weight};
use ordered_float::OrderedFloat;
use tracing::debug;

/// A sorted mapping from observation value to a non-negative real weight
///
/// Values and weights are checked on insertion, so every key is finite and
/// every weight finite and non-negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    weights: Table<f64>,
}

impl Distribution {
    /// Create an empty distribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a table whose keys and weights are already known to be valid
    pub(crate) fn from_table(weights: Table<f64>) -> Self {
        Self { weights }
    }

    /// Set the weight of `value`, replacing any previous weight
    pub fn put(&mut self, value: f64, weight: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::non_finite("value"));
        }
        if !weight.is_finite() {
            return Err(Error::non_finite("weight"));
        }
        if weight < 0.0 {
            return Err(Error::InvalidInput(format!(
                "weight must be non-negative, got {weight}"
            )));
        }
        self.weights.insert(OrderedFloat(value), weight);
        Ok(())
    }

    /// Get the sorted mapping
    pub fn map(&self) -> &Table<f64> {
        &self.weights
    }

    /// Get the weight of `value`, if present
    pub fn get(&self, value: f64) -> Option<f64> {
        self.weights.get(&OrderedFloat(value)).copied()
    }

    /// Get the number of distinct values
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the distribution is empty
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Get the total weight
    pub fn sum(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Get the value with the largest weight
    pub fn mode(&self) -> Result<f64> {
        mode_of(&self.weights)
    }

    /// Bin this distribution, mapping each bin center to the bin value
    pub fn bin<B>(&self, binning: &B) -> Result<Distribution>
    where
        B: DataBinning<OrderedFloat<f64>, f64>,
        B::Value: Weight,
    {
        let bins = binning.bin(&self.weights)?;
        debug!(values = self.len(), bins = bins.len(), "binned distribution");
        centers(bins)
    }

    /// Create a copy whose weights sum to one
    pub fn normalize(&self) -> Result<Distribution> {
        let sum = self.sum();
        if sum <= 0.0 {
            return Err(Error::Computation(
                "cannot normalize a distribution with zero total weight".to_string(),
            ));
        }

        Ok(Self {
            weights: self.weights.iter().map(|(k, w)| (*k, w / sum)).collect(),
        })
    }

    /// Create a copy without zero-weight values
    pub fn purge(&self) -> Distribution {
        Self {
            weights: self
                .weights
                .iter()
                .filter(|(_, w)| **w != 0.0)
                .map(|(k, w)| (*k, *w))
                .collect(),
        }
    }

    /// Create a copy holding only values strictly greater than `value`
    pub fn tail(&self, value: f64) -> Distribution {
        Self {
            weights: above(&self.weights, value),
        }
    }

    /// Create a copy holding only values strictly less than `value`
    pub fn head(&self, value: f64) -> Distribution {
        Self {
            weights: below(&self.weights, value),
        }
    }
}
