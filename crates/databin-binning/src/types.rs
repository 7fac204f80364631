//! Core types for binning results

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bin produced by a binning
///
/// Bins are created once per binning call and never mutated. They carry no
/// reference back to the weight table they were computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBin<V = f64> {
    /// Aggregated value of this bin: a weight sum, an average or a density
    /// depending on the binning policy
    pub value: V,
    /// Left edge of the bin
    pub left: f64,
    /// Right edge of the bin (inclusive)
    pub right: f64,
    /// Representative position of the bin on the observation axis
    pub center: f64,
}

impl<V> DataBin<V> {
    /// Create a new bin centered on the arithmetic midpoint of its edges
    pub fn new(value: V, left: f64, right: f64) -> Self {
        Self::with_center(value, left, right, left / 2.0 + right / 2.0)
    }

    /// Create a new bin with an explicit center
    pub fn with_center(value: V, left: f64, right: f64, center: f64) -> Self {
        Self {
            value,
            left,
            right,
            center,
        }
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Replace the value, keeping the edges and center
    pub fn map_value<U>(self, f: impl FnOnce(V) -> U) -> DataBin<U> {
        DataBin {
            value: f(self.value),
            left: self.left,
            right: self.right,
            center: self.center,
        }
    }
}

impl<V: fmt::Display> fmt::Display for DataBin<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}]: value={}, center={:.3}",
            self.left, self.right, self.value, self.center
        )
    }
}
