//! Configuration types for binning methods

use crate::linear::{LinearAverageBinning, LinearBinning};
use crate::logarithmic::{check_base, LogarithmicBinning};
use crate::maximum::{MaximumLinearAverageBinning, MaximumLinearBinning, MaximumLogarithmicBinning};
use crate::traits::DataBinning;
use crate::types::DataBin;
use databin_core::{Error, Key, Result, Weight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Binning methods
///
/// Serialized with a `method` tag, for example
/// `{"method": "logarithmic", "bins": 20, "base": 10.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum BinningMethod {
    /// Fixed number of equal-width bins holding weight sums
    Linear { bins: usize },

    /// Fixed number of equal-width bins holding the mean weight per key
    LinearAverage { bins: usize },

    /// Fixed number of equal-ratio bins holding rescaled densities
    Logarithmic { bins: usize, base: f64 },

    /// Largest equal-width bin count with no empty bin
    MaximumLinear,

    /// Largest equal-width bin count with no empty bin, averaged per key
    MaximumLinearAverage,

    /// Largest equal-ratio bin count with no empty bin
    MaximumLogarithmic { base: f64 },
}

impl Default for BinningMethod {
    fn default() -> Self {
        Self::MaximumLinear
    }
}

impl BinningMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::LinearAverage { .. } => "linear_average",
            Self::Logarithmic { .. } => "logarithmic",
            Self::MaximumLinear => "maximum_linear",
            Self::MaximumLinearAverage => "maximum_linear_average",
            Self::MaximumLogarithmic { .. } => "maximum_logarithmic",
        }
    }

    /// Parse a method from its JSON form and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let method: Self = serde_json::from_str(json)?;
        method.validate()?;
        Ok(method)
    }

    /// Check the parameters of this method
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Linear { bins } | Self::LinearAverage { bins } if bins < 1 => {
                Err(Error::invalid_bin_count(bins))
            }
            Self::Logarithmic { bins, .. } if bins < 1 => Err(Error::invalid_bin_count(bins)),
            Self::Logarithmic { base, .. } | Self::MaximumLogarithmic { base } => {
                check_base(base).map(|_| ())
            }
            _ => Ok(()),
        }
    }

    /// Bin a table with this method
    ///
    /// Bin values are widened to `f64` whatever the policy produces.
    pub fn bin<K: Key, W: Weight>(&self, table: &BTreeMap<K, W>) -> Result<Vec<DataBin<f64>>> {
        match *self {
            Self::Linear { bins } => Ok(widen(LinearBinning::new(bins)?.bin(table)?)),
            Self::LinearAverage { bins } => LinearAverageBinning::new(bins)?.bin(table),
            Self::Logarithmic { bins, base } => LogarithmicBinning::new(bins, base)?.bin(table),
            Self::MaximumLinear => Ok(widen(MaximumLinearBinning.bin(table)?)),
            Self::MaximumLinearAverage => MaximumLinearAverageBinning.bin(table),
            Self::MaximumLogarithmic { base } => MaximumLogarithmicBinning::new(base)?.bin(table),
        }
    }
}

fn widen<W: Weight>(bins: Vec<DataBin<W>>) -> Vec<DataBin<f64>> {
    bins.into_iter()
        .map(|bin| bin.map_value(|v| v.as_f64()))
        .collect()
}
