//! Core trait for binning weight tables

use crate::types::DataBin;
use databin_core::{Key, Result, Weight};
use std::collections::BTreeMap;

/// Trait for binning a sorted weight table into contiguous intervals
///
/// Implementations are pure: the table is only read, and the returned bins
/// are ordered ascending by `left` and cover `[min, max]` of the table keys.
pub trait DataBinning<K: Key, W: Weight> {
    /// Type of the aggregated bin value
    type Value;

    /// Bin the given table
    ///
    /// Fails if the table holds fewer than two distinct keys.
    fn bin(&self, table: &BTreeMap<K, W>) -> Result<Vec<DataBin<Self::Value>>>;

    /// Get the target number of bins (if known before binning)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
