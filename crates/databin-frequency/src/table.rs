//! Helpers shared by the sorted weight tables

use crate::distribution::Distribution;
use databin_binning::DataBin;
use databin_core::{Error, Result, Weight};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Sorted map from observation value to weight
pub type Table<W> = BTreeMap<OrderedFloat<f64>, W>;

/// Key with the largest weight; ties go to the smallest key
pub(crate) fn mode_of<W: PartialOrd>(table: &Table<W>) -> Result<f64> {
    let mut entries = table.iter();
    let first = entries.next().ok_or_else(|| Error::empty_input("mode"))?;
    let (key, _) = entries.fold(first, |best, entry| if entry.1 > best.1 { entry } else { best });
    Ok(key.0)
}

/// Entries with keys strictly greater than `value`
pub(crate) fn above<W: Copy>(table: &Table<W>, value: f64) -> Table<W> {
    table
        .range((Bound::Excluded(OrderedFloat(value)), Bound::Unbounded))
        .map(|(k, w)| (*k, *w))
        .collect()
}

/// Entries with keys strictly less than `value`
pub(crate) fn below<W: Copy>(table: &Table<W>, value: f64) -> Table<W> {
    table
        .range(..OrderedFloat(value))
        .map(|(k, w)| (*k, *w))
        .collect()
}

/// Map each bin center to its value
pub(crate) fn centers<V: Weight>(bins: Vec<DataBin<V>>) -> Result<Distribution> {
    let mut distribution = Distribution::new();
    for bin in bins {
        distribution.put(bin.center, bin.value.as_f64())?;
    }
    Ok(distribution)
}
