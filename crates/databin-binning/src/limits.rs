//! Bin boundary construction and the single-pass assignment scan
//!
//! Every policy in this crate lays out `count + 1` boundaries over the key
//! range of the table, walks the table once in key order, and accumulates
//! weight into bins. The cursor moves on while the key is strictly greater
//! than the boundary at the cursor index, so a key equal to that boundary
//! stays in the current bin. The last bin absorbs everything up to and
//! including the maximum key.

use databin_core::{Error, Key, Result, Weight};
use num_traits::Zero;
use std::collections::BTreeMap;

/// Range of the keys in a weight table
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct KeyRange {
    pub min: f64,
    pub max: f64,
    pub distinct: usize,
}

impl KeyRange {
    /// Read the key range of a table, rejecting tables that cannot be binned
    pub fn of<K: Key, W>(table: &BTreeMap<K, W>) -> Result<Self> {
        let distinct = table.len();
        if distinct < 2 {
            return Err(Error::insufficient_distinct(distinct));
        }
        let (Some((first, _)), Some((last, _))) = (table.first_key_value(), table.last_key_value())
        else {
            return Err(Error::insufficient_distinct(distinct));
        };

        let (min, max) = (first.as_f64(), last.as_f64());
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::non_finite("bin boundary key"));
        }

        Ok(Self { min, max, distinct })
    }
}

/// Spacing of the bin boundaries
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Spacing {
    /// Arithmetic progression from min to max
    Linear,
    /// Geometric progression from min to max
    Logarithmic { base: f64 },
}

impl Spacing {
    /// Check that the key range can be laid out with this spacing
    pub fn check(&self, range: &KeyRange) -> Result<()> {
        match self {
            Spacing::Linear => Ok(()),
            Spacing::Logarithmic { .. } if range.min <= 0.0 => Err(Error::non_positive(range.min)),
            Spacing::Logarithmic { .. } => Ok(()),
        }
    }

    /// Build `count + 1` boundaries covering the key range
    ///
    /// The last boundary is pinned to `max` so the maximum key is always
    /// covered regardless of rounding.
    pub fn limits(&self, range: &KeyRange, count: usize) -> Result<Vec<f64>> {
        self.check(range)?;

        let mut limits = match *self {
            Spacing::Linear => {
                let span = range.max - range.min;
                if span.is_finite() {
                    let step = span / count as f64;
                    (0..=count)
                        .map(|i| range.min + i as f64 * step)
                        .collect::<Vec<_>>()
                } else {
                    // Keys of opposite sign near f64::MAX overflow the span
                    (0..=count)
                        .map(|i| {
                            let t = i as f64 / count as f64;
                            range.min * (1.0 - t) + range.max * t
                        })
                        .collect::<Vec<_>>()
                }
            }
            Spacing::Logarithmic { base } => {
                let step = (range.max.log(base) - range.min.log(base)) / count as f64;
                (0..=count)
                    .map(|i| range.min * base.powf(i as f64 * step))
                    .collect::<Vec<_>>()
            }
        };
        limits[count] = range.max;

        Ok(limits)
    }
}

/// Per-bin totals accumulated by a complete scan
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Assignment<W> {
    /// Summed weight of each bin
    pub sums: Vec<W>,
    /// Number of distinct keys assigned to each bin
    pub members: Vec<usize>,
}

/// Result of an early-terminating assignment scan
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScanOutcome<W> {
    /// Every key was assigned
    Complete(Assignment<W>),
    /// The cursor was about to leave a bin whose weight was still zero
    EmptyBin(usize),
}

fn walk<K: Key, W: Weight>(
    table: &BTreeMap<K, W>,
    limits: &[f64],
    stop_on_empty: bool,
) -> (Assignment<W>, Option<usize>) {
    let count = limits.len() - 1;
    let mut sums = vec![W::zero(); count];
    let mut members = vec![0usize; count];
    let mut current = 0;

    for (key, &weight) in table {
        let x = key.as_f64();
        while current < count - 1 && x > limits[current] {
            if stop_on_empty && sums[current].is_zero() {
                return (Assignment { sums, members }, Some(current));
            }
            current += 1;
        }
        sums[current] += weight;
        members[current] += 1;
    }

    (Assignment { sums, members }, None)
}

/// Assign every key of the table to a bin in one ascending pass
pub(crate) fn assign<K: Key, W: Weight>(table: &BTreeMap<K, W>, limits: &[f64]) -> Assignment<W> {
    walk(table, limits, false).0
}

/// Like [`assign`], but stops as soon as the cursor is about to advance past
/// a bin whose accumulated weight is zero
pub(crate) fn scan<K: Key, W: Weight>(table: &BTreeMap<K, W>, limits: &[f64]) -> ScanOutcome<W> {
    match walk(table, limits, true) {
        (_, Some(bin)) => ScanOutcome::EmptyBin(bin),
        (assignment, None) => ScanOutcome::Complete(assignment),
    }
}

/// Total weight of the table as f64
pub(crate) fn total_weight<K, W: Weight>(table: &BTreeMap<K, W>) -> f64 {
    table.values().map(Weight::as_f64).sum()
}
