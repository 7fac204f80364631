//! Binning of weighted empirical distributions
//!
//! This crate bins a sorted weight table (`BTreeMap<key, weight>`) into a
//! small number of contiguous intervals, each summarizing the weight of the
//! keys it covers. Every policy implements the single-operation
//! [`DataBinning`] trait.
//!
//! # Binning Policies
//!
//! - [`LinearBinning`]: fixed count of equal-width bins, values are weight sums
//! - [`LinearAverageBinning`]: equal-width bins, values are the mean weight per
//!   distinct key
//! - [`LogarithmicBinning`]: equal-ratio bins, values are densities rescaled so
//!   they sum to the table total
//! - [`MaximumLinearBinning`], [`MaximumLogarithmicBinning`]: the largest bin
//!   count for which no bin is empty
//! - [`MaximumLinearAverageBinning`]: averages at the count found by
//!   [`MaximumLinearBinning`]
//!
//! Keys are assigned by one ascending scan whose cursor leaves bin `i` only
//! for keys strictly greater than the `i`-th boundary, so a key equal to that
//! boundary stays where the cursor is. The last bin includes the maximum key.
//!
//! # Examples
//!
//! ## Fixed-Width Bins
//!
//! ```rust
//! use databin_binning::{DataBinning, LinearBinning};
//! use std::collections::BTreeMap;
//!
//! let table: BTreeMap<u64, u64> = [(1, 1), (2, 1), (3, 1), (4, 1)].into_iter().collect();
//! let bins = LinearBinning::new(2).unwrap().bin(&table).unwrap();
//!
//! assert_eq!(bins.len(), 2);
//! assert_eq!((bins[0].left, bins[0].right, bins[0].value), (1.0, 2.5, 1));
//! assert_eq!((bins[1].left, bins[1].right, bins[1].value), (2.5, 4.0, 3));
//! ```
//!
//! ## Logarithmic Bins for Heavy Tails
//!
//! ```rust
//! use databin_binning::{DataBinning, MaximumLogarithmicBinning};
//! use ordered_float::OrderedFloat;
//! use std::collections::BTreeMap;
//!
//! let table: BTreeMap<OrderedFloat<f64>, f64> = (1..100)
//!     .map(|i| (OrderedFloat(i as f64), 10_000.0 / (i * i) as f64))
//!     .collect();
//!
//! let bins = MaximumLogarithmicBinning::new(10.0).unwrap().bin(&table).unwrap();
//! for bin in &bins {
//!     println!("{bin}");
//! }
//! ```
//!
//! ## Configured Methods
//!
//! ```rust
//! use databin_binning::BinningMethod;
//! use std::collections::BTreeMap;
//!
//! let method = BinningMethod::from_json(r#"{"method": "linear", "bins": 3}"#).unwrap();
//! let table: BTreeMap<i32, f64> = [(0, 0.5), (3, 0.25), (6, 0.25)].into_iter().collect();
//! let bins = method.bin(&table).unwrap();
//! assert_eq!(bins.len(), 3);
//! ```

pub mod config;
mod limits;
pub mod linear;
pub mod logarithmic;
pub mod maximum;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use config::BinningMethod;
pub use linear::{LinearAverageBinning, LinearBinning};
pub use logarithmic::LogarithmicBinning;
pub use maximum::{MaximumLinearAverageBinning, MaximumLinearBinning, MaximumLogarithmicBinning};
pub use traits::DataBinning;
pub use types::DataBin;

pub use databin_core::{Error, Key, Result, Weight};
