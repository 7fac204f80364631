//! Sorted weight tables for observed data
//!
//! This crate collects observations into sorted tables that the binning
//! policies of `databin-binning` consume directly:
//! - [`Frequency`]: integral occurrence counts, built one observation at a time
//! - [`Distribution`]: non-negative real weights, e.g. a normalized frequency
//!   table or the output of a binning run
//!
//! Binning either table produces a new [`Distribution`] keyed by bin centers.
//!
//! # Examples
//!
//! ```rust
//! use databin_binning::LinearBinning;
//! use databin_frequency::Frequency;
//!
//! let mut frequency = Frequency::new();
//! frequency.add_all([1.0, 2.0, 3.0, 3.0, 2.0]).unwrap();
//! assert_eq!(frequency.mode().unwrap(), 2.0);
//!
//! let binned = frequency.bin(&LinearBinning::new(2).unwrap()).unwrap();
//! assert_eq!(binned.sum(), 5.0);
//!
//! let normalized = binned.normalize().unwrap();
//! assert!((normalized.sum() - 1.0).abs() < 1e-12);
//! ```

pub mod distribution;
pub mod frequency;
mod table;

pub use distribution::Distribution;
pub use frequency::Frequency;
pub use table::Table;

pub use databin_core::{Error, Result};
