//! Core traits and types for weighted data binning
//!
//! This crate provides the pieces shared by every databin crate:
//!
//! - [`Error`] and [`Result`]: the unified error type
//! - [`Key`]: observation values that can key a sorted weight table
//! - [`Weight`]: the magnitudes attached to those observations
//!
//! # Example
//!
//! ```rust
//! use databin_core::{Key, Weight};
//! use ordered_float::OrderedFloat;
//! use std::collections::BTreeMap;
//!
//! let mut table: BTreeMap<OrderedFloat<f64>, u64> = BTreeMap::new();
//! table.insert(OrderedFloat(1.5), 3);
//! table.insert(OrderedFloat(0.5), 1);
//!
//! let (first, weight) = table.iter().next().unwrap();
//! assert_eq!(first.as_f64(), 0.5);
//! assert_eq!(Weight::as_f64(weight), 1.0);
//! ```

pub mod error;
pub mod numeric;

pub use error::{Error, Result};
pub use numeric::{Key, Weight};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
