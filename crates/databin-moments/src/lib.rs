//! One-pass moment accumulation
//!
//! [`WelfordVariance`] tracks the mean and variance of a stream of
//! observations in constant memory, e.g. the weights flowing into a bin.
//!
//! # Example
//!
//! ```rust
//! use databin_moments::WelfordVariance;
//!
//! let mut wv = WelfordVariance::new();
//! wv.extend_from([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
//!
//! assert!((wv.mean().unwrap() - 5.0).abs() < 1e-12);
//! assert!((wv.population_variance().unwrap() - 4.0).abs() < 1e-12);
//! ```

pub mod welford;

pub use welford::WelfordVariance;

pub use databin_core::{Error, Result};
