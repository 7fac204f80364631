//! Binning of weighted empirical distributions
//!
//! Umbrella crate re-exporting the databin workspace:
//!
//! - [`databin_core`]: error type and the [`Key`]/[`Weight`] numeric traits
//! - [`databin_binning`]: linear, logarithmic and maximal-count binning policies
//! - [`databin_frequency`]: sorted frequency and distribution tables
//! - [`databin_moments`]: Welford's running mean and variance
//!
//! # Example
//!
//! ```rust
//! use databin::prelude::*;
//!
//! let mut frequency = Frequency::new();
//! for i in 1..50u64 {
//!     for _ in 0..(2_500 / (i * i)) {
//!         frequency.add(i as f64).unwrap();
//!     }
//! }
//!
//! let binned = frequency
//!     .bin(&MaximumLogarithmicBinning::new(2.0).unwrap())
//!     .unwrap();
//! assert!(binned.len() >= 2);
//! assert!((binned.sum() - frequency.sum() as f64).abs() < 1e-4 * frequency.sum() as f64);
//! ```

pub use databin_binning;
pub use databin_core;
pub use databin_frequency;
pub use databin_moments;

pub use databin_core::{Error, Key, Result, Weight};

/// Commonly used types and traits
pub mod prelude {
    pub use databin_binning::{
        BinningMethod, DataBin, DataBinning, LinearAverageBinning, LinearBinning,
        LogarithmicBinning, MaximumLinearAverageBinning, MaximumLinearBinning,
        MaximumLogarithmicBinning,
    };
    pub use databin_core::{Error, Key, Result, Weight};
    pub use databin_frequency::{Distribution, Frequency};
    pub use databin_moments::WelfordVariance;
}
