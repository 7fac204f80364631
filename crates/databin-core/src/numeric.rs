//! Numeric traits for weight-table keys and weights
//!
//! A weight table is a `BTreeMap<K, W>`: keys are the observation values and
//! must be totally ordered, weights are the non-negative magnitudes attached
//! to them.
//!
//! - **Keys** are converted to `f64` for boundary placement. Floating keys need
//!   a total order to live in a `BTreeMap`, so they enter as
//!   [`OrderedFloat`].
//! - **Weights** are summed in their own type, so integral tables aggregate
//!   exactly and floating tables aggregate in floating point.

use num_traits::Zero;
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::ops::AddAssign;

/// An observation value that can key a sorted weight table
pub trait Key: Copy + Ord + Debug + Send + Sync {
    /// Position of this key on the real line
    fn as_f64(&self) -> f64;
}

/// A non-negative magnitude attached to an observation
pub trait Weight: Copy + PartialOrd + Debug + Zero + AddAssign + Send + Sync {
    /// Convert to f64 for density and average computations
    fn as_f64(&self) -> f64;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

macro_rules! impl_integer_key {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                fn as_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_integer_key!(i32, i64, u32, u64, usize);

impl Key for OrderedFloat<f64> {
    fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Key for OrderedFloat<f32> {
    fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn as_f64(&self) -> f64 {
                    *self as f64
                }

                fn is_finite(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_integer_weight!(i32, i64, u32, u64, usize);

impl Weight for f64 {
    fn as_f64(&self) -> f64 {
        *self
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Weight for f32 {
    fn as_f64(&self) -> f64 {
        *self as f64
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}
