//! Welford's one-pass variance algorithm

use databin_core::{Error, Result};

/// Running mean and variance of a stream of observations
///
/// Uses constant memory and can be queried at any point. The second central
/// moment is updated per observation as
/// `m += (x - new_mean) * (x - old_mean)`, which avoids the cancellation of
/// the naive sum-of-squares formula.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WelfordVariance {
    m: f64,
    sum: f64,
    observations: u64,
}

impl WelfordVariance {
    /// Create an accumulator with no observations
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observation
    pub fn add(&mut self, x: f64) -> Result<()> {
        if !x.is_finite() {
            return Err(Error::non_finite("observation"));
        }

        let previous_mean = if self.observations == 0 {
            0.0
        } else {
            self.sum / self.observations as f64
        };

        self.observations = self
            .observations
            .checked_add(1)
            .ok_or_else(|| Error::Computation("observation count overflow".to_string()))?;
        self.sum += x;

        let next_mean = self.sum / self.observations as f64;
        self.m += (x - next_mean) * (x - previous_mean);
        Ok(())
    }

    /// Add every observation of `values`, stopping at the first failure
    pub fn extend_from<I: IntoIterator<Item = f64>>(&mut self, values: I) -> Result<()> {
        values.into_iter().try_for_each(|x| self.add(x))
    }

    /// Number of observations added so far
    pub fn count(&self) -> u64 {
        self.observations
    }

    /// Sum of the observations added so far
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Mean of the observations added so far
    pub fn mean(&self) -> Result<f64> {
        self.require(1)?;
        Ok(self.sum / self.observations as f64)
    }

    /// Variance treating the observations as the whole population (`m / n`)
    pub fn population_variance(&self) -> Result<f64> {
        self.require(1)?;
        Ok(self.m / self.observations as f64)
    }

    /// Unbiased variance of the population the observations were drawn from
    /// (`m / (n - 1)`)
    pub fn sample_variance(&self) -> Result<f64> {
        self.require(2)?;
        Ok(self.m / (self.observations - 1) as f64)
    }

    /// Standard error of the mean from the population variance
    pub fn population_standard_error(&self) -> Result<f64> {
        Ok((self.population_variance()? / self.observations as f64).sqrt())
    }

    /// Standard error of the mean from the sample variance
    pub fn sample_standard_error(&self) -> Result<f64> {
        Ok((self.sample_variance()? / self.observations as f64).sqrt())
    }

    fn require(&self, expected: usize) -> Result<()> {
        if self.observations < expected as u64 {
            return Err(Error::InsufficientData {
                expected,
                actual: self.observations as usize,
            });
        }
        Ok(())
    }
}
