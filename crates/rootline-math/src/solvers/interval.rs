//! Search interval for bracketing methods.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// A closed search interval `[low, high]` with `low < high`.
///
/// Reversed bounds are swapped on construction, so `Interval::new(2.0, 1.0)`
/// and `Interval::new(1.0, 2.0)` are the same interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Creates an interval from two bounds in either order.
    ///
    /// Fails with [`MathError::InvalidArgument`] if either bound is not
    /// finite or the bounds coincide.
    pub fn new(a: f64, b: f64) -> MathResult<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(MathError::invalid_argument(format!(
                "interval bounds must be finite, got [{a}, {b}]"
            )));
        }
        if a == b {
            return Err(MathError::invalid_argument(format!(
                "interval bounds must differ, got [{a}, {b}]"
            )));
        }
        Ok(Self {
            low: a.min(b),
            high: a.max(b),
        })
    }

    /// Lower bound.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Width `high - low`, always positive.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// `n` evenly spaced points from `low` to `high`, both included.
    #[must_use]
    pub fn linspace(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.low],
            _ => {
                let step = self.width() / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.high
                        } else {
                            self.low + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = MathError;

    fn try_from((a, b): (f64, f64)) -> MathResult<Self> {
        Self::new(a, b)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        (interval.low, interval.high)
    }
}
