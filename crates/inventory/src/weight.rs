//! Carry weight value object.

use core::iter::Sum;
use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

use packrat_core::{DomainError, DomainResult, ValueObject};

/// Non-negative weight, displayed in kilograms.
///
/// The inner value is always finite and `>= 0.0`. `new` rejects anything
/// else, and `add`/`scale` saturate at `Weight::MAX` instead of overflowing
/// to infinity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl ValueObject for Weight {}

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const MAX: Weight = Weight(f64::MAX);

    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::invalid_argument(format!(
                "weight must be finite (got {value})"
            )));
        }
        if value < 0.0 {
            return Err(DomainError::invalid_argument(format!(
                "weight cannot be negative (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    pub fn add(self, other: Weight) -> Weight {
        Weight((self.0 + other.0).min(f64::MAX))
    }

    pub fn scale(self, quantity: u32) -> Weight {
        Weight((self.0 * f64::from(quantity)).min(f64::MAX))
    }

    /// `self - other`, clamped at zero.
    pub fn saturating_sub(self, other: Weight) -> Weight {
        Weight((self.0 - other.0).max(0.0))
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight::add(self, rhs)
    }
}

impl Mul<u32> for Weight {
    type Output = Weight;

    fn mul(self, rhs: u32) -> Weight {
        self.scale(rhs)
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::ZERO, Weight::add)
    }
}

impl TryFrom<f64> for Weight {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Weight::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(value: Weight) -> Self {
        value.0
    }
}

impl core::fmt::Display for Weight {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.1} kg", self.0)
    }
}
