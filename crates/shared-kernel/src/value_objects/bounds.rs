// crates/shared-kernel/src/value_objects/bounds.rs
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Inclusive range of values the index accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct ValueBounds {
    min: i64,
    max: i64,
}

impl ValueBounds {
    pub const DEFAULT_MIN: i64 = 1;
    pub const DEFAULT_MAX: i64 = 999;

    /// Bounds must stay positive and non-empty.
    pub fn new(min: i64, max: i64) -> DomainResult<Self> {
        if min < 1 {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("lower bound must be at least 1, got {min}"),
            });
        }
        if min > max {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("lower bound {min} exceeds upper bound {max}"),
            });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub const fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> i64 {
        self.max
    }

    #[inline]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn check(&self, value: i64) -> DomainResult<i64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(DomainError::OutOfRange { value: value.into(), min: self.min, max: self.max })
        }
    }
}

impl Default for ValueBounds {
    fn default() -> Self {
        Self { min: Self::DEFAULT_MIN, max: Self::DEFAULT_MAX }
    }
}

#[derive(Serialize, Deserialize)]
struct RawBounds {
    #[serde(default = "default_min")]
    min: i64,
    #[serde(default = "default_max")]
    max: i64,
}

const fn default_min() -> i64 {
    ValueBounds::DEFAULT_MIN
}

const fn default_max() -> i64 {
    ValueBounds::DEFAULT_MAX
}

impl TryFrom<RawBounds> for ValueBounds {
    type Error = DomainError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl From<ValueBounds> for RawBounds {
    fn from(bounds: ValueBounds) -> Self {
        Self { min: bounds.min, max: bounds.max }
    }
}
