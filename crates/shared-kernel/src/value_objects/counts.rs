// crates/shared-kernel/src/value_objects/counts.rs
use std::{iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};

/// Number of multiset members matched by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueCount(usize);

impl ValueCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Default for ValueCount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for ValueCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for ValueCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<usize> for ValueCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<ValueCount> for usize {
    fn from(count: ValueCount) -> Self {
        count.0
    }
}

impl PartialEq<usize> for ValueCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<ValueCount> for usize {
    fn eq(&self, other: &ValueCount) -> bool {
        *self == other.0
    }
}

mod display {
    use std::fmt;

    use super::ValueCount;

    impl fmt::Display for ValueCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
