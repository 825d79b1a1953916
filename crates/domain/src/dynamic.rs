//! Loosely typed entry points for callers holding arbitrary JSON values.
//!
//! Anything other than an integral JSON number is a type mismatch, so a
//! harness can tell `"0"` (wrong type) apart from `0` (out of range).

use distribution_index_shared_kernel::{DomainError, DomainResult};
use serde_json::Value;

use crate::index::DistributionIndex;

fn integer_arg(value: &Value, operation: &'static str) -> DomainResult<i128> {
    let found = match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int.into());
            }
            if let Some(int) = number.as_u64() {
                return Ok(int.into());
            }
            format!("float {number}")
        }
        Value::String(text) => format!("string {text:?}"),
        Value::Bool(flag) => format!("boolean {flag}"),
        Value::Null => "null".to_string(),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    };
    log::trace!("{operation}: rejected non-integer argument {found}");
    Err(DomainError::TypeMismatch { operation, found })
}

/// Integers wider than `i64` can never have been indexed.
fn indexed_key(value: i128, operation: &'static str) -> DomainResult<i64> {
    i64::try_from(value).map_err(|_| DomainError::UnknownValue { operation, value })
}

impl DistributionIndex {
    pub fn add_json(&mut self, value: &Value) -> DomainResult<()> {
        let value = integer_arg(value, "add")?;
        let bounds = self.config().bounds;
        let value = i64::try_from(value).map_err(|_| DomainError::OutOfRange {
            value,
            min: bounds.min(),
            max: bounds.max(),
        })?;
        self.add(value)
    }

    pub fn less_json(&self, value: &Value) -> DomainResult<&[i64]> {
        self.less(indexed_key(integer_arg(value, "less")?, "less")?)
    }

    pub fn greater_json(&self, value: &Value) -> DomainResult<&[i64]> {
        self.greater(indexed_key(integer_arg(value, "greater")?, "greater")?)
    }

    /// Both bounds are type-checked before either is looked up.
    pub fn between_json(&self, start: &Value, end: &Value) -> DomainResult<&[i64]> {
        let start = integer_arg(start, "between")?;
        let end = integer_arg(end, "between")?;
        self.between(indexed_key(start, "between")?, indexed_key(end, "between")?)
    }
}
