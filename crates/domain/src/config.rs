use distribution_index_shared_kernel::{Result, ValueBounds};
use serde::{Deserialize, Serialize};

/// Settings applied when values are ingested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    pub bounds: ValueBounds,
}

impl IndexConfig {
    pub fn new(bounds: ValueBounds) -> Self {
        Self { bounds }
    }

    /// Parse a JSON document such as `{"bounds": {"min": 1, "max": 500}}`.
    /// Missing fields keep their defaults; bounds are validated on the way in.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
