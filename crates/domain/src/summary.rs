use distribution_index_shared_kernel::{DomainError, DomainResult, Result, ValueCount};
use serde::{Deserialize, Serialize};

use crate::index::DistributionIndex;

/// How often one distinct value occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    pub value: i64,
    pub count: ValueCount,
}

/// Overview of a built index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSummary {
    pub total: ValueCount,
    pub distinct: ValueCount,
    pub min: i64,
    pub max: i64,
    pub frequencies: Vec<Frequency>,
}

impl IndexSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl DistributionIndex {
    /// Summarises the last build. Fails with `EmptyInput` if nothing was built yet.
    pub fn summary(&self) -> DomainResult<IndexSummary> {
        let sorted = self.sorted();
        let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
            return Err(DomainError::EmptyInput);
        };
        let frequencies: Vec<Frequency> = self
            .records()
            .map(|record| Frequency { value: record.value(), count: record.frequency() })
            .collect();

        Ok(IndexSummary {
            total: ValueCount::new(sorted.len()),
            distinct: ValueCount::new(frequencies.len()),
            min,
            max,
            frequencies,
        })
    }
}
