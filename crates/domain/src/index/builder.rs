use std::collections::BTreeMap;

use distribution_index_shared_kernel::{DomainError, DomainResult};

/// Half-open position range `[start, end)` of one distinct value inside the
/// sorted multiset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

/// Sorted snapshot of the pending values plus the run of every distinct value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BuiltIndex {
    pub sorted: Vec<i64>,
    pub spans: BTreeMap<i64, Span>,
}

impl BuiltIndex {
    /// Sorts a copy of `pending` and records each run of equal values in a
    /// single pass. Everything before a run is `less`, everything after it
    /// is `greater`.
    pub fn from_pending(pending: &[i64]) -> DomainResult<Self> {
        if pending.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let mut sorted = pending.to_vec();
        sorted.sort_unstable();

        let mut spans = BTreeMap::new();
        let mut start = 0;
        for run in sorted.chunk_by(|a, b| a == b) {
            let end = start + run.len();
            spans.insert(run[0], Span { start, end });
            start = end;
        }

        Ok(Self { sorted, spans })
    }

    #[inline]
    pub fn span(&self, value: i64) -> Option<Span> {
        self.spans.get(&value).copied()
    }
}
