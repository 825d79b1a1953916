use distribution_index_shared_kernel::ValueCount;

use super::builder::Span;

/// Precomputed statistics for one distinct value, borrowed from the built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRecord<'a> {
    value: i64,
    sorted: &'a [i64],
    span: Span,
}

impl<'a> ValueRecord<'a> {
    pub(crate) fn new(value: i64, sorted: &'a [i64], span: Span) -> Self {
        Self { value, sorted, span }
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Every member strictly smaller than the value, ascending.
    #[inline]
    pub fn less(&self) -> &'a [i64] {
        &self.sorted[..self.span.start]
    }

    /// The value repeated once per occurrence.
    #[inline]
    pub fn occurrences(&self) -> &'a [i64] {
        &self.sorted[self.span.start..self.span.end]
    }

    /// Every member strictly greater than the value, ascending.
    #[inline]
    pub fn greater(&self) -> &'a [i64] {
        &self.sorted[self.span.end..]
    }

    pub fn frequency(&self) -> ValueCount {
        ValueCount::new(self.span.end - self.span.start)
    }

    /// Members in `[self, upper]`, composed from this record's occurrences
    /// and the prefix of its `greater` run ending with `upper`.
    pub(crate) fn through(&self, upper: &ValueRecord<'a>) -> &'a [i64] {
        &self.sorted[self.span.start..upper.span.end]
    }
}
