use distribution_index_shared_kernel::{DomainError, DomainResult, ValueBounds};

use super::{builder::BuiltIndex, record::ValueRecord};

/// Rejects values outside `bounds` before anything is appended.
pub(super) fn ensure_in_bounds(bounds: &ValueBounds, value: i64) -> DomainResult<i64> {
    bounds.check(value).inspect_err(|err| log::trace!("rejected value: {err}"))
}

/// Looks `value` up in the last built index.
pub(super) fn ensure_indexed<'a>(
    built: Option<&'a BuiltIndex>,
    value: i64,
    operation: &'static str,
) -> DomainResult<ValueRecord<'a>> {
    built
        .and_then(|index| index.span(value).map(|span| ValueRecord::new(value, &index.sorted, span)))
        .ok_or(DomainError::UnknownValue { operation, value: value.into() })
}

pub(super) fn ensure_ordered(start: i64, end: i64) -> DomainResult<()> {
    if start > end {
        return Err(DomainError::InvertedRange { start, end });
    }
    Ok(())
}
