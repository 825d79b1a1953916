//! Build-once / query-many index over a multiset of bounded positive integers.
//!
//! Values are collected with [`DistributionIndex::add`], indexed by
//! [`DistributionIndex::build`] and then queried in constant time plus the
//! cost of handing out a borrowed slice. Queries always reflect the most
//! recent build; values added afterwards stay pending until the next one.

mod builder;
mod record;
mod validation;

use distribution_index_shared_kernel::{DomainResult, ValueCount};

use self::{
    builder::BuiltIndex,
    validation::{ensure_in_bounds, ensure_indexed, ensure_ordered},
};
pub use record::ValueRecord;
use crate::config::IndexConfig;

#[derive(Debug, Clone, Default)]
pub struct DistributionIndex {
    config: IndexConfig,
    pending: Vec<i64>,
    built: Option<BuiltIndex>,
}

impl DistributionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self { config, pending: Vec::new(), built: None }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Appends one value. Out-of-range values leave the index untouched.
    pub fn add(&mut self, value: i64) -> DomainResult<()> {
        let value = ensure_in_bounds(&self.config.bounds, value)?;
        self.pending.push(value);
        Ok(())
    }

    /// Appends every value, or none of them if any is out of range.
    pub fn extend<I>(&mut self, values: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = i64>,
    {
        let bounds = self.config.bounds;
        let accepted = values
            .into_iter()
            .map(|value| ensure_in_bounds(&bounds, value))
            .collect::<DomainResult<Vec<_>>>()?;
        self.pending.extend(accepted);
        Ok(())
    }

    /// Rebuilds the index from every value added so far, replacing the
    /// previous one.
    pub fn build(&mut self) -> DomainResult<&Self> {
        let built = BuiltIndex::from_pending(&self.pending)?;
        log::debug!(
            "built distribution index: {} values, {} distinct",
            built.sorted.len(),
            built.spans.len()
        );
        self.built = Some(built);
        Ok(self)
    }

    /// Values added so far, in insertion order.
    pub fn pending(&self) -> &[i64] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }

    /// Distinct values of the last build, ascending.
    pub fn distinct(&self) -> impl Iterator<Item = i64> + '_ {
        self.built.iter().flat_map(|built| built.spans.keys().copied())
    }

    /// All members of the last build, ascending.
    pub fn sorted(&self) -> &[i64] {
        self.built.as_ref().map_or(&[], |built| built.sorted.as_slice())
    }

    pub fn record(&self, value: i64) -> DomainResult<ValueRecord<'_>> {
        ensure_indexed(self.built.as_ref(), value, "record")
    }

    pub fn records(&self) -> impl Iterator<Item = ValueRecord<'_>> + '_ {
        self.built.iter().flat_map(|built| {
            built
                .spans
                .iter()
                .map(move |(&value, &span)| ValueRecord::new(value, &built.sorted, span))
        })
    }

    pub fn less(&self, value: i64) -> DomainResult<&[i64]> {
        ensure_indexed(self.built.as_ref(), value, "less").map(|record| record.less())
    }

    pub fn greater(&self, value: i64) -> DomainResult<&[i64]> {
        ensure_indexed(self.built.as_ref(), value, "greater").map(|record| record.greater())
    }

    pub fn occurrences(&self, value: i64) -> DomainResult<&[i64]> {
        ensure_indexed(self.built.as_ref(), value, "occurrences").map(|record| record.occurrences())
    }

    /// Members `v` with `start <= v <= end`, ascending with duplicates.
    /// Both bounds must be indexed and `start` must not exceed `end`.
    pub fn between(&self, start: i64, end: i64) -> DomainResult<&[i64]> {
        let lower = ensure_indexed(self.built.as_ref(), start, "between")?;
        let upper = ensure_indexed(self.built.as_ref(), end, "between")?;
        ensure_ordered(start, end)?;
        Ok(lower.through(&upper))
    }

    pub fn less_count(&self, value: i64) -> DomainResult<ValueCount> {
        self.less(value).map(|values| ValueCount::new(values.len()))
    }

    pub fn greater_count(&self, value: i64) -> DomainResult<ValueCount> {
        self.greater(value).map(|values| ValueCount::new(values.len()))
    }

    pub fn occurrence_count(&self, value: i64) -> DomainResult<ValueCount> {
        self.occurrences(value).map(|values| ValueCount::new(values.len()))
    }

    pub fn between_count(&self, start: i64, end: i64) -> DomainResult<ValueCount> {
        self.between(start, end).map(|values| ValueCount::new(values.len()))
    }
}

#[cfg(test)]
mod tests {
    use distribution_index_shared_kernel::{DomainError, ErrorKind, ValueBounds};

    use super::*;

    fn built(values: &[i64]) -> DistributionIndex {
        let mut index = DistributionIndex::new();
        index.extend(values.iter().copied()).unwrap();
        index.build().unwrap();
        index
    }

    #[test]
    fn single_value_has_no_neighbours() {
        let index = built(&[2]);
        assert_eq!(index.less(2).unwrap(), &[] as &[i64]);
        assert_eq!(index.greater(2).unwrap(), &[] as &[i64]);
        assert_eq!(index.occurrences(2).unwrap(), &[2]);
    }

    #[test]
    fn less_and_greater_partition_the_rest() {
        let index = built(&[3, 9, 7, 5]);
        assert_eq!(index.less(7).unwrap(), &[3, 5]);
        assert_eq!(index.greater(7).unwrap(), &[9]);
    }

    #[test]
    fn greater_keeps_duplicates() {
        let index = built(&[2, 1, 8, 5, 8]);
        assert_eq!(index.greater(2).unwrap(), &[5, 8, 8]);
        assert_eq!(index.greater_count(2).unwrap(), 3usize);
    }

    #[test]
    fn between_includes_bounds_and_their_repetitions() {
        let index = built(&[4, 3, 6, 4, 12, 6, 9]);
        assert_eq!(index.between(4, 9).unwrap(), &[4, 4, 6, 6, 9]);

        let index = built(&[3, 9, 5, 5, 5, 12, 5, 6, 1, 25]);
        assert_eq!(index.between(3, 9).unwrap(), &[3, 5, 5, 5, 5, 6, 9]);
        assert_eq!(index.between_count(3, 9).unwrap(), 7usize);
    }

    #[test]
    fn between_same_bound_returns_occurrences() {
        let index = built(&[5, 1, 5, 9]);
        assert_eq!(index.between(5, 5).unwrap(), &[5, 5]);
    }

    #[test]
    fn between_rejects_inverted_and_unknown_bounds() {
        let index = built(&[4, 6, 3, 9, 1]);
        assert_eq!(index.between(9, 1), Err(DomainError::InvertedRange { start: 9, end: 1 }));
        assert_eq!(
            index.between(1, 5).unwrap_err(),
            DomainError::UnknownValue { operation: "between", value: 5 }
        );
        // Unknown bounds win over ordering.
        assert_eq!(index.between(9, 2).unwrap_err().kind(), ErrorKind::UnknownKey);
    }

    #[test]
    fn rejected_add_does_not_mutate() {
        let mut index = DistributionIndex::new();
        index.add(5).unwrap();
        assert_eq!(index.add(1200).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(index.add(0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(index.add(-4).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(index.extend([7, 1000, 8]).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(index.pending(), &[5]);
    }

    #[test]
    fn build_without_values_fails() {
        let mut index = DistributionIndex::new();
        assert_eq!(index.build().unwrap_err(), DomainError::EmptyInput);
        assert!(!index.is_built());
    }

    #[test]
    fn queries_follow_the_last_build() {
        let mut index = built(&[4, 2]);
        index.add(1).unwrap();
        assert_eq!(index.less(4).unwrap(), &[2]);
        assert_eq!(index.less(1).unwrap_err().kind(), ErrorKind::UnknownKey);

        index.build().unwrap();
        assert_eq!(index.less(4).unwrap(), &[1, 2]);
        assert_eq!(index.pending(), &[4, 2, 1]);
    }

    #[test]
    fn queries_before_build_are_unknown() {
        let mut index = DistributionIndex::new();
        index.add(3).unwrap();
        assert_eq!(index.less(3).unwrap_err(), DomainError::UnknownValue { operation: "less", value: 3 });
    }

    #[test]
    fn build_is_chainable() {
        let mut index = DistributionIndex::new();
        index.extend([3, 1, 2]).unwrap();
        let less = index.build().and_then(|index| index.less(3)).unwrap();
        assert_eq!(less, &[1, 2]);
    }

    #[test]
    fn records_iterate_distinct_values_ascending() {
        let index = built(&[6, 2, 6, 4]);
        assert_eq!(index.distinct().collect::<Vec<_>>(), vec![2, 4, 6]);
        let frequencies: Vec<_> = index.records().map(|r| (r.value(), r.frequency().value())).collect();
        assert_eq!(frequencies, vec![(2, 1), (4, 1), (6, 2)]);
        assert_eq!(index.sorted(), &[2, 4, 6, 6]);
    }

    #[test]
    fn custom_bounds_are_enforced() {
        let mut index = DistributionIndex::with_config(IndexConfig::new(ValueBounds::new(10, 20).unwrap()));
        assert!(index.add(9).is_err());
        assert!(index.add(21).is_err());
        index.add(10).unwrap();
        index.add(20).unwrap();
        assert_eq!(index.len(), 2);
    }
}
