//! Distribution statistics over a multiset of bounded positive integers.
//!
//! ```
//! use distribution_index::DistributionIndex;
//!
//! let mut index = DistributionIndex::new();
//! for value in [3, 9, 7, 5] {
//!     index.add(value)?;
//! }
//! let index = index.build()?;
//! assert_eq!(index.less(7)?, &[3, 5]);
//! assert_eq!(index.greater(7)?, &[9]);
//! assert_eq!(index.between(5, 9)?, &[5, 7, 9]);
//! # Ok::<(), distribution_index::DomainError>(())
//! ```

pub use distribution_index_domain::{DistributionIndex, Frequency, IndexConfig, IndexSummary, ValueRecord};
pub use distribution_index_shared_kernel::{
    DistributionError, DomainError, DomainResult, ErrorContext, ErrorKind, Result, ValueBounds, ValueCount,
};
