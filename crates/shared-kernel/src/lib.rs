// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{DistributionError, DomainError, DomainResult, ErrorContext, ErrorKind, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{ValueBounds, ValueCount};
