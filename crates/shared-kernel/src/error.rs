// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DistributionError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DistributionError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Failed to process {format} data: {details}")]
    Serialization { format: String, details: String },
}

pub type Result<T> = std::result::Result<T, DistributionError>;

impl DistributionError {
    /// Walks through `Context` wrappers and returns the domain error underneath, if any.
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Context { source, .. } => source.domain(),
            Self::Domain(err) => Some(err),
            Self::Serialization { .. } => None,
        }
    }
}

/// Coarse classification of [`DomainError`] so callers can tell type
/// mismatches apart from range and lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Range,
    UnknownKey,
    EmptyInput,
    InvalidRange,
    Configuration,
}

/// Domain-layer specific errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{operation}: expected an integer, found {found}")]
    TypeMismatch { operation: &'static str, found: String },

    #[error("Value {value} is out of range: must be between {min} and {max}")]
    OutOfRange { value: i128, min: i64, max: i64 },

    #[error("{operation}: value {value} is not present in the built index")]
    UnknownValue { operation: &'static str, value: i128 },

    #[error("Cannot build statistics: no values have been added")]
    EmptyInput,

    #[error("Invalid range: start {start} is greater than end {end}")]
    InvertedRange { start: i64, end: i64 },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl DomainError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::Type,
            Self::OutOfRange { .. } => ErrorKind::Range,
            Self::UnknownValue { .. } => ErrorKind::UnknownKey,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::InvertedRange { .. } => ErrorKind::InvalidRange,
            Self::InvalidConfiguration { .. } => ErrorKind::Configuration,
        }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

impl From<serde_json::Error> for DistributionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DistributionError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DistributionError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DistributionError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
