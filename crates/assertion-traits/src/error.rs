//! Error types for assertion registry operations

/// Result type for assertion registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the assertion contract crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An assertion is already registered under this name
    #[error("Assertion already registered: {0}")]
    DuplicateAssertion(String),

    /// No assertion is registered under this name
    #[error("Unknown assertion: {0}")]
    UnknownAssertion(String),
}

impl Error {
    /// Create a new duplicate registration error
    pub fn duplicate<S: Into<String>>(name: S) -> Self {
        Error::DuplicateAssertion(name.into())
    }

    /// Create a new unknown assertion error
    pub fn unknown<S: Into<String>>(name: S) -> Self {
        Error::UnknownAssertion(name.into())
    }
}
