//! Assertion outcome types

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Reason an assertion did not pass.
///
/// The `Display` form of each variant is the failure detail reported back to
/// the test framework, so the strings are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FailureReason {
    /// The caller did not supply an expression
    #[error("No XPath expression provided with assertion")]
    MissingExpression,

    /// The processor produced no response body
    #[error("No processor response")]
    MissingResponse,

    /// The response body could not be turned into an XML document
    #[error("Could not create xml document from response")]
    DocumentBuildFailure,

    /// The expression failed to compile or raised an error while running
    #[error("XPath expression formatted incorrectly")]
    ExpressionCompileOrEvalFailure,

    /// The expression ran and its boolean value was false
    #[error("XPath expression returned false")]
    ExpressionFalse,
}

/// Outcome of a single assertion evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionStatus {
    /// The assertion passed
    Success,
    /// The assertion failed for the given reason
    Failure(FailureReason),
}

impl AssertionStatus {
    pub fn success() -> Self {
        AssertionStatus::Success
    }

    pub fn failure(reason: FailureReason) -> Self {
        AssertionStatus::Failure(reason)
    }

    /// Check whether the assertion passed
    pub fn is_success(&self) -> bool {
        matches!(self, AssertionStatus::Success)
    }

    /// Human-readable failure detail; `None` exactly when the assertion passed
    pub fn failure_details(&self) -> Option<String> {
        self.failure_reason().map(|reason| reason.to_string())
    }

    /// Get the failure reason, if any
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            AssertionStatus::Success => None,
            AssertionStatus::Failure(reason) => Some(*reason),
        }
    }
}

impl From<FailureReason> for AssertionStatus {
    fn from(reason: FailureReason) -> Self {
        AssertionStatus::Failure(reason)
    }
}

impl Serialize for AssertionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AssertionStatus", 2)?;
        state.serialize_field("success", &self.is_success())?;
        state.serialize_field("failure_details", &self.failure_details())?;
        state.end()
    }
}
