//! Assertion abstraction trait

use crate::response::Response;
use crate::status::AssertionStatus;

/// Trait for response assertions.
///
/// An assertion receives the assertion info written in the test (for an
/// XPath assertion, the expression) and the processor's response, and
/// classifies the pair. Implementations never fail with an error: every
/// problem is reported through the returned [`AssertionStatus`].
pub trait Assertion: Send + Sync {
    /// Name under which this assertion is registered
    fn name(&self) -> &'static str;

    /// Evaluate the assertion against a processor response
    fn evaluate_assertion(
        &self,
        assertion_info: Option<&str>,
        response: &Response,
    ) -> AssertionStatus;
}
