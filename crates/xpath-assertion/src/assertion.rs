//! The XPath assertion service

use std::sync::Arc;

use assertion_traits::{
    error::Result as RegistryResult, Assertion, AssertionRegistry, AssertionStatus,
    FailureReason, Response,
};
use tracing::{debug, error};

use crate::document::ResponseDocument;
use crate::xpath::evaluate_boolean;

const COMPONENT: &str = "XPathAssertion";

/// Assertion that passes when an XPath expression is true for the response.
///
/// The response is parsed as namespace-aware XML and the expression is
/// evaluated with the root element as context. Holds no state, so one
/// instance can serve any number of callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct XPathAssertion;

impl XPathAssertion {
    /// Name this assertion registers under
    pub const NAME: &'static str = "XPath";

    pub fn new() -> Self {
        Self
    }

    /// Evaluate an expression against response text that is already in hand
    pub fn evaluate(
        &self,
        expression: Option<&str>,
        response_text: Option<&str>,
    ) -> AssertionStatus {
        let response = Response::from(response_text.map(str::to_owned));
        self.evaluate_assertion(expression, &response)
    }

    /// Register a new XPath assertion with the registry
    pub fn start(registry: &mut AssertionRegistry) -> RegistryResult<()> {
        registry.register(Arc::new(Self::new()))
    }

    /// Remove the XPath assertion from the registry
    pub fn stop(registry: &mut AssertionRegistry) -> RegistryResult<()> {
        registry.deregister(Self::NAME).map(|_| ())
    }
}

impl Assertion for XPathAssertion {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate_assertion(
        &self,
        assertion_info: Option<&str>,
        response: &Response,
    ) -> AssertionStatus {
        debug!(assertion = COMPONENT, "Running XPathAssertion");

        let Some(expression) = assertion_info else {
            return AssertionStatus::failure(FailureReason::MissingExpression);
        };
        let Some(body) = response.bytes() else {
            return AssertionStatus::failure(FailureReason::MissingResponse);
        };

        let document = match ResponseDocument::from_bytes(body) {
            Ok(document) => document,
            Err(e) => {
                error!(assertion = COMPONENT, "{}", e);
                return AssertionStatus::failure(e.failure_reason());
            }
        };

        match evaluate_boolean(&document, expression) {
            Ok(true) => AssertionStatus::success(),
            Ok(false) => AssertionStatus::failure(FailureReason::ExpressionFalse),
            Err(e) => {
                debug!(assertion = COMPONENT, expression, error = %e, "XPath expression rejected");
                AssertionStatus::failure(e.failure_reason())
            }
        }
    }
}
