//! Basic tests for assertion-traits

use std::sync::Arc;

use assertion_traits::{
    Assertion, AssertionRegistry, AssertionStatus, Error, FailureReason, Response,
};

/// Passes whenever the response has a body
struct NonEmptyAssertion;

impl Assertion for NonEmptyAssertion {
    fn name(&self) -> &'static str {
        "NonEmpty"
    }

    fn evaluate_assertion(&self, _info: Option<&str>, response: &Response) -> AssertionStatus {
        if response.is_present() {
            AssertionStatus::success()
        } else {
            AssertionStatus::failure(FailureReason::MissingResponse)
        }
    }
}

#[test]
fn test_status_success_has_no_details() {
    let status = AssertionStatus::success();
    assert!(status.is_success());
    assert_eq!(status.failure_details(), None);
    assert_eq!(status.failure_reason(), None);
}

#[test]
fn test_status_failure_details_text() {
    let cases = [
        (
            FailureReason::MissingExpression,
            "No XPath expression provided with assertion",
        ),
        (FailureReason::MissingResponse, "No processor response"),
        (
            FailureReason::DocumentBuildFailure,
            "Could not create xml document from response",
        ),
        (
            FailureReason::ExpressionCompileOrEvalFailure,
            "XPath expression formatted incorrectly",
        ),
        (FailureReason::ExpressionFalse, "XPath expression returned false"),
    ];

    for (reason, details) in cases {
        let status = AssertionStatus::from(reason);
        assert!(!status.is_success());
        assert_eq!(status.failure_details().as_deref(), Some(details));
        assert_eq!(status.failure_reason(), Some(reason));
    }
}

#[test]
fn test_status_serializes_success_flag_and_details() {
    let json = serde_json::to_value(AssertionStatus::failure(FailureReason::ExpressionFalse))
        .unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["failure_details"], "XPath expression returned false");

    let json = serde_json::to_value(AssertionStatus::success()).unwrap();
    assert_eq!(json["success"], true);
    assert!(json["failure_details"].is_null());
}

#[test]
fn test_response_text_and_bytes() {
    let response = Response::new("<a/>");
    assert!(response.is_present());
    assert_eq!(response.bytes(), Some(b"<a/>".as_slice()));
    assert_eq!(response.text().unwrap().unwrap(), "<a/>");

    let missing = Response::from(None::<String>);
    assert!(!missing.is_present());
    assert!(missing.text().is_none());
    assert_eq!(missing, Response::default());
}

#[test]
fn test_response_invalid_utf8() {
    let response = Response::from_bytes(vec![0x3c, 0x61, 0xff, 0x2f, 0x3e]);
    assert!(response.is_present());
    assert!(response.text().unwrap().is_err());
}

#[test]
fn test_registry_register_and_get() {
    let mut registry = AssertionRegistry::new();
    assert!(registry.is_empty());

    registry.register(Arc::new(NonEmptyAssertion)).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.contains("NonEmpty"));
    assert_eq!(registry.names(), vec!["NonEmpty"]);

    let assertion = registry.get("NonEmpty").unwrap();
    assert!(assertion
        .evaluate_assertion(None, &Response::new("x"))
        .is_success());
}

#[test]
fn test_registry_rejects_duplicate_name() {
    let mut registry = AssertionRegistry::new();
    registry.register(Arc::new(NonEmptyAssertion)).unwrap();

    let err = registry.register(Arc::new(NonEmptyAssertion)).unwrap_err();
    assert!(matches!(err, Error::DuplicateAssertion(ref name) if name == "NonEmpty"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registry_deregister() {
    let mut registry = AssertionRegistry::new();
    registry.register(Arc::new(NonEmptyAssertion)).unwrap();

    registry.deregister("NonEmpty").unwrap();
    assert!(registry.is_empty());

    assert!(matches!(
        registry.deregister("NonEmpty"),
        Err(Error::UnknownAssertion(_))
    ));
    assert!(registry.get("NonEmpty").is_err());
}
