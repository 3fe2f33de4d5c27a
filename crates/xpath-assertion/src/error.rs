//! Error types for XPath assertion evaluation

use std::str::Utf8Error;

use assertion_traits::FailureReason;

/// Result type for document building and XPath evaluation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning a response into a document or running an expression
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Response body is not valid UTF-8
    #[error("Response is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    /// XML parsing failed
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// Parsed document has no root element
    #[error("Document has no root element")]
    NoDocumentElement,

    /// XPath compilation failed
    #[error("XPath compilation error: {0}")]
    XPathCompile(String),

    /// XPath evaluation failed
    #[error("XPath evaluation error: {0}")]
    XPathEval(String),
}

impl Error {
    /// Create a new XPath compilation error
    pub fn xpath_compile<S: Into<String>>(msg: S) -> Self {
        Error::XPathCompile(msg.into())
    }

    /// Create a new XPath evaluation error
    pub fn xpath_eval<S: Into<String>>(msg: S) -> Self {
        Error::XPathEval(msg.into())
    }

    /// Map this error onto the failure reported to the test framework.
    ///
    /// Every way of failing to build a document collapses into one reason,
    /// as does every way of failing to compile or run the expression.
    pub fn failure_reason(&self) -> FailureReason {
        match self {
            Error::Encoding(_) | Error::XmlParse(_) | Error::NoDocumentElement => {
                FailureReason::DocumentBuildFailure
            }
            Error::XPathCompile(_) | Error::XPathEval(_) => {
                FailureReason::ExpressionCompileOrEvalFailure
            }
        }
    }
}
