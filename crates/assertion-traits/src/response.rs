//! Processor response handed to assertions

use std::str::Utf8Error;

/// Output of a test processor, as seen by an assertion.
///
/// The body is kept as raw bytes; assertions that need text decode it as
/// UTF-8 themselves so that decoding failures can be reported the same way
/// as any other unusable body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    body: Option<Vec<u8>>,
}

impl Response {
    /// Create a response from text
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            body: Some(text.into().into_bytes()),
        }
    }

    /// Create a response from raw bytes
    pub fn from_bytes<B: Into<Vec<u8>>>(bytes: B) -> Self {
        Self {
            body: Some(bytes.into()),
        }
    }

    /// A response where the processor produced nothing
    pub fn none() -> Self {
        Self { body: None }
    }

    /// Check whether the processor produced a body at all
    pub fn is_present(&self) -> bool {
        self.body.is_some()
    }

    /// Get the raw body bytes
    pub fn bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Get the body decoded as UTF-8
    pub fn text(&self) -> Option<Result<&str, Utf8Error>> {
        self.bytes().map(std::str::from_utf8)
    }
}

impl From<Option<String>> for Response {
    fn from(text: Option<String>) -> Self {
        match text {
            Some(text) => Self::new(text),
            None => Self::none(),
        }
    }
}

impl From<String> for Response {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Response {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
