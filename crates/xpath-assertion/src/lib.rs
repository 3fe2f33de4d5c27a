//! XPath assertion for XML responses
//!
//! This crate implements the `XPath` assertion: the processor response is
//! parsed with roxmltree, copied into an sxd-document tree, and an XPath 1.0
//! expression is checked against it for truth with sxd-xpath.
//!
//! ```rust,ignore
//! use xpath_assertion::XPathAssertion;
//!
//! let status = XPathAssertion::new()
//!     .evaluate(Some("count(//item)=2"), Some("<root><item/><item/></root>"));
//! assert!(status.is_success());
//! ```

pub mod assertion;
pub mod document;
pub mod error;
pub mod xpath;

// Re-export main types
pub use assertion::XPathAssertion;
pub use document::ResponseDocument;
pub use error::Error;
pub use xpath::evaluate_boolean;
