//! Core contract for response assertions.
//!
//! This crate defines what a test framework needs in order to run an
//! assertion: the processor [`Response`], the [`Assertion`] trait, the
//! [`AssertionStatus`] an assertion reports back, and an
//! [`AssertionRegistry`] that assertions register themselves with.

pub mod assertion;
pub mod error;
pub mod registry;
pub mod response;
pub mod status;

pub use assertion::Assertion;
pub use error::Error;
pub use registry::AssertionRegistry;
pub use response::Response;
pub use status::{AssertionStatus, FailureReason};
