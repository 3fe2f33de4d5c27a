//! In-process registry of available assertions

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::assertion::Assertion;
use crate::error::{Error, Result};

/// Name-keyed set of assertion services.
///
/// Assertions register themselves when they are started and remove
/// themselves when stopped; whoever drives the tests looks them up by name.
#[derive(Default, Clone)]
pub struct AssertionRegistry {
    services: BTreeMap<String, Arc<dyn Assertion>>,
}

impl AssertionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an assertion under its own name
    pub fn register(&mut self, assertion: Arc<dyn Assertion>) -> Result<()> {
        let name = assertion.name();
        if self.services.contains_key(name) {
            return Err(Error::duplicate(name));
        }
        self.services.insert(name.to_string(), assertion);
        Ok(())
    }

    /// Remove the assertion registered under `name`
    pub fn deregister(&mut self, name: &str) -> Result<Arc<dyn Assertion>> {
        self.services
            .remove(name)
            .ok_or_else(|| Error::unknown(name))
    }

    /// Look up an assertion by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Assertion>> {
        self.services
            .get(name)
            .cloned()
            .ok_or_else(|| Error::unknown(name))
    }

    /// Check if an assertion is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Registered names, in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.services.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl fmt::Debug for AssertionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertionRegistry")
            .field("names", &self.names())
            .finish()
    }
}
