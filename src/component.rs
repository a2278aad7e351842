//! Type-safe wrapper for component identifiers.
//!
//! A component names a circuit element whose health is under diagnosis.
//! Identifiers are shared (`Arc<str>`), so cloning a component is cheap and
//! components can cross thread boundaries freely.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// An opaque, immutable component identifier.
///
/// # Invariants
///
/// - The identifier is never empty
/// - Ordering is lexicographic by identifier
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Component(Arc<str>);

impl Component {
    /// Creates a new component with the given identifier.
    ///
    /// Fails with [`Error::InvalidInput`] if the identifier is empty.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(Error::invalid_input("component identifier is empty"));
        }
        Ok(Component(Arc::from(name)))
    }

    /// Returns the identifier.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Component {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Component::new(name)
    }
}

impl TryFrom<String> for Component {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Component::new(name)
    }
}
