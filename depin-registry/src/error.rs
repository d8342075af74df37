//! Error types for registry operations.
//!
//! Resolution, override and reset are total over their typed API. The one
//! fault this layer knows about is an override whose runtime type does not
//! match its key, which can only be stored through the type-erased
//! [`OverrideSink`](crate::overrides::OverrideSink) path.

use std::fmt;

use depin_support::rendering::shorten_type_name;

use crate::key::KeyId;

/// Main error type for depin registry operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DepinError {
    /// An override was stored with the wrong runtime type for its key.
    #[error("{}", .0)]
    TypeMismatch(TypeMismatchError),
}

/// An override does not have the type its key declares.
///
/// This is a defect in whoever stored the override, not a recoverable
/// runtime condition.
#[derive(Debug, Clone)]
pub struct TypeMismatchError {
    /// The key being resolved.
    pub key: KeyId,
    /// The key's declared value type.
    pub expected: &'static str,
    /// The runtime type of the stored override.
    pub found: &'static str,
}

impl fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dependency override for {} has type {}, expected {}",
            shorten_type_name(self.key.type_name()),
            shorten_type_name(self.found),
            shorten_type_name(self.expected),
        )?;
        write!(
            f,
            "\n  Hint: store overrides with set_override::<{}>() so the value type is checked at compile time",
            shorten_type_name(self.key.type_name()),
        )
    }
}

/// Convenient Result type for depin operations.
pub type Result<T> = std::result::Result<T, DepinError>;
