//! Override sets: named groups of related overrides.
//!
//! Test suites tend to apply the same handful of test doubles over and over.
//! An [`OverrideSet`] bundles them so a fixture can be applied in one call,
//! either to a registry directly or through its builder.
//!
//! # Examples
//! ```
//! use depin_registry::prelude::*;
//! use depin_registry::overrides::{OverrideSink, set_override};
//!
//! struct RetriesKey;
//! impl DependencyKey for RetriesKey {
//!     type Value = u32;
//!     fn default_value() -> u32 { 3 }
//! }
//!
//! struct NoRetries;
//!
//! impl OverrideSet for NoRetries {
//!     fn apply(&self, sink: &mut dyn OverrideSink) {
//!         set_override::<RetriesKey>(sink, 0);
//!     }
//! }
//!
//! let deps = GlobalDependencies::builder().add_overrides(&NoRetries).build();
//! assert_eq!(deps.resolve::<RetriesKey>(), 0);
//! ```

use crate::key::{DependencyKey, KeyId};
use crate::registry::ErasedValue;

/// A group of overrides applied together.
pub trait OverrideSet {
    /// Stores this set's overrides into `sink`.
    fn apply(&self, sink: &mut dyn OverrideSink);

    /// Optional: human-readable name for logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Something override values can be stored into.
///
/// This is the type-erased side of the registry. Nothing checks that `value`
/// matches `key`'s value type when it is stored; a mismatch is caught when
/// the key is resolved. Prefer [`set_override`], which is checked at compile
/// time.
pub trait OverrideSink {
    /// Stores `value` as the override for `key`, replacing any previous one.
    fn insert_erased(&mut self, key: KeyId, value: ErasedValue);
}

/// Stores a typed override for key `K` into `sink`.
pub fn set_override<K: DependencyKey>(sink: &mut dyn OverrideSink, value: K::Value) {
    sink.insert_erased(KeyId::of::<K>(), ErasedValue::new(value));
}
