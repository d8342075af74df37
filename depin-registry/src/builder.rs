//! Builder for registries with overrides.
//!
//! ```text
//! GlobalDependencies::builder()  ──build()──>  GlobalDependencies
//!   .mismatch_policy(..)
//!   .with_override::<K>(..)
//!   .add_overrides(&fixture)
//! ```

use std::fmt;

use tracing::debug;

use crate::key::{DependencyKey, KeyId};
use crate::overrides::{OverrideSet, OverrideSink};
use crate::registry::{ErasedValue, GlobalDependencies, MismatchPolicy};

/// Builds a [`GlobalDependencies`] with overrides and settings applied.
///
/// Start one with [`GlobalDependencies::builder`] (from the default registry)
/// or [`GlobalDependencies::to_builder`] (from an existing one).
///
/// # Examples
/// ```
/// use depin_registry::prelude::*;
///
/// struct PortKey;
/// impl DependencyKey for PortKey {
///     type Value = u16;
///     fn default_value() -> u16 { 80 }
/// }
///
/// let deps = GlobalDependencies::builder()
///     .mismatch_policy(MismatchPolicy::FallbackToDefault)
///     .with_override::<PortKey>(8080)
///     .build();
///
/// assert_eq!(deps.resolve::<PortKey>(), 8080);
/// assert_eq!(deps.mismatch_policy(), MismatchPolicy::FallbackToDefault);
/// ```
pub struct DependenciesBuilder {
    dependencies: GlobalDependencies,
}

impl DependenciesBuilder {
    pub(crate) fn new(base: GlobalDependencies) -> Self {
        Self { dependencies: base }
    }

    /// Sets what resolution does when an override has the wrong type.
    pub fn mismatch_policy(mut self, policy: MismatchPolicy) -> Self {
        self.dependencies.set_mismatch_policy(policy);
        self
    }

    /// Overrides key `K` with `value`.
    pub fn with_override<K: DependencyKey>(mut self, value: K::Value) -> Self {
        self.dependencies.set_override::<K>(value);
        self
    }

    /// Removes any override for key `K` inherited from the base registry.
    pub fn reset_to_default<K: DependencyKey>(mut self) -> Self {
        self.dependencies.reset_to_default::<K>();
        self
    }

    /// Applies an [`OverrideSet`].
    pub fn add_overrides(mut self, set: &dyn OverrideSet) -> Self {
        debug!(set = set.name(), "Applying override set");
        set.apply(&mut self);
        self
    }

    /// Finishes the registry.
    pub fn build(self) -> GlobalDependencies {
        debug!(overrides = self.dependencies.override_count(), "Built dependencies");
        self.dependencies
    }
}

impl OverrideSink for DependenciesBuilder {
    fn insert_erased(&mut self, key: KeyId, value: ErasedValue) {
        self.dependencies.insert_erased(key, value);
    }
}

impl fmt::Debug for DependenciesBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesBuilder")
            .field("dependencies", &self.dependencies)
            .finish()
    }
}
