//! The process-wide default registry.

use once_cell::sync::Lazy;

use crate::registry::GlobalDependencies;

// Created on first access, never mutated afterwards.
static DEFAULT_DEPENDENCIES: Lazy<GlobalDependencies> = Lazy::new(GlobalDependencies::new);

/// Returns the process-wide default registry, which has no overrides.
///
/// Use it (or [`GlobalDependencies::default`], which clones it) as the
/// default argument when constructing root components. It is read-only:
/// to override something, clone it first.
///
/// # Examples
///
/// ```
/// use depin_registry::global;
///
/// assert_eq!(global().override_count(), 0);
/// ```
pub fn global() -> &'static GlobalDependencies {
    &DEFAULT_DEPENDENCIES
}
