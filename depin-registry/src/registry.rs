//! The dependency registry.
//!
//! [`GlobalDependencies`] maps [`KeyId`]s to override values. Anything not
//! overridden resolves to its key's default. The registry is a value: cloning
//! it produces an independent snapshot, so overriding a copy never leaks into
//! the original or into components that already hold an earlier copy.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use depin_support::rendering::{render_key_list, shorten_type_name};
use tracing::{debug, error, trace};

use crate::builder::DependenciesBuilder;
use crate::dependencies::Dependencies;
use crate::error::{DepinError, Result, TypeMismatchError};
use crate::global::global;
use crate::key::{DependencyKey, KeyId};
use crate::overrides::OverrideSink;

/// A type-erased override value.
///
/// Values are immutable once stored and shared through an [`Arc`], which is
/// what makes cloning a registry cheap without letting copies alias state.
#[derive(Clone)]
pub struct ErasedValue {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ErasedValue {
    /// Erases `value`, remembering its type name for diagnostics.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the erased value's runtime type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for ErasedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErasedValue({})", shorten_type_name(self.type_name))
    }
}

/// What [`GlobalDependencies::resolve`] does when an override has the wrong
/// type for its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// Log the mismatch and panic. A wrongly typed override is a bug in
    /// whoever set it up and should not go unnoticed.
    #[default]
    Panic,

    /// Log the mismatch and resolve the key's default value instead.
    FallbackToDefault,
}

impl fmt::Display for MismatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchPolicy::Panic => write!(f, "Panic"),
            MismatchPolicy::FallbackToDefault => write!(f, "FallbackToDefault"),
        }
    }
}

/// Holds every global dependency and manages overrides of them.
///
/// Components take a `GlobalDependencies` (or a narrowed capability view of
/// one) at construction time and resolve services through it. Tests build a
/// copy with some services overridden and inject that instead.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use depin_registry::prelude::*;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
/// impl Greeter for English {
///     fn greet(&self) -> String { "Hello".into() }
/// }
///
/// struct Pirate;
/// impl Greeter for Pirate {
///     fn greet(&self) -> String { "Ahoy".into() }
/// }
///
/// struct GreeterKey;
/// impl DependencyKey for GreeterKey {
///     type Value = Arc<dyn Greeter>;
///     fn default_value() -> Self::Value { Arc::new(English) }
/// }
///
/// let deps = GlobalDependencies::default();
/// let pirate_deps = deps.with_override::<GreeterKey>(Arc::new(Pirate));
///
/// assert_eq!(deps.resolve::<GreeterKey>().greet(), "Hello");
/// assert_eq!(pirate_deps.resolve::<GreeterKey>().greet(), "Ahoy");
/// ```
#[derive(Clone)]
pub struct GlobalDependencies {
    overrides: HashMap<KeyId, ErasedValue>,
    mismatch_policy: MismatchPolicy,
}

impl GlobalDependencies {
    /// Creates a registry with no overrides.
    ///
    /// Usually you want [`GlobalDependencies::default`], a copy of the
    /// process-wide default instance.
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
            mismatch_policy: MismatchPolicy::default(),
        }
    }

    /// Creates a builder starting from the process-wide default registry.
    pub fn builder() -> DependenciesBuilder {
        DependenciesBuilder::new(Self::default())
    }

    /// Creates a builder starting from a copy of this registry.
    pub fn to_builder(&self) -> DependenciesBuilder {
        DependenciesBuilder::new(self.clone())
    }

    // ── Resolution ──

    /// Resolves the dependency for key `K`.
    ///
    /// Returns the override if one has been set, otherwise
    /// `K::default_value()`.
    ///
    /// # Panics
    /// If the stored override does not have type `K::Value` and the
    /// registry's [`MismatchPolicy`] is [`MismatchPolicy::Panic`]. Only
    /// overrides stored through the type-erased path can trigger this.
    pub fn resolve<K: DependencyKey>(&self) -> K::Value {
        match self.try_resolve::<K>() {
            Ok(value) => value,
            Err(err) => match self.mismatch_policy {
                MismatchPolicy::Panic => {
                    error!(error = %err, "Dependency override type mismatch");
                    panic!("{err}");
                }
                MismatchPolicy::FallbackToDefault => {
                    error!(error = %err, "Dependency override type mismatch, falling back to default");
                    K::default_value()
                }
            },
        }
    }

    /// Resolves the dependency for key `K`, reporting a wrongly typed
    /// override as an error instead of applying the [`MismatchPolicy`].
    ///
    /// # Errors
    /// [`DepinError::TypeMismatch`] if the override for `K` does not have
    /// type `K::Value`.
    pub fn try_resolve<K: DependencyKey>(&self) -> Result<K::Value> {
        let key = KeyId::of::<K>();

        let Some(stored) = self.overrides.get(&key) else {
            trace!(key = %key, "Resolving default value");
            return Ok(K::default_value());
        };

        match stored.downcast_ref::<K::Value>() {
            Some(value) => {
                trace!(key = %key, "Resolving override");
                Ok(value.clone())
            }
            None => Err(DepinError::TypeMismatch(TypeMismatchError {
                key,
                expected: type_name::<K::Value>(),
                found: stored.type_name(),
            })),
        }
    }

    // ── Override management ──

    /// Overrides the dependency for key `K` with `value`.
    ///
    /// Only this registry value (and copies taken afterwards) see the
    /// override. Components that were handed a copy earlier keep resolving
    /// whatever that copy held.
    pub fn set_override<K: DependencyKey>(&mut self, value: K::Value) {
        self.insert_erased(KeyId::of::<K>(), ErasedValue::new(value));
    }

    /// Removes any override for key `K`, so it resolves to its default
    /// again. Does nothing if `K` is not overridden.
    pub fn reset_to_default<K: DependencyKey>(&mut self) {
        let key = KeyId::of::<K>();
        if self.overrides.remove(&key).is_some() {
            debug!(key = %key, "Reset dependency to default");
        } else {
            trace!(key = %key, "Reset requested for dependency without override");
        }
    }

    /// Returns a copy of this registry with key `K` overridden by `value`.
    ///
    /// The receiver is left untouched.
    #[must_use]
    pub fn with_override<K: DependencyKey>(&self, value: K::Value) -> Self {
        let mut updated = self.clone();
        updated.set_override::<K>(value);
        updated
    }

    /// Returns a copy of this registry with any override for key `K`
    /// removed.
    #[must_use]
    pub fn without_override<K: DependencyKey>(&self) -> Self {
        let mut updated = self.clone();
        updated.reset_to_default::<K>();
        updated
    }

    // ── Introspection ──

    /// Returns `true` if key `K` is overridden in this registry.
    pub fn is_overridden<K: DependencyKey>(&self) -> bool {
        self.overrides.contains_key(&KeyId::of::<K>())
    }

    /// Number of overridden keys.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Returns the identities of all overridden keys, in no particular
    /// order.
    pub fn overridden_keys(&self) -> Vec<KeyId> {
        self.overrides.keys().copied().collect()
    }

    /// The policy applied by [`resolve`](Self::resolve) on a type mismatch.
    pub fn mismatch_policy(&self) -> MismatchPolicy {
        self.mismatch_policy
    }

    pub(crate) fn set_mismatch_policy(&mut self, policy: MismatchPolicy) {
        self.mismatch_policy = policy;
    }
}

impl Default for GlobalDependencies {
    /// Returns a copy of the process-wide default registry.
    fn default() -> Self {
        global().clone()
    }
}

impl Dependencies for GlobalDependencies {
    fn build_global(&self) -> GlobalDependencies {
        self.clone()
    }
}

impl OverrideSink for GlobalDependencies {
    fn insert_erased(&mut self, key: KeyId, value: ErasedValue) {
        debug!(key = %key, value_type = value.type_name(), "Overriding dependency");
        if self.overrides.insert(key, value).is_some() {
            debug!(key = %key, "Replaced an existing dependency override");
        }
    }
}

impl fmt::Debug for GlobalDependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.overrides.keys().map(KeyId::type_name).collect();
        f.debug_struct("GlobalDependencies")
            .field("overrides", &format_args!("{}", render_key_list(&names)))
            .field("mismatch_policy", &self.mismatch_policy)
            .finish()
    }
}
