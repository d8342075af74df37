//! Dependency keys and their identities.
//!
//! A [`DependencyKey`] is a zero-sized type that names one resolvable service
//! and knows how to build its default value. Keys are told apart by their own
//! type: [`KeyId`] captures the key type's [`TypeId`] so it can index the
//! override map of [`GlobalDependencies`](crate::registry::GlobalDependencies).

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A compile-time descriptor for one resolvable service.
///
/// `Value` is normally a shared trait object such as `Arc<dyn Network>`.
/// Resolution hands out clones, so it should be cheap to clone.
///
/// `default_value` must always succeed. If building the default can fail,
/// the failure belongs in `Value` itself.
///
/// Most keys are generated by the `#[dependency]` attribute macro, which
/// memoizes the default. Hand-written keys work the same way:
///
/// ```
/// use std::sync::Arc;
/// use depin_registry::key::DependencyKey;
///
/// trait Clock: Send + Sync {
///     fn now(&self) -> u64;
/// }
///
/// struct SystemClock;
/// impl Clock for SystemClock {
///     fn now(&self) -> u64 { 1_700_000_000 }
/// }
///
/// struct ClockKey;
///
/// impl DependencyKey for ClockKey {
///     type Value = Arc<dyn Clock>;
///
///     fn default_value() -> Self::Value {
///         Arc::new(SystemClock)
///     }
/// }
///
/// assert_eq!(ClockKey::default_value().now(), 1_700_000_000);
/// ```
pub trait DependencyKey: 'static {
    /// The type the key resolves to.
    type Value: Clone + Send + Sync + 'static;

    /// Builds (or fetches) the value used when no override is present.
    fn default_value() -> Self::Value;
}

/// Builds the default value for one or more dependencies.
///
/// The `#[dependency]` macro wires a key's default through this trait. The
/// default implementation type can adopt it directly, or a small dedicated
/// factory type can when the default comes out of a constructor function.
pub trait DefaultValueFactory {
    /// The value produced. It must implement the dependency's trait.
    type Value;

    /// Returns a default value. Macro-generated keys call this once per
    /// process and memoize the result.
    fn make_default_value() -> Self::Value;
}

/// Type identity of a [`DependencyKey`].
///
/// Two `KeyId`s are equal exactly when they were built from the same key
/// type. The type name is carried along for diagnostics only.
///
/// ```
/// use depin_registry::key::KeyId;
///
/// struct NetworkKey;
/// struct ClockKey;
///
/// assert_eq!(KeyId::of::<NetworkKey>(), KeyId::of::<NetworkKey>());
/// assert_ne!(KeyId::of::<NetworkKey>(), KeyId::of::<ClockKey>());
/// assert!(KeyId::of::<NetworkKey>().type_name().ends_with("NetworkKey"));
/// ```
#[derive(Clone, Copy)]
pub struct KeyId {
    type_id: TypeId,
    type_name: &'static str,
}

impl KeyId {
    /// Creates the identity for key type `K`.
    #[inline]
    pub fn of<K: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<K>(),
            type_name: type_name::<K>(),
        }
    }

    /// Creates a key identity from a raw [`TypeId`] and type name.
    ///
    /// Prefer [`KeyId::of`]. This exists for type-erased override sources
    /// that only carry the raw parts.
    #[inline]
    pub fn from_raw(type_id: TypeId, type_name: &'static str) -> Self {
        Self { type_id, type_name }
    }

    /// Returns the [`TypeId`] of the key type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the fully qualified key type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for KeyId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for KeyId {}

impl Hash for KeyId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({})", self.type_name)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

/// Catalog entry for a declared dependency.
///
/// The `#[dependency]` macro submits one of these per key so that the set of
/// declared services can be listed at runtime with [`declared_dependencies`].
pub struct KeyDescriptor {
    key: fn() -> KeyId,
    value_type_name: fn() -> &'static str,
    accessor: &'static str,
}

impl KeyDescriptor {
    /// Describes key `K`, reachable through the capability accessor `accessor`.
    pub const fn new<K: DependencyKey>(accessor: &'static str) -> Self {
        Self {
            key: KeyId::of::<K>,
            value_type_name: type_name::<K::Value>,
            accessor,
        }
    }

    /// Identity of the described key.
    pub fn key(&self) -> KeyId {
        (self.key)()
    }

    /// Name of the type the key resolves to.
    pub fn value_type_name(&self) -> &'static str {
        (self.value_type_name)()
    }

    /// Name of the capability accessor method.
    pub fn accessor(&self) -> &'static str {
        self.accessor
    }
}

impl fmt::Debug for KeyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDescriptor")
            .field("key", &self.key())
            .field("value", &self.value_type_name())
            .field("accessor", &self.accessor)
            .finish()
    }
}

inventory::collect!(KeyDescriptor);

/// Iterates over every dependency declared with `#[dependency]` in the
/// final binary.
pub fn declared_dependencies() -> impl Iterator<Item = &'static KeyDescriptor> {
    inventory::iter::<KeyDescriptor>.into_iter()
}
