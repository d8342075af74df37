//! Core registry implementation for depin.
//!
//! A [`GlobalDependencies`] value resolves every declared service either to
//! an override stored in it or to the service's default. Copies are
//! independent snapshots, which is what makes per-test overrides safe.

pub mod builder;
pub mod dependencies;
pub mod error;
pub mod global;
pub mod key;
pub mod overrides;
pub mod registry;

pub use builder::DependenciesBuilder;
pub use dependencies::Dependencies;
pub use error::{DepinError, Result};
pub use global::global;
pub use key::{DefaultValueFactory, DependencyKey, KeyDescriptor, KeyId, declared_dependencies};
pub use overrides::{OverrideSet, OverrideSink};
pub use registry::{ErasedValue, GlobalDependencies, MismatchPolicy};

pub mod prelude {
    pub use crate::builder::DependenciesBuilder;
    pub use crate::dependencies::Dependencies;
    pub use crate::error::{DepinError, Result};
    pub use crate::global::global;
    pub use crate::key::{DefaultValueFactory, DependencyKey};
    pub use crate::overrides::OverrideSet;
    pub use crate::registry::{GlobalDependencies, MismatchPolicy};
}
