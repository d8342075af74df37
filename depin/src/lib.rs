//! # depin: overridable global dependencies for Rust
//!
//! Declare each service as a trait with `#[dependency]`, give components a
//! narrowed view of [`GlobalDependencies`], and swap in test doubles by
//! handing them a copy with overrides.
//!
//! ```
//! use std::sync::Arc;
//! use depin::prelude::*;
//!
//! #[depin::dependency]
//! pub trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! pub struct DefaultGreeter;
//!
//! impl Greeter for DefaultGreeter {
//!     fn greet(&self) -> String { "Hello".into() }
//! }
//!
//! impl DefaultValueFactory for DefaultGreeter {
//!     type Value = DefaultGreeter;
//!     fn make_default_value() -> DefaultGreeter { DefaultGreeter }
//! }
//!
//! struct Pirate;
//! impl Greeter for Pirate {
//!     fn greet(&self) -> String { "Ahoy".into() }
//! }
//!
//! struct Doorman<D: GreeterDependency> {
//!     dependencies: D,
//! }
//!
//! impl<D: GreeterDependency> Doorman<D> {
//!     fn welcome(&self) -> String {
//!         self.dependencies.greeter().greet()
//!     }
//! }
//!
//! let doorman = Doorman { dependencies: GlobalDependencies::default() };
//! assert_eq!(doorman.welcome(), "Hello");
//!
//! let mocked = GlobalDependencies::default().with_override::<GreeterKey>(Arc::new(Pirate));
//! let doorman = Doorman { dependencies: mocked };
//! assert_eq!(doorman.welcome(), "Ahoy");
//! ```

// Lets the generated `::depin::...` paths resolve inside this crate too.
extern crate self as depin;

pub use depin_derive::*;
pub use depin_registry::*;
pub use depin_support::*;

pub mod prelude {
    pub use depin_derive::{dependency, inject_dependencies};
    pub use depin_registry::prelude::*;
}

#[doc(hidden)]
pub mod __private {
    pub use inventory;
    pub use once_cell::sync::Lazy;
}
