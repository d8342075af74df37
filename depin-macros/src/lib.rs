//! Procedural macros for depin.
//!
//! Use them through the `depin` crate; the generated code refers to
//! `::depin` paths.

use proc_macro::TokenStream;

mod dependency;
mod inject;

/// Sets up a trait as an injectable dependency.
///
/// Attach it to a `Send + Sync` trait. Next to the trait it generates:
/// - `<Trait>Key`, a [`DependencyKey`] resolving to `Arc<dyn Trait>` whose
///   default is built once through a `DefaultValueFactory` and memoized,
/// - `<Trait>Dependency`, the capability trait with a single accessor,
/// - an implementation of that capability for `GlobalDependencies`,
/// - a catalog entry listed by `depin::declared_dependencies()`.
///
/// Arguments (both optional):
/// - `default = "Path"`: the factory type. Defaults to `Default<Trait>`.
/// - `accessor = "name"`: the accessor method. Defaults to the trait name in
///   snake case (`TLAService` becomes `tla_service`).
///
/// ```rust,ignore
/// #[depin::dependency(default = "SystemClownManager")]
/// pub trait ClownManager: Send + Sync {
///     fn honk(&self);
/// }
///
/// fn host<D: ClownManagerDependency>(dependencies: &D) {
///     dependencies.clown_manager().honk();
/// }
/// ```
///
/// [`DependencyKey`]: https://docs.rs/depin/latest/depin/trait.DependencyKey.html
#[proc_macro_attribute]
pub fn dependency(args: TokenStream, input: TokenStream) -> TokenStream {
    dependency::expand(args, input)
}

/// Declares which dependencies a component needs and stores them.
///
/// Attach it to a struct with named fields (or a unit struct), listing the
/// `#[dependency]` traits the component uses. It generates:
/// - `<Struct>Dependencies`, a trait combining the capability traits of the
///   listed services, implemented for every view that has all of them,
/// - a `dependencies: Arc<dyn <Struct>Dependencies>` field on the struct.
///
/// The field is private unless `access = "..."` says otherwise, e.g.
/// `access = "pub(crate)"`. Initializing the field is left to the
/// component's constructors, usually from a `GlobalDependencies` argument.
///
/// ```rust,ignore
/// #[depin::inject_dependencies(ClownManager, HonkDevice)]
/// pub struct BirthdayParty {
///     celebrated: String,
/// }
///
/// impl BirthdayParty {
///     pub fn new(celebrated: String, dependencies: GlobalDependencies) -> Self {
///         Self { celebrated, dependencies: Arc::new(dependencies) }
///     }
///
///     pub fn introduce_clown(&self) {
///         self.dependencies.honk_device().honk(1);
///         self.dependencies.clown_manager().slap(&self.celebrated);
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn inject_dependencies(args: TokenStream, input: TokenStream) -> TokenStream {
    inject::expand(args, input)
}
