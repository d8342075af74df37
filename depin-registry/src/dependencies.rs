//! Capability views over the registry.
//!
//! Every service gets a capability trait (`NetworkDependency`,
//! `ClownManagerDependency`, ...) with a single accessor, implemented for
//! [`GlobalDependencies`]. Components ask for exactly the capabilities they
//! use instead of the whole registry:
//!
//! ```rust,ignore
//! struct BirthdayParty<D: ClownManagerDependency + HonkDeviceDependency> {
//!     dependencies: D,
//! }
//! ```
//!
//! All capability traits extend [`Dependencies`], so whatever view a
//! component holds can be widened back with [`Dependencies::build_global`]
//! and handed down to children that need a different set of services. Any
//! overrides travel along.

use crate::registry::GlobalDependencies;

/// Base trait for every capability view.
pub trait Dependencies {
    /// Builds a [`GlobalDependencies`] carrying the same overrides as this
    /// view, for passing down to child components.
    fn build_global(&self) -> GlobalDependencies;
}

impl<T: Dependencies + ?Sized> Dependencies for &T {
    fn build_global(&self) -> GlobalDependencies {
        (**self).build_global()
    }
}

impl<T: Dependencies + ?Sized> Dependencies for Box<T> {
    fn build_global(&self) -> GlobalDependencies {
        (**self).build_global()
    }
}

impl<T: Dependencies + ?Sized> Dependencies for std::sync::Arc<T> {
    fn build_global(&self) -> GlobalDependencies {
        (**self).build_global()
    }
}

/// Declares a trait combining several capability traits.
///
/// The generated trait is implemented for every type implementing all of
/// the listed capabilities, which makes it usable both as a generic bound and
/// as a trait object (`Arc<dyn PartyDependencies>`). Capabilities from
/// other crates can be named by path, e.g. `depin_network::NetworkDependency`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use depin_registry::prelude::*;
/// use depin_registry::dependencies;
///
/// struct NameKey;
/// impl DependencyKey for NameKey {
///     type Value = &'static str;
///     fn default_value() -> &'static str { "Bozo" }
/// }
///
/// struct ShoeSizeKey;
/// impl DependencyKey for ShoeSizeKey {
///     type Value = u32;
///     fn default_value() -> u32 { 62 }
/// }
///
/// pub trait NameDependency: Dependencies {
///     fn name(&self) -> &'static str;
/// }
/// impl NameDependency for GlobalDependencies {
///     fn name(&self) -> &'static str { self.resolve::<NameKey>() }
/// }
///
/// pub trait ShoeSizeDependency: Dependencies {
///     fn shoe_size(&self) -> u32;
/// }
/// impl ShoeSizeDependency for GlobalDependencies {
///     fn shoe_size(&self) -> u32 { self.resolve::<ShoeSizeKey>() }
/// }
///
/// dependencies!(pub trait ClownDependencies: NameDependency + ShoeSizeDependency);
///
/// let view: Arc<dyn ClownDependencies> = Arc::new(GlobalDependencies::default());
/// assert_eq!(view.name(), "Bozo");
/// assert_eq!(view.shoe_size(), 62);
/// ```
#[macro_export]
macro_rules! dependencies {
    ($(#[$meta:meta])* $vis:vis trait $name:ident : $($capabilities:tt)+) => {
        $(#[$meta])*
        $vis trait $name: $crate::dependencies::Dependencies + $($capabilities)+ {}

        impl<T> $name for T where T: ?Sized + $crate::dependencies::Dependencies + $($capabilities)+ {}
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::DependencyKey;
    use std::sync::Arc;

    struct VenueKey;
    impl DependencyKey for VenueKey {
        type Value = &'static str;
        fn default_value() -> &'static str {
            "backyard"
        }
    }

    struct GuestsKey;
    impl DependencyKey for GuestsKey {
        type Value = u32;
        fn default_value() -> u32 {
            12
        }
    }

    trait VenueDependency: Dependencies {
        fn venue(&self) -> &'static str;
    }

    impl VenueDependency for GlobalDependencies {
        fn venue(&self) -> &'static str {
            self.resolve::<VenueKey>()
        }
    }

    trait GuestsDependency: Dependencies {
        fn guests(&self) -> u32;
    }

    impl GuestsDependency for GlobalDependencies {
        fn guests(&self) -> u32 {
            self.resolve::<GuestsKey>()
        }
    }

    crate::dependencies!(trait PartyDependencies: VenueDependency + GuestsDependency);

    mod catering {
        crate::dependencies!(pub(super) trait CateringDependencies: super::VenueDependency + crate::dependencies::tests::GuestsDependency);
    }

    fn venue_of(deps: &dyn VenueDependency) -> &'static str {
        deps.venue()
    }

    #[test]
    fn narrowed_view_resolves_override() {
        let deps = GlobalDependencies::new().with_override::<VenueKey>("moon");
        assert_eq!(venue_of(&deps), "moon");
    }

    #[test]
    fn widened_view_keeps_overrides_for_other_capabilities() {
        let deps = GlobalDependencies::new()
            .with_override::<VenueKey>("moon")
            .with_override::<GuestsKey>(3);

        let venue_only: Box<dyn VenueDependency> = Box::new(deps);
        let widened = venue_only.build_global();
        let guests_only: &dyn GuestsDependency = &widened;

        assert_eq!(guests_only.guests(), 3);
        assert_eq!(widened.venue(), "moon");
    }

    #[test]
    fn conjunction_trait_object() {
        let party: Arc<dyn PartyDependencies> =
            Arc::new(GlobalDependencies::new().with_override::<GuestsKey>(100));

        assert_eq!(party.venue(), "backyard");
        assert_eq!(party.guests(), 100);
        assert_eq!(party.build_global().resolve::<GuestsKey>(), 100);
    }

    #[test]
    fn conjunction_of_qualified_capabilities() {
        let catering: Box<dyn catering::CateringDependencies> =
            Box::new(GlobalDependencies::new().with_override::<VenueKey>("barn"));

        assert_eq!(catering.venue(), "barn");
        assert_eq!(catering.guests(), 12);
    }

    #[test]
    fn reference_views_widen() {
        let deps = GlobalDependencies::new().with_override::<GuestsKey>(8);
        let by_ref = &deps;
        assert_eq!(by_ref.build_global().resolve::<GuestsKey>(), 8);
    }
}
