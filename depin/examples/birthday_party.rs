//! A birthday party wired with depin.
//!
//! Run with `RUST_LOG=depin=trace` to watch overrides and resolutions.

use std::sync::Arc;

use depin::prelude::*;
use depin::rendering::shorten_type_name;
use tracing::info;
use tracing_subscriber::EnvFilter;

// === Services ===

#[depin::dependency(default = "RentedClown")]
pub trait ClownManager: Send + Sync {
    fn slap(&self, victim: &str) -> String;
}

pub struct RentedClown;

impl ClownManager for RentedClown {
    fn slap(&self, victim: &str) -> String {
        format!("The rented clown slaps {victim} with a rubber chicken")
    }
}

impl DefaultValueFactory for RentedClown {
    type Value = RentedClown;

    fn make_default_value() -> Self::Value {
        RentedClown
    }
}

#[depin::dependency(accessor = "horn")]
pub trait HonkDevice: Send + Sync {
    fn honk(&self, times: usize) -> String;
}

pub struct DefaultHonkDevice;

impl HonkDevice for DefaultHonkDevice {
    fn honk(&self, times: usize) -> String {
        vec!["HONK"; times].join(" ")
    }
}

impl DefaultValueFactory for DefaultHonkDevice {
    type Value = DefaultHonkDevice;

    fn make_default_value() -> Self::Value {
        DefaultHonkDevice
    }
}

// === Components ===

depin::dependencies!(pub trait PartyDependencies: ClownManagerDependency + HonkDeviceDependency);

struct BirthdayParty<D: PartyDependencies> {
    celebrated: String,
    dependencies: D,
}

impl<D: PartyDependencies> BirthdayParty<D> {
    fn introduce_clown(&self) {
        info!("{}", self.dependencies.horn().honk(2));
        info!("{}", self.dependencies.clown_manager().slap(&self.celebrated));
    }

    fn pie_time(&self) -> PieRoulette {
        PieRoulette {
            dependencies: self.dependencies.build_global(),
        }
    }
}

struct PieRoulette<D: ClownManagerDependency = GlobalDependencies> {
    dependencies: D,
}

impl<D: ClownManagerDependency> PieRoulette<D> {
    fn start(&self) {
        info!("{}", self.dependencies.clown_manager().slap("the nearest guest"));
    }
}

// === A stand-in clown, the way a test would use one ===

struct UncleBob;

impl ClownManager for UncleBob {
    fn slap(&self, victim: &str) -> String {
        format!("Uncle Bob, in a wig, gently pats {victim}")
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depin=debug,birthday_party=info")),
        )
        .init();

    for descriptor in depin::declared_dependencies() {
        info!(
            key = %shorten_type_name(descriptor.key().type_name()),
            value = %shorten_type_name(descriptor.value_type_name()),
            accessor = descriptor.accessor(),
            "Declared dependency"
        );
    }

    info!("Party with the default registry");
    let party = BirthdayParty {
        celebrated: "Ada".to_string(),
        dependencies: GlobalDependencies::default(),
    };
    party.introduce_clown();
    party.pie_time().start();

    info!("Party with the clown overridden");
    let budget = GlobalDependencies::default().with_override::<ClownManagerKey>(Arc::new(UncleBob));
    let party = BirthdayParty {
        celebrated: "Grace".to_string(),
        dependencies: budget,
    };
    party.introduce_clown();
    // The pie roulette never sees `UncleBob` named anywhere, yet gets him.
    party.pie_time().start();

    info!(dependencies = ?party.dependencies, "Done");
}
