//! Shared fixtures: two party services, their mocks, and components using them.

#![allow(dead_code)]

use std::sync::Arc;

use depin::mock::require_override;
use depin::prelude::*;
use parking_lot::Mutex;

// --- Services ---

#[depin::dependency(default = "SystemClownManager")]
pub trait ClownManager: Send + Sync {
    fn honk(&self);
    fn slap(&self, victim: &str);
    fn shoe_size(&self) -> f64;
}

pub struct SystemClownManager {
    shoe_size: f64,
}

impl ClownManager for SystemClownManager {
    fn honk(&self) {}

    fn slap(&self, _victim: &str) {}

    fn shoe_size(&self) -> f64 {
        self.shoe_size
    }
}

impl DefaultValueFactory for SystemClownManager {
    type Value = SystemClownManager;

    fn make_default_value() -> Self::Value {
        SystemClownManager { shoe_size: 62.0 }
    }
}

#[depin::dependency]
pub trait HonkDevice: Send + Sync {
    fn honk(&self, times: u32);
}

pub struct DefaultHonkDevice;

impl HonkDevice for DefaultHonkDevice {
    fn honk(&self, _times: u32) {}
}

impl DefaultValueFactory for DefaultHonkDevice {
    type Value = DefaultHonkDevice;

    fn make_default_value() -> Self::Value {
        DefaultHonkDevice
    }
}

// --- Mocks ---

type Hook<A> = Option<Box<dyn Fn(A) + Send + Sync>>;

#[derive(Default)]
pub struct MockClownManager {
    pub honk_override: Option<Box<dyn Fn() + Send + Sync>>,
    pub slap_override: Hook<String>,
    pub shoe_size_override: Option<Box<dyn Fn() -> f64 + Send + Sync>>,
}

impl ClownManager for MockClownManager {
    fn honk(&self) {
        require_override(&self.honk_override, "MockClownManager::honk")()
    }

    fn slap(&self, victim: &str) {
        require_override(&self.slap_override, "MockClownManager::slap")(victim.to_string())
    }

    fn shoe_size(&self) -> f64 {
        require_override(&self.shoe_size_override, "MockClownManager::shoe_size")()
    }
}

#[derive(Default)]
pub struct MockHonkDevice {
    pub honk_override: Hook<u32>,
}

impl HonkDevice for MockHonkDevice {
    fn honk(&self, times: u32) {
        require_override(&self.honk_override, "MockHonkDevice::honk")(times)
    }
}

/// Records every call made through the hooks it hands out.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

/// A clown that logs slaps and nothing else.
pub fn slapping_clown(log: &CallLog) -> Arc<dyn ClownManager> {
    let log = log.clone();
    Arc::new(MockClownManager {
        slap_override: Some(Box::new(move |victim: String| log.record(format!("slap {victim}")))),
        ..Default::default()
    })
}

/// A honk device that logs honks.
pub fn logging_honker(log: &CallLog) -> Arc<dyn HonkDevice> {
    let log = log.clone();
    Arc::new(MockHonkDevice {
        honk_override: Some(Box::new(move |times: u32| log.record(format!("honk x{times}")))),
    })
}

// --- Components ---

#[depin::inject_dependencies(ClownManager, HonkDevice)]
pub struct BirthdayParty {
    celebrated: String,
}

impl BirthdayParty {
    pub fn new(celebrated: &str) -> Self {
        Self::with_dependencies(celebrated, GlobalDependencies::default())
    }

    pub fn with_dependencies(celebrated: &str, dependencies: GlobalDependencies) -> Self {
        Self {
            celebrated: celebrated.to_string(),
            dependencies: Arc::new(dependencies),
        }
    }

    pub fn introduce_clown(&self) {
        self.dependencies.honk_device().honk(1);
        self.dependencies.clown_manager().slap(&self.celebrated);
    }

    pub fn pie_time(&self) -> PieRoulette {
        PieRoulette::new(self.dependencies.build_global())
    }
}

/// Child component that only needs the clown manager.
pub struct PieRoulette<D: ClownManagerDependency = GlobalDependencies> {
    dependencies: D,
}

impl<D: ClownManagerDependency> PieRoulette<D> {
    pub fn new(dependencies: D) -> Self {
        Self { dependencies }
    }

    pub fn start(&self) {
        self.dependencies.clown_manager().slap("everyone");
    }

    pub fn dependencies(&self) -> &D {
        &self.dependencies
    }
}
