mod common;

use std::sync::Arc;

use common::*;
use depin::prelude::*;

// --- A component tree: TestComponent builds ChildComponent ---

#[depin::dependency(default = "TestManagerImpl")]
trait TLAService: Send + Sync {
    fn tla_service_test(&self) -> &'static str;
}

struct TestManagerImpl;

impl TLAService for TestManagerImpl {
    fn tla_service_test(&self) -> &'static str {
        "default"
    }
}

impl DefaultValueFactory for TestManagerImpl {
    type Value = TestManagerImpl;

    fn make_default_value() -> Self::Value {
        TestManagerImpl
    }
}

struct MockTLAService;

impl TLAService for MockTLAService {
    fn tla_service_test(&self) -> &'static str {
        "mock"
    }
}

struct TestComponent<D: ClownManagerDependency = GlobalDependencies> {
    dependencies: D,
}

impl<D: ClownManagerDependency> TestComponent<D> {
    fn new(dependencies: D) -> Self {
        Self { dependencies }
    }

    fn build_child_component(&self) -> ChildComponent {
        ChildComponent::new(self.dependencies.build_global())
    }
}

#[depin::inject_dependencies(ClownManager, TLAService, access = "pub(crate)")]
struct ChildComponent;

impl ChildComponent {
    fn new(dependencies: GlobalDependencies) -> Self {
        Self {
            dependencies: Arc::new(dependencies),
        }
    }

    fn do_the_test(&self) -> &'static str {
        self.dependencies.tla_service().tla_service_test()
    }
}

#[test]
fn child_sees_override_its_parent_cannot_see() {
    // The parent only declares the clown manager; the TLA override rides along.
    let deps = GlobalDependencies::default().with_override::<TLAServiceKey>(Arc::new(MockTLAService));
    let parent = TestComponent::new(deps);

    let child = parent.build_child_component();

    assert_eq!(child.do_the_test(), "mock");
}

#[test]
fn injected_field_holds_every_listed_service() {
    let clown = slapping_clown(&CallLog::default());
    let deps = GlobalDependencies::default()
        .with_override::<ClownManagerKey>(clown.clone())
        .with_override::<TLAServiceKey>(Arc::new(MockTLAService));

    let child = ChildComponent::new(deps);
    let injected: &Arc<dyn ChildComponentDependencies> = &child.dependencies;

    assert!(Arc::ptr_eq(&injected.clown_manager(), &clown));
    assert_eq!(injected.tla_service().tla_service_test(), "mock");
    assert_eq!(injected.build_global().override_count(), 2);
}

#[test]
fn child_defaults_without_override() {
    let parent = TestComponent::new(GlobalDependencies::default());
    assert_eq!(parent.build_child_component().do_the_test(), "default");
}

#[test]
fn separate_views_of_one_registry_keep_their_overrides() {
    let clown = slapping_clown(&CallLog::default());
    let honk = logging_honker(&CallLog::default());
    let deps = GlobalDependencies::default()
        .with_override::<ClownManagerKey>(clown.clone())
        .with_override::<HonkDeviceKey>(honk.clone());

    let clown_view: Box<dyn ClownManagerDependency> = Box::new(deps.build_global());
    let honk_view: Box<dyn HonkDeviceDependency> = Box::new(deps.build_global());

    assert!(Arc::ptr_eq(&clown_view.clown_manager(), &clown));
    assert!(Arc::ptr_eq(&honk_view.honk_device(), &honk));

    // Widening either view again reproduces both overrides.
    let rewidened = clown_view.build_global();
    assert!(Arc::ptr_eq(&rewidened.honk_device(), &honk));
    assert_eq!(rewidened.override_count(), 2);
}

#[test]
fn party_passes_its_clown_to_the_pie_roulette() {
    let log = CallLog::default();
    let deps = GlobalDependencies::default()
        .with_override::<ClownManagerKey>(slapping_clown(&log))
        .with_override::<HonkDeviceKey>(logging_honker(&log));

    let party = BirthdayParty::with_dependencies("Bob", deps);
    party.introduce_clown();
    party.pie_time().start();

    assert_eq!(log.entries(), vec!["honk x1", "slap Bob", "slap everyone"]);
}

#[test]
fn components_built_earlier_keep_their_snapshot() {
    let log = CallLog::default();
    let mut deps = GlobalDependencies::default().with_override::<ClownManagerKey>(slapping_clown(&log));

    let roulette = PieRoulette::new(deps.clone());
    deps.reset_to_default::<ClownManagerKey>();

    roulette.start();
    assert_eq!(log.entries(), vec!["slap everyone"]);
    assert!(roulette.dependencies().is_overridden::<ClownManagerKey>());
}

#[test]
fn root_component_uses_default_registry() {
    let party = BirthdayParty::new("Carol");
    let roulette = party.pie_time();

    assert_eq!(roulette.dependencies().override_count(), 0);
    assert_eq!(roulette.dependencies().clown_manager().shoe_size(), 62.0);
}

#[test]
#[should_panic(expected = "Unexpected call to `MockClownManager::slap`")]
fn unconfigured_mock_fails_the_test() {
    let deps = GlobalDependencies::default()
        .with_override::<ClownManagerKey>(Arc::new(MockClownManager::default()))
        .with_override::<HonkDeviceKey>(logging_honker(&CallLog::default()));

    BirthdayParty::with_dependencies("Dave", deps).introduce_clown();
}
