//! Helpers for hand-written test doubles.
//!
//! Mocks built on top of depin are expected to have every exercised call path
//! configured explicitly. An unconfigured path is a mistake in the test, so it
//! fails the running test instead of returning something plausible.

use tracing::error;

/// Fails the current test because a mock method was called without an
/// override configured for it.
///
/// ```should_panic
/// use depin_support::mock::unexpected_call;
///
/// struct MockClownManager {
///     honk_override: Option<Box<dyn Fn()>>,
/// }
///
/// impl MockClownManager {
///     fn honk(&self) {
///         match &self.honk_override {
///             Some(honk) => honk(),
///             None => unexpected_call("MockClownManager::honk"),
///         }
///     }
/// }
///
/// MockClownManager { honk_override: None }.honk();
/// ```
#[track_caller]
pub fn unexpected_call(function: &str) -> ! {
    let location = std::panic::Location::caller();
    error!(function, %location, "Mock called with no override set");
    panic!("Unexpected call to `{function}` at {location} with no override set");
}

/// Returns the configured override, or fails the test via [`unexpected_call`].
///
/// Convenient for mocks that keep their overrides in `Option` fields:
///
/// ```
/// use depin_support::mock::require_override;
///
/// let slap: Option<fn(&str) -> usize> = Some(|victim| victim.len());
/// assert_eq!(require_override(&slap, "MockClownManager::slap")("Bob"), 3);
/// ```
#[track_caller]
pub fn require_override<'a, F>(slot: &'a Option<F>, function: &str) -> &'a F {
    match slot {
        Some(value) => value,
        None => unexpected_call(function),
    }
}
