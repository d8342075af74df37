//! Re-exports of the depin procedural macros.

pub use depin_macros::{dependency, inject_dependencies};
