//! Network access as an injectable dependency.
//!
//! Components that fetch data take a [`NetworkDependency`] and call
//! `network().fetch(..)`. By default that goes through [`SystemNetwork`], an
//! HTTP client; tests override [`NetworkKey`] with a `MockNetwork` (feature
//! `testing`).
//!
//! ```no_run
//! use depin::GlobalDependencies;
//! use depin_network::{NetworkDependency, NetworkError};
//! use reqwest::Url;
//!
//! async fn fetch_menu<D: NetworkDependency>(dependencies: &D) -> Result<String, NetworkError> {
//!     let url = Url::parse("https://example.com/menu.txt").expect("valid url");
//!     let bytes = dependencies.network().fetch(&url).await?;
//!     Ok(String::from_utf8_lossy(&bytes).into_owned())
//! }
//!
//! # async fn run() -> Result<(), NetworkError> {
//! let menu = fetch_menu(&GlobalDependencies::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod mock;
pub mod system;

use async_trait::async_trait;
use reqwest::Url;

pub use config::NetworkConfig;
pub use error::{NetworkError, Result};
#[cfg(any(test, feature = "testing"))]
pub use mock::MockNetwork;
pub use system::SystemNetwork;

/// Abstracts network operations.
///
/// So far the only one needed is fetching the body behind a URL.
#[depin::dependency(default = "SystemNetwork")]
#[async_trait]
pub trait Network: Send + Sync {
    /// Fetches the data behind `url`.
    ///
    /// # Errors
    /// Whatever went wrong fetching it, see [`NetworkError`].
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}
