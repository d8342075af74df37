//! Test double for [`Network`].

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Url;

use crate::error::{NetworkError, Result};
use crate::Network;

type FetchOverride = dyn Fn(&Url) -> Result<Vec<u8>> + Send + Sync;

/// Simple mock for network access. Use it in tests as an override of
/// [`NetworkKey`](crate::NetworkKey).
///
/// Without a fetch override every call fails with
/// [`NetworkError::UnexpectedCall`]. Requested URLs are recorded either way.
///
/// ```
/// use std::sync::Arc;
/// use depin::GlobalDependencies;
/// use depin_network::{MockNetwork, NetworkKey};
///
/// let mock = MockNetwork::new().with_fetch(|_| Ok(b"pie".to_vec()));
/// let deps = GlobalDependencies::default().with_override::<NetworkKey>(Arc::new(mock));
/// ```
#[derive(Default, Clone)]
pub struct MockNetwork {
    fetch_override: Option<Arc<FetchOverride>>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl MockNetwork {
    /// A mock with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers fetches with `fetch`.
    pub fn with_fetch(
        mut self,
        fetch: impl Fn(&Url) -> Result<Vec<u8>> + Send + Sync + 'static,
    ) -> Self {
        self.fetch_override = Some(Arc::new(fetch));
        self
    }

    /// Every URL fetched through this mock (or its clones), in order.
    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Network for MockNetwork {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        self.requests.lock().push(url.clone());
        match &self.fetch_override {
            Some(fetch) => fetch(url),
            None => Err(NetworkError::UnexpectedCall("MockNetwork::fetch")),
        }
    }
}
