//! HTTP-backed [`Network`] implementation.

use std::fmt;

use async_trait::async_trait;
use depin::DefaultValueFactory;
use reqwest::{Client, Url};
use tracing::{debug, instrument, warn};

use crate::config::NetworkConfig;
use crate::error::{NetworkError, Result};
use crate::Network;

/// Fetches data over HTTP(S) with a shared [`reqwest::Client`].
///
/// Building the client can fail (for instance when no TLS backend can be
/// initialized). The default value of a dependency must always exist, so the
/// failure is kept and every fetch reports it as
/// [`NetworkError::Unavailable`].
pub struct SystemNetwork {
    client: std::result::Result<Client, String>,
}

impl SystemNetwork {
    /// Creates a network client with `config`.
    pub fn new(config: &NetworkConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| {
                warn!(error = %err, "Failed to build HTTP client");
                err.to_string()
            });

        Self { client }
    }

    /// Returns `true` if the underlying client was built successfully.
    pub fn is_available(&self) -> bool {
        self.client.is_ok()
    }
}

impl DefaultValueFactory for SystemNetwork {
    type Value = SystemNetwork;

    fn make_default_value() -> Self::Value {
        SystemNetwork::new(&NetworkConfig::default())
    }
}

#[async_trait]
impl Network for SystemNetwork {
    #[instrument(skip_all, fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        let client = self
            .client
            .as_ref()
            .map_err(|reason| NetworkError::Unavailable(reason.clone()))?;

        let response = client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                url: url.clone(),
                status,
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Fetched");
        Ok(body.to_vec())
    }
}

impl fmt::Debug for SystemNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemNetwork")
            .field("available", &self.is_available())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_builds() {
        let network = SystemNetwork::make_default_value();
        assert!(network.is_available());
        assert!(format!("{network:?}").contains("available: true"));
    }

    #[tokio::test]
    async fn unavailable_client_reports_reason() {
        let network = SystemNetwork {
            client: Err("no TLS backend".to_string()),
        };
        let url = Url::parse("https://example.com").unwrap();

        match network.fetch(&url).await {
            Err(NetworkError::Unavailable(reason)) => assert_eq!(reason, "no TLS backend"),
            other => panic!("Expected Unavailable, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_failure_is_a_request_error() {
        let network = SystemNetwork::new(&NetworkConfig::with_timeout(std::time::Duration::from_secs(2)));
        // Port 9 (discard) on localhost is essentially never listening.
        let url = Url::parse("http://127.0.0.1:9/").unwrap();

        assert!(matches!(network.fetch(&url).await, Err(NetworkError::Request(_))));
    }
}
