//! OTX API client
//!
//! The client is immutable once built and cheap to clone; every operation
//! starts its own [`Pager`], so concurrent calls share nothing but the
//! connection pool.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::{Endpoint, Pager, RecordStream, DEFAULT_LIMIT};
use crate::types::{Event, JsonValue, Pulse};
use tracing::debug;

/// Client for the OTX threat-intelligence API
#[derive(Debug, Clone)]
pub struct OtxClient {
    config: ClientConfig,
    http: HttpClient,
}

impl OtxClient {
    /// Create a client for the default public server
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::builder(api_key).build()?)
    }

    /// Create a client for a specific server
    pub fn with_server(api_key: impl Into<String>, server: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::builder(api_key).server(server).build()?)
    }

    /// Create a client from a full configuration
    ///
    /// A trailing `/` on the server is dropped, as the builder does.
    pub fn with_config(mut config: ClientConfig) -> Result<Self> {
        config.server = config.server.trim_end_matches('/').to_string();
        config.validate()?;
        let http = HttpClient::new(&config)?;
        Ok(Self { config, http })
    }

    /// Server base URL
    pub fn server(&self) -> &str {
        &self.config.server
    }

    /// The configured API key
    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform one authenticated GET against a fully composed URL
    pub async fn get(&self, url: &str) -> Result<JsonValue> {
        self.http.get_json(url).await
    }

    /// Start a page-level walk over an endpoint
    pub fn pager(&self, endpoint: &Endpoint, limit: Option<u32>) -> Pager {
        let url = endpoint.url(&self.config.server, limit.unwrap_or(DEFAULT_LIMIT));
        debug!("Paginating {}", endpoint.path());
        Pager::new(self.http.clone(), url)
    }

    // ========================================================================
    // Subscribed pulses
    // ========================================================================

    /// Fetch every subscribed pulse
    pub async fn get_all(&self, limit: Option<u32>) -> Result<Vec<Pulse>> {
        self.pager(&Endpoint::SubscribedPulses, limit)
            .collect_all()
            .await
    }

    /// Lazily stream every subscribed pulse
    pub fn get_all_iter(&self, limit: Option<u32>) -> RecordStream {
        self.pager(&Endpoint::SubscribedPulses, limit).into_stream()
    }

    /// Fetch subscribed pulses modified since `timestamp`
    ///
    /// The timestamp is placed in the query string as given.
    pub async fn get_since(&self, timestamp: &str, limit: Option<u32>) -> Result<Vec<Pulse>> {
        self.pager(&Endpoint::SubscribedPulsesSince(timestamp.to_string()), limit)
            .collect_all()
            .await
    }

    /// Lazily stream subscribed pulses modified since `timestamp`
    pub fn get_since_iter(&self, timestamp: &str, limit: Option<u32>) -> RecordStream {
        self.pager(&Endpoint::SubscribedPulsesSince(timestamp.to_string()), limit)
            .into_stream()
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Fetch events since `timestamp`
    pub async fn get_events_since(
        &self,
        timestamp: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Event>> {
        self.pager(&Endpoint::EventsSince(timestamp.to_string()), limit)
            .collect_all()
            .await
    }

    /// Lazily stream events since `timestamp`
    pub fn get_events_since_iter(&self, timestamp: &str, limit: Option<u32>) -> RecordStream {
        self.pager(&Endpoint::EventsSince(timestamp.to_string()), limit)
            .into_stream()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SERVER;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_targets_default_server() {
        let client = OtxClient::new("key").unwrap();
        assert_eq!(client.server(), DEFAULT_SERVER);
        assert_eq!(client.server(), "http://otx.alienvault.com");
        assert_eq!(client.api_key(), "key");
    }

    #[test]
    fn test_with_server() {
        let client = OtxClient::with_server("key", "https://otx.example.com/").unwrap();
        assert_eq!(client.server(), "https://otx.example.com");
    }

    #[test]
    fn test_with_config_trims_trailing_slash() {
        let mut config = ClientConfig::new("key");
        config.server = "https://otx.example.com/".to_string();
        let direct = OtxClient::with_config(config).unwrap();

        let built = OtxClient::with_server("key", "https://otx.example.com/").unwrap();
        assert_eq!(direct.server(), "https://otx.example.com");
        assert_eq!(direct.server(), built.server());
        assert_eq!(direct.config(), built.config());
    }

    #[test]
    fn test_with_config_validates() {
        let mut config = ClientConfig::new("key");
        config.server = "nonsense".to_string();
        let err = OtxClient::with_config(config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_pager_uses_default_limit() {
        let client = OtxClient::with_server("key", "http://localhost:1").unwrap();
        let pager = client.pager(&Endpoint::SubscribedPulses, None);
        assert_eq!(
            pager.state().current_url(),
            Some("http://localhost:1/api/v1/pulses/subscribed?limit=20")
        );

        let pager = client.pager(&Endpoint::EventsSince("t".into()), Some(3));
        assert_eq!(
            pager.state().current_url(),
            Some("http://localhost:1/api/v1/pulses/events?limit=3&since=t")
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OtxClient>();
    }
}
