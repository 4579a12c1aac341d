//! Authenticated HTTP client
//!
//! No retries, no rate limiting and no timeout beyond reqwest's defaults:
//! every failure surfaces to the caller on the first attempt.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

/// HTTP client that sends the API key on every request
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    header_name: String,
}

impl HttpClient {
    /// Create a client for the given configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let name = HeaderName::from_bytes(config.header_name.as_bytes())
            .map_err(|e| Error::config(format!("invalid API key header name: {e}")))?;
        let mut value = HeaderValue::from_str(&config.api_key)
            .map_err(|e| Error::config(format!("invalid API key value: {e}")))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(name, value);

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            header_name: config.header_name.clone(),
        })
    }

    /// GET a fully composed URL and parse the body as JSON
    pub async fn get_json(&self, url: &str) -> Result<JsonValue> {
        let url = Url::parse(url)?;
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Request to {} failed with status {}", url, status.as_u16());
            return Err(Error::from_status(status.as_u16(), body));
        }

        // Raw bytes, so invalid UTF-8 fails decoding instead of being replaced
        let body = response.bytes().await?;
        let json = serde_json::from_slice(&body).map_err(|e| {
            Error::decode(format!("response from {url} is not valid JSON: {e}"))
        })?;
        Ok(json)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("header_name", &self.header_name)
            .finish_non_exhaustive()
    }
}
