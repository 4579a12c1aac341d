//! Client configuration
//!
//! A client is identified by its API key and the server it talks to. Both are
//! fixed once the client is built.

use crate::error::{Error, Result};
use std::fmt;
use url::Url;

/// Public OTX endpoint used when no server is given
pub const DEFAULT_SERVER: &str = "http://otx.alienvault.com";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-OTX-API-KEY";

/// Configuration for an [`OtxClient`](crate::OtxClient)
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL, without a trailing slash
    pub server: String,
    /// The API key value
    pub api_key: String,
    /// Header name the API key is sent in
    pub header_name: String,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            api_key: api_key.into(),
            header_name: API_KEY_HEADER.to_string(),
            user_agent: format!("otx-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a new config builder
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(api_key),
        }
    }

    /// Check the key is present and the server is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::config("API key must not be empty"));
        }
        if self.header_name.trim().is_empty() {
            return Err(Error::config("API key header name must not be empty"));
        }

        let url = Url::parse(&self.server)?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::config(format!(
                "server must use http or https, got '{other}'"
            ))),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server", &self.server)
            .field("api_key", &"<redacted>")
            .field("header_name", &self.header_name)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for client config
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the server base URL
    #[must_use]
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.config.server = server.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the header the API key is sent in
    #[must_use]
    pub fn header_name(mut self, name: impl Into<String>) -> Self {
        self.config.header_name = name.into();
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
