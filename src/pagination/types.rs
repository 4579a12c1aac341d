//! Pagination types
//!
//! Endpoint templates, the page envelope, and the per-invocation cursor state.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::Deserialize;
use url::Url;

/// Page size used when the caller does not pick one
pub const DEFAULT_LIMIT: u32 = 20;

// ============================================================================
// Endpoints
// ============================================================================

/// Collection endpoints that can be paginated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Pulses from the user's subscriptions
    SubscribedPulses,
    /// Subscribed pulses modified since the given timestamp
    SubscribedPulsesSince(String),
    /// Events since the given timestamp
    EventsSince(String),
}

impl Endpoint {
    /// Path of the endpoint, relative to the server
    pub fn path(&self) -> &'static str {
        match self {
            Self::SubscribedPulses | Self::SubscribedPulsesSince(_) => "/api/v1/pulses/subscribed",
            Self::EventsSince(_) => "/api/v1/pulses/events",
        }
    }

    /// Build the URL of the first page
    ///
    /// Timestamps are substituted verbatim, without percent-encoding.
    pub fn url(&self, server: &str, limit: u32) -> String {
        let base = format!("{}{}?limit={limit}", server.trim_end_matches('/'), self.path());
        match self {
            Self::SubscribedPulses => base,
            Self::SubscribedPulsesSince(ts) => format!("{base}&modified_since={ts}"),
            Self::EventsSince(ts) => format!("{base}&since={ts}"),
        }
    }
}

// ============================================================================
// Page Envelope
// ============================================================================

/// One page of a paginated response
///
/// Only `results` and `next` are read; anything else in the body is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    /// Records on this page, in server order
    pub results: Vec<JsonValue>,
    /// Absolute URL of the next page
    #[serde(default)]
    pub next: Option<String>,
}

impl Page {
    /// Interpret a response body as a page
    ///
    /// A non-empty `next` must be an absolute URL; anything else is a decode
    /// error, since the server produced it.
    pub fn from_value(body: JsonValue) -> Result<Self> {
        let page: Self = serde_json::from_value(body)
            .map_err(|e| Error::decode(format!("unexpected page layout: {e}")))?;

        if let Some(next) = page.next.as_deref().filter(|url| !url.is_empty()) {
            Url::parse(next)
                .map_err(|e| Error::decode(format!("invalid next page URL '{next}': {e}")))?;
        }
        Ok(page)
    }

    /// Where pagination goes after this page
    pub fn next_page(&self) -> NextPage {
        match self.next.as_deref() {
            Some(url) if !url.is_empty() => NextPage::with_url(url),
            _ => NextPage::Done,
        }
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available at this URL
    Continue {
        /// Absolute URL of the next page
        url: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a new URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::Continue { url: url.into() }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

// ============================================================================
// Pagination State
// ============================================================================

/// Where a pager is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The page at this URL is the next one to fetch
    Fetching(String),
    /// The last page has been fetched
    Done,
    /// A request failed; nothing more will be fetched
    Failed,
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// Current phase
    pub phase: Phase,
    /// Pages fetched so far
    pub pages_fetched: u32,
    /// Records fetched so far
    pub records_fetched: u64,
}

impl PaginationState {
    /// Create a state that starts at the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            phase: Phase::Fetching(url.into()),
            pages_fetched: 0,
            records_fetched: 0,
        }
    }

    /// URL of the next page, if there is one
    pub fn current_url(&self) -> Option<&str> {
        match &self.phase {
            Phase::Fetching(url) => Some(url),
            Phase::Done | Phase::Failed => None,
        }
    }

    /// Is pagination over, successfully or not?
    pub fn is_finished(&self) -> bool {
        !matches!(self.phase, Phase::Fetching(_))
    }

    /// Record a fetched page and move to wherever it points
    pub fn advance(&mut self, next: NextPage, records: usize) {
        self.pages_fetched += 1;
        self.records_fetched += records as u64;
        self.phase = match next {
            NextPage::Continue { url } => Phase::Fetching(url),
            NextPage::Done => Phase::Done,
        };
    }

    /// Mark pagination as failed
    pub fn mark_failed(&mut self) {
        self.phase = Phase::Failed;
    }
}
