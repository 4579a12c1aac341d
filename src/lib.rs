//! # OTX Client
//!
//! A small async client for the AlienVault OTX threat-intelligence API.
//!
//! ## Features
//!
//! - **API Key Auth**: the key is sent as `X-OTX-API-KEY` on every request
//! - **Cursor Pagination**: follows the server's `next` URL until it runs out
//! - **Eager or Lazy**: collect everything into a `Vec`, or stream records page by page
//! - **Typed Errors**: invalid key, bad request, transport and decoding failures are distinct
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use otx_client::{OtxClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = OtxClient::new("your-api-key")?;
//!
//!     // Everything at once
//!     let pulses = client.get_all(None).await?;
//!     println!("{} pulses", pulses.len());
//!
//!     // One page at a time
//!     let mut events = client.get_events_since_iter("2024-01-01T00:00:00Z", Some(50));
//!     while let Some(event) = events.next().await {
//!         println!("{}", event?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        OtxClient                         │
//! │  get_all / get_since / get_events_since      → Vec       │
//! │  get_all_iter / get_since_iter / ..._iter    → Stream    │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!        ┌─────────────────────┴──────────────────────┐
//!        │  Pagination: Endpoint → Pager → next URL   │
//!        └─────────────────────┬──────────────────────┘
//!                              │
//!        ┌─────────────────────┴──────────────────────┐
//!        │  HTTP: one authenticated GET → JSON value  │
//!        └────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Authenticated HTTP transport
pub mod http;

/// Cursor pagination
pub mod pagination;

/// The OTX API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::OtxClient;
pub use config::{ClientConfig, API_KEY_HEADER, DEFAULT_SERVER};
pub use error::{Error, ErrorKind, Result};
pub use pagination::{Endpoint, Pager, RecordStream, DEFAULT_LIMIT};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
