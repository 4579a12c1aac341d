//! HTTP transport module
//!
//! Performs exactly one authenticated GET per call and hands back the body as
//! a generic JSON value.
//!
//! # Features
//!
//! - **Authentication**: the API key rides along as a default header
//! - **Status Mapping**: 403 and 400 become typed errors, other failures keep their status
//! - **Decoding**: bodies are parsed with serde_json, separately from transport failures

mod client;

pub use client::HttpClient;
