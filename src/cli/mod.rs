//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `pulses` - Stream subscribed pulses, optionally only those modified since a timestamp
//! - `events` - Stream events since a timestamp

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
