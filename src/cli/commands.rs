//! CLI commands and argument parsing

use crate::config::DEFAULT_SERVER;
use clap::{Parser, Subcommand};

/// OTX threat-intelligence client
#[derive(Parser, Debug)]
#[command(name = "otx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key
    #[arg(short = 'k', long, global = true, env = "OTX_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Server base URL
    #[arg(short, long, global = true, env = "OTX_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List subscribed pulses
    Pulses {
        /// Only pulses modified since this timestamp
        #[arg(long)]
        since: Option<String>,

        /// Page size
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// List events since a timestamp
    Events {
        /// Timestamp to start from
        #[arg(long)]
        since: String,

        /// Page size
        #[arg(short, long)]
        limit: Option<u32>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pulses() {
        let cli = Cli::try_parse_from(["otx", "-k", "key", "pulses", "--since", "2024-01-01"])
            .unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("key"));
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Pulses { since, limit } => {
                assert_eq!(since.as_deref(), Some("2024-01-01"));
                assert_eq!(limit, None);
            }
            other => panic!("Expected Pulses, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_events_requires_since() {
        assert!(Cli::try_parse_from(["otx", "-k", "key", "events"]).is_err());

        let cli = Cli::try_parse_from([
            "otx", "events", "--since", "t", "--limit", "5", "--format", "pretty",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::Events { limit: Some(5), .. }));
    }
}
