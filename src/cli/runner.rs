//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::OtxClient;
use crate::error::{Error, Result};
use crate::pagination::RecordStream;
use crate::types::JsonValue;
use futures::StreamExt;
use std::io::Write;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;
        let (what, records) = match &self.cli.command {
            Commands::Pulses { since, limit } => {
                let records = match since {
                    Some(ts) => client.get_since_iter(ts, *limit),
                    None => client.get_all_iter(*limit),
                };
                ("pulses", records)
            }
            Commands::Events { since, limit } => {
                ("events", client.get_events_since_iter(since, *limit))
            }
        };

        let count = self.print(records).await?;
        info!("Fetched {count} {what}");
        Ok(())
    }

    /// Build the client from global arguments
    fn client(&self) -> Result<OtxClient> {
        let api_key = self
            .cli
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config("API key not specified (use -k or OTX_API_KEY)"))?;
        OtxClient::with_server(api_key, &self.cli.server)
    }

    /// Write each record to stdout as soon as it arrives
    async fn print(&self, mut records: RecordStream) -> Result<usize> {
        let stdout = std::io::stdout();
        let mut count = 0;

        while let Some(record) = records.next().await {
            let line = self.render(&record?)?;
            writeln!(stdout.lock(), "{line}")?;
            count += 1;
        }

        Ok(count)
    }

    fn render(&self, record: &JsonValue) -> Result<String> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(record)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(record)?,
        };
        Ok(line)
    }
}
