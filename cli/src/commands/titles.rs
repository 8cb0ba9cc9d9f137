//! TITLES command - List page titles, most recently updated first.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, make_request, output};

/// Arguments for the titles command.
#[derive(Args)]
pub struct TitlesArgs {
    // No additional arguments needed
}

/// Response carrying page titles.
#[derive(Debug, Deserialize, Serialize)]
pub struct TitlesResponse {
    pub titles: Vec<String>,
}

impl HumanReadable for TitlesResponse {
    fn print_human(&self) {
        if self.titles.is_empty() {
            println!("  {}", "(No pages)".dimmed());
            return;
        }

        for title in &self.titles {
            println!("  - {}", title);
        }
    }
}

/// Execute the titles command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: TitlesArgs,
) -> Result<()> {
    let url = endpoint(base_url, &["titles"])?;
    let response: TitlesResponse = make_request(client.get(url)).await?;

    output(&response, human)
}
