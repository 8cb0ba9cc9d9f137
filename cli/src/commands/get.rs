//! GET command - Read a page by title.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, format_timestamp, make_request, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Exact page title
    pub title: String,
}

/// A page as returned by the server.
#[derive(Debug, Deserialize, Serialize)]
pub struct PageResponse {
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl HumanReadable for PageResponse {
    fn print_human(&self) {
        println!("{}", self.title.green().bold());
        println!("{}", "=".repeat(60));
        println!("  {} {}", "Updated:".cyan(), format_timestamp(&self.updated_at));
        println!();
        println!("{}", self.content);
    }
}

/// Execute the get command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: GetArgs,
) -> Result<()> {
    let url = endpoint(base_url, &["pages", &args.title])?;
    let response: PageResponse = make_request(client.get(url)).await?;

    output(&response, human)
}
