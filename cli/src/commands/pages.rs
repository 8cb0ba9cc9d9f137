//! PAGES command - List pages, optionally filtered by a search string.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::get::PageResponse;
use super::{HumanReadable, endpoint, format_timestamp, make_request, output, truncate};

/// Arguments for the pages command.
#[derive(Args)]
pub struct PagesArgs {
    /// Case-insensitive substring to match in titles or content
    #[arg(short = 'q', long)]
    pub query: Option<String>,
}

/// Response carrying a list of pages.
#[derive(Debug, Deserialize, Serialize)]
pub struct PagesResponse {
    pub pages: Vec<PageResponse>,
}

impl HumanReadable for PagesResponse {
    fn print_human(&self) {
        if self.pages.is_empty() {
            println!("  {}", "(No pages)".dimmed());
            return;
        }

        for page in &self.pages {
            println!(
                "{} {}",
                page.title.green().bold(),
                format!("({})", format_timestamp(&page.updated_at)).dimmed()
            );
            let first_line = page.content.lines().next().unwrap_or_default();
            println!("  {}", truncate(first_line, 72));
        }
    }
}

/// Execute the pages command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: PagesArgs,
) -> Result<()> {
    let mut url = endpoint(base_url, &["pages"])?;
    if let Some(query) = &args.query {
        url.query_pairs_mut().append_pair("q", query);
    }

    let response: PagesResponse = make_request(client.get(url)).await?;

    output(&response, human)
}
