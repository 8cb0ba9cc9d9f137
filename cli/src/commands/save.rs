//! SAVE command - Create or overwrite a page.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, format_timestamp, make_request, output};

/// Arguments for the save command.
#[derive(Args)]
pub struct SaveArgs {
    /// Page title
    pub title: String,

    /// Page content (reads stdin when neither this nor --file is given)
    pub content: Option<String>,

    /// Read content from a file
    #[arg(short = 'f', long, conflicts_with = "content")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SavePageRequest {
    title: String,
    content: String,
}

/// Response from saving a page.
#[derive(Debug, Deserialize, Serialize)]
pub struct SavePageResponse {
    pub status: String,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

impl HumanReadable for SavePageResponse {
    fn print_human(&self) {
        println!("{}", "Page saved".green().bold());
        println!("  {} {}", "Title:".cyan(), self.title);
        println!("  {} {}", "Updated:".cyan(), format_timestamp(&self.updated_at));
    }
}

fn read_content(args: &SaveArgs) -> Result<String> {
    if let Some(content) = &args.content {
        return Ok(content.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read content from stdin")?;
    Ok(content)
}

/// Execute the save command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: SaveArgs,
) -> Result<()> {
    let content = read_content(&args)?;
    // POST with the title in the body so empty titles survive.
    let url = endpoint(base_url, &["pages"])?;
    let request = SavePageRequest {
        title: args.title,
        content,
    };

    let response: SavePageResponse = make_request(client.post(url).json(&request)).await?;

    output(&response, human)
}
