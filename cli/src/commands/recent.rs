//! RECENT command - Show the most recently updated page.

use anyhow::Result;
use clap::Args;

use super::get::PageResponse;
use super::{endpoint, make_request, output};

/// Arguments for the recent command.
#[derive(Args)]
pub struct RecentArgs {
    // No additional arguments needed
}

/// Execute the recent command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: RecentArgs,
) -> Result<()> {
    let url = endpoint(base_url, &["recent"])?;
    let response: PageResponse = make_request(client.get(url)).await?;

    output(&response, human)
}
