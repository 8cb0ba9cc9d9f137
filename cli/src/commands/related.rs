//! RELATED command - Pages linked to a page through its `[keywords]`.

use anyhow::Result;
use clap::Args;

use super::pages::PagesResponse;
use super::{endpoint, make_request, output};

/// Arguments for the related command.
#[derive(Args)]
pub struct RelatedArgs {
    /// Title of the page whose links to follow
    pub title: String,
}

/// Execute the related command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: RelatedArgs,
) -> Result<()> {
    let url = endpoint(base_url, &["pages", &args.title, "related"])?;
    let response: PagesResponse = make_request(client.get(url)).await?;

    output(&response, human)
}
