//! KEYWORD command - Find pages that mention `[keyword]`.

use anyhow::Result;
use clap::Args;

use super::titles::TitlesResponse;
use super::{endpoint, make_request, output};

/// Arguments for the keyword command.
#[derive(Args)]
pub struct KeywordArgs {
    /// Keyword without the surrounding brackets
    pub keyword: String,
}

/// Execute the keyword command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: KeywordArgs,
) -> Result<()> {
    let mut url = endpoint(base_url, &["keywords"])?;
    url.query_pairs_mut().append_pair("keyword", &args.keyword);

    let response: TitlesResponse = make_request(client.get(url)).await?;

    output(&response, human)
}
