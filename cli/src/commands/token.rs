//! TOKEN command - Request a fresh wiki token.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, make_request, output};

/// Arguments for the token command.
#[derive(Args)]
pub struct TokenArgs {
    // No additional arguments needed
}

/// Response from issuing a token.
#[derive(Debug, Deserialize, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

impl HumanReadable for TokenResponse {
    fn print_human(&self) {
        println!("{} {}", "Token:".cyan(), self.token.bold());
        println!(
            "{}",
            format!("export WIKI_TOKEN={}", self.token).dimmed()
        );
    }
}

/// Execute the token command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: TokenArgs,
) -> Result<()> {
    let url = endpoint(base_url, &["token"])?;
    let response: TokenResponse = make_request(client.post(url)).await?;

    output(&response, human)
}
