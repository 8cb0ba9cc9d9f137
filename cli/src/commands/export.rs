//! EXPORT command - Download every page as a plain-text archive.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use super::{endpoint, make_text_request};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Write the archive to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Execute the export command.
///
/// The archive is plain text, so it is written as-is regardless of `--human`.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ExportArgs,
) -> Result<()> {
    let url = endpoint(base_url, &["archive"])?;
    let archive = make_text_request(client.get(url)).await?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &archive)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if human {
                println!("{} {}", "Archive written to".green(), path.display());
            }
        }
        None => print!("{}", archive),
    }

    Ok(())
}
