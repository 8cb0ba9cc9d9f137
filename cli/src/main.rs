//! Command-line interface for Token Wiki.
//!
//! This CLI tool provides commands for all wiki operations:
//! - token: Request a fresh token
//! - save: Create or overwrite a page
//! - get: Read a page by title
//! - recent: Show the most recently updated page
//! - titles: List page titles
//! - pages: List pages, optionally filtered
//! - keyword: Find pages mentioning `[keyword]`
//! - related: Pages linked to a page through its keywords
//! - export: Download all pages as a text archive
//!
//! Configuration via environment:
//! - WIKI_URL: Base URL of the wiki server (default: http://localhost:3000)
//! - WIKI_TOKEN: Token whose pages to operate on

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    export::ExportArgs, get::GetArgs, keyword::KeywordArgs, pages::PagesArgs,
    recent::RecentArgs, related::RelatedArgs, save::SaveArgs, titles::TitlesArgs,
    token::TokenArgs,
};

/// Token Wiki CLI
///
/// Work with a token's pages from the command line. Prints JSON by default;
/// pass --human for formatted output.
#[derive(Parser)]
#[command(name = "wiki")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Wiki server URL
    #[arg(
        long,
        env = "WIKI_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    /// Wiki token
    #[arg(long, env = "WIKI_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a fresh token
    Token(TokenArgs),

    /// Create or overwrite a page
    Save(SaveArgs),

    /// Read a page by title
    Get(GetArgs),

    /// Show the most recently updated page
    Recent(RecentArgs),

    /// List page titles, most recent first
    Titles(TitlesArgs),

    /// List pages, optionally filtered by a search string
    Pages(PagesArgs),

    /// Find pages that mention [keyword]
    Keyword(KeywordArgs),

    /// Pages linked to a page through its [keywords]
    Related(RelatedArgs),

    /// Download all pages as a plain-text archive
    Export(ExportArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let url = cli.url.as_str();
    let human = cli.human;
    let result = match cli.command {
        Commands::Token(args) => commands::token::execute(&client, url, human, args).await,
        Commands::Save(args) => commands::save::execute(&client, url, human, args).await,
        Commands::Get(args) => commands::get::execute(&client, url, human, args).await,
        Commands::Recent(args) => commands::recent::execute(&client, url, human, args).await,
        Commands::Titles(args) => commands::titles::execute(&client, url, human, args).await,
        Commands::Pages(args) => commands::pages::execute(&client, url, human, args).await,
        Commands::Keyword(args) => commands::keyword::execute(&client, url, human, args).await,
        Commands::Related(args) => commands::related::execute(&client, url, human, args).await,
        Commands::Export(args) => commands::export::execute(&client, url, human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
