//! Wordle Companion - CLI
//!
//! Interactive Wordle client with TUI and plain CLI modes. Candidate
//! filtering is delegated to a remote service over HTTP.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::time::Duration;
use wordle_companion::{
    commands::run_simple,
    interactive::{App, run_tui},
    service::HttpFilterService,
    session::Session,
};

#[derive(Parser)]
#[command(
    name = "wordle_companion",
    about = "Interactive Wordle client backed by a remote filtering service",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the filtering service
    #[arg(short, long, global = true, default_value = "http://localhost:8000")]
    server: String,

    /// HTTP request timeout in seconds
    #[arg(short, long, global = true, default_value = "10")]
    timeout: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let service = HttpFilterService::new(&cli.server, Duration::from_secs(cli.timeout))
        .with_context(|| format!("cannot create a client for {}", cli.server))?;
    let session = Session::new(service);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => {
            let mut session = session;
            run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
