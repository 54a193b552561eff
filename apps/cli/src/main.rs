//! Strategist CLI: retrieve and rank strategic knowledge against a brief.
//!
//! Every subcommand prints JSON on stdout; logs go to stderr.

mod batch;
mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
