//! Pokedex CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use pokedex::cli::{commands, Cli, Commands};
use pokedex::domain::models::Config;
use pokedex::infrastructure::config::ConfigLoader;
use pokedex::infrastructure::logging::{LogConfig, LoggerImpl};

fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let log_config = LogConfig::try_from(&config.logging)
        .context("Invalid logging configuration")?
        .verbose(cli.verbose);
    let _logger = LoggerImpl::init(&log_config)?;

    match cli.command {
        Commands::Browse(args) => commands::browse::execute(args, &config, cli.json).await,
        Commands::Show(args) => commands::show::execute(args, &config, cli.json).await,
        Commands::Types => commands::types::execute(&config, cli.json).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        pokedex::cli::handle_error(&err, json);
    }
}
