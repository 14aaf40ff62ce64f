//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse the first-generation PokeAPI catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file; replaces .pokedex/config.yaml and .pokedex/local.yaml
    #[arg(short, long, global = true, env = "POKEDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the catalog and list it one window at a time
    Browse(BrowseArgs),

    /// Show the detail view for one record
    Show(ShowArgs),

    /// List the categories present in the catalog
    Types,
}

/// Arguments for `browse`.
#[derive(Args, Debug, Clone, Default)]
pub struct BrowseArgs {
    /// Only records of this category ("all" disables the filter)
    #[arg(short = 't', long = "type", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Search by name or three-digit number; overrides --type
    #[arg(short, long)]
    pub query: Option<String>,

    /// Number of windows to show
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,
}

/// Arguments for `show`.
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Catalog number (e.g. 25 or #025) or name
    pub key: String,
}
