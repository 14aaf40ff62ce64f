//! Command-line front-end.
//!
//! Every command builds a [`CatalogSession`](crate::services::CatalogSession)
//! from the loaded configuration, runs one pass over the remote catalog and
//! renders the result as a table, a detail view or JSON.

pub mod commands;
pub mod display;
pub mod types;

pub use types::{BrowseArgs, Cli, Commands, ShowArgs};

/// Print a command failure and exit non-zero.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{}", display::action_failure(&format!("{err:#}")));
    }
    std::process::exit(1)
}
