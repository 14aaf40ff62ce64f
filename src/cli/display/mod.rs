//! Display framework for CLI output formatting.
//!
//! Shared primitives for colors, tables, detail views and progress
//! spinners used by every command.

pub mod colors;
pub mod detail;
pub mod progress;
pub mod table;

use serde::Serialize;

pub use colors::*;
pub use detail::*;
pub use progress::*;
pub use table::*;

/// Trait for types that can be rendered as human-readable or JSON output.
pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Dispatch output based on JSON mode flag.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Render a failure action result.
pub fn action_failure(message: &str) -> String {
    format!("{} {}", console::style("\u{2717}").red().bold(), message)
}

/// Render a warning line.
pub fn action_warning(message: &str) -> String {
    format!("{} {}", console::style("!").yellow().bold(), message)
}
