//! Category color mapping for CLI output.
//!
//! Coloring respects `NO_COLOR` and non-tty output through `console`.

use console::{style, Color, StyledObject};

use crate::domain::models::capitalize;

/// Terminal color for a category name. Unknown categories stay white.
pub fn category_color(category: &str) -> Color {
    match category {
        "fire" | "fighting" => Color::Red,
        "water" | "ice" => Color::Blue,
        "grass" | "bug" => Color::Green,
        "electric" | "ground" => Color::Yellow,
        "psychic" | "fairy" | "poison" | "ghost" => Color::Magenta,
        "flying" | "dragon" => Color::Cyan,
        "rock" | "steel" | "normal" | "dark" => Color::Color256(250),
        _ => Color::White,
    }
}

/// Capitalized category badge in its color.
pub fn category_badge(category: &str) -> StyledObject<String> {
    style(capitalize(category)).fg(category_color(category)).bold()
}

/// Styled label for detail views (bold + dimmed colon).
pub fn label(name: &str) -> String {
    format!("{}{}", style(name).bold(), style(":").dim())
}
