//! Detail view builder for key-value display of a single record.

use console::{measure_text_width, style};

use super::colors::label;
use crate::domain::models::Stat;

/// Width of a full stat bar in cells.
const STAT_BAR_WIDTH: usize = 30;

/// A builder for detail views (key-value display).
pub struct DetailView {
    title: String,
    sections: Vec<DetailSection>,
}

struct DetailSection {
    header: Option<String>,
    fields: Vec<(String, String)>,
    items: Vec<String>,
}

impl DetailSection {
    const fn new(header: Option<String>) -> Self {
        Self {
            header,
            fields: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl DetailView {
    /// Empty view titled `title`.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            sections: vec![DetailSection::new(None)],
        }
    }

    /// Add a key-value field to the current section.
    #[must_use]
    pub fn field(mut self, key: &str, value: &str) -> Self {
        if let Some(section) = self.sections.last_mut() {
            section.fields.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Start a new named section with a header.
    #[must_use]
    pub fn section(mut self, header: &str) -> Self {
        self.sections.push(DetailSection::new(Some(header.to_string())));
        self
    }

    /// Add a bullet-point item to the current section.
    #[must_use]
    pub fn item(mut self, text: &str) -> Self {
        if let Some(section) = self.sections.last_mut() {
            section.items.push(text.to_string());
        }
        self
    }

    /// Render the title, fields and sections as one block.
    pub fn render(&self) -> String {
        let mut lines = vec![style(&self.title).bold().to_string()];
        let key_width = self
            .sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .map(|(k, _)| measure_text_width(k))
            .max()
            .unwrap_or(12);

        for section in &self.sections {
            if let Some(header) = &section.header {
                lines.push(String::new());
                lines.push(style(header).bold().underlined().to_string());
            }
            for (key, value) in &section.fields {
                let padding = " ".repeat(key_width.saturating_sub(measure_text_width(key)));
                lines.push(format!("  {}{padding}  {value}", label(key)));
            }
            for item in &section.items {
                lines.push(format!("  {} {item}", style("\u{2022}").dim()));
            }
        }
        lines.join("\n")
    }
}

/// Horizontal bar proportional to the stat's share of the maximum.
pub fn stat_bar(stat: &Stat) -> String {
    let filled = (stat.percent() / 100.0 * STAT_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(STAT_BAR_WIDTH);
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(STAT_BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_bar_width() {
        let full = stat_bar(&Stat::new("hp", 255));
        assert_eq!(full.chars().count(), STAT_BAR_WIDTH);
        assert!(!full.contains('\u{2591}'));

        let empty = stat_bar(&Stat::new("hp", 0));
        assert!(!empty.contains('\u{2588}'));
    }

    #[test]
    fn test_render_contains_fields_and_items() {
        let rendered = DetailView::new("#025 Pikachu")
            .field("Height", "0.4 m")
            .section("Abilities")
            .item("Static")
            .render();
        assert!(rendered.contains("#025 Pikachu"));
        assert!(rendered.contains("0.4 m"));
        assert!(rendered.contains("Static"));
    }
}
