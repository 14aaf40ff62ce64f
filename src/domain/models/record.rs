//! Catalog records and the lightweight index entries that point at them.

use serde::{Deserialize, Serialize};

/// Highest base value a stat can take.
pub const MAX_BASE_STAT: u16 = 255;

/// Number of moves shown in a detail view.
pub const DISPLAY_MOVE_COUNT: usize = 4;

/// Lightweight pointer returned by the list endpoint.
///
/// `reference` carries the numeric identity of the record as its final
/// path segment, e.g. `https://pokeapi.co/api/v2/pokemon/25/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Record name as listed.
    pub name: String,
    /// Detail URL of the record.
    pub reference: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
        }
    }

    /// Numeric id parsed from the final non-empty path segment of
    /// `reference`. Anything unparseable yields 0, which never names a
    /// real record.
    pub fn id(&self) -> u32 {
        self.reference
            .split('/')
            .filter(|segment| !segment.is_empty())
            .next_back()
            .and_then(|segment| segment.parse().ok())
            .unwrap_or(0)
    }
}

/// Sprite image locations for a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteUris {
    /// Small front-facing sprite.
    pub primary: String,
    /// High resolution official artwork.
    pub artwork: String,
}

/// One base stat, e.g. `speed: 90`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Remote stat name, e.g. `special-attack`.
    pub name: String,
    /// Base value in `0..=255`.
    pub base_value: u16,
}

impl Stat {
    /// Stat with `base_value` clamped to [`MAX_BASE_STAT`].
    pub fn new(name: impl Into<String>, base_value: u16) -> Self {
        Self {
            name: name.into(),
            base_value: base_value.min(MAX_BASE_STAT),
        }
    }

    /// Base value as a percentage of [`MAX_BASE_STAT`].
    pub fn percent(&self) -> f64 {
        f64::from(self.base_value) / f64::from(MAX_BASE_STAT) * 100.0
    }
}

/// A fully hydrated catalog record.
///
/// Once a record is in the cache it is never mutated; callers share it
/// behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique, stable, at least 1.
    pub id: u32,
    /// Lower-case name as served remotely.
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Front sprite and official artwork.
    pub sprites: SpriteUris,
    /// Category names in display order.
    pub categories: Vec<String>,
    /// Base stats in display order.
    pub stats: Vec<Stat>,
    /// Ability names in slot order.
    pub abilities: Vec<String>,
    /// Every learnable move; see [`Record::display_moves`].
    pub moves: Vec<String>,
}

impl Record {
    /// Minimal record with no sprites, stats, abilities or moves.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            height: 0,
            weight: 0,
            sprites: SpriteUris::default(),
            categories: Vec::new(),
            stats: Vec::new(),
            abilities: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// Builder setting the categories in slot order.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Exact, case-sensitive category match.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Id zero-padded to three digits, the form the search box matches.
    pub fn padded_id(&self) -> String {
        format!("{:03}", self.id)
    }

    /// `#025` style label.
    pub fn dex_number(&self) -> String {
        dex_number(self.id)
    }

    /// Capitalized name.
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// The first [`DISPLAY_MOVE_COUNT`] moves.
    pub fn display_moves(&self) -> &[String] {
        &self.moves[..self.moves.len().min(DISPLAY_MOVE_COUNT)]
    }
}

/// Upper-case the first character: `"pikachu"` becomes `"Pikachu"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Decimetres to a metres label: `4` becomes `"0.4 m"`.
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1} m", f64::from(decimetres) / 10.0)
}

/// Hectograms to a kilograms label: `60` becomes `"6.0 kg"`.
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", f64::from(hectograms) / 10.0)
}

/// Short display label for a remote stat name.
pub fn format_stat_name(name: &str) -> String {
    match name {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    }
    .to_string()
}

/// `25` becomes `"#025"`.
pub fn dex_number(id: u32) -> String {
    format!("#{id:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_from_reference() {
        let entry = CatalogEntry::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/");
        assert_eq!(entry.id(), 25);

        let no_slash = CatalogEntry::new("mew", "https://pokeapi.co/api/v2/pokemon/151");
        assert_eq!(no_slash.id(), 151);
    }

    #[test]
    fn test_entry_id_malformed_is_zero() {
        assert_eq!(CatalogEntry::new("x", "").id(), 0);
        assert_eq!(CatalogEntry::new("x", "https://pokeapi.co/api/v2/pokemon/").id(), 0);
        assert_eq!(CatalogEntry::new("x", "https://pokeapi.co/pokemon/abc/").id(), 0);
        assert_eq!(CatalogEntry::new("x", "/").id(), 0);
    }

    #[test]
    fn test_formatting_helpers() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize(""), "");
        assert_eq!(format_height(4), "0.4 m");
        assert_eq!(format_weight(60), "6.0 kg");
        assert_eq!(format_stat_name("special-attack"), "Sp. Atk");
        assert_eq!(format_stat_name("accuracy"), "accuracy");
        assert_eq!(dex_number(25), "#025");
        assert_eq!(dex_number(1000), "#1000");
    }

    #[test]
    fn test_stat_clamped_and_percent() {
        let stat = Stat::new("hp", 300);
        assert_eq!(stat.base_value, 255);
        assert!((stat.percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_moves_truncated() {
        let mut record = Record::new(25, "pikachu");
        record.moves = ["a", "b", "c", "d", "e"].iter().map(ToString::to_string).collect();
        assert_eq!(record.display_moves().len(), 4);
        assert_eq!(record.padded_id(), "025");
        assert_eq!(record.display_name(), "Pikachu");
    }
}
