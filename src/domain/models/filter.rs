use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category selector. `All` disables category filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Every record matches.
    #[default]
    All,
    /// Records carrying this exact category.
    Named(String),
}

impl Category {
    /// Named category.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" | "" => Self::All,
            other => Self::Named(other.to_string()),
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// User-driven filter state. Replaced wholesale on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Ignored while `query` is non-blank.
    pub category: Category,
    /// Free text matched against names and padded ids.
    pub query: String,
}

impl FilterCriteria {
    pub fn new(category: Category, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// Category-only criteria with an empty query.
    pub fn category(name: impl Into<String>) -> Self {
        Self::new(Category::named(name), "")
    }

    /// Query-only criteria over every category.
    pub fn query(query: impl Into<String>) -> Self {
        Self::new(Category::All, query)
    }

    /// Trimmed, lower-cased query; empty when there is nothing to search.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("all".parse::<Category>().unwrap(), Category::All);
        assert_eq!("".parse::<Category>().unwrap(), Category::All);
        assert_eq!(
            "fire".parse::<Category>().unwrap(),
            Category::Named("fire".to_string())
        );
        assert_eq!(Category::named("water").to_string(), "water");
    }

    #[test]
    fn test_normalized_query() {
        assert_eq!(FilterCriteria::query("  PiKa ").normalized_query(), "pika");
        assert!(FilterCriteria::default().normalized_query().is_empty());
    }
}
