//! `pokedex types`: categories present in the catalog.

use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;

use crate::cli::commands::{build_session, load_catalog};
use crate::cli::display::{category_badge, list_table, output, render_list, CommandOutput};
use crate::domain::models::Config;
use crate::services::CatalogSession;

/// A category and how many catalog records carry it.
#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub records: usize,
}

/// Every category present in the catalog.
#[derive(Debug, Serialize)]
pub struct TypesOutput {
    pub categories: Vec<CategoryCount>,
}

impl TypesOutput {
    /// Count records per category, sorted by name.
    pub fn from_session(session: &CatalogSession) -> Self {
        let categories = session
            .categories()
            .into_iter()
            .map(|name| {
                let records = session
                    .catalog()
                    .iter()
                    .filter(|record| record.has_category(&name))
                    .count();
                CategoryCount { name, records }
            })
            .collect();
        Self { categories }
    }
}

impl CommandOutput for TypesOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["Type", "Records"]);
        for category in &self.categories {
            table.add_row(vec![
                Cell::new(category_badge(&category.name)),
                Cell::new(category.records),
            ]);
        }
        render_list("type", &table, self.categories.len())
    }
}

/// Load the catalog and print its categories.
pub async fn execute(config: &Config, json: bool) -> Result<()> {
    let mut session = build_session(config)?;
    load_catalog(&mut session, json).await?;
    output(&TypesOutput::from_session(&session), json);
    Ok(())
}
