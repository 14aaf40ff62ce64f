//! `pokedex browse`: filtered, windowed listing.

use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;

use crate::cli::commands::{build_session, load_catalog};
use crate::cli::display::{action_warning, category_badge, list_table, output, render_list, CommandOutput};
use crate::cli::types::BrowseArgs;
use crate::domain::models::{Category, Config, FilterCriteria, Record};
use crate::services::CatalogSession;

impl BrowseArgs {
    /// Filter described by the flags. Category names are lower-cased to
    /// match the remote naming.
    pub fn criteria(&self) -> FilterCriteria {
        let category = self
            .category
            .as_deref()
            .map(|name| name.trim().to_lowercase())
            .map_or(Category::All, |name| name.parse().unwrap_or_default());
        FilterCriteria::new(category, self.query.clone().unwrap_or_default())
    }
}

/// One table row of the browse listing.
#[derive(Debug, Serialize)]
pub struct RecordRow {
    pub id: u32,
    pub number: String,
    pub name: String,
    pub categories: Vec<String>,
}

impl From<&Record> for RecordRow {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            number: record.dex_number(),
            name: record.display_name(),
            categories: record.categories.clone(),
        }
    }
}

/// Visible records plus the state of the view.
#[derive(Debug, Serialize)]
pub struct BrowseOutput {
    pub criteria: FilterCriteria,
    pub matches: usize,
    pub pages: usize,
    pub has_more: bool,
    pub unavailable: usize,
    pub records: Vec<RecordRow>,
}

impl BrowseOutput {
    /// Snapshot of the visible prefix of `session`.
    pub fn from_session(session: &CatalogSession) -> Self {
        Self {
            criteria: session.criteria().clone(),
            matches: session.filtered().len(),
            pages: session.page_index() + 1,
            has_more: session.has_more(),
            unavailable: session.last_summary().map_or(0, |s| s.dropped),
            records: session
                .visible()
                .iter()
                .map(|record| RecordRow::from(record.as_ref()))
                .collect(),
        }
    }
}

impl CommandOutput for BrowseOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["No", "Name", "Types"]);
        for row in &self.records {
            let badges: Vec<String> = row
                .categories
                .iter()
                .map(|c| category_badge(c).to_string())
                .collect();
            table.add_row(vec![
                Cell::new(&row.number),
                Cell::new(&row.name),
                Cell::new(badges.join(" ")),
            ]);
        }

        let mut lines = vec![render_list("record", &table, self.records.len())];
        if self.has_more {
            lines.push(format!(
                "\nShowing {} of {} matches. Use --pages {} to see more.",
                self.records.len(),
                self.matches,
                self.pages + 1
            ));
        }
        if self.unavailable > 0 {
            lines.push(action_warning(&format!(
                "{} catalog entries could not be loaded",
                self.unavailable
            )));
        }
        lines.join("\n")
    }
}

/// Load the catalog, apply the filter and print `args.pages` windows.
pub async fn execute(args: BrowseArgs, config: &Config, json: bool) -> Result<()> {
    let mut session = build_session(config)?;
    load_catalog(&mut session, json).await?;

    session.set_filter(args.criteria());
    for _ in 1..args.pages {
        if session.load_more().is_empty() {
            break;
        }
    }

    output(&BrowseOutput::from_session(&session), json);
    Ok(())
}
