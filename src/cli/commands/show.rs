//! `pokedex show`: detail view for one record.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::commands::build_session;
use crate::cli::display::{category_badge, create_spinner, output, stat_bar, CommandOutput, DetailView};
use crate::cli::types::ShowArgs;
use crate::domain::models::{capitalize, format_height, format_stat_name, format_weight, Config, Record};

/// Full record for the detail view.
#[derive(Debug, Serialize)]
pub struct RecordDetail {
    #[serde(flatten)]
    pub record: Record,
}

impl CommandOutput for RecordDetail {
    fn to_human(&self) -> String {
        let record = &self.record;
        let badges: Vec<String> = record
            .categories
            .iter()
            .map(|c| category_badge(c).to_string())
            .collect();

        let mut view = DetailView::new(&format!("{} {}", record.dex_number(), record.display_name()))
            .field("Types", &badges.join(" "))
            .field("Height", &format_height(record.height))
            .field("Weight", &format_weight(record.weight));
        if !record.sprites.artwork.is_empty() {
            view = view.field("Artwork", &record.sprites.artwork);
        }

        view = view.section("Base stats");
        for stat in &record.stats {
            view = view.item(&format!(
                "{:<8} {:>3} {}",
                format_stat_name(&stat.name),
                stat.base_value,
                stat_bar(stat)
            ));
        }

        view = view.section("Abilities");
        for ability in &record.abilities {
            view = view.item(&capitalize(ability));
        }

        view = view.section("Moves");
        for name in record.display_moves() {
            view = view.item(&capitalize(name));
        }
        view.render()
    }
}

/// Resolve one record by id or name and print it.
pub async fn execute(args: ShowArgs, config: &Config, json: bool) -> Result<()> {
    let session = build_session(config)?;

    let spinner = create_spinner(format!("Looking up {}...", args.key), json);
    let result = session.lookup_key(&args.key).await;
    spinner.finish_and_clear();

    let record = result.with_context(|| format!("Failed to look up '{}'", args.key))?;
    output(
        &RecordDetail {
            record: Record::clone(&record),
        },
        json,
    );
    Ok(())
}
