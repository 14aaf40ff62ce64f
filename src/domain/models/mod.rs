pub mod config;
pub mod filter;
pub mod hydration;
pub mod record;

pub use config::{ApiConfig, CatalogConfig, Config, HydrationConfig, LoggingConfig};
pub use filter::{Category, FilterCriteria};
pub use hydration::HydrationSummary;
pub use record::{
    capitalize, dex_number, format_height, format_stat_name, format_weight, CatalogEntry, Record,
    SpriteUris, Stat,
};
