pub mod catalog_index;
pub mod filter;
pub mod hydrator;
pub mod pagination;
pub mod record_cache;
pub mod session;

pub use catalog_index::CatalogIndexLoader;
pub use hydrator::{HydrationReport, Hydrator};
pub use pagination::{window_at, PageCursor, DEFAULT_PAGE_SIZE};
pub use record_cache::{CacheOutcome, CacheStats, RecordCache};
pub use session::CatalogSession;
