//! Port trait definitions (Hexagonal Architecture)
//!
//! - RecordSource: the remote record service
//! - HydrationObserver: progress and drop notifications from hydration

pub mod hydration_observer;
pub mod record_source;

pub use hydration_observer::{HydrationObserver, TracingObserver};
pub use record_source::RecordSource;
