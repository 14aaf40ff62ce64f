use std::time::Duration;

use serde::Serialize;

/// Outcome counters for one hydration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HydrationSummary {
    /// Entries in the catalog index.
    pub requested: usize,
    /// Records resolved, from cache or remote.
    pub hydrated: usize,
    /// Entries dropped because their record could not be resolved.
    pub dropped: usize,
    /// Entries served from the cache without a remote fetch.
    pub cache_hits: usize,
    /// Wall time of the pass; serialized as milliseconds.
    #[serde(with = "duration_millis")]
    pub elapsed: Duration,
}

impl HydrationSummary {
    /// True when no entry was dropped.
    pub const fn is_complete(&self) -> bool {
        self.dropped == 0
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::Serializer;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u128(value.as_millis())
    }
}
