use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which fetch tier produced the stored bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceTier {
    /// The upgraded full-resolution URL.
    Original,
    /// The raw thumbnail reference, used as fallback.
    Thumbnail,
}

/// Terminal record for one persisted portrait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPortrait {
    pub path: PathBuf,
    pub tier: SourceTier,
    pub byte_count: usize,
}

/// Per-dynasty run counters, reported once at dynasty completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynastySummary {
    pub dynasty: String,
    pub rulers_seen: usize,
    pub downloads_succeeded: usize,
}

impl DynastySummary {
    pub fn new(dynasty: impl Into<String>) -> Self {
        Self {
            dynasty: dynasty.into(),
            rulers_seen: 0,
            downloads_succeeded: 0,
        }
    }
}
