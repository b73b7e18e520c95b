use serde::{Deserialize, Serialize};

/// Everything the bot reports about one track. Lives for a single
/// request/response cycle; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub url: String,
}

/// Formats a duration in whole seconds as `M:SS`, minutes unpadded.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
