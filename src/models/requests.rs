//! Request DTOs for the video proxy API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query string for GET /videos
///
/// # Fields
/// - `channelId`: Channel to list (falls back to the configured default)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideosQuery {
    /// Channel identifier
    #[serde(rename = "channelId", default)]
    pub channel_id: Option<String>,
}

impl VideosQuery {
    /// Resolves the channel to list, preferring the query over the fallback.
    ///
    /// Blank values are treated as absent.
    pub fn resolve_channel(&self, fallback: Option<&str>) -> Option<String> {
        self.channel_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or(fallback)
            .map(str::to_string)
    }
}
