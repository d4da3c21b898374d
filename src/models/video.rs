//! Video DTOs
//!
//! The formatted video entries served to clients and cached per channel.

use serde::{Deserialize, Serialize};

/// A single video as served by the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    /// High resolution thumbnail, falling back to default, then empty
    pub thumbnail_url: String,
    pub published_at: Option<String>,
}

/// Response body for GET /videos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListing {
    pub videos: Vec<VideoSummary>,
    pub count: usize,
    pub served_from_cache: bool,
}

impl VideoListing {
    /// Creates a listing, deriving `count` from the videos.
    pub fn new(videos: Vec<VideoSummary>, served_from_cache: bool) -> Self {
        Self {
            count: videos.len(),
            videos,
            served_from_cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_serializes_camel_case() {
        let listing = VideoListing::new(
            vec![VideoSummary {
                id: "abc".to_string(),
                title: "Title".to_string(),
                description: String::new(),
                thumbnail_url: "https://i.ytimg.com/vi/abc/hqdefault.jpg".to_string(),
                published_at: None,
            }],
            true,
        );

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["servedFromCache"], true);
        assert_eq!(
            json["videos"][0]["thumbnailUrl"],
            "https://i.ytimg.com/vi/abc/hqdefault.jpg"
        );
        assert!(json["videos"][0]["publishedAt"].is_null());
    }
}
