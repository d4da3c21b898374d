//! Upstream wire types
//!
//! Shapes of the search endpoint's JSON response. Every field the proxy
//! does not strictly need is optional so partial items still decode.

use serde::{Deserialize, Deserializer};

/// Item kind marking an actual video (as opposed to a playlist or channel).
pub const VIDEO_KIND: &str = "youtube#video";

/// One page of the search response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Absent on malformed pages
    #[serde(default)]
    pub items: Option<Vec<SearchItem>>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: ItemId,
    #[serde(default)]
    pub snippet: Option<Snippet>,
}

impl SearchItem {
    /// True for genuine video entries carrying a video id.
    pub fn is_video(&self) -> bool {
        self.id.kind == VIDEO_KIND && self.id.video_id.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemId {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnails: Thumbnails,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub high: Option<Thumbnail>,
    #[serde(default)]
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: Option<String>,
}

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A decoded page handed to the aggregator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<SearchItem>,
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_page() {
        let body = r#"{
            "kind": "youtube#searchListResponse",
            "nextPageToken": "CAUQAA",
            "items": [
                {
                    "id": { "kind": "youtube#video", "videoId": "abc" },
                    "snippet": {
                        "title": "First",
                        "description": "desc",
                        "publishedAt": "2024-05-01T10:00:00Z",
                        "thumbnails": {
                            "default": { "url": "https://i.ytimg.com/vi/abc/default.jpg" },
                            "high": { "url": "https://i.ytimg.com/vi/abc/hqdefault.jpg" }
                        }
                    }
                },
                { "id": { "kind": "youtube#playlist", "playlistId": "PL1" } }
            ]
        }"#;

        let page: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));

        let items = page.items.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_video());
        assert!(!items[1].is_video());
        assert!(items[1].snippet.is_none());
    }

    #[test]
    fn test_decode_without_items() {
        let page: SearchResponse = serde_json::from_str(r#"{"kind": "x"}"#).unwrap();
        assert!(page.items.is_none());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn test_null_snippet_fields_decode_as_empty() {
        let page: SearchResponse = serde_json::from_str(
            r#"{"items": [{
                "id": { "kind": "youtube#video", "videoId": "abc" },
                "snippet": { "title": null, "description": null, "thumbnails": null }
            }]}"#,
        )
        .unwrap();

        let items = page.items.unwrap();
        assert!(items[0].is_video());
        let snippet = items[0].snippet.as_ref().unwrap();
        assert_eq!(snippet.title, "");
        assert_eq!(snippet.description, "");
        assert_eq!(snippet.thumbnails, Thumbnails::default());
    }

    #[test]
    fn test_video_kind_without_id_is_not_a_video() {
        let item: SearchItem =
            serde_json::from_str(r#"{"id": {"kind": "youtube#video"}}"#).unwrap();
        assert!(!item.is_video());
    }
}
