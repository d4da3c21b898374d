//! Formatting of raw search items into served videos.

use crate::models::VideoSummary;
use crate::upstream::{SearchItem, Snippet};

/// Keeps genuine video entries and formats them, preserving order.
pub fn format_videos(items: Vec<SearchItem>) -> Vec<VideoSummary> {
    items.into_iter().filter_map(to_summary).collect()
}

/// Formats one item, None for anything that is not a video.
pub fn to_summary(item: SearchItem) -> Option<VideoSummary> {
    if !item.is_video() {
        return None;
    }
    let id = item.id.video_id?;
    let snippet = item.snippet.unwrap_or_default();

    Some(VideoSummary {
        id,
        thumbnail_url: thumbnail_url(&snippet),
        title: snippet.title,
        description: snippet.description,
        published_at: snippet.published_at,
    })
}

/// High resolution thumbnail, then default, then empty.
pub fn thumbnail_url(snippet: &Snippet) -> String {
    let thumbnails = &snippet.thumbnails;
    [&thumbnails.high, &thumbnails.default]
        .into_iter()
        .find_map(|thumb| thumb.as_ref().and_then(|t| t.url.clone()))
        .unwrap_or_default()
}
