//! Video Aggregator
//!
//! Serves a channel's listing from cache, or pages through the upstream
//! search endpoint and caches the formatted result.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::cache::{channel_key, SharedCache};
use crate::error::Result;
use crate::models::VideoListing;
use crate::upstream::{PageFetcher, SearchItem};
use crate::videos::format_videos;

// == Video Aggregator ==
/// Cache-fronted pagination over a [`PageFetcher`].
///
/// Concurrent misses on the same channel are not coalesced: each runs the
/// full page loop and the last write wins.
#[derive(Clone)]
pub struct VideoAggregator {
    fetcher: Arc<dyn PageFetcher>,
    cache: SharedCache,
    /// Upper bound on pages fetched per aggregation, None = unbounded
    max_pages: Option<usize>,
}

impl VideoAggregator {
    pub fn new(fetcher: Arc<dyn PageFetcher>, cache: SharedCache, max_pages: Option<usize>) -> Self {
        Self {
            fetcher,
            cache,
            max_pages,
        }
    }

    /// The cache this aggregator reads and populates.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == List Videos ==
    /// Returns the channel's videos, newest first.
    ///
    /// On a miss every page is fetched before anything is cached; an error on
    /// any page aborts the run and leaves the cache untouched.
    pub async fn list_videos(&self, channel_id: &str) -> Result<VideoListing> {
        let key = channel_key(channel_id);

        // Write lock: a lookup may drop an expired entry and updates stats
        let cached = self.cache.write().await.get(&key);
        if let Some(videos) = cached {
            debug!(channel_id, count = videos.len(), "Serving videos from cache");
            return Ok(VideoListing::new(videos, true));
        }

        debug!(channel_id, "Cache miss, fetching from upstream");
        let items = self.fetch_all(channel_id).await.map_err(|err| {
            error!(channel_id, error = %err, "Video aggregation failed");
            err
        })?;

        let videos = format_videos(items);
        self.cache.write().await.set(key, videos.clone());

        info!(channel_id, count = videos.len(), "Cached channel videos");
        Ok(VideoListing::new(videos, false))
    }

    /// Follows continuation tokens until the upstream stops returning one
    /// or the page cap is reached.
    async fn fetch_all(&self, channel_id: &str) -> Result<Vec<SearchItem>> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .fetcher
                .fetch_page(channel_id, page_token.as_deref())
                .await?;
            pages += 1;
            items.extend(page.items);

            page_token = match page.next_page_token {
                Some(token) => Some(token),
                None => break,
            };

            if self.max_pages.is_some_and(|max| pages >= max) {
                warn!(channel_id, pages, "Page limit reached, listing truncated");
                break;
            }
        }

        debug!(channel_id, pages, items = items.len(), "Pagination complete");
        Ok(items)
    }
}
