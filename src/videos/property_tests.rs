//! Property-Based Tests for Video Aggregation
//!
//! Uses proptest to check ordering, filtering and caching over arbitrary
//! page layouts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use proptest::prelude::*;
use serde_json::json;

use crate::cache::{shared, CacheStore};
use crate::error::Result;
use crate::upstream::{Page, PageFetcher, SearchItem};
use crate::videos::{format_videos, VideoAggregator};

// == Strategies ==
/// An item of any kind; `(is_video, id)`.
fn item_strategy() -> impl Strategy<Value = (bool, String)> {
    (any::<bool>(), "[a-zA-Z0-9_-]{1,11}")
}

fn to_item((is_video, id): &(bool, String)) -> SearchItem {
    let value = if *is_video {
        json!({ "id": { "kind": "youtube#video", "videoId": id } })
    } else {
        json!({ "id": { "kind": "youtube#playlist", "playlistId": id } })
    };
    serde_json::from_value(value).unwrap()
}

fn expected_ids(pages: &[Vec<(bool, String)>]) -> Vec<String> {
    pages
        .iter()
        .flatten()
        .filter(|(is_video, _)| *is_video)
        .map(|(_, id)| id.clone())
        .collect()
}

/// Serves `pages` in order, chaining them with `P<n>` tokens.
struct PagedFetcher {
    pages: Vec<Vec<SearchItem>>,
    calls: AtomicUsize,
}

#[async_trait]
impl PageFetcher for PagedFetcher {
    async fn fetch_page(&self, _channel_id: &str, page_token: Option<&str>) -> Result<Page> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let index = page_token
            .and_then(|t| t.trim_start_matches('P').parse::<usize>().ok())
            .unwrap_or(0);
        let next = index + 1;

        Ok(Page {
            items: self.pages[index].clone(),
            next_page_token: (next < self.pages.len()).then(|| format!("P{}", next)),
        })
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Filtering keeps exactly the video items, in their original order.
    #[test]
    fn prop_format_keeps_videos_in_order(items in prop::collection::vec(item_strategy(), 0..60)) {
        let videos = format_videos(items.iter().map(to_item).collect());
        let ids: Vec<String> = videos.into_iter().map(|v| v.id).collect();

        prop_assert_eq!(ids, expected_ids(&[items]));
    }

    // A miss returns the concatenation of every page's videos, fetching each
    // page once; a follow-up call is served from cache with no fetch.
    #[test]
    fn prop_listing_concatenates_pages(
        pages in prop::collection::vec(prop::collection::vec(item_strategy(), 0..10), 1..8)
    ) {
        let fetcher = Arc::new(PagedFetcher {
            pages: pages.iter().map(|p| p.iter().map(to_item).collect()).collect(),
            calls: AtomicUsize::new(0),
        });
        let aggregator = VideoAggregator::new(
            fetcher.clone(),
            shared(CacheStore::new(Duration::from_secs(600))),
            None,
        );

        let (first, second) = tokio_test::block_on(async {
            let first = aggregator.list_videos("UC1").await.unwrap();
            let second = aggregator.list_videos("UC1").await.unwrap();
            (first, second)
        });

        let ids: Vec<String> = first.videos.iter().map(|v| v.id.clone()).collect();
        prop_assert_eq!(&ids, &expected_ids(&pages));
        prop_assert_eq!(first.count, ids.len());
        prop_assert!(!first.served_from_cache);
        prop_assert!(second.served_from_cache);
        prop_assert_eq!(second.videos, first.videos);
        prop_assert_eq!(fetcher.calls.load(Ordering::SeqCst), pages.len());
    }

    // The page cap bounds the number of upstream calls.
    #[test]
    fn prop_page_cap_bounds_fetches(page_count in 1usize..12, cap in 1usize..6) {
        let fetcher = Arc::new(PagedFetcher {
            pages: vec![Vec::new(); page_count],
            calls: AtomicUsize::new(0),
        });
        let aggregator = VideoAggregator::new(
            fetcher.clone(),
            shared(CacheStore::new(Duration::from_secs(600))),
            Some(cap),
        );

        tokio_test::block_on(aggregator.list_videos("UC1")).unwrap();
        prop_assert_eq!(fetcher.calls.load(Ordering::SeqCst), page_count.min(cap));
    }
}
