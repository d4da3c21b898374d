//! Upstream Module
//!
//! Client side of the external search endpoint: wire types and the
//! single-page fetcher.

mod fetcher;
mod types;

pub use fetcher::{HttpPageFetcher, PageFetcher, MAX_RESULTS_PER_PAGE};
pub use types::{ItemId, Page, SearchItem, SearchResponse, Snippet, Thumbnail, Thumbnails, VIDEO_KIND};
