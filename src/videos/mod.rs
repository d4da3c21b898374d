//! Videos Module
//!
//! Aggregates a channel's paginated search results into a cached listing.

mod aggregator;
mod format;

#[cfg(test)]
mod property_tests;

pub use aggregator::VideoAggregator;
pub use format::{format_videos, thumbnail_url, to_summary};
