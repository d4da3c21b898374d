//! Cache Module
//!
//! Provides the per-channel listing cache with TTL expiration.

mod entry;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

/// Cache store shared between request handlers and background tasks.
pub type SharedCache = Arc<RwLock<CacheStore>>;

/// Wraps a store for sharing across tasks.
pub fn shared(store: CacheStore) -> SharedCache {
    Arc::new(RwLock::new(store))
}

// == Cache Key ==
/// Cache key holding the listing of one channel.
pub fn channel_key(channel_id: &str) -> String {
    format!("videos:{}", channel_id)
}
