//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::{shared, CacheStore, SharedCache};
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::models::{HealthResponse, StatsResponse, VideoListing, VideosQuery};
use crate::upstream::HttpPageFetcher;
use crate::videos::VideoAggregator;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-fronted upstream aggregator
    pub aggregator: VideoAggregator,
    /// Channel listed when the request omits `channelId`
    pub default_channel_id: Option<String>,
    /// Allowed CORS origin, `*` for any
    pub cors_origin: String,
}

impl AppState {
    /// Creates a new AppState around an aggregator.
    pub fn new(aggregator: VideoAggregator, default_channel_id: Option<String>) -> Self {
        Self {
            aggregator,
            default_channel_id,
            cors_origin: "*".to_string(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires an HTTP page fetcher and a fresh cache store using the
    /// configured TTL, page cap and timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpPageFetcher::from_config(config)?;
        let cache = shared(CacheStore::new(config.cache_ttl()));
        let aggregator = VideoAggregator::new(Arc::new(fetcher), cache, config.max_pages);

        Ok(Self {
            cors_origin: config.cors_origin.clone(),
            ..Self::new(aggregator, config.default_channel_id.clone())
        })
    }

    /// The listing cache, shared with background tasks.
    pub fn cache(&self) -> SharedCache {
        self.aggregator.cache().clone()
    }
}

/// Handler for GET /videos
///
/// Lists the requested channel's videos, or the default channel's.
pub async fn videos_handler(
    State(state): State<AppState>,
    Query(query): Query<VideosQuery>,
) -> Result<Json<VideoListing>> {
    let channel_id = query
        .resolve_channel(state.default_channel_id.as_deref())
        .ok_or_else(|| {
            ProxyError::InvalidRequest(
                "channelId is required when no default channel is configured".to_string(),
            )
        })?;

    let listing = state.aggregator.list_videos(&channel_id).await?;
    Ok(Json(listing))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.aggregator.cache().read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
