//! Video Proxy - Channel video listing proxy
//!
//! Pages through an upstream search endpoint, keeps only genuine videos,
//! and caches each channel's listing for a fixed TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;
pub mod videos;

pub use api::AppState;
pub use config::Config;
pub use error::{ProxyError, Result};
pub use tasks::spawn_cleanup_task;
pub use videos::VideoAggregator;
