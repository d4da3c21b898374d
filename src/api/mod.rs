//! API Module
//!
//! HTTP handlers and routing for the video proxy.
//!
//! # Endpoints
//! - `GET /videos` - Channel video listing (also mounted at `/api/youtube/videos`)
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
