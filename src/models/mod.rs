//! Request and Response models for the video proxy API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod video;

// Re-export commonly used types
pub use requests::VideosQuery;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
pub use video::{VideoListing, VideoSummary};
