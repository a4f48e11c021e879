/// Unsplash API access module
///
/// This module handles all traffic to the external image service:
/// - The HTTP client and request construction (client.rs)
/// - Error types for failed requests (error.rs)
/// - Wire models for the two read endpoints (models.rs)

pub mod client;
pub mod error;
pub mod models;
