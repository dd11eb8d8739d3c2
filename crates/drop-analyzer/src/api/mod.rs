//! Jikan API v4 client implementation.
//!
//! This module provides the HTTP client for the Jikan API (MyAnimeList
//! unofficial API), the fixed statistics throttle, and the [`AnimeSource`]
//! seam the pipelines are written against.

pub mod client;
pub mod source;
pub mod throttle;
pub mod types;

pub use client::JikanClient;
pub use source::AnimeSource;
pub use throttle::StatsThrottle;
pub use types::*;
