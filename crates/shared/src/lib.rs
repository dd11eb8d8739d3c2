//! Shared library for the anime drop-rate analyzer.
//!
//! This crate provides the pieces every front end needs:
//! - Configuration management
//! - Logging infrastructure
//! - Plain data models passed to the presentation layer

pub mod config;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use logging::LogConfig;
pub use models::*;
