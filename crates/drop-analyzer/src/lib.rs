//! Anime drop-rate analyzer.
//!
//! Fetches engagement statistics from the Jikan API v4, either for a single
//! title found by name or for the top titles of a genre, and derives the
//! share of engaged viewers who dropped each title.

pub mod api;
pub mod error;
pub mod genres;
pub mod ranking;
pub mod render;
pub mod resolver;
pub mod stats;

#[cfg(test)]
mod testing;

pub use api::{AnimeSource, JikanClient, StatsThrottle};
pub use error::{AnalyzerError, AnalyzerResult};
pub use genres::{filter_desired_genres, find_genre};
pub use ranking::{rank_genre, Progress, RankedTitle};
pub use resolver::resolve_anime;
pub use stats::{fetch_title_report, TitleReport};
