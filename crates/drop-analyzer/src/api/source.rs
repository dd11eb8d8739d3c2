//! The five upstream calls the analyzer depends on.

use super::types::{AnimeEntry, GenreItem};
use crate::error::AnalyzerResult;
use async_trait::async_trait;
use shared::{AiringStatus, EngagementStats};

/// A source of anime data.
///
/// [`JikanClient`](super::JikanClient) is the production implementation.
/// Every call is a single stateless round trip; nothing is cached.
#[async_trait]
pub trait AnimeSource: Send + Sync {
    /// Full genre catalog
    async fn fetch_all_genres(&self) -> AnalyzerResult<Vec<GenreItem>>;

    /// Up to `limit` candidates matching a free-text name, in upstream order
    async fn search_anime(&self, query: &str, limit: usize) -> AnalyzerResult<Vec<AnimeEntry>>;

    /// Viewer counts for a title
    async fn get_anime_statistics(&self, mal_id: u32) -> AnalyzerResult<EngagementStats>;

    /// Airing status from the title's detail record
    async fn get_anime_status(&self, mal_id: u32) -> AnalyzerResult<AiringStatus>;

    /// Highest-scored titles of a genre, best first
    async fn get_top_anime_for_genre(
        &self,
        genre_id: u32,
        limit: usize,
    ) -> AnalyzerResult<Vec<AnimeEntry>>;
}
