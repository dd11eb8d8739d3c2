//! In-memory [`AnimeSource`] for unit tests.

use crate::api::{AnimeEntry, AnimeSource, GenreItem};
use crate::error::{AnalyzerError, AnalyzerResult};
use async_trait::async_trait;
use shared::{AiringStatus, EngagementStats};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeSource {
    pub genres: Vec<GenreItem>,
    pub search_results: Vec<AnimeEntry>,
    pub top: Vec<AnimeEntry>,
    pub stats: HashMap<u32, EngagementStats>,
    pub statuses: HashMap<u32, String>,
    /// Titles whose statistics request answers 500
    pub failing: HashSet<u32>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn entry(mal_id: u32, title: &str, anime_type: &str) -> AnimeEntry {
    AnimeEntry {
        mal_id,
        title: title.to_string(),
        title_english: None,
        anime_type: Some(anime_type.to_string()),
        images: None,
        synopsis: None,
    }
}

pub fn genre(mal_id: u32, name: &str) -> GenreItem {
    GenreItem {
        mal_id,
        name: name.to_string(),
    }
}

#[async_trait]
impl AnimeSource for FakeSource {
    async fn fetch_all_genres(&self) -> AnalyzerResult<Vec<GenreItem>> {
        self.record("genres".to_string());
        Ok(self.genres.clone())
    }

    async fn search_anime(&self, query: &str, limit: usize) -> AnalyzerResult<Vec<AnimeEntry>> {
        self.record(format!("search:{}", query));
        Ok(self.search_results.iter().take(limit).cloned().collect())
    }

    async fn get_anime_statistics(&self, mal_id: u32) -> AnalyzerResult<EngagementStats> {
        self.record(format!("statistics:{}", mal_id));
        if self.failing.contains(&mal_id) {
            return Err(AnalyzerError::Upstream {
                endpoint: format!("/anime/{}/statistics", mal_id),
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(self.stats.get(&mal_id).copied().unwrap_or_default())
    }

    async fn get_anime_status(&self, mal_id: u32) -> AnalyzerResult<AiringStatus> {
        self.record(format!("status:{}", mal_id));
        Ok(AiringStatus::new(
            self.statuses.get(&mal_id).cloned().unwrap_or_default(),
        ))
    }

    async fn get_top_anime_for_genre(
        &self,
        genre_id: u32,
        limit: usize,
    ) -> AnalyzerResult<Vec<AnimeEntry>> {
        self.record(format!("top:{}", genre_id));
        Ok(self.top.iter().take(limit).cloned().collect())
    }
}
