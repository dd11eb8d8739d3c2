//! Jikan API client.
//!
//! No retries and no timeout override: a failed call fails its operation.

use super::source::AnimeSource;
use super::throttle::StatsThrottle;
use super::types::*;
use crate::error::{AnalyzerError, AnalyzerResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::config::AnalyzerConfig;
use shared::{AiringStatus, EngagementStats};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Jikan API v4 client
pub struct JikanClient {
    /// HTTP client
    client: Client,
    /// Base URL for Jikan API, without trailing slash
    base_url: String,
    /// Delay paid before every statistics request
    throttle: StatsThrottle,
}

impl JikanClient {
    /// Create a new Jikan client
    pub fn new(base_url: &str, user_agent: &str, stats_delay: Duration) -> AnalyzerResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(AnalyzerError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            throttle: StatsThrottle::new(stats_delay),
        })
    }

    /// Create a client from the `[analyzer]` config section
    pub fn from_config(config: &AnalyzerConfig) -> AnalyzerResult<Self> {
        Self::new(&config.base_url, &config.user_agent, config.stats_delay())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request and decode the JSON body.
    ///
    /// The response is consumed or dropped before returning on every path.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> AnalyzerResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!(url = %url, query = ?query, "Making API request");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| {
                warn!(url = %url, error = %source, "Request error");
                AnalyzerError::Transport {
                    endpoint: endpoint.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<JikanError>(&body) {
                Ok(err) => err.message,
                Err(_) if body.trim().is_empty() => status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
                Err(_) => body,
            };

            warn!(
                url = %url,
                status = %status,
                error = %message,
                "Request failed"
            );

            return Err(AnalyzerError::Upstream {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let data = response.json::<T>().await.map_err(|source| {
            warn!(url = %url, error = %source, "Failed to parse response");
            AnalyzerError::Decode {
                endpoint: endpoint.to_string(),
                source,
            }
        })?;

        debug!(url = %url, "Request successful");
        Ok(data)
    }
}

#[async_trait]
impl AnimeSource for JikanClient {
    async fn fetch_all_genres(&self) -> AnalyzerResult<Vec<GenreItem>> {
        info!("Fetching anime genres");
        let response: DataResponse<Vec<GenreItem>> = self.get("/genres/anime", &[]).await?;
        Ok(response.data)
    }

    async fn search_anime(&self, query: &str, limit: usize) -> AnalyzerResult<Vec<AnimeEntry>> {
        info!(query = %query, limit = limit, "Searching anime");
        let response: DataResponse<Vec<AnimeEntry>> = self
            .get(
                "/anime",
                &[("q", query.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        if response.data.is_empty() {
            return Err(AnalyzerError::NotFound {
                query: query.to_string(),
            });
        }

        Ok(response.data)
    }

    async fn get_anime_statistics(&self, mal_id: u32) -> AnalyzerResult<EngagementStats> {
        self.throttle.acquire().await;

        debug!(mal_id = mal_id, "Fetching anime statistics");
        let response: DataResponse<EngagementStats> = self
            .get(&format!("/anime/{}/statistics", mal_id), &[])
            .await?;
        Ok(response.data)
    }

    async fn get_anime_status(&self, mal_id: u32) -> AnalyzerResult<AiringStatus> {
        debug!(mal_id = mal_id, "Fetching anime details");
        let response: DataResponse<AnimeDetails> =
            self.get(&format!("/anime/{}", mal_id), &[]).await?;
        Ok(AiringStatus::new(response.data.status.unwrap_or_default()))
    }

    async fn get_top_anime_for_genre(
        &self,
        genre_id: u32,
        limit: usize,
    ) -> AnalyzerResult<Vec<AnimeEntry>> {
        info!(genre_id = genre_id, limit = limit, "Fetching top anime by genre");
        let response: DataResponse<Vec<AnimeEntry>> = self
            .get(
                "/anime",
                &[
                    ("genres", genre_id.to_string()),
                    ("order_by", "score".to_string()),
                    ("sort", "desc".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        let mut entries = response.data;
        entries.truncate(limit);
        Ok(entries)
    }
}
