//! Genre ranking: the stats pipeline over a genre's top-N list.
//!
//! Titles are processed one at a time in rank order. The first failure
//! aborts the batch; titles after it are never fetched.

use crate::api::AnimeSource;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::stats::{fetch_title_report, TitleReport};
use shared::display_title;
use tracing::{info, warn};

/// Progress of a ranking after a title finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completed share in `(0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed as f64 / self.total as f64
    }
}

/// One ranked title with its report
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTitle {
    /// 1-based position in the score ranking
    pub rank: usize,
    pub mal_id: u32,
    pub title: String,
    pub report: TitleReport,
}

/// Rank a genre's top titles by score and build a report for each.
///
/// `on_progress` is called after every finished title.
pub async fn rank_genre<S, F>(
    source: &S,
    genre_id: u32,
    limit: usize,
    mut on_progress: F,
) -> AnalyzerResult<Vec<RankedTitle>>
where
    S: AnimeSource + ?Sized,
    F: FnMut(Progress),
{
    let top = source.get_top_anime_for_genre(genre_id, limit).await?;
    let total = top.len();
    info!(genre_id = genre_id, titles = total, "Ranking genre");

    let mut ranked = Vec::with_capacity(total);
    for (idx, entry) in top.iter().enumerate() {
        let rank = idx + 1;
        let title = display_title(&entry.title, entry.title_english.as_deref());

        let report = fetch_title_report(source, entry.mal_id)
            .await
            .map_err(|e| {
                warn!(
                    rank = rank,
                    mal_id = entry.mal_id,
                    error = %e,
                    "Ranking aborted"
                );
                AnalyzerError::RankingAborted {
                    rank,
                    mal_id: entry.mal_id,
                    source: Box::new(e),
                }
            })?;

        ranked.push(RankedTitle {
            rank,
            mal_id: entry.mal_id,
            title,
            report,
        });
        on_progress(Progress {
            completed: rank,
            total,
        });
    }

    info!(genre_id = genre_id, titles = ranked.len(), "Genre ranking complete");
    Ok(ranked)
}
