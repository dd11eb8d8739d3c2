//! Per-title statistics pipeline.

use crate::api::AnimeSource;
use crate::error::AnalyzerResult;
use shared::{AiringStatus, CompletedCount, DropRate, EngagementStats};
use tracing::info;

/// Everything the presentation layer shows for one title
#[derive(Debug, Clone, PartialEq)]
pub struct TitleReport {
    pub mal_id: u32,
    pub stats: EngagementStats,
    pub airing: AiringStatus,
    /// `None` when nobody engaged with the title
    pub drop_rate: Option<DropRate>,
    /// Completed tally, or the "still airing" sentinel
    pub completed: CompletedCount,
}

impl TitleReport {
    pub fn new(mal_id: u32, stats: EngagementStats, airing: AiringStatus) -> Self {
        let drop_rate = stats.drop_rate();
        let completed = airing.completed_display(stats.completed);
        Self {
            mal_id,
            stats,
            airing,
            drop_rate,
            completed,
        }
    }
}

/// Fetch statistics and airing status for a title and derive its report.
///
/// The first failing request aborts the whole report.
pub async fn fetch_title_report<S: AnimeSource + ?Sized>(
    source: &S,
    mal_id: u32,
) -> AnalyzerResult<TitleReport> {
    let stats = source.get_anime_statistics(mal_id).await?;
    let airing = source.get_anime_status(mal_id).await?;

    let report = TitleReport::new(mal_id, stats, airing);
    info!(
        mal_id = mal_id,
        engaged = report.stats.engaged(),
        drop_rate = ?report.drop_rate.map(|r| r.percent()),
        airing = %report.airing,
        "Built title report"
    );

    Ok(report)
}
