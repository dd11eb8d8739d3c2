//! Resolve a free-text query to a single title.

use crate::api::{AnimeEntry, AnimeSource};
use crate::error::{AnalyzerError, AnalyzerResult};
use shared::{display_title, AnimeSummary, MISSING_SYNOPSIS};
use tracing::info;

/// Pick the first TV entry in upstream order, else the first entry
pub fn select_candidate(candidates: &[AnimeEntry]) -> Option<&AnimeEntry> {
    candidates
        .iter()
        .find(|c| c.is_tv())
        .or_else(|| candidates.first())
}

/// Display fields for an entry
pub fn summarize(entry: &AnimeEntry) -> AnimeSummary {
    AnimeSummary {
        id: entry.mal_id,
        title: display_title(&entry.title, entry.title_english.as_deref()),
        image_url: entry.large_image_url().map(str::to_string),
        synopsis: entry
            .synopsis
            .clone()
            .unwrap_or_else(|| MISSING_SYNOPSIS.to_string()),
    }
}

/// Search by name and resolve the best match.
///
/// Blank queries fail with [`AnalyzerError::EmptyQuery`] without touching
/// the network.
pub async fn resolve_anime<S: AnimeSource + ?Sized>(
    source: &S,
    query: &str,
    limit: usize,
) -> AnalyzerResult<AnimeSummary> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AnalyzerError::EmptyQuery);
    }

    let candidates = source.search_anime(query, limit).await?;
    let selected = select_candidate(&candidates).ok_or_else(|| AnalyzerError::NotFound {
        query: query.to_string(),
    })?;

    let summary = summarize(selected);
    info!(
        query = %query,
        candidates = candidates.len(),
        mal_id = summary.id,
        title = %summary.title,
        "Resolved anime"
    );

    Ok(summary)
}
