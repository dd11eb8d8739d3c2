//! Plain-text rendering of analyzer results.

use crate::ranking::{Progress, RankedTitle};
use crate::stats::TitleReport;
use shared::{AnimeSummary, DropRate, EngagementCategory, EngagementStats, GenreRef};
use std::fmt::Write;

/// Categories shown in the engagement chart, in order
pub const CHART_CATEGORIES: [EngagementCategory; 3] = [
    EngagementCategory::Dropped,
    EngagementCategory::PlanToWatch,
    EngagementCategory::Watching,
];

const LABEL_WIDTH: usize = 14;

pub fn render_summary(summary: &AnimeSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Loaded: {}", summary.title);
    if let Some(url) = &summary.image_url {
        let _ = writeln!(out, "Image: {}", url);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Synopsis");
    let _ = writeln!(out, "{}", summary.synopsis);
    out
}

/// One line per category; "Completed" shows the still-airing sentinel
/// when the title is in progress.
pub fn render_stat_cards(report: &TitleReport) -> String {
    let mut out = String::new();
    for category in EngagementCategory::ALL {
        let value = match category {
            EngagementCategory::Completed => report.completed.to_string(),
            other => report.stats.get(other).to_string(),
        };
        let _ = writeln!(
            out,
            "{:<label_width$}{:>14}",
            category.label(),
            value,
            label_width = LABEL_WIDTH
        );
    }
    out
}

/// Horizontal bar chart of dropped / plan-to-watch / watching counts,
/// scaled so the largest bar is `width` characters.
pub fn render_engagement_chart(stats: &EngagementStats, width: usize) -> String {
    let max = CHART_CATEGORIES
        .iter()
        .map(|c| stats.get(*c))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for category in CHART_CATEGORIES {
        let value = stats.get(category);
        let bar_len = bar_length(value, max, width);
        let _ = writeln!(
            out,
            "{:<label_width$}|{:<width$} {}",
            category.label(),
            "#".repeat(bar_len),
            value,
            label_width = LABEL_WIDTH,
            width = width
        );
    }
    out
}

fn bar_length(value: u64, max: u64, width: usize) -> usize {
    if value == 0 || max == 0 {
        return 0;
    }
    let scaled = (value as f64 / max as f64 * width as f64).round() as usize;
    scaled.max(1)
}

pub fn render_drop_rate(drop_rate: Option<DropRate>) -> String {
    match drop_rate {
        Some(rate) => format!("Drop Rate: {}", rate),
        None => "No engagement data available.".to_string(),
    }
}

pub fn render_genres(genres: &[GenreRef]) -> String {
    let mut out = String::new();
    for genre in genres {
        let _ = writeln!(
            out,
            "{:<label_width$}{:>6}",
            genre.name,
            genre.id,
            label_width = LABEL_WIDTH
        );
    }
    out
}

/// Heading, chart and drop rate for one ranked title
pub fn render_ranked_title(ranked: &RankedTitle, chart_width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", ranked.rank, ranked.title);
    out.push_str(&render_engagement_chart(&ranked.report.stats, chart_width));
    let _ = writeln!(out, "{}", render_drop_rate(ranked.report.drop_rate));
    out
}

pub fn render_progress(progress: Progress) -> String {
    format!(
        "[{}/{}] {:.0}%",
        progress.completed,
        progress.total,
        progress.fraction() * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AiringStatus;

    fn report(status: &str) -> TitleReport {
        TitleReport::new(
            5114,
            EngagementStats {
                watching: 200,
                completed: 50,
                on_hold: 7,
                dropped: 50,
                plan_to_watch: 100,
                total: 407,
            },
            AiringStatus::new(status),
        )
    }

    #[test]
    fn test_stat_cards_show_still_airing() {
        let cards = render_stat_cards(&report("Currently Airing"));
        let lines: Vec<&str> = cards.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("Completed"));
        assert!(lines[1].ends_with("Still Airing"));
        assert!(lines[2].starts_with("On Hold") && lines[2].ends_with("7"));
    }

    #[test]
    fn test_stat_cards_show_completed_count() {
        let cards = render_stat_cards(&report("Not yet aired"));
        let completed = cards.lines().nth(1).unwrap();
        assert!(completed.ends_with("50"));
    }

    #[test]
    fn test_chart_scales_to_largest_bar() {
        let chart = render_engagement_chart(&report("").stats, 20);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Dropped"));
        assert_eq!(lines[0].matches('#').count(), 5);
        assert_eq!(lines[1].matches('#').count(), 10);
        assert_eq!(lines[2].matches('#').count(), 20);
        assert!(lines[2].ends_with(" 200"));
    }

    #[test]
    fn test_chart_without_data() {
        let chart = render_engagement_chart(&EngagementStats::default(), 20);
        assert_eq!(chart.matches('#').count(), 0);
        assert_eq!(chart.lines().count(), 3);
    }

    #[test]
    fn test_small_values_stay_visible() {
        assert_eq!(bar_length(1, 1_000_000, 40), 1);
        assert_eq!(bar_length(0, 10, 40), 0);
    }

    #[test]
    fn test_drop_rate_line() {
        assert_eq!(render_drop_rate(report("").drop_rate), "Drop Rate: 16.7%");
        assert_eq!(render_drop_rate(None), "No engagement data available.");
    }

    #[test]
    fn test_summary_includes_image_when_present() {
        let summary = AnimeSummary {
            id: 1,
            title: "Cowboy Bebop".to_string(),
            image_url: Some("https://cdn.myanimelist.net/images/anime/4/19644l.jpg".to_string()),
            synopsis: "Bounty hunters in space.".to_string(),
        };
        let text = render_summary(&summary);
        assert!(text.starts_with("Loaded: Cowboy Bebop\n"));
        assert!(text.contains("Image: https://cdn.myanimelist.net/images/anime/4/19644l.jpg"));

        let text = render_summary(&AnimeSummary {
            image_url: None,
            ..summary
        });
        assert!(!text.contains("Image:"));
    }

    #[test]
    fn test_progress_line() {
        assert_eq!(
            render_progress(Progress {
                completed: 3,
                total: 10
            }),
            "[3/10] 30%"
        );
    }
}
