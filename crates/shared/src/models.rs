//! Data models for the analyzer.
//!
//! Plain values handed from the stats pipeline to the presentation layer.
//! None of them carry markup or identity beyond a single request.

use serde::{Deserialize, Serialize};

/// Suffix appended to the native title when no English title exists
pub const MISSING_ENGLISH_TITLE: &str = "(English title not available)";

/// Placeholder used when a title has no synopsis
pub const MISSING_SYNOPSIS: &str = "No synopsis available.";

/// A genre from the allow-list, as known to the upstream catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRef {
    pub id: u32,
    pub name: String,
}

/// Display fields of a resolved title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeSummary {
    pub id: u32,
    pub title: String,
    pub image_url: Option<String>,
    pub synopsis: String,
}

/// Pick the display title: the English title when present and non-empty,
/// otherwise the native title marked as untranslated.
pub fn display_title(title: &str, title_english: Option<&str>) -> String {
    match title_english {
        Some(english) if !english.is_empty() => english.to_string(),
        _ => format!("{} {}", title, MISSING_ENGLISH_TITLE),
    }
}

/// Mutually exclusive viewer states tracked upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngagementCategory {
    Watching,
    Completed,
    OnHold,
    Dropped,
    PlanToWatch,
}

impl EngagementCategory {
    /// All categories, in display order
    pub const ALL: [EngagementCategory; 5] = [
        EngagementCategory::Watching,
        EngagementCategory::Completed,
        EngagementCategory::OnHold,
        EngagementCategory::Dropped,
        EngagementCategory::PlanToWatch,
    ];

    /// Field name used by the statistics endpoint
    pub fn key(&self) -> &'static str {
        match self {
            EngagementCategory::Watching => "watching",
            EngagementCategory::Completed => "completed",
            EngagementCategory::OnHold => "on_hold",
            EngagementCategory::Dropped => "dropped",
            EngagementCategory::PlanToWatch => "plan_to_watch",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EngagementCategory::Watching => "Watching",
            EngagementCategory::Completed => "Completed",
            EngagementCategory::OnHold => "On Hold",
            EngagementCategory::Dropped => "Dropped",
            EngagementCategory::PlanToWatch => "Plan to Watch",
        }
    }
}

impl std::fmt::Display for EngagementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-title viewer counts from the statistics endpoint.
///
/// Categories missing from the payload deserialize to zero, so a zero count
/// means "absent or genuinely zero". Use [`EngagementStats::drop_rate`] to
/// tell "no engagement data" apart from a 0% drop rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementStats {
    pub watching: u64,
    pub completed: u64,
    pub on_hold: u64,
    pub dropped: u64,
    pub plan_to_watch: u64,
    pub total: u64,
}

impl EngagementStats {
    pub fn get(&self, category: EngagementCategory) -> u64 {
        match category {
            EngagementCategory::Watching => self.watching,
            EngagementCategory::Completed => self.completed,
            EngagementCategory::OnHold => self.on_hold,
            EngagementCategory::Dropped => self.dropped,
            EngagementCategory::PlanToWatch => self.plan_to_watch,
        }
    }

    /// Viewers who engaged with the title: dropped + completed + watching
    pub fn engaged(&self) -> u64 {
        self.dropped
            .saturating_add(self.completed)
            .saturating_add(self.watching)
    }

    /// Share of engaged viewers who dropped the title.
    ///
    /// `None` when nobody engaged.
    pub fn drop_rate(&self) -> Option<DropRate> {
        let engaged = self.engaged();
        if engaged == 0 {
            return None;
        }
        Some(DropRate(self.dropped as f64 / engaged as f64 * 100.0))
    }
}

/// Drop rate as a percentage in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DropRate(f64);

impl DropRate {
    pub fn percent(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for DropRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// Free-text airing status from the detail endpoint, e.g. "Currently Airing"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiringStatus(String);

impl AiringStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the status mentions airing, ignoring case
    pub fn is_airing(&self) -> bool {
        self.0.to_lowercase().contains("airing")
    }

    /// The value shown in the "Completed" card
    pub fn completed_display(&self, completed: u64) -> CompletedCount {
        if self.is_airing() {
            CompletedCount::StillAiring
        } else {
            CompletedCount::Count(completed)
        }
    }
}

impl std::fmt::Display for AiringStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Completed tally, or a sentinel for titles whose status mentions airing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletedCount {
    Count(u64),
    StillAiring,
}

impl std::fmt::Display for CompletedCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletedCount::Count(n) => write!(f, "{}", n),
            CompletedCount::StillAiring => write!(f, "Still Airing"),
        }
    }
}
