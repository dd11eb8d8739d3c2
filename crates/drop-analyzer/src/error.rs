//! Error type for the analyzer library.

use thiserror::Error;

/// Failure of a single analyzer operation
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The upstream API answered with a non-success status
    #[error("Jikan returned {status} for {endpoint}: {message}")]
    Upstream {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The request never produced a response
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON
    #[error("Failed to parse response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("No anime found for '{query}'")]
    NotFound { query: String },

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("No matching genres found in API response")]
    NoMatchingGenres,

    /// A title in a genre ranking failed; the remaining titles were skipped
    #[error("Ranking aborted at #{rank} (mal_id {mal_id}): {source}")]
    RankingAborted {
        rank: usize,
        mal_id: u32,
        #[source]
        source: Box<AnalyzerError>,
    },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl AnalyzerError {
    /// Whether this is (or wraps) a search miss rather than an upstream fault
    pub fn is_not_found(&self) -> bool {
        match self {
            AnalyzerError::NotFound { .. } => true,
            AnalyzerError::RankingAborted { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// HTTP status of an upstream failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalyzerError::Upstream { status, .. } => Some(*status),
            AnalyzerError::RankingAborted { source, .. } => source.status(),
            _ => None,
        }
    }
}

pub type AnalyzerResult<T> = std::result::Result<T, AnalyzerError>;
