//! Jikan API v4 response types.
//!
//! Only the fields the analyzer consumes are modelled; everything else in
//! the payloads is ignored.

use serde::{Deserialize, Serialize};

/// Top-level `data` wrapper shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Genre catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreItem {
    pub mal_id: u32,
    pub name: String,
}

/// Anime entry as returned by search and genre listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeEntry {
    pub mal_id: u32,
    pub title: String,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(rename = "type", default)]
    pub anime_type: Option<String>,
    #[serde(default)]
    pub images: Option<AnimeImages>,
    #[serde(default)]
    pub synopsis: Option<String>,
}

impl AnimeEntry {
    /// Whether this entry is a broadcast TV series
    pub fn is_tv(&self) -> bool {
        self.anime_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("tv"))
    }

    /// Large JPG cover, if the payload has one
    pub fn large_image_url(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.jpg.large_image_url.as_deref())
    }
}

/// Anime detail record; only the airing status is consumed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeDetails {
    #[serde(default)]
    pub status: Option<String>,
}

/// Anime images
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeImages {
    pub jpg: ImageSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub large_image_url: Option<String>,
}

/// Error response from Jikan API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanError {
    pub message: String,
}
