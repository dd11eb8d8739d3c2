//! Genre allow-list filtering.

use crate::api::GenreItem;
use crate::error::{AnalyzerError, AnalyzerResult};
use shared::GenreRef;
use std::collections::HashSet;
use tracing::debug;

/// Keep the catalog genres whose trimmed, case-folded name is on the
/// allow-list, sorted case-insensitively by name.
///
/// Entries with the same case-folded name collapse to the first one seen.
/// An empty result is [`AnalyzerError::NoMatchingGenres`].
pub fn filter_desired_genres<S: AsRef<str>>(
    catalog: &[GenreItem],
    allow_list: &[S],
) -> AnalyzerResult<Vec<GenreRef>> {
    let target: HashSet<String> = allow_list
        .iter()
        .map(|name| name.as_ref().trim().to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let mut genres: Vec<GenreRef> = catalog
        .iter()
        .filter(|g| {
            let folded = g.name.trim().to_lowercase();
            target.contains(&folded) && seen.insert(folded)
        })
        .map(|g| GenreRef {
            id: g.mal_id,
            name: g.name.trim().to_string(),
        })
        .collect();

    if genres.is_empty() {
        return Err(AnalyzerError::NoMatchingGenres);
    }

    genres.sort_by_key(|g| g.name.to_lowercase());

    debug!(
        catalog = catalog.len(),
        matched = genres.len(),
        "Filtered genre catalog"
    );

    Ok(genres)
}

/// Look a genre up by name, ignoring case and surrounding whitespace
pub fn find_genre<'a>(genres: &'a [GenreRef], name: &str) -> Option<&'a GenreRef> {
    let name = name.trim();
    genres.iter().find(|g| g.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::genre;
    use shared::config::DEFAULT_DESIRED_GENRES;

    fn catalog() -> Vec<GenreItem> {
        vec![
            genre(1, "Action"),
            genre(2, "Adventure"),
            genre(4, "Comedy"),
            genre(8, "Drama"),
            genre(14, "Horror"),
            genre(62, "Isekai"),
            genre(7, "Mystery"),
            genre(22, "Romance"),
            genre(25, "Shoujo"),
            genre(27, "Shounen"),
            genre(36, "Slice of Life"),
            genre(37, "Supernatural"),
        ]
    }

    #[test]
    fn test_keeps_only_allow_listed_genres_sorted() {
        let genres = filter_desired_genres(&catalog(), &DEFAULT_DESIRED_GENRES).unwrap();

        let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Action", "Comedy", "Drama", "Horror", "Isekai", "Mystery", "Romance", "Shoujo",
                "Shounen"
            ]
        );
        assert_eq!(genres[4], GenreRef { id: 62, name: "Isekai".to_string() });
    }

    #[test]
    fn test_matching_ignores_case_and_whitespace() {
        let catalog = vec![genre(14, "  HORROR "), genre(4, "comedy"), genre(9, "Ecchi")];
        let genres = filter_desired_genres(&catalog, &["Horror", "Comedy"]).unwrap();

        assert_eq!(
            genres,
            vec![
                GenreRef { id: 4, name: "comedy".to_string() },
                GenreRef { id: 14, name: "HORROR".to_string() },
            ]
        );
    }

    #[test]
    fn test_no_partial_matches() {
        let catalog = vec![genre(100, "Action Comedy"), genre(101, "Dramatic")];
        let result = filter_desired_genres(&catalog, &DEFAULT_DESIRED_GENRES);
        assert!(matches!(result, Err(AnalyzerError::NoMatchingGenres)));
    }

    #[test]
    fn test_duplicates_collapse() {
        let catalog = vec![genre(1, "Action"), genre(2, "action"), genre(8, "Drama")];
        let genres = filter_desired_genres(&catalog, &DEFAULT_DESIRED_GENRES).unwrap();

        assert_eq!(genres.len(), 2);
        assert_eq!(genres[0].id, 1);
    }

    #[test]
    fn test_sorted_case_insensitively() {
        let catalog = vec![genre(3, "romance"), genre(2, "Drama"), genre(1, "action")];
        let genres = filter_desired_genres(&catalog, &DEFAULT_DESIRED_GENRES).unwrap();

        let lowered: Vec<String> = genres.iter().map(|g| g.name.to_lowercase()).collect();
        let mut sorted = lowered.clone();
        sorted.sort();
        assert_eq!(lowered, sorted);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let result = filter_desired_genres(&[], &DEFAULT_DESIRED_GENRES);
        assert!(matches!(result, Err(AnalyzerError::NoMatchingGenres)));
    }

    #[test]
    fn test_find_genre() {
        let genres = filter_desired_genres(&catalog(), &DEFAULT_DESIRED_GENRES).unwrap();

        assert_eq!(find_genre(&genres, "isekai").map(|g| g.id), Some(62));
        assert_eq!(find_genre(&genres, " Shounen ").map(|g| g.id), Some(27));
        assert!(find_genre(&genres, "Adventure").is_none());
    }
}
