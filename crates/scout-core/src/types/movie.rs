//! Movie summary type as returned by catalog listings and search.

use serde::{Deserialize, Serialize};

/// Base URL of the catalog's image service.
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Label shown in place of missing optional text fields.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Poster rendition sizes offered by the image service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosterSize {
    /// Thumbnail used by the search results list.
    #[default]
    W200,
    /// Card-sized poster.
    W500,
    Original,
}

impl PosterSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::W200 => "w200",
            Self::W500 => "w500",
            Self::Original => "original",
        }
    }
}

/// Build an image URL for a catalog poster/backdrop path.
pub fn poster_url(path: &str, size: PosterSize) -> String {
    format!("{IMAGE_BASE_URL}/{}{path}", size.as_str())
}

/// A single movie as listed by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    /// Catalog movie ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Plot overview (may be empty).
    pub overview: String,
    /// Poster image path, relative to the image service.
    pub poster_path: Option<String>,
    /// Release date as `YYYY-MM-DD`, or empty when unknown.
    pub release_date: String,
    /// Average user rating in `[0, 10]`.
    pub vote_average: f64,
    /// Genre IDs in catalog order.
    pub genre_ids: Vec<u32>,
    /// Whether the catalog flags this title as adult.
    pub adult: bool,
}

impl MovieSummary {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            poster_path: None,
            release_date: String::new(),
            vote_average: 0.0,
            genre_ids: Vec::new(),
            adult: false,
        }
    }

    #[must_use]
    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    #[must_use]
    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = date.into();
        self
    }

    #[must_use]
    pub const fn with_vote_average(mut self, vote_average: f64) -> Self {
        self.vote_average = vote_average;
        self
    }

    #[must_use]
    pub const fn with_adult(mut self, adult: bool) -> Self {
        self.adult = adult;
        self
    }

    #[must_use]
    pub fn with_poster_path(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    /// Get the poster URL at the given size, if the movie has a poster.
    pub fn poster_url(&self, size: PosterSize) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| poster_url(p, size))
    }

    /// Release date for display, `"Unknown"` when missing.
    pub fn release_label(&self) -> &str {
        if self.release_date.is_empty() {
            UNKNOWN_LABEL
        } else {
            &self.release_date
        }
    }

    /// Release year (first four characters of the date), if known.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.get(..4)
    }

    /// Rating rounded to one decimal place for display.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_creation() {
        let movie = MovieSummary::new(42, "Arrival");
        assert_eq!(movie.id, 42);
        assert_eq!(movie.title, "Arrival");
        assert!(!movie.adult);
        assert!(movie.genre_ids.is_empty());
    }

    #[test]
    fn test_release_label_fallback() {
        let movie = MovieSummary::new(1, "Untitled");
        assert_eq!(movie.release_label(), "Unknown");
        assert_eq!(movie.release_year(), None);

        let movie = movie.with_release_date("2016-11-11");
        assert_eq!(movie.release_label(), "2016-11-11");
        assert_eq!(movie.release_year(), Some("2016"));
    }

    #[test]
    fn test_poster_url() {
        let movie = MovieSummary::new(1, "Dune").with_poster_path("/abc.jpg");
        assert_eq!(
            movie.poster_url(PosterSize::W200).as_deref(),
            Some("https://image.tmdb.org/t/p/w200/abc.jpg")
        );
        assert!(MovieSummary::new(2, "No Poster")
            .poster_url(PosterSize::W500)
            .is_none());
    }

    #[test]
    fn test_rating_label() {
        let movie = MovieSummary::new(1, "Heat").with_vote_average(7.94);
        assert_eq!(movie.rating_label(), "7.9");
    }
}
