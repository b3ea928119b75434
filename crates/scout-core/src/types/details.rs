//! Detail-page and home-page types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::movie::{MovieSummary, UNKNOWN_LABEL};

/// A catalog genre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

impl Genre {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Genre ID to name lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreMap(HashMap<u32, String>);

impl GenreMap {
    pub fn new(genres: impl IntoIterator<Item = Genre>) -> Self {
        Self(genres.into_iter().map(|g| (g.id, g.name)).collect())
    }

    /// Name for a genre ID, `"Unknown"` when the ID is not in the list.
    pub fn name(&self, id: u32) -> &str {
        self.0.get(&id).map_or(UNKNOWN_LABEL, String::as_str)
    }

    /// Names for a sequence of IDs, joined with `", "`.
    pub fn names(&self, ids: &[u32]) -> String {
        ids.iter()
            .map(|id| self.name(*id))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A video attached to a movie (trailers, teasers, clips).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    /// Site-specific video key.
    pub key: String,
    pub name: String,
    /// Hosting site, e.g. `"YouTube"`.
    pub site: String,
    /// Video kind, e.g. `"Trailer"` or `"Teaser"`.
    pub kind: String,
}

impl Video {
    pub fn is_trailer(&self) -> bool {
        self.kind == "Trailer"
    }

    /// Embeddable player URL.
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.key)
    }

    /// Pick the first trailer from a video list.
    pub fn first_trailer(videos: impl IntoIterator<Item = Self>) -> Option<Self> {
        videos.into_iter().find(Self::is_trailer)
    }
}

/// Full movie record for the detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub tagline: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: String,
    pub vote_average: f64,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    pub genres: Vec<Genre>,
}

impl MovieDetails {
    pub fn release_label(&self) -> &str {
        if self.release_date.is_empty() {
            UNKNOWN_LABEL
        } else {
            &self.release_date
        }
    }

    /// Genre names joined with `", "`.
    pub fn genres_display(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Format runtime as `2h 14m`, `"Unknown"` when missing.
    pub fn runtime_label(&self) -> String {
        match self.runtime {
            Some(minutes) if minutes > 0 => {
                let hours = minutes / 60;
                let rest = minutes % 60;
                if hours > 0 {
                    format!("{hours}h {rest}m")
                } else {
                    format!("{rest}m")
                }
            }
            _ => UNKNOWN_LABEL.to_string(),
        }
    }
}

/// Everything the movie detail page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub details: MovieDetails,
    pub trailer: Option<Video>,
    pub related: Vec<MovieSummary>,
}

/// The four listing sections of the home page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeSections {
    pub trending: Vec<MovieSummary>,
    pub now_playing: Vec<MovieSummary>,
    pub top_rated: Vec<MovieSummary>,
    pub upcoming: Vec<MovieSummary>,
}

impl HomeSections {
    pub fn is_empty(&self) -> bool {
        self.trending.is_empty()
            && self.now_playing.is_empty()
            && self.top_rated.is_empty()
            && self.upcoming.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(key: &str, kind: &str) -> Video {
        Video {
            key: key.to_string(),
            name: format!("{kind} {key}"),
            site: "YouTube".to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_genre_names_fallback() {
        let genres = GenreMap::new([Genre::new(28, "Action"), Genre::new(18, "Drama")]);
        assert_eq!(genres.names(&[28, 18]), "Action, Drama");
        assert_eq!(genres.names(&[28, 999]), "Action, Unknown");
        assert_eq!(genres.names(&[]), "");
    }

    #[test]
    fn test_first_trailer() {
        let videos = vec![video("a", "Teaser"), video("b", "Trailer"), video("c", "Trailer")];
        let trailer = Video::first_trailer(videos);
        assert_eq!(trailer.map(|v| v.key), Some("b".to_string()));
        assert!(Video::first_trailer(vec![video("x", "Clip")]).is_none());
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            video("dQw4", "Trailer").embed_url(),
            "https://www.youtube.com/embed/dQw4"
        );
    }

    #[test]
    fn test_runtime_label() {
        let mut details = MovieDetails {
            id: 1,
            title: "Long".into(),
            overview: String::new(),
            tagline: None,
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 0.0,
            runtime: Some(134),
            genres: vec![],
        };
        assert_eq!(details.runtime_label(), "2h 14m");
        details.runtime = Some(45);
        assert_eq!(details.runtime_label(), "45m");
        details.runtime = None;
        assert_eq!(details.runtime_label(), "Unknown");
        assert_eq!(details.release_label(), "Unknown");
    }
}
