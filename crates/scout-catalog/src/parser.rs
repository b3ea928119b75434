//! Conversion from raw catalog responses to core types.

use scout_core::{Genre, MovieDetails, MovieSummary, Video};

use crate::types::{RawGenre, RawMovie, RawMovieDetails, RawPage, RawVideo};

/// Convert a listing page into summaries, keeping catalog order.
pub fn parse_movie_page(page: RawPage<RawMovie>) -> Vec<MovieSummary> {
    page.results.into_iter().map(parse_movie).collect()
}

/// Convert a single listing entry.
pub fn parse_movie(raw: RawMovie) -> MovieSummary {
    MovieSummary {
        id: raw.id,
        title: pick_title(raw.title, raw.original_title),
        overview: raw.overview.unwrap_or_default(),
        poster_path: non_empty(raw.poster_path),
        release_date: raw.release_date.unwrap_or_default(),
        vote_average: clamp_rating(raw.vote_average),
        genre_ids: raw.genre_ids,
        adult: raw.adult,
    }
}

/// Convert a detail response.
pub fn parse_movie_details(raw: RawMovieDetails) -> MovieDetails {
    MovieDetails {
        id: raw.id,
        title: pick_title(raw.title, raw.original_title),
        overview: raw.overview.unwrap_or_default(),
        tagline: non_empty(raw.tagline),
        poster_path: non_empty(raw.poster_path),
        backdrop_path: non_empty(raw.backdrop_path),
        release_date: raw.release_date.unwrap_or_default(),
        vote_average: clamp_rating(raw.vote_average),
        runtime: raw.runtime,
        genres: raw.genres.into_iter().map(parse_genre).collect(),
    }
}

pub fn parse_genre(raw: RawGenre) -> Genre {
    Genre::new(raw.id, raw.name)
}

/// Convert a video list, dropping entries without a key.
pub fn parse_videos(raw: Vec<RawVideo>) -> Vec<Video> {
    raw.into_iter()
        .filter_map(|v| {
            Some(Video {
                key: non_empty(v.key)?,
                name: v.name,
                site: v.site,
                kind: v.kind,
            })
        })
        .collect()
}

fn pick_title(title: Option<String>, original: Option<String>) -> String {
    non_empty(title).or_else(|| non_empty(original)).unwrap_or_default()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn clamp_rating(value: Option<f64>) -> f64 {
    value
        .filter(|v| v.is_finite())
        .map_or(0.0, |v| v.clamp(0.0, 10.0))
}
