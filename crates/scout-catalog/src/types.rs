//! Raw catalog response structures.
//!
//! Every optional field is `Option` or defaulted: the catalog omits or nulls
//! fields freely and a missing field must never fail a whole page.

use serde::Deserialize;

/// A paged listing (`results` array plus paging info).
#[derive(Debug, Clone, Deserialize)]
pub struct RawPage<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

/// A movie entry in a listing or search page.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMovie {
    pub id: u64,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub adult: bool,
}

/// Single-movie detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMovieDetails {
    pub id: u64,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<RawGenre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGenre {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

/// Genre list response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGenreList {
    #[serde(default)]
    pub genres: Vec<RawGenre>,
}

/// Video list response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVideoList {
    #[serde(default)]
    pub results: Vec<RawVideo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawVideo {
    pub key: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}
