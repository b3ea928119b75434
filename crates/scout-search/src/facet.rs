//! Facet filter and sort over an already-fetched result set.

use std::cmp::Ordering;

use scout_core::{FilterCriteria, MovieSummary, SortOrder};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Apply `criteria` to `movies`.
///
/// Steps run in a fixed order and each is skipped when its criterion is
/// unset: rating bucket, release-year prefix, title sort.
pub fn apply(mut movies: Vec<MovieSummary>, criteria: &FilterCriteria) -> Vec<MovieSummary> {
    if let Some(floor) = criteria.rating_floor() {
        movies.retain(|m| in_rating_bucket(m.vote_average, floor));
    }

    if let Some(prefix) = criteria.release_year.as_deref() {
        movies.retain(|m| matches_release_year(&m.release_date, prefix));
    }

    match criteria.sort_order {
        SortOrder::None => {}
        SortOrder::Ascending => movies.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOrder::Descending => movies.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }

    movies
}

/// `floor <= rating < floor + 1`: the entered rating picks a one-point bucket.
pub fn in_rating_bucket(rating: f64, floor: f64) -> bool {
    rating >= floor && rating < floor + 1.0
}

/// Empty release dates never match.
pub fn matches_release_year(release_date: &str, prefix: &str) -> bool {
    !release_date.is_empty() && release_date.starts_with(prefix)
}

/// Locale-style title order: accents and case are ignored first, then
/// case-folded text with accents decides, then the original text.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Base letters only: NFD-decomposed, combining marks dropped, lowercased.
fn collation_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
