//! Poster card used by the home sections and related movies.

use dioxus::prelude::*;
use scout_core::{GenreMap, MovieSummary, PosterSize};

use crate::state::{AppState, Route};

/// Shown when the catalog has no poster for a movie.
pub const FALLBACK_POSTER: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='200' height='300'><rect width='100%25' height='100%25' fill='%23333'/><text x='50%25' y='50%25' fill='%23999' font-family='sans-serif' font-size='18' text-anchor='middle'>No poster</text></svg>";

/// Poster URL at `size`, or the fallback image.
pub fn poster_src(movie: &MovieSummary, size: PosterSize) -> String {
    movie
        .poster_url(size)
        .unwrap_or_else(|| FALLBACK_POSTER.to_string())
}

/// Genre names for a card; blank until a genre map has loaded.
pub fn genre_label(movie: &MovieSummary, genres: &GenreMap) -> String {
    if genres.is_empty() {
        String::new()
    } else {
        genres.names(&movie.genre_ids)
    }
}

/// Clickable poster with title, year and rating.
#[component]
pub fn MovieCard(movie: MovieSummary, #[props(default)] genres: GenreMap) -> Element {
    let mut app_state = use_context::<AppState>();
    let genre_names = genre_label(&movie, &genres);
    let poster = poster_src(&movie, PosterSize::W500);
    let year = movie.release_year().unwrap_or(movie.release_label()).to_string();
    let rating = movie.rating_label();
    let id = movie.id;

    rsx! {
        div {
            class: "movie-card",
            onclick: move |_| app_state.navigate(Route::Movie(id)),
            img { class: "movie-card__poster", src: "{poster}", alt: "{movie.title}" }
            div { class: "movie-card__title", "{movie.title}" }
            div { class: "movie-card__meta",
                span { "{year}" }
                span { class: "movie-card__rating", "★ {rating}" }
            }
            if !genre_names.is_empty() {
                div { class: "movie-card__genres", "{genre_names}" }
            }
        }
    }
}

/// Titled horizontal row of cards.
#[component]
pub fn MovieRow(title: String, movies: Vec<MovieSummary>, #[props(default)] genres: GenreMap) -> Element {
    rsx! {
        section { class: "movie-row",
            h2 { class: "movie-row__title", "{title}" }
            if movies.is_empty() {
                div { class: "movie-row__empty", "Nothing to show right now." }
            } else {
                div { class: "movie-row__cards",
                    for movie in movies.iter() {
                        MovieCard {
                            key: "{movie.id}",
                            movie: movie.clone(),
                            genres: genres.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scout_core::Genre;

    use super::*;

    #[test]
    fn test_genre_label() {
        let mut related = MovieSummary::new(2, "Aliens");
        related.genre_ids = vec![28, 878, 1];
        let genres = GenreMap::new([Genre::new(28, "Action"), Genre::new(878, "Science Fiction")]);

        assert_eq!(genre_label(&related, &genres), "Action, Science Fiction, Unknown");
        assert_eq!(genre_label(&related, &GenreMap::default()), "");
    }

    #[test]
    fn test_poster_fallback() {
        let movie = MovieSummary::new(1, "Alien");
        assert_eq!(poster_src(&movie, PosterSize::W200), FALLBACK_POSTER);

        let movie = movie.with_poster_path("/alien.jpg");
        assert_eq!(
            poster_src(&movie, PosterSize::W500),
            "https://image.tmdb.org/t/p/w500/alien.jpg"
        );
    }
}
