//! Movie detail page: details, trailer and related titles.

use dioxus::prelude::*;
use scout_core::{poster_url, GenreMap, MoviePage, PosterSize};
use tracing::warn;

use crate::components::movie_card::{MovieRow, FALLBACK_POSTER};
use crate::services::Services;
use crate::state::AppState;

#[component]
pub fn MovieView(movie_id: u64) -> Element {
    let services = use_context::<Services>();
    let mut app_state = use_context::<AppState>();

    let page = use_resource(move || {
        let catalog = services.catalog.clone();
        async move {
            let (page, genres) = tokio::join!(catalog.movie_page(movie_id), catalog.genre_map());
            let page = page
                .map_err(|e| warn!("Failed to load movie {movie_id}: {e}"))
                .ok();
            (page, genres)
        }
    });

    rsx! {
        div { class: "movie",
            button {
                class: "movie__back",
                onclick: move |_| app_state.go_back(),
                "← Back"
            }

            match &*page.read_unchecked() {
                Some((Some(page), genres)) => rsx! {
                    MovieDetailsSection { page: page.clone(), genres: genres.clone() }
                },
                Some((None, _)) => rsx! {
                    div { class: "movie__error", "Could not load this movie." }
                },
                None => rsx! {
                    div { class: "loading", "Loading..." }
                },
            }
        }
    }
}

#[component]
fn MovieDetailsSection(page: MoviePage, genres: GenreMap) -> Element {
    let details = &page.details;
    let poster = details
        .poster_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .map_or_else(|| FALLBACK_POSTER.to_string(), |p| poster_url(p, PosterSize::W500));
    let rating = format!("{:.1}", details.vote_average);

    rsx! {
        div { class: "movie__hero",
            img { class: "movie__poster", src: "{poster}", alt: "{details.title}" }
            div { class: "movie__info",
                h1 { class: "movie__title", "{details.title}" }
                if let Some(tagline) = &details.tagline {
                    p { class: "movie__tagline", "{tagline}" }
                }
                div { class: "movie__facts",
                    span { "Released: {details.release_label()}" }
                    span { "Runtime: {details.runtime_label()}" }
                    span { "★ {rating}" }
                }
                div { class: "movie__genres", "{details.genres_display()}" }
                p { class: "movie__overview", "{details.overview}" }
            }
        }

        if let Some(trailer) = &page.trailer {
            div { class: "movie__trailer",
                h2 { "{trailer.name}" }
                iframe {
                    src: "{trailer.embed_url()}",
                    width: "100%",
                    height: "420",
                    allowfullscreen: true,
                }
            }
        }

        MovieRow { title: "You might also like", movies: page.related.clone(), genres }
    }
}
