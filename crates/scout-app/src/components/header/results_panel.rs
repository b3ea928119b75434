//! Dropdown list of search or filter results.

use dioxus::prelude::*;
use scout_core::{MovieSummary, PosterSize};
use scout_search::HeaderElement;
use tracing::info;

use crate::components::movie_card::poster_src;
use crate::state::{AppState, HeaderState, Route};

#[component]
pub fn ResultsPanel() -> Element {
    let header = use_context::<HeaderState>();
    let results = header.ui.read().results.clone();
    let mut on_down = header.clone();

    rsx! {
        div {
            class: "results",
            onmousedown: move |_| on_down.mark(HeaderElement::ResultsPanel),
            if results.is_empty() {
                div { class: "results__empty", "No movies found" }
            } else {
                for movie in results.iter() {
                    ResultRow { key: "{movie.id}", movie: movie.clone() }
                }
            }
        }
    }
}

/// One result: thumbnail, title, release date and rating.
#[component]
fn ResultRow(movie: MovieSummary) -> Element {
    let mut app_state = use_context::<AppState>();
    let mut header = use_context::<HeaderState>();

    let poster = poster_src(&movie, PosterSize::W200);
    let release = movie.release_label().to_string();
    let rating = movie.rating_label();
    let id = movie.id;

    rsx! {
        div {
            class: "results__row",
            onmousedown: move |_| header.mark(HeaderElement::ResultLink),
            onclick: move |_| {
                info!("Result clicked: {id}");
                app_state.navigate(Route::Movie(id));
            },
            img { class: "results__poster", src: "{poster}", alt: "{movie.title}" }
            div { class: "results__text",
                div { class: "results__title", "{movie.title}" }
                div { class: "results__meta", "{release} · ★ {rating}" }
            }
        }
    }
}
