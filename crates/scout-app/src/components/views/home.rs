//! Home page: four listing rows.

use dioxus::prelude::*;

use crate::components::movie_card::MovieRow;
use crate::services::Services;

#[component]
pub fn HomeView() -> Element {
    let services = use_context::<Services>();
    let page = use_resource(move || {
        let catalog = services.catalog.clone();
        async move {
            let (sections, genres) = tokio::join!(catalog.home_sections(), catalog.genre_map());
            (sections, genres)
        }
    });

    match &*page.read_unchecked() {
        Some((sections, genres)) => rsx! {
            div { class: "home",
                MovieRow { title: "Trending Today", movies: sections.trending.clone(), genres: genres.clone() }
                MovieRow { title: "Now Playing", movies: sections.now_playing.clone(), genres: genres.clone() }
                MovieRow { title: "Top Rated", movies: sections.top_rated.clone(), genres: genres.clone() }
                MovieRow { title: "Upcoming", movies: sections.upcoming.clone(), genres: genres.clone() }
            }
        },
        None => rsx! {
            div { class: "loading", "Loading..." }
        },
    }
}
