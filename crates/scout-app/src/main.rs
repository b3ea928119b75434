//! # MovieScout
//!
//! Desktop movie browser: search with debounced, cached lookups, filter by
//! rating and release year, and open details with trailers.

// RSX macros generate code that triggers these warnings incorrectly
#![allow(unused_qualifications)]
#![allow(clippy::use_self)]

mod components;
mod config;
mod services;
mod state;

use anyhow::Result;
use components::views::{HomeView, LoginView, MovieView, ProfileView, SignupView};
use components::Header;
use config::AppConfig;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use services::search::use_header_state;
use services::Services;
use state::{AppState, Route};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WINDOW_WIDTH: f64 = 1200.0;
const WINDOW_HEIGHT: f64 = 800.0;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scout=debug,scout_app=debug,scout_search=debug".into()),
        )
        .init();

    info!("Starting MovieScout v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    let store = services::open_local_store()?;
    let services = Services::new(config, store)?;

    let window_builder = WindowBuilder::new()
        .with_title("MovieScout")
        .with_inner_size(dioxus::desktop::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(true);

    let desktop = Config::new()
        .with_window(window_builder)
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .with_context(services)
        .launch(App);

    Ok(())
}

/// Root component: header, current page, and document-level pointer handling.
#[component]
fn App() -> Element {
    let services = use_context::<Services>();
    let app_state = use_context_provider(|| AppState::new(services.sessions.clone()));
    let header = use_header_state(services.catalog.clone(), services.config.pipeline_config());

    // Leaving a page closes every header overlay.
    let route_signal = app_state.route;
    let mut on_route = header.clone();
    use_effect(move || {
        let route = *route_signal.read();
        on_route.route_changed();
        dioxus::desktop::window().set_title(route.title());
    });

    let mut on_down = header;
    let route = *route_signal.read();

    rsx! {
        style { {include_str!("../assets/styles.css")} }

        div {
            class: "app",
            onmousedown: move |_| on_down.finish_pointer_down(),

            Header {}

            main { class: "page",
                match route {
                    Route::Home => rsx! { HomeView {} },
                    Route::Movie(id) => rsx! { MovieView { key: "{id}", movie_id: id } },
                    Route::Login => rsx! { LoginView {} },
                    Route::Signup => rsx! { SignupView {} },
                    Route::Profile => rsx! { ProfileView {} },
                }
            }
        }
    }
}
