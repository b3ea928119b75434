//! Account button and its dropdown.

use dioxus::prelude::*;
use scout_search::HeaderElement;
use tracing::warn;

use crate::state::{AppState, HeaderState, Route};

#[component]
pub fn UserMenu() -> Element {
    let app_state = use_context::<AppState>();
    let header = use_context::<HeaderState>();
    let menu_visible = header.ui.read().user_menu_visible;
    let user = app_state.user.read().clone();
    let label = user
        .as_ref()
        .map_or_else(|| "Account".to_string(), |u| u.name.clone());

    let mut toggle_down = header.clone();
    let mut toggle_click = header.clone();
    let mut menu_down = header.clone();

    rsx! {
        div { class: "user-menu",
            button {
                class: "user-menu__toggle",
                onmousedown: move |_| toggle_down.mark(HeaderElement::UserMenuToggle),
                onclick: move |_| toggle_click.toggle_user_menu(),
                "{label}"
            }

            if menu_visible {
                div {
                    class: "user-menu__dropdown",
                    onmousedown: move |_| menu_down.mark(HeaderElement::UserMenu),
                    if user.is_some() {
                        MenuItem { label: "Profile", route: Route::Profile }
                        LogoutItem {}
                    } else {
                        MenuItem { label: "Log in", route: Route::Login }
                        MenuItem { label: "Sign up", route: Route::Signup }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuItem(label: &'static str, route: Route) -> Element {
    let mut app_state = use_context::<AppState>();
    let mut header = use_context::<HeaderState>();

    rsx! {
        div {
            class: "user-menu__item",
            onclick: move |_| {
                header.close_user_menu();
                app_state.navigate(route);
            },
            "{label}"
        }
    }
}

#[component]
fn LogoutItem() -> Element {
    let mut app_state = use_context::<AppState>();
    let mut header = use_context::<HeaderState>();

    rsx! {
        div {
            class: "user-menu__item",
            onclick: move |_| {
                header.close_user_menu();
                if let Err(e) = app_state.logout() {
                    warn!("Logout failed: {e}");
                }
                app_state.navigate(Route::Home);
            },
            "Log out"
        }
    }
}
