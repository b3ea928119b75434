use dioxus::prelude::*;
use tracing::warn;

use crate::state::{AppState, Route};

#[component]
pub fn ProfileView() -> Element {
    let mut app_state = use_context::<AppState>();
    let user = app_state.user.read().clone();

    let Some(user) = user else {
        return rsx! {
            div { class: "profile",
                p { "You are not logged in." }
                button {
                    class: "profile__action",
                    onclick: move |_| app_state.navigate(Route::Login),
                    "Log in"
                }
            }
        };
    };
    let email = user.email.clone().unwrap_or_default();

    rsx! {
        div { class: "profile",
            h2 { class: "profile__name", "{user.name}" }
            if !email.is_empty() {
                p { class: "profile__email", "{email}" }
            }
            button {
                class: "profile__action",
                onclick: move |_| {
                    if let Err(e) = app_state.logout() {
                        warn!("Logout failed: {e}");
                    }
                    app_state.navigate(Route::Home);
                },
                "Log out"
            }
        }
    }
}
