//! Registration form.

use std::time::Duration;

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::services::Services;
use crate::state::{AppState, Route};

/// How long the success message stays up before moving on to the login page.
const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn SignupView() -> Element {
    let services = use_context::<Services>();
    let app_state = use_context::<AppState>();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut message = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let mut to_login = app_state.clone();

    rsx! {
        div { class: "auth",
            h2 { class: "auth__title", "Sign up" }

            label { class: "auth__field",
                span { "Name" }
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            label { class: "auth__field",
                span { "Email address" }
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            label { class: "auth__field",
                span { "Password" }
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }

            if let Some(text) = message() {
                div { class: "auth__message", "{text}" }
            }

            button {
                class: "auth__submit",
                disabled: busy(),
                onclick: move |_| {
                    let accounts = services.accounts.clone();
                    let mut app_state = app_state.clone();
                    let (n, e, p) = (name(), email(), password());
                    busy.set(true);
                    spawn(async move {
                        match accounts.register(&n, &e, &p).await {
                            Ok(registration) => {
                                info!("Registered {}", registration.email);
                                message.set(Some("User registered successfully!".to_string()));
                                tokio::time::sleep(REDIRECT_DELAY).await;
                                app_state.navigate(Route::Login);
                            }
                            Err(err) => {
                                warn!("Registration failed: {err}");
                                message.set(Some(err.to_string()));
                            }
                        }
                        busy.set(false);
                    });
                },
                "Create account"
            }

            p { class: "auth__switch",
                "Already registered? "
                a { onclick: move |_| to_login.navigate(Route::Login), "Log in" }
            }
        }
    }
}
