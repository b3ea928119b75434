//! Login form with "remember me" for the email address.

use dioxus::prelude::*;
use scout_core::Error;
use tracing::warn;

use crate::services::Services;
use crate::state::{AppState, Route};

#[component]
pub fn LoginView() -> Element {
    let services = use_context::<Services>();
    let app_state = use_context::<AppState>();

    let remembered = use_hook(|| app_state.remembered_email());
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| remembered.is_some());
    let mut show_suggestion = use_signal(|| false);
    let mut message = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let suggestion = remembered.clone();
    let mut to_signup = app_state.clone();

    rsx! {
        div { class: "auth",
            h2 { class: "auth__title", "Log in" }

            label { class: "auth__field",
                span { "Email address" }
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                    onfocus: move |_| show_suggestion.set(remembered.is_some()),
                }
            }

            if show_suggestion() {
                if let Some(stored) = suggestion.clone() {
                    div { class: "auth__suggestion",
                        span { "Remembered: {stored}" }
                        button {
                            r#type: "button",
                            onclick: move |_| {
                                email.set(stored.clone());
                                password.set(String::new());
                                show_suggestion.set(false);
                            },
                            "Use"
                        }
                        button {
                            r#type: "button",
                            onclick: move |_| show_suggestion.set(false),
                            "Cancel"
                        }
                    }
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

            label { class: "auth__remember",
                input {
                    r#type: "checkbox",
                    checked: remember_me(),
                    onchange: move |evt| remember_me.set(evt.checked()),
                }
                span { "Remember me" }
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
                    let address = email();
                    let secret = password();
                    let remember = remember_me();
                    busy.set(true);
                    spawn(async move {
                        match accounts.login(&address, &secret).await {
                            Ok(session) => {
                                if let Err(e) = app_state.login(session.identity(), remember) {
                                    warn!("Failed to store session: {e}");
                                }
                                app_state.navigate(Route::Home);
                            }
                            Err(e) => {
                                warn!("Login failed: {e}");
                                message.set(Some(Error::CredentialsNotFound.to_string()));
                            }
                        }
                        busy.set(false);
                    });
                },
                "Log in"
            }

            p { class: "auth__switch",
                "No account yet? "
                a { onclick: move |_| to_signup.navigate(Route::Signup), "Sign up" }
            }
        }
    }
}
