//! Navigation header: brand, search, filters and the user menu.

mod filter_popup;
mod results_panel;
mod search_bar;
mod user_menu;

pub use filter_popup::FilterPopup;
pub use results_panel::ResultsPanel;
pub use search_bar::SearchBar;
pub use user_menu::UserMenu;

use dioxus::prelude::*;
use scout_search::HeaderElement;

use crate::state::{AppState, HeaderState, Route};

/// Top navigation bar.
#[component]
pub fn Header() -> Element {
    let mut app_state = use_context::<AppState>();
    let header = use_context::<HeaderState>();
    let popup_visible = header.ui.read().filter_popup_visible;

    let mut toggle_down = header.clone();
    let mut toggle_click = header.clone();

    rsx! {
        header { class: "header",
            div {
                class: "header__brand",
                onclick: move |_| app_state.navigate(Route::Home),
                "MovieScout"
            }

            SearchBar {}

            div { class: "header__filter",
                button {
                    class: if popup_visible { "header__filter-toggle header__filter-toggle--active" } else { "header__filter-toggle" },
                    onmousedown: move |_| toggle_down.mark(HeaderElement::FilterToggle),
                    onclick: move |_| toggle_click.toggle_filter_popup(),
                    "Filters"
                }
                if popup_visible {
                    FilterPopup {}
                }
            }

            UserMenu {}
        }
    }
}
