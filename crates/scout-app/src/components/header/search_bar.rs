//! Search input and its results dropdown.

use dioxus::prelude::*;
use scout_search::HeaderElement;

use super::ResultsPanel;
use crate::state::HeaderState;

#[component]
pub fn SearchBar() -> Element {
    let header = use_context::<HeaderState>();
    let (query, results_visible) = {
        let ui = header.ui.read();
        (ui.search_query.clone(), ui.results_visible)
    };

    let mut on_down = header.clone();
    let mut on_input = header.clone();
    let mut on_focus = header.clone();

    rsx! {
        div { class: "search",
            input {
                class: "search__input",
                r#type: "text",
                placeholder: "Search movies...",
                value: "{query}",
                onmousedown: move |_| on_down.mark(HeaderElement::SearchInput),
                oninput: move |evt| on_input.input(&evt.value()),
                onfocus: move |_| on_focus.focus(),
            }

            if results_visible {
                ResultsPanel {}
            }
        }
    }
}
