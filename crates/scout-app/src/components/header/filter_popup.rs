//! Rating, release-year and sort criteria with an Apply button.

use dioxus::prelude::*;
use scout_search::HeaderElement;

use crate::state::HeaderState;

#[component]
pub fn FilterPopup() -> Element {
    let header = use_context::<HeaderState>();

    // Seed the inputs from the criteria already in the pipeline.
    let (initial_rating, initial_year, initial_sort) = {
        let ui = header.ui.read();
        let criteria = &ui.criteria;
        (
            criteria.rating.map(|r| r.to_string()).unwrap_or_default(),
            criteria.release_year.clone().unwrap_or_default(),
            criteria.sort_order.as_str().to_string(),
        )
    };
    let mut rating = use_signal(|| initial_rating);
    let mut year = use_signal(|| initial_year);
    let mut sort = use_signal(|| initial_sort);

    let mut on_down = header.clone();
    let update = header.clone();
    let push_criteria = move || {
        let mut header = update.clone();
        header.set_criteria_inputs(&rating.read(), &year.read(), &sort.read());
    };
    let push_rating = push_criteria.clone();
    let push_year = push_criteria.clone();
    let push_sort = push_criteria;

    let apply = header.clone();

    rsx! {
        div {
            class: "filter-popup",
            onmousedown: move |_| on_down.mark(HeaderElement::FilterPopup),

            label { class: "filter-popup__field",
                span { "Rating" }
                input {
                    r#type: "number",
                    min: "0",
                    max: "10",
                    step: "1",
                    placeholder: "e.g. 7",
                    value: "{rating}",
                    oninput: move |evt| {
                        rating.set(evt.value());
                        push_rating();
                    },
                }
            }

            label { class: "filter-popup__field",
                span { "Release year" }
                input {
                    r#type: "text",
                    placeholder: "e.g. 2021",
                    value: "{year}",
                    oninput: move |evt| {
                        year.set(evt.value());
                        push_year();
                    },
                }
            }

            label { class: "filter-popup__field",
                span { "Sort" }
                select {
                    value: "{sort}",
                    onchange: move |evt| {
                        sort.set(evt.value());
                        push_sort();
                    },
                    option { value: "", "None" }
                    option { value: "A-Z", "A-Z" }
                    option { value: "Z-A", "Z-A" }
                }
            }

            button {
                class: "filter-popup__apply",
                onclick: move |_| {
                    let mut header = apply.clone();
                    spawn(async move {
                        header.apply_filters().await;
                    });
                },
                "Apply"
            }
        }
    }
}
