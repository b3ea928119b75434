//! Header search state shared by the header components.

use dioxus::prelude::*;
use scout_search::{HeaderElement, SearchOutcome, SearchPipeline, UiState};
use tracing::debug;

use crate::services::CatalogService;

pub type Pipeline = SearchPipeline<CatalogService>;

/// The search pipeline plus the signals the header renders from.
///
/// Every pipeline mutation is followed by [`refresh`](Self::refresh) so the
/// `ui` signal always mirrors the pipeline.
#[derive(Clone)]
pub struct HeaderState {
    pub pipeline: Pipeline,
    pub ui: Signal<UiState>,
    /// Header elements the current pointer-down has bubbled through.
    pointer_path: Signal<Vec<HeaderElement>>,
}

impl HeaderState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            ui: Signal::new(pipeline.snapshot()),
            pointer_path: Signal::new(Vec::new()),
            pipeline,
        }
    }

    pub fn refresh(&mut self) {
        self.ui.set(self.pipeline.snapshot());
    }

    /// Record that a pointer-down passed through `element`.
    ///
    /// Handlers on inner elements fire before the document root, so by the
    /// time [`finish_pointer_down`](Self::finish_pointer_down) runs the
    /// path is complete.
    pub fn mark(&mut self, element: HeaderElement) {
        self.pointer_path.write().push(element);
    }

    /// Called by the document root once the pointer-down has bubbled up.
    pub fn finish_pointer_down(&mut self) {
        let path = std::mem::take(&mut *self.pointer_path.write());
        let dismissed = self.pipeline.pointer_down(&path);
        if !dismissed.is_empty() {
            debug!("Dismissed {dismissed:?}");
            self.refresh();
        }
    }

    pub fn input(&mut self, query: &str) {
        self.pipeline.input(query);
        self.refresh();
    }

    pub fn focus(&mut self) {
        self.pipeline.focus_search();
        self.refresh();
    }

    pub fn toggle_filter_popup(&mut self) {
        self.pipeline.toggle_filter_popup();
        self.refresh();
    }

    pub fn toggle_user_menu(&mut self) {
        self.pipeline.toggle_user_menu();
        self.refresh();
    }

    pub fn close_user_menu(&mut self) {
        self.pipeline.close_user_menu();
        self.refresh();
    }

    pub fn route_changed(&mut self) {
        self.pipeline.route_changed();
        self.refresh();
    }

    pub fn set_criteria_inputs(&mut self, rating: &str, release_year: &str, sort_order: &str) {
        self.pipeline
            .set_criteria_inputs(rating, release_year, sort_order);
        self.refresh();
    }

    pub async fn search(&mut self, query: &str) {
        let outcome = self.pipeline.search(query).await;
        debug!("Search {:?}: {outcome:?}", query.trim());
        if outcome != SearchOutcome::Stale {
            self.refresh();
        }
    }

    pub async fn apply_filters(&mut self) {
        let outcome = self.pipeline.apply_filters().await;
        debug!("Apply filters: {outcome:?}");
        self.refresh();
    }
}
