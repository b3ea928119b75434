//! Header search pipeline: wires the debouncer, cache, content filter,
//! facet filter and dismiss coordinator around one shared UI state.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use scout_cache::{CacheStats, SearchCache, DEFAULT_CAPACITY};
use scout_core::{FilterCriteria, MovieSource, MovieSummary, Result};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::content::ContentFilter;
use crate::debounce::{Debouncer, DEFAULT_DELAY};
use crate::dismiss::{DismissCoordinator, DismissibleRegion};
use crate::facet;
use crate::generation::RequestGeneration;

/// Elements of the header that take part in outside-click handling.
///
/// A pointer-down is reported as the list of these elements between the
/// event target and the document root, innermost first. An empty path means
/// the pointer went down somewhere outside the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderElement {
    SearchInput,
    ResultsPanel,
    ResultLink,
    FilterToggle,
    FilterPopup,
    UserMenuToggle,
    UserMenu,
}

/// Tunables for [`SearchPipeline`].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub debounce: Duration,
    pub cache_capacity: usize,
    /// Terms added to the default content denylist.
    pub denylist: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DELAY,
            cache_capacity: DEFAULT_CAPACITY,
            denylist: Vec::new(),
        }
    }
}

/// Point-in-time copy of everything the header renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub search_query: String,
    pub results: Vec<MovieSummary>,
    /// Results hidden by the last outside click, restored on refocus.
    pub last_results: Vec<MovieSummary>,
    pub results_visible: bool,
    pub filter_popup_visible: bool,
    pub user_menu_visible: bool,
    pub criteria: FilterCriteria,
}

/// What happened to a search or filter request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results were written; carries how many.
    Applied(usize),
    /// The query was blank and the results were cleared.
    Cleared,
    /// A newer request or a clear superseded this one; nothing written.
    Stale,
    /// The fetch failed; the previous results were left in place.
    Failed,
}

struct State {
    query: String,
    results: Vec<MovieSummary>,
    last_results: Vec<MovieSummary>,
    criteria: FilterCriteria,
    catalog: Vec<MovieSummary>,
    regions: DismissCoordinator<HeaderElement>,
}

struct Inner<S> {
    source: S,
    cache: SearchCache,
    content: ContentFilter,
    debouncer: Debouncer<String>,
    generation: RequestGeneration,
    state: Mutex<State>,
}

/// The header's search/filter state machine.
///
/// Cheap to clone; clones share state. Locks are never held across an
/// `.await`, and every write of the results list is guarded by a
/// generation token so a slow response cannot overwrite a newer one.
pub struct SearchPipeline<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for SearchPipeline<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: MovieSource> SearchPipeline<S> {
    /// Build a pipeline. Settled queries from [`input`](Self::input) arrive
    /// on the returned receiver and should be passed to
    /// [`search`](Self::search).
    pub fn new(source: S, config: PipelineConfig) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (debouncer, settled) = Debouncer::new(config.debounce);

        let mut content = ContentFilter::new();
        content.extend(&config.denylist);

        let mut regions = DismissCoordinator::new();
        regions.register(
            DismissibleRegion::new(HeaderElement::ResultsPanel)
                .exempt(HeaderElement::SearchInput)
                .exempt(HeaderElement::ResultLink),
        );
        regions.register(
            DismissibleRegion::new(HeaderElement::FilterPopup).exempt(HeaderElement::FilterToggle),
        );
        regions.register(
            DismissibleRegion::new(HeaderElement::UserMenu).exempt(HeaderElement::UserMenuToggle),
        );

        let pipeline = Self {
            inner: Arc::new(Inner {
                source,
                cache: SearchCache::new(config.cache_capacity),
                content,
                debouncer,
                generation: RequestGeneration::new(),
                state: Mutex::new(State {
                    query: String::new(),
                    results: Vec::new(),
                    last_results: Vec::new(),
                    criteria: FilterCriteria::default(),
                    catalog: Vec::new(),
                    regions,
                }),
            }),
        };

        (pipeline, settled)
    }

    pub fn source(&self) -> &S {
        &self.inner.source
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.inner.cache.stats()
    }

    /// The search field changed.
    ///
    /// A blank field clears results immediately and drops any pending or
    /// in-flight search. Anything else is debounced.
    pub fn input(&self, query: &str) {
        self.inner.state.lock().query = query.to_string();

        if query.trim().is_empty() {
            self.clear_results();
        } else {
            self.inner.debouncer.push(query.to_string());
        }
    }

    /// Run a settled query through the cache and content filter.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        if query.trim().is_empty() {
            self.clear_results();
            return SearchOutcome::Cleared;
        }

        let token = self.inner.generation.begin();
        let results = match self.fetch_filtered(query).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Search for {:?} failed: {e}", query.trim());
                return SearchOutcome::Failed;
            }
        };

        let mut state = self.inner.state.lock();
        if !self.inner.generation.is_current(token) {
            debug!("Discarding stale results for {:?}", query.trim());
            return SearchOutcome::Stale;
        }

        let count = results.len();
        state.results = results;
        state.regions.show(HeaderElement::ResultsPanel);
        SearchOutcome::Applied(count)
    }

    /// Fetch the catalog page used as the facet base when the query is blank.
    pub async fn load_catalog_page(&self) -> Result<usize> {
        let page = self.inner.source.catalog_page().await?;
        let page = self.inner.content.retain_allowed(page);
        let count = page.len();
        self.inner.state.lock().catalog = page;
        info!("Loaded {count} catalog movies");
        Ok(count)
    }

    /// Update the popup's criteria. Does not apply them or close the popup.
    pub fn set_criteria(&self, criteria: FilterCriteria) {
        self.inner.state.lock().criteria = criteria;
    }

    /// Update the criteria from the popup's raw input values.
    pub fn set_criteria_inputs(&self, rating: &str, release_year: &str, sort_order: &str) {
        self.set_criteria(FilterCriteria::from_inputs(rating, release_year, sort_order));
    }

    /// Apply the current criteria and close the filter popup.
    ///
    /// Filters the search results for the current query, or the catalog
    /// page when the query is blank.
    pub async fn apply_filters(&self) -> SearchOutcome {
        let token = self.inner.generation.begin();
        let (query, criteria, catalog) = {
            let state = self.inner.state.lock();
            (
                state.query.clone(),
                state.criteria.clone(),
                state.catalog.clone(),
            )
        };

        let base = if query.trim().is_empty() {
            catalog
        } else {
            match self.fetch_filtered(&query).await {
                Ok(results) => results,
                Err(e) => {
                    warn!("Filtering {:?} failed: {e}", query.trim());
                    return SearchOutcome::Failed;
                }
            }
        };

        let filtered = facet::apply(base, &criteria);

        let mut state = self.inner.state.lock();
        if !self.inner.generation.is_current(token) {
            debug!("Discarding stale filter results");
            return SearchOutcome::Stale;
        }

        let count = filtered.len();
        debug!("Filter applied: {count} results for {criteria:?}");
        state.results = filtered;
        state.regions.hide(HeaderElement::FilterPopup);
        state.regions.show(HeaderElement::ResultsPanel);
        SearchOutcome::Applied(count)
    }

    /// The search field gained focus. Restores results hidden by the last
    /// outside click when nothing newer replaced them.
    pub fn focus_search(&self) {
        let mut state = self.inner.state.lock();
        if state.results.is_empty() && !state.last_results.is_empty() {
            state.results = state.last_results.clone();
        }
        if !state.results.is_empty() {
            state.regions.show(HeaderElement::ResultsPanel);
        }
    }

    /// Route a document pointer-down; returns the regions it dismissed.
    pub fn pointer_down(&self, path: &[HeaderElement]) -> Vec<HeaderElement> {
        let mut state = self.inner.state.lock();
        let dismissed = state.regions.pointer_down(path);

        if dismissed.contains(&HeaderElement::ResultsPanel) {
            let results = std::mem::take(&mut state.results);
            state.last_results = results;
        }

        dismissed
    }

    /// Returns whether the popup is now visible.
    pub fn toggle_filter_popup(&self) -> bool {
        self.inner
            .state
            .lock()
            .regions
            .toggle(HeaderElement::FilterPopup)
            .is_visible()
    }

    /// Returns whether the menu is now visible.
    pub fn toggle_user_menu(&self) -> bool {
        self.inner
            .state
            .lock()
            .regions
            .toggle(HeaderElement::UserMenu)
            .is_visible()
    }

    pub fn close_user_menu(&self) {
        self.inner.state.lock().regions.hide(HeaderElement::UserMenu);
    }

    /// Navigation happened: clear the query and results and hide every region.
    pub fn route_changed(&self) {
        {
            let mut state = self.inner.state.lock();
            state.query.clear();
            state.regions.hide(HeaderElement::FilterPopup);
            state.regions.hide(HeaderElement::UserMenu);
        }
        self.clear_results();
    }

    pub fn snapshot(&self) -> UiState {
        let state = self.inner.state.lock();
        UiState {
            search_query: state.query.clone(),
            results: state.results.clone(),
            last_results: state.last_results.clone(),
            results_visible: state.regions.is_visible(HeaderElement::ResultsPanel),
            filter_popup_visible: state.regions.is_visible(HeaderElement::FilterPopup),
            user_menu_visible: state.regions.is_visible(HeaderElement::UserMenu),
            criteria: state.criteria.clone(),
        }
    }

    async fn fetch_filtered(&self, query: &str) -> Result<Vec<MovieSummary>> {
        let inner = &*self.inner;
        inner
            .cache
            .lookup_or_fetch(query, move || async move {
                let raw = inner.source.search_movies(query.trim()).await?;
                Ok(inner.content.refine_search(query, raw))
            })
            .await
    }

    fn clear_results(&self) {
        self.inner.debouncer.cancel();
        self.inner.generation.advance();

        let mut state = self.inner.state.lock();
        state.results.clear();
        state.regions.hide(HeaderElement::ResultsPanel);
    }
}

impl<S> std::fmt::Debug for SearchPipeline<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchPipeline")
            .field("cache", &self.inner.cache.stats())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use scout_core::Error;
    use tokio::time::sleep;

    use super::*;
    use crate::facet::compare_titles;

    #[derive(Default)]
    struct FakeSource {
        library: Vec<MovieSummary>,
        catalog: Vec<MovieSummary>,
        delays: HashMap<String, Duration>,
        searches: AtomicUsize,
        offline: AtomicBool,
    }

    impl MovieSource for FakeSource {
        async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>> {
            self.searches.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(query).copied() {
                sleep(delay).await;
            }
            if self.offline.load(Ordering::SeqCst) {
                return Err(Error::Network("offline".into()));
            }
            Ok(self.library.clone())
        }

        async fn catalog_page(&self) -> Result<Vec<MovieSummary>> {
            Ok(self.catalog.clone())
        }
    }

    fn library() -> Vec<MovieSummary> {
        vec![
            MovieSummary::new(1, "Alien").with_vote_average(8.2),
            MovieSummary::new(2, "Aliens").with_vote_average(7.9),
            MovieSummary::new(3, "Alien Encounter").with_adult(true),
            MovieSummary::new(4, "Predator").with_vote_average(7.1),
        ]
    }

    fn pipeline(source: FakeSource) -> (SearchPipeline<FakeSource>, mpsc::UnboundedReceiver<String>) {
        SearchPipeline::new(source, PipelineConfig::default())
    }

    fn ids(movies: &[MovieSummary]) -> Vec<u64> {
        movies.iter().map(|m| m.id).collect()
    }

    #[tokio::test]
    async fn test_search_filters_and_shows_results() {
        let (p, _rx) = pipeline(FakeSource {
            library: library(),
            ..Default::default()
        });

        assert_eq!(p.search("alien").await, SearchOutcome::Applied(2));
        let ui = p.snapshot();
        assert_eq!(ids(&ui.results), vec![1, 2]);
        assert!(ui.results_visible);
    }

    #[tokio::test]
    async fn test_repeat_search_served_from_cache() {
        let (p, _rx) = pipeline(FakeSource {
            library: library(),
            ..Default::default()
        });

        p.search("alien").await;
        p.search("alien").await;
        assert_eq!(p.source().searches.load(Ordering::SeqCst), 1);
        assert_eq!(p.cache_stats().hits, 1);
    }

    #[tokio::test]
    async fn test_failed_search_keeps_previous_results() {
        let (p, _rx) = pipeline(FakeSource {
            library: library(),
            ..Default::default()
        });

        p.search("alien").await;
        p.source().offline.store(true, Ordering::SeqCst);
        assert_eq!(p.search("predator").await, SearchOutcome::Failed);
        assert_eq!(ids(&p.snapshot().results), vec![1, 2]);

        // Failure was not cached.
        p.source().offline.store(false, Ordering::SeqCst);
        assert_eq!(p.search("predator").await, SearchOutcome::Applied(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_input_reaches_search() {
        let (p, mut rx) = pipeline(FakeSource {
            library: library(),
            ..Default::default()
        });

        for text in ["a", "al", "ali", "alie"] {
            p.input(text);
            sleep(Duration::from_millis(100)).await;
        }

        let settled = rx.recv().await.unwrap();
        assert_eq!(settled, "alie");
        assert_eq!(p.search(&settled).await, SearchOutcome::Applied(2));
        assert_eq!(p.source().searches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_clears_immediately() {
        let (p, mut rx) = pipeline(FakeSource {
            library: library(),
            ..Default::default()
        });

        p.search("alien").await;
        p.input("alien ");
        p.input("");

        let ui = p.snapshot();
        assert!(ui.results.is_empty());
        assert!(!ui.results_visible);

        sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_discarded() {
        let mut delays = HashMap::new();
        delays.insert("alien".to_string(), Duration::from_secs(2));
        let (p, _rx) = pipeline(FakeSource {
            library: library(),
            delays,
            ..Default::default()
        });

        let (slow, fast) = tokio::join!(p.search("alien"), p.search("predator"));
        assert_eq!(slow, SearchOutcome::Stale);
        assert_eq!(fast, SearchOutcome::Applied(1));
        assert_eq!(ids(&p.snapshot().results), vec![4]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_route_change_clears_and_cancels() {
        let mut delays = HashMap::new();
        delays.insert("alien".to_string(), Duration::from_secs(2));
        let (p, _rx) = pipeline(FakeSource {
            library: library(),
            delays,
            ..Default::default()
        });
        p.input("alien");

        let (outcome, ()) = tokio::join!(p.search("alien"), async {
            sleep(Duration::from_millis(100)).await;
            p.route_changed();
        });

        assert_eq!(outcome, SearchOutcome::Stale);
        let ui = p.snapshot();
        assert!(ui.search_query.is_empty());
        assert!(ui.results.is_empty());
        assert!(!ui.results_visible);
    }

    #[tokio::test]
    async fn test_route_change_hides_every_region() {
        let (p, _rx) = pipeline(FakeSource {
            library: library(),
            ..Default::default()
        });
        p.search("alien").await;
        assert!(p.toggle_filter_popup());
        assert!(p.toggle_user_menu());

        p.route_changed();

        let ui = p.snapshot();
        assert!(!ui.results_visible);
        assert!(!ui.filter_popup_visible);
        assert!(!ui.user_menu_visible);
    }

    #[tokio::test]
    async fn test_outside_click_snapshots_and_focus_restores() {
        let (p, _rx) = pipeline(FakeSource {
            library: library(),
            ..Default::default()
        });
        p.search("alien").await;

        // Clicking a result link does not dismiss the panel.
        assert!(p
            .pointer_down(&[HeaderElement::ResultLink, HeaderElement::ResultsPanel])
            .is_empty());

        let dismissed = p.pointer_down(&[]);
        assert_eq!(dismissed, vec![HeaderElement::ResultsPanel]);
        let ui = p.snapshot();
        assert!(ui.results.is_empty());
        assert_eq!(ids(&ui.last_results), vec![1, 2]);
        assert!(!ui.results_visible);

        p.focus_search();
        let ui = p.snapshot();
        assert_eq!(ids(&ui.results), vec![1, 2]);
        assert!(ui.results_visible);
    }

    #[tokio::test]
    async fn test_filter_popup_outside_click_rules() {
        let (p, _rx) = pipeline(FakeSource::default());

        assert!(p.toggle_filter_popup());
        p.set_criteria_inputs("8", "", "A-Z");
        assert!(p.snapshot().filter_popup_visible);

        assert!(p.pointer_down(&[HeaderElement::FilterPopup]).is_empty());
        assert!(p.pointer_down(&[HeaderElement::FilterToggle]).is_empty());
        assert!(p.snapshot().filter_popup_visible);
        assert!(!p.toggle_filter_popup());

        assert!(p.toggle_user_menu());
        assert!(p.pointer_down(&[HeaderElement::FilterToggle]).contains(&HeaderElement::UserMenu));
    }

    #[tokio::test]
    async fn test_apply_over_catalog_page() {
        let titles = [
            "Zodiac", "Arrival", "Heat", "Memento", "Alien", "Jaws", "Se7en", "Fargo", "Brazil",
            "Casablanca", "Vertigo", "Psycho", "Rocky", "Up", "Coco", "Her", "Drive", "Tenet",
            "Dune", "Ran",
        ];
        let catalog = titles
            .iter()
            .enumerate()
            .map(|(i, t)| MovieSummary::new(i as u64, *t).with_vote_average(5.0 + i as f64 * 0.25))
            .collect();
        let (p, _rx) = pipeline(FakeSource {
            catalog,
            ..Default::default()
        });

        assert_eq!(p.load_catalog_page().await.unwrap(), 20);
        assert!(p.toggle_filter_popup());
        p.set_criteria_inputs("8", "", "A-Z");

        assert_eq!(p.apply_filters().await, SearchOutcome::Applied(4));
        let ui = p.snapshot();
        let shown: Vec<&str> = ui.results.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(shown, vec!["Coco", "Her", "Rocky", "Up"]);
        assert!(ui
            .results
            .iter()
            .all(|m| m.vote_average >= 8.0 && m.vote_average < 9.0));
        assert!(ui
            .results
            .windows(2)
            .all(|w| compare_titles(&w[0].title, &w[1].title).is_le()));
        assert!(!ui.filter_popup_visible);
        assert!(ui.results_visible);
    }

    #[tokio::test]
    async fn test_apply_with_query_filters_search_results() {
        let (p, _rx) = pipeline(FakeSource {
            library: library(),
            ..Default::default()
        });
        p.set_criteria(FilterCriteria::from_inputs("7", "", "Z-A"));
        p.input("alien");

        assert_eq!(p.apply_filters().await, SearchOutcome::Applied(1));
        assert_eq!(ids(&p.snapshot().results), vec![2]);
    }

    #[tokio::test]
    async fn test_configured_denylist_extends_defaults() {
        let config = PipelineConfig {
            denylist: vec!["predator".into()],
            ..Default::default()
        };
        let (p, _rx) = SearchPipeline::new(
            FakeSource {
                library: library(),
                ..Default::default()
            },
            config,
        );
        assert_eq!(p.search("predator").await, SearchOutcome::Applied(0));
    }
}
