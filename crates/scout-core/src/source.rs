//! Data source seam between the search pipeline and the catalog client.

use std::future::Future;

use crate::{MovieSummary, Result};

/// Anything that can answer free-text movie searches and serve the
/// browsable catalog page.
pub trait MovieSource: Send + Sync + 'static {
    /// Free-text search, first page of results, unfiltered.
    fn search_movies(&self, query: &str) -> impl Future<Output = Result<Vec<MovieSummary>>> + Send;

    /// The locally held catalog page used when filtering without a query.
    fn catalog_page(&self) -> impl Future<Output = Result<Vec<MovieSummary>>> + Send;
}
