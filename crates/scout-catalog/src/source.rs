//! `MovieSource` implementation backed by the live catalog.

use scout_core::{MovieSource, MovieSummary, Result};

use crate::CatalogClient;

impl MovieSource for CatalogClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>> {
        self.search(query).await
    }

    async fn catalog_page(&self) -> Result<Vec<MovieSummary>> {
        self.discover().await
    }
}
