//! Catalog access for the UI.

use scout_catalog::{CatalogClient, CatalogContext};
use scout_core::{Error, GenreMap, HomeSections, MoviePage, MovieSource, MovieSummary, Result};
use tracing::{error, info, warn};

/// The live catalog, or nothing when no credential is configured.
///
/// Without a client every request fails with the same error, which the
/// views render as empty sections; the app still starts.
#[derive(Clone, Debug)]
pub struct CatalogService {
    client: Option<CatalogClient>,
}

impl CatalogService {
    pub fn new(context: CatalogContext) -> Self {
        let client = match CatalogClient::new(context) {
            Ok(client) => {
                info!("Catalog client initialized");
                Some(client)
            }
            Err(e) => {
                error!("Catalog unavailable: {e}");
                None
            }
        };
        Self { client }
    }

    fn client(&self) -> Result<&CatalogClient> {
        self.client
            .as_ref()
            .ok_or_else(|| Error::Catalog("no catalog access token configured".to_string()))
    }

    /// Home page sections; failures degrade to empty sections.
    pub async fn home_sections(&self) -> HomeSections {
        let result = match self.client() {
            Ok(client) => client.home_sections().await,
            Err(e) => Err(e),
        };
        result.unwrap_or_else(|e| {
            warn!("Failed to load home sections: {e}");
            HomeSections::default()
        })
    }

    /// Genre names for card subtitles; unknown IDs render as `"Unknown"`.
    pub async fn genre_map(&self) -> GenreMap {
        let result = match self.client() {
            Ok(client) => client.genre_map().await,
            Err(e) => Err(e),
        };
        result.unwrap_or_else(|e| {
            warn!("Failed to load genres: {e}");
            GenreMap::default()
        })
    }

    pub async fn movie_page(&self, movie_id: u64) -> Result<MoviePage> {
        self.client()?.movie_page(movie_id).await
    }
}

impl MovieSource for CatalogService {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>> {
        self.client()?.search_movies(query).await
    }

    async fn catalog_page(&self) -> Result<Vec<MovieSummary>> {
        self.client()?.catalog_page().await
    }
}
