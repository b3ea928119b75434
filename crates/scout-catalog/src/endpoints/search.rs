//! Search endpoint implementation.

use scout_core::{Error, MovieSummary, Result};
use tracing::debug;

use crate::{
    parser::parse_movie_page,
    types::{RawMovie, RawPage},
    CatalogClient,
};

impl CatalogClient {
    /// Free-text movie search, first page only.
    ///
    /// Results come back unfiltered, in the catalog's relevance order.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidArgument("search query is empty".to_string()));
        }

        let mut params = self.context.locale_params();
        params.push(("query", query.to_string()));

        let page: RawPage<RawMovie> = self
            .get("search/movie", &params)
            .await
            .map_err(|e| Error::Catalog(format!("Search request failed: {e}")))?;

        debug!(
            "Search for {query:?} returned {} of {} results",
            page.results.len(),
            page.total_results
        );

        Ok(parse_movie_page(page))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::client::test_server;
    use crate::{CatalogClient, CatalogContext};
    use scout_core::Error;

    #[tokio::test]
    async fn test_search_query_encoding() {
        let (base, heads) = test_server::serve(vec![(
            200,
            r#"{"page":1,"results":[{"id":5,"title":"Alien","adult":false}],"total_results":1}"#
                .to_string(),
        )])
        .await;
        let client =
            CatalogClient::new(CatalogContext::new("t").with_base_url(base)).unwrap();

        let movies = client.search("  alien & co ").await.unwrap();
        assert_eq!(movies[0].title, "Alien");

        let head = &heads.await.unwrap()[0];
        assert!(head.contains("query=alien+%26+co"));
    }

    #[tokio::test]
    async fn test_empty_query_rejected() {
        let client = CatalogClient::new(CatalogContext::new("t")).unwrap();
        let err = client.search("   ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
