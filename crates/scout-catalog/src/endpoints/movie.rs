//! Single-movie endpoints: details, videos, similar titles.

use scout_core::{Error, MovieDetails, MoviePage, MovieSummary, Result, Video};
use tracing::{info, warn};

use crate::{
    parser::{parse_movie_details, parse_movie_page, parse_videos},
    types::{RawMovie, RawMovieDetails, RawPage, RawVideoList},
    CatalogClient,
};

impl CatalogClient {
    /// Fetch the full record for a movie.
    pub async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails> {
        let raw: RawMovieDetails = self
            .get(&format!("movie/{movie_id}"), &self.context.locale_params())
            .await
            .map_err(|e| Error::Catalog(format!("Details request for {movie_id} failed: {e}")))?;

        Ok(parse_movie_details(raw))
    }

    /// Fetch all videos attached to a movie.
    pub async fn videos(&self, movie_id: u64) -> Result<Vec<Video>> {
        let raw: RawVideoList = self
            .get(
                &format!("movie/{movie_id}/videos"),
                &self.context.locale_params(),
            )
            .await
            .map_err(|e| Error::Catalog(format!("Video request for {movie_id} failed: {e}")))?;

        Ok(parse_videos(raw.results))
    }

    /// Fetch the first trailer for a movie, if it has one.
    pub async fn trailer(&self, movie_id: u64) -> Result<Option<Video>> {
        self.videos(movie_id).await.map(Video::first_trailer)
    }

    /// Fetch titles similar to a movie.
    pub async fn similar(&self, movie_id: u64) -> Result<Vec<MovieSummary>> {
        let page: RawPage<RawMovie> = self
            .get(
                &format!("movie/{movie_id}/similar"),
                &self.context.locale_params(),
            )
            .await
            .map_err(|e| Error::Catalog(format!("Similar request for {movie_id} failed: {e}")))?;

        Ok(parse_movie_page(page))
    }

    /// Load everything the detail page shows.
    ///
    /// Details must resolve first: trailer and related titles are requested
    /// with the resolved ID, concurrently. Their failures degrade to no
    /// trailer and no related titles; a details failure fails the page.
    pub async fn movie_page(&self, movie_id: u64) -> Result<MoviePage> {
        let details = self.movie_details(movie_id).await?;
        let resolved_id = details.id;

        let (trailer, related) = tokio::join!(self.trailer(resolved_id), self.similar(resolved_id));

        let trailer = trailer.unwrap_or_else(|e| {
            warn!("Error fetching trailer: {e}");
            None
        });
        let related = related.unwrap_or_else(|e| {
            warn!("Error fetching related movies: {e}");
            Vec::new()
        });

        info!(
            "Loaded movie page for {} (trailer: {}, {} related)",
            details.title,
            trailer.is_some(),
            related.len()
        );

        Ok(MoviePage {
            details,
            trailer,
            related,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::client::test_server;
    use crate::{CatalogClient, CatalogContext};

    #[tokio::test]
    async fn test_movie_page_degrades_on_related_failures() {
        // Details succeed; videos and similar both answer 404.
        let (base, heads) = test_server::serve(vec![
            (200, r#"{"id":27205,"title":"Inception"}"#.to_string()),
            (404, r#"{"status_message":"not found"}"#.to_string()),
            (404, r#"{"status_message":"not found"}"#.to_string()),
        ])
        .await;
        let client =
            CatalogClient::new(CatalogContext::new("t").with_base_url(base)).unwrap();

        let page = client.movie_page(27205).await.unwrap();
        assert_eq!(page.details.title, "Inception");
        assert!(page.trailer.is_none());
        assert!(page.related.is_empty());

        let heads = heads.await.unwrap();
        assert!(heads[0].starts_with("GET /3/movie/27205?"));
    }

    #[tokio::test]
    async fn test_movie_page_fails_when_details_fail() {
        let (base, _heads) = test_server::serve(vec![(
            404,
            r#"{"status_message":"not found"}"#.to_string(),
        )])
        .await;
        let client =
            CatalogClient::new(CatalogContext::new("t").with_base_url(base)).unwrap();

        assert!(client.movie_page(1).await.is_err());
    }

    #[tokio::test]
    async fn test_trailer_selection() {
        let (base, _heads) = test_server::serve(vec![(
            200,
            r#"{"results":[
                {"key":"t1","name":"Teaser","site":"YouTube","type":"Teaser"},
                {"key":"t2","name":"Official Trailer","site":"YouTube","type":"Trailer"}
            ]}"#
            .to_string(),
        )])
        .await;
        let client =
            CatalogClient::new(CatalogContext::new("t").with_base_url(base)).unwrap();

        let trailer = client.trailer(9).await.unwrap().unwrap();
        assert_eq!(trailer.key, "t2");
        assert_eq!(trailer.embed_url(), "https://www.youtube.com/embed/t2");
    }
}
