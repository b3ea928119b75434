//! Listing endpoints: home page sections, discover page, genre list.

use scout_core::{Error, Genre, GenreMap, HomeSections, MovieSummary, Result};
use tracing::{debug, info};

use crate::{
    parser::{parse_genre, parse_movie_page},
    types::{RawGenreList, RawMovie, RawPage},
    CatalogClient,
};

/// Curated movie listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Trending today.
    Trending,
    /// In theaters now (region-scoped).
    NowPlaying,
    TopRated,
    /// Coming soon (region-scoped).
    Upcoming,
}

impl Listing {
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Trending => "trending/movie/day",
            Self::NowPlaying => "movie/now_playing",
            Self::TopRated => "movie/top_rated",
            Self::Upcoming => "movie/upcoming",
        }
    }

    /// Whether the listing takes the `region` parameter.
    pub const fn is_regional(self) -> bool {
        matches!(self, Self::NowPlaying | Self::Upcoming)
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Trending => "Trending",
            Self::NowPlaying => "New Releases",
            Self::TopRated => "Top Rated",
            Self::Upcoming => "Upcoming",
        }
    }
}

impl CatalogClient {
    /// Fetch the first page of a listing.
    pub async fn listing(&self, listing: Listing) -> Result<Vec<MovieSummary>> {
        let params = if listing.is_regional() {
            self.context.regional_params()
        } else {
            self.context.locale_params()
        };

        let page: RawPage<RawMovie> = self
            .get(listing.endpoint(), &params)
            .await
            .map_err(|e| Error::Catalog(format!("{} request failed: {e}", listing.title())))?;

        debug!("{} returned {} movies", listing.title(), page.results.len());
        Ok(parse_movie_page(page))
    }

    /// Fetch all four home page sections concurrently.
    ///
    /// Any failing section fails the whole call.
    pub async fn home_sections(&self) -> Result<HomeSections> {
        let (trending, now_playing, top_rated, upcoming) = tokio::try_join!(
            self.listing(Listing::Trending),
            self.listing(Listing::NowPlaying),
            self.listing(Listing::TopRated),
            self.listing(Listing::Upcoming),
        )?;

        info!(
            "Home sections loaded: {} trending, {} now playing, {} top rated, {} upcoming",
            trending.len(),
            now_playing.len(),
            top_rated.len(),
            upcoming.len()
        );

        Ok(HomeSections {
            trending,
            now_playing,
            top_rated,
            upcoming,
        })
    }

    /// Fetch the first discover page, the base set for query-less filtering.
    pub async fn discover(&self) -> Result<Vec<MovieSummary>> {
        let mut params = self.context.locale_params();
        params.push(("include_adult", self.context.include_adult.to_string()));
        params.push(("page", "1".to_string()));

        let page: RawPage<RawMovie> = self
            .get("discover/movie", &params)
            .await
            .map_err(|e| Error::Catalog(format!("Discover request failed: {e}")))?;

        Ok(parse_movie_page(page))
    }

    /// Fetch the movie genre list.
    pub async fn genres(&self) -> Result<Vec<Genre>> {
        let list: RawGenreList = self
            .get("genre/movie/list", &self.context.locale_params())
            .await
            .map_err(|e| Error::Catalog(format!("Genre request failed: {e}")))?;

        Ok(list.genres.into_iter().map(parse_genre).collect())
    }

    /// Fetch the genre list as an ID lookup.
    pub async fn genre_map(&self) -> Result<GenreMap> {
        self.genres().await.map(GenreMap::new)
    }
}
