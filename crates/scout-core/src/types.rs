//! Core domain types for `MovieScout`.

pub mod details;
pub mod filter;
pub mod movie;
pub mod user;

pub use details::{Genre, GenreMap, HomeSections, MovieDetails, MoviePage, Video};
pub use filter::{FilterCriteria, SortOrder};
pub use movie::{poster_url, MovieSummary, PosterSize, UNKNOWN_LABEL};
pub use user::UserIdentity;
