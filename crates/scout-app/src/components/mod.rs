//! UI components.

pub mod header;
pub mod movie_card;
pub mod views;

pub use header::Header;
