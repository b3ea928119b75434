//! # scout-catalog
//!
//! Movie catalog API client for `MovieScout`.
//!
//! This crate wraps the read-only REST endpoints of the remote catalog:
//! listings for the home page, free-text search, the discover page used as
//! the local filter base, genre lookup, and the per-movie detail, video and
//! similar-title endpoints.

pub mod client;
pub mod context;
pub mod endpoints;
pub mod parser;
pub mod source;
pub mod types;

pub use client::CatalogClient;
pub use context::CatalogContext;
pub use endpoints::listings::Listing;
