//! Catalog endpoint implementations, grouped by page.

pub mod listings;
pub mod movie;
pub mod search;
