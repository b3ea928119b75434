//! # scout-cache
//!
//! Caching and local persistence for `MovieScout`.
//!
//! This crate provides:
//! - [`SearchCache`]: session-lifetime search results, bounded LRU, never persisted
//! - [`LocalStore`]: small `SQLite`-backed key/value store for remembered
//!   login details (the desktop analogue of browser local storage)

mod local_store;
mod search_cache;

pub use local_store::LocalStore;
pub use search_cache::{CacheStats, SearchCache, DEFAULT_CAPACITY};
