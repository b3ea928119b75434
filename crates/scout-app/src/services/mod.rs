//! Backend services integration.
//!
//! This module connects the UI to the backend crates:
//! - Catalog client for listings, search and movie pages
//! - Search pipeline driving the header
//! - Account client and session store for login

pub mod catalog;
pub mod search;

pub use catalog::CatalogService;

use anyhow::{Context, Result};
use scout_account::{AccountClient, SessionStore, DEFAULT_BASE_URL};
use scout_cache::LocalStore;
use tracing::warn;

use crate::config::AppConfig;

/// Everything built before the UI starts, handed to the root component.
#[derive(Clone, Debug)]
pub struct Services {
    pub config: AppConfig,
    pub catalog: CatalogService,
    pub accounts: AccountClient,
    pub sessions: SessionStore,
}

impl Services {
    pub fn new(config: AppConfig, store: LocalStore) -> Result<Self> {
        let catalog = CatalogService::new(config.catalog_context());

        let accounts = AccountClient::new(&config.account_url)
            .or_else(|e| {
                warn!("Invalid account service URL, using {DEFAULT_BASE_URL}: {e}");
                AccountClient::new(DEFAULT_BASE_URL)
            })
            .context("failed to create account client")?;

        let sessions = SessionStore::restore(store);

        Ok(Self {
            config,
            catalog,
            accounts,
            sessions,
        })
    }
}

/// Persistent store, or an in-memory one when the data directory is unusable.
pub fn open_local_store() -> Result<LocalStore> {
    LocalStore::open_default()
        .or_else(|e| {
            warn!("Local storage unavailable, remembering nothing across runs: {e}");
            LocalStore::in_memory()
        })
        .context("failed to open local storage")
}
