//! Current-user state shared across the app.

use std::sync::Arc;

use parking_lot::RwLock;
use scout_cache::LocalStore;
use scout_core::{Result, UserIdentity};
use tracing::info;

/// Local storage key for the remembered display name.
pub const USERNAME_KEY: &str = "username";

/// Local storage key for the "remember me" email.
pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";

/// Who is logged in.
///
/// Cloning shares the same state. Passwords are never stored.
#[derive(Debug, Clone)]
pub struct SessionStore {
    current: Arc<RwLock<Option<UserIdentity>>>,
    store: LocalStore,
}

impl SessionStore {
    /// Start logged out.
    pub fn new(store: LocalStore) -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            store,
        }
    }

    /// Start with the display name remembered by the last run, if any.
    pub fn restore(store: LocalStore) -> Self {
        let restored = store
            .get(USERNAME_KEY)
            .filter(|name| !name.trim().is_empty())
            .map(UserIdentity::new);
        if let Some(identity) = &restored {
            info!("Restored session for {}", identity.name);
        }

        Self {
            current: Arc::new(RwLock::new(restored)),
            store,
        }
    }

    pub fn current(&self) -> Option<UserIdentity> {
        self.current.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.read().is_some()
    }

    /// Record a successful login.
    ///
    /// With `remember_email` the email is kept for the next login form;
    /// without it any previously remembered email is forgotten.
    pub fn login(&self, identity: UserIdentity, remember_email: bool) -> Result<()> {
        self.store.set(USERNAME_KEY, &identity.name)?;

        match (&identity.email, remember_email) {
            (Some(email), true) => self.store.set(REMEMBERED_EMAIL_KEY, email)?,
            _ => self.store.remove(REMEMBERED_EMAIL_KEY)?,
        }

        info!("{} logged in", identity.name);
        *self.current.write() = Some(identity);
        Ok(())
    }

    /// Forget the current user. The remembered email survives.
    pub fn logout(&self) -> Result<()> {
        let previous = self.current.write().take();
        self.store.remove(USERNAME_KEY)?;

        if let Some(identity) = previous {
            info!("{} logged out", identity.name);
        }
        Ok(())
    }

    /// Email to suggest on the login form.
    pub fn remembered_email(&self) -> Option<String> {
        self.store.get(REMEMBERED_EMAIL_KEY)
    }
}
