//! Application state management.

pub mod header;
pub mod route;

pub use header::HeaderState;
pub use route::Route;

use dioxus::prelude::*;
use scout_account::SessionStore;
use scout_core::{Result, UserIdentity};
use tracing::info;

/// Global application state.
#[derive(Clone)]
pub struct AppState {
    /// Current page.
    pub route: Signal<Route>,
    /// Previous pages for back navigation.
    pub history: Signal<Vec<Route>>,
    /// Logged-in user, mirrored from the session store.
    pub user: Signal<Option<UserIdentity>>,
    sessions: SessionStore,
}

impl AppState {
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            route: Signal::new(Route::default()),
            history: Signal::new(Vec::new()),
            user: Signal::new(sessions.current()),
            sessions,
        }
    }

    /// Navigate to a page.
    pub fn navigate(&mut self, route: Route) {
        let current = *self.route.read();
        if current == route {
            return;
        }
        info!("Navigating to {}", route.path());
        self.history.write().push(current);
        self.route.set(route);
    }

    /// Go back to the previous page.
    pub fn go_back(&mut self) {
        let previous = self.history.write().pop();
        if let Some(previous) = previous {
            self.route.set(previous);
        }
    }

    pub fn remembered_email(&self) -> Option<String> {
        self.sessions.remembered_email()
    }

    pub fn login(&mut self, identity: UserIdentity, remember_email: bool) -> Result<()> {
        self.sessions.login(identity, remember_email)?;
        self.user.set(self.sessions.current());
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.sessions.logout()?;
        self.user.set(None);
        Ok(())
    }
}
