//! Account service access for `MovieScout`.
//!
//! [`AccountClient`] talks to the small register/login REST service.
//! [`SessionStore`] holds who is logged in and what is remembered between
//! runs; login and logout are its only ways to change.

mod client;
mod session;

pub use client::{AccountClient, Registration, Session, DEFAULT_BASE_URL};
pub use session::{SessionStore, REMEMBERED_EMAIL_KEY, USERNAME_KEY};
