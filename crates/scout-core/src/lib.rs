//! # scout-core
//!
//! Core types, traits, and error handling for the `MovieScout` client.

pub mod error;
pub mod source;
pub mod types;

pub use error::{Error, HttpError, Result};
pub use source::MovieSource;
pub use types::*;
