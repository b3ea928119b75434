//! # scout-search
//!
//! The header search pipeline for `MovieScout`.
//!
//! Keystrokes are debounced, looked up in (or fetched into) the result
//! cache, passed through the content filter, and rendered. Independently,
//! the filter popup's criteria are applied over the current results or the
//! local catalog page. Floating regions (results panel, filter popup, user
//! menu) are dismissed by outside pointer-downs through one coordinator.

pub mod content;
pub mod debounce;
pub mod dismiss;
pub mod facet;
pub mod generation;
pub mod pipeline;

pub use content::ContentFilter;
pub use debounce::Debouncer;
pub use dismiss::{DismissCoordinator, DismissibleRegion, Visibility};
pub use generation::{GenerationToken, RequestGeneration};
pub use pipeline::{HeaderElement, PipelineConfig, SearchOutcome, SearchPipeline, UiState};
