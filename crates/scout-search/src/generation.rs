//! Request generations: newer searches invalidate older in-flight ones.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ticket held by an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationToken(u64);

impl GenerationToken {
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic counter shared by everything that writes the results list.
///
/// A response is applied only while its token is still current, so a slow
/// response for an old query can never overwrite a newer one.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every earlier token.
    pub fn begin(&self) -> GenerationToken {
        GenerationToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Invalidate every outstanding token without starting a request.
    pub fn advance(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, token: GenerationToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_begin_invalidates_older() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert!(second.value() > first.value());
    }

    #[test]
    fn test_advance_invalidates_without_new_token() {
        let generation = RequestGeneration::new();
        let token = generation.begin();
        generation.advance();
        assert!(!generation.is_current(token));
    }

    #[test]
    fn test_clones_share_counter() {
        let generation = RequestGeneration::new();
        let other = generation.clone();
        let token = generation.begin();
        other.advance();
        assert!(!generation.is_current(token));
    }
}
