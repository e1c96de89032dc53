//! Generation tokens for superseding in-flight render passes.
//!
//! An interactive host starts a new pass whenever the camera or scene
//! changes. Older passes are not awaited: they notice their ticket went
//! stale and stop at the next bucket boundary.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out tickets with a monotonically increasing generation.
#[derive(Debug, Clone, Default)]
pub struct RenderSession {
    generation: Arc<AtomicU64>,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new pass, superseding every ticket issued before.
    pub fn begin(&self) -> RenderTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        RenderTicket {
            generation,
            latest: Arc::clone(&self.generation),
        }
    }

    /// Supersede all outstanding tickets without starting a pass.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Generation of the most recent `begin` or `invalidate`.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// Token carried by one render pass.
#[derive(Debug, Clone)]
pub struct RenderTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl RenderTicket {
    /// A ticket that nothing can supersede (one-shot renders).
    pub fn detached() -> Self {
        RenderSession::new().begin()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// False once a newer pass has begun.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::Acquire) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_increase() {
        let session = RenderSession::new();
        assert_eq!(session.generation(), 0);

        let first = session.begin();
        let second = session.begin();
        assert_eq!(first.generation(), 1);
        assert_eq!(second.generation(), 2);
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn test_newer_pass_supersedes() {
        let session = RenderSession::new();
        let first = session.begin();
        assert!(first.is_current());

        let second = session.begin();
        assert!(!first.is_current());
        assert!(second.is_current());

        session.invalidate();
        assert!(!second.is_current());
    }

    #[test]
    fn test_clones_share_generation() {
        let session = RenderSession::new();
        let ticket = session.begin();
        session.clone().begin();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_detached_stays_current() {
        let ticket = RenderTicket::detached();
        assert!(ticket.is_current());
    }
}
