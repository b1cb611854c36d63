//! Reset coordination
//!
//! Every cached candidate snapshot is stamped with the generation it was
//! built at. The coordinator owns the counter: advancing it is the single
//! way to invalidate caches, so there is no per-cache "is it still valid"
//! bookkeeping scattered through the engine.

use tracing::debug;

/// Why the engine is being reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    /// The user switched to a different window
    WindowSwitch,
    /// A command line was submitted for execution
    CommandExecuted,
    /// The session reconnected
    Reconnect,
}

/// Owner of the cache-invalidation generation counter
#[derive(Debug, Default)]
pub struct ResetCoordinator {
    generation: u64,
}

impl ResetCoordinator {
    /// Create a coordinator at generation zero
    pub fn new() -> Self {
        Self::default()
    }

    /// The current generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the generation, invalidating every stamped cache
    pub fn advance(&mut self, reason: ResetReason) {
        self.generation += 1;
        debug!(?reason, generation = self.generation, "completion state reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(ResetCoordinator::new().generation(), 0);
    }

    #[test]
    fn test_advance_increments() {
        let mut coordinator = ResetCoordinator::new();
        coordinator.advance(ResetReason::WindowSwitch);
        coordinator.advance(ResetReason::CommandExecuted);
        assert_eq!(coordinator.generation(), 2);
    }
}
