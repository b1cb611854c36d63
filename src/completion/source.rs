//! Candidate sources backed by live session state
//!
//! Two flavors cover the externally-mutable candidate sets:
//!
//! - [`DynamicSource`]: an enumeration that is expensive or stable enough to
//!   materialize once per session context (themes, scripts, plugin lists).
//!   The snapshot is stamped with the reset generation it was built at and
//!   is rebuilt lazily when the coordinator has advanced the generation, so
//!   there are no scattered "is the cache still there" checks.
//! - [`VolatileSource`]: a set that must be re-fetched on every keystroke
//!   because its contents depend on the partial token or on per-window state
//!   (roster lookups, room occupants). The fetcher owns the matching: its
//!   results are cycled exactly as returned, never re-filtered against the
//!   partial. Cycling still works across calls because the scratch set
//!   preserves the cursor through `update`.

use tracing::debug;

use super::prefix_set::{Direction, PrefixSet};
use crate::session::{SessionContext, SessionHost};

/// Builder producing a fresh snapshot from a collaborator
pub type SnapshotFn = Box<dyn Fn(&dyn SessionHost) -> Vec<String> + Send + Sync>;

/// Fetcher producing per-keystroke candidates from a collaborator
pub type FetchFn = Box<dyn Fn(&dyn SessionHost, &SessionContext, &str) -> Vec<String> + Send + Sync>;

/// Lazily built, generation-stamped candidate set
pub struct DynamicSource {
    /// Snapshot builder, called at most once per generation
    builder: SnapshotFn,
    /// Materialized set and the generation it was built at
    cache: Option<(u64, PrefixSet)>,
    /// Name used in log output
    name: &'static str,
}

impl DynamicSource {
    /// Create a source from a snapshot builder
    ///
    /// # Arguments
    /// * `name` - Short name for logging
    /// * `builder` - Closure producing the candidate snapshot
    pub fn new<F>(name: &'static str, builder: F) -> Self
    where
        F: Fn(&dyn SessionHost) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            builder: Box::new(builder),
            cache: None,
            name,
        }
    }

    /// Get the materialized set, rebuilding it when the generation is stale
    ///
    /// # Arguments
    /// * `host` - Session collaborator to snapshot from
    /// * `generation` - Current reset generation
    ///
    /// # Returns
    /// * `&mut PrefixSet` - The up-to-date candidate set
    pub fn set(&mut self, host: &dyn SessionHost, generation: u64) -> &mut PrefixSet {
        let stale = match &self.cache {
            Some((built_at, _)) => *built_at != generation,
            None => true,
        };

        if stale {
            let items = (self.builder)(host);
            debug!(
                source = self.name,
                generation,
                count = items.len(),
                "rebuilding dynamic candidate set"
            );
            self.cache = Some((generation, PrefixSet::with_items(items)));
        }

        &mut self.cache.as_mut().unwrap().1
    }

    /// Forget the cycle position without discarding the snapshot
    pub fn reset_cursor(&mut self) {
        if let Some((_, set)) = &mut self.cache {
            set.reset_cursor();
        }
    }
}

/// Per-keystroke candidate source with a cursor-preserving scratch set
pub struct VolatileSource {
    /// Candidate fetcher, called on every completion request
    fetch: FetchFn,
    /// Scratch set holding the latest candidates and the cycle cursor
    scratch: PrefixSet,
}

impl VolatileSource {
    /// Create a source from a per-keystroke fetcher
    pub fn new<F>(fetch: F) -> Self
    where
        F: Fn(&dyn SessionHost, &SessionContext, &str) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            fetch: Box::new(fetch),
            scratch: PrefixSet::new(),
        }
    }

    /// Fetch fresh candidates and cycle through them.
    ///
    /// The fetcher's results are taken as already matched; a host may match
    /// by display name, identifier, or case-insensitively, so the engine
    /// must not second-guess them with its own prefix filter.
    ///
    /// # Arguments
    /// * `host` - Session collaborator
    /// * `ctx` - Active window context
    /// * `partial` - Partially-typed final token, forwarded to the fetcher
    /// * `wrap` - Wrap around at the cycle boundary
    /// * `direction` - Cycle direction
    ///
    /// # Returns
    /// * `Option<String>` - Next candidate, if any
    pub fn complete(
        &mut self,
        host: &dyn SessionHost,
        ctx: &SessionContext,
        partial: &str,
        wrap: bool,
        direction: Direction,
    ) -> Option<String> {
        let items = (self.fetch)(host, ctx, partial);
        self.scratch.update(items);
        self.scratch.complete("", wrap, direction)
    }

    /// Discard the scratch snapshot and cursor
    pub fn reset(&mut self) {
        self.scratch = PrefixSet::new();
    }
}
