//! Literal-path argument matching
//!
//! A [`PathRule`] pairs a fixed sequence of leading tokens (the literal
//! path, e.g. `/account set theme`) with the candidate source for the token
//! that follows it. A rule applies only when the input starts with exactly
//! the literal path and the cursor sits exactly one token past it: either a
//! trailing space (empty partial) or one partially-typed token.
//!
//! On a match the rule returns the full replacement line, reassembled from
//! the literal path and the completed candidate, re-quoting candidates that
//! contain spaces.

use super::filepath::FilepathCompleter;
use super::prefix_set::{Direction, PrefixSet};
use super::source::{DynamicSource, VolatileSource};
use super::tokenizer::{quote_if_needed, tokenize};
use crate::config::CompletionConfig;
use crate::session::{SessionContext, SessionHost};

/// Everything a rule needs to answer one completion request
pub struct Request<'a> {
    /// Session collaborator
    pub host: &'a dyn SessionHost,
    /// Active window context
    pub ctx: &'a SessionContext,
    /// Completion configuration
    pub config: &'a CompletionConfig,
    /// Current reset generation
    pub generation: u64,
    /// Full input line
    pub input: &'a str,
    /// Cycle direction
    pub direction: Direction,
}

/// Candidate source behind a rule's argument position
pub enum RuleSource {
    /// Fixed vocabulary owned by the rule
    Set(PrefixSet),
    /// Lazily materialized external enumeration
    Dynamic(DynamicSource),
    /// Re-fetched on every keystroke
    Volatile(VolatileSource),
    /// Filesystem listing with the path contract
    Filepath(FilepathCompleter),
}

/// One grammar rule: literal token path plus the source for the next token
pub struct PathRule {
    /// Literal leading tokens, starting with the command token
    path: Vec<String>,
    /// Re-quote multi-word candidates in the rebuilt line
    quote_results: bool,
    /// Wrap around at the cycle boundary
    wrap: bool,
    /// Candidate source for the argument position
    source: RuleSource,
}

impl PathRule {
    /// Create a rule over a fixed vocabulary
    ///
    /// # Arguments
    /// * `path` - Space-separated literal path, e.g. `"/account set"`
    /// * `set` - Candidate vocabulary
    pub fn with_set(path: &str, set: PrefixSet) -> Self {
        Self::new(path, RuleSource::Set(set))
    }

    /// Create a rule over a lazily built external enumeration
    pub fn with_dynamic(path: &str, source: DynamicSource) -> Self {
        Self::new(path, RuleSource::Dynamic(source))
    }

    /// Create a rule over a per-keystroke fetched source
    pub fn with_volatile(path: &str, source: VolatileSource) -> Self {
        Self::new(path, RuleSource::Volatile(source))
    }

    /// Create a rule completing filesystem paths
    pub fn with_filepath(path: &str) -> Self {
        Self::new(path, RuleSource::Filepath(FilepathCompleter::new()))
    }

    fn new(path: &str, source: RuleSource) -> Self {
        Self {
            path: path.split_whitespace().map(str::to_string).collect(),
            quote_results: true,
            wrap: true,
            source,
        }
    }

    /// Stop at the cycle boundary instead of wrapping
    pub fn no_wrap(mut self) -> Self {
        self.wrap = false;
        self
    }

    /// Rule priority: longer literal paths are more specific
    pub fn priority(&self) -> usize {
        self.path.len()
    }

    /// The rule's literal path tokens
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Try to complete the request's input against this rule
    ///
    /// # Returns
    /// * `Option<String>` - Full replacement line, or `None` when the rule
    ///   does not apply or its source has nothing to offer
    pub fn try_complete(&mut self, req: &Request<'_>) -> Option<String> {
        let line = tokenize(req.input);
        if !line.starts_with_path(&self.path) {
            return None;
        }

        // Cursor must be exactly one token past the literal path
        let partial = if line.tokens.len() == self.path.len() && line.trailing_space {
            String::new()
        } else if line.tokens.len() == self.path.len() + 1 && !line.trailing_space {
            line.tokens[self.path.len()].text.clone()
        } else {
            return None;
        };

        let found = match &mut self.source {
            RuleSource::Set(set) => set.complete(&partial, self.wrap, req.direction),
            RuleSource::Dynamic(source) => {
                source
                    .set(req.host, req.generation)
                    .complete(&partial, self.wrap, req.direction)
            }
            RuleSource::Volatile(source) => {
                source.complete(req.host, req.ctx, &partial, self.wrap, req.direction)
            }
            RuleSource::Filepath(completer) => {
                completer.complete(req.config, req.host, &partial, req.direction)
            }
        }?;

        let completed = if self.quote_results {
            quote_if_needed(&found)
        } else {
            found
        };
        Some(format!("{} {completed}", self.path.join(" ")))
    }

    /// Forget cycle positions; volatile and filesystem snapshots are
    /// discarded entirely
    pub fn reset(&mut self) {
        match &mut self.source {
            RuleSource::Set(set) => set.reset_cursor(),
            RuleSource::Dynamic(source) => source.reset_cursor(),
            RuleSource::Volatile(source) => source.reset(),
            RuleSource::Filepath(completer) => completer.reset(),
        }
    }
}
