//! Contextual command-line completion engine
//!
//! This module provides the completion layer for the chat shell: given the
//! partially-typed input line, the active window, and a cycle direction, it
//! returns the next full replacement line. It includes:
//! - Ordered prefix sets with cycling cursors
//! - A tokenizer understanding one level of quoting
//! - Generation-stamped caches over live session state
//! - Literal-path argument rules and the per-command grammar
//! - The dispatcher tying the stages together
//! - Filesystem path completion with `~` expansion

pub mod engine;
pub mod filepath;
pub mod grammar;
pub mod matcher;
pub mod prefix_set;
pub mod reset;
pub mod source;
pub mod tokenizer;
pub mod vocab;

// Re-export commonly used types
pub use engine::CompletionEngine;
pub use filepath::FilepathCompleter;
pub use grammar::{CommandGrammar, CommandId};
pub use matcher::{PathRule, Request, RuleSource};
pub use prefix_set::{Direction, PrefixSet};
pub use reset::{ResetCoordinator, ResetReason};
pub use source::{DynamicSource, VolatileSource};
pub use tokenizer::{quote_if_needed, tokenize, Token, TokenLine};
