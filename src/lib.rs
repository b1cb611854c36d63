//! Chat Shell Completion Library
//!
//! This library provides contextual command-line completion for a
//! line-oriented chat shell. Given a partially-typed command line and a
//! cycle direction, it returns the next (or previous) valid completion,
//! drawing candidates from static vocabularies and from live external
//! sources (the contact roster, room occupants, filesystem entries,
//! theme/script/plugin catalogs).
//!
//! # Modules
//!
//! - `completion`: The completion engine and its building blocks
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `session`: Collaborator interfaces to the embedding shell
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use chatsh::completion::{CompletionEngine, Direction};
//! use chatsh::session::{SessionContext, SessionHost};
//!
//! fn next_completion(host: Arc<dyn SessionHost>) -> Option<String> {
//!     let mut engine = CompletionEngine::with_defaults(host);
//!     let ctx = SessionContext::console();
//!     engine.complete(&ctx, "/theme lo", Direction::Forward)
//! }
//! ```

pub mod completion;
pub mod config;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use completion::{CompletionEngine, Direction, ResetReason};
pub use config::Config;
pub use error::{ChatshError, Result};
pub use session::{ConnectionStatus, SessionContext, SessionHost, WindowKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
