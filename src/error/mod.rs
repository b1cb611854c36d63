//! Error handling module for chatsh.
//!
//! This module provides error handling for the ambient parts of the crate:
//! - Application-specific error types
//! - A crate-wide [`Result`] alias
//!
//! The completion engine itself is infallible by design: every completion
//! operation returns an `Option` and collaborator failures are treated as
//! empty candidate sets.

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ChatshError, ConfigError, Result};
