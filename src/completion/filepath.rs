//! Filesystem path completion
//!
//! Unlike every other candidate source, directory contents are re-listed on
//! every keystroke: the candidate set depends on the exact partial path, so
//! a cached snapshot would go stale the moment the user types one more
//! character of the path.
//!
//! Contract:
//! - a leading `~/` expands to the user's home directory (candidates are
//!   presented back in `~/` form)
//! - `.` and `..` are never offered
//! - dotfiles are offered only when the typed basename itself starts with
//!   a dot (or the configuration forces hidden files on)
//! - an unreadable or missing directory yields no candidates, never an error

use std::path::Path;

use super::prefix_set::{Direction, PrefixSet};
use crate::config::CompletionConfig;
use crate::session::SessionHost;

/// Path completer with a per-keystroke rebuilt scratch set
#[derive(Default)]
pub struct FilepathCompleter {
    /// Latest candidates plus the cycle cursor
    scratch: PrefixSet,
}

impl FilepathCompleter {
    /// Create a new path completer
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete the partially-typed path
    ///
    /// # Arguments
    /// * `config` - Completion configuration (home override, hidden files)
    /// * `host` - Session collaborator performing the directory listing
    /// * `partial` - Partially-typed path, quotes already stripped
    /// * `direction` - Cycle direction
    ///
    /// # Returns
    /// * `Option<String>` - Next matching path, if any
    pub fn complete(
        &mut self,
        config: &CompletionConfig,
        host: &dyn SessionHost,
        partial: &str,
        direction: Direction,
    ) -> Option<String> {
        let (expanded, home_prefix) = if let Some(rest) = partial.strip_prefix("~/") {
            let home = config.home_override.clone().or_else(dirs::home_dir)?;
            let home = home.to_string_lossy().into_owned();
            (format!("{home}/{rest}"), Some(home))
        } else {
            (partial.to_string(), None)
        };

        let (directory, basename) = match expanded.rfind('/') {
            Some(0) => ("/".to_string(), expanded[1..].to_string()),
            Some(idx) => (expanded[..idx].to_string(), expanded[idx + 1..].to_string()),
            None => (".".to_string(), expanded.clone()),
        };

        // Hidden entries only on explicit request
        let show_hidden = config.show_hidden_files || basename.starts_with('.');

        let mut candidates = Vec::new();
        for name in host.list_directory(Path::new(&directory)) {
            if name == "." || name == ".." {
                continue;
            }
            if name.starts_with('.') && !show_hidden {
                continue;
            }

            let full = if directory == "/" {
                format!("/{name}")
            } else {
                format!("{directory}/{name}")
            };
            let display = match &home_prefix {
                Some(home) => match full.strip_prefix(&format!("{home}/")) {
                    Some(rel) => format!("~/{rel}"),
                    None => full,
                },
                None => full,
            };
            candidates.push(display);
        }

        self.scratch.update(candidates);
        self.scratch.complete(partial, true, direction)
    }

    /// Discard the scratch snapshot and cursor
    pub fn reset(&mut self) {
        self.scratch = PrefixSet::new();
    }
}
