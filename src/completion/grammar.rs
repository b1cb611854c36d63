//! Per-command completion grammar
//!
//! Each known command maps to an ordered list of [`PathRule`]s. Rules are
//! kept sorted by descending literal-path length, so the most specific rule
//! is always consulted first (`/account set theme` before `/account set`
//! before `/account`). Ties keep insertion order. The first applicable rule
//! wins; later rules are not consulted even when the winner's source has
//! nothing to offer.

use std::collections::HashMap;

use tracing::trace;

use super::matcher::{PathRule, Request};

/// Identity of a command with parameter completion rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Account,
    Caps,
    Connect,
    Help,
    Info,
    Join,
    Msg,
    Occupants,
    Ox,
    Ping,
    Plugins,
    Roster,
    Script,
    Sendfile,
    Status,
    Sub,
    Theme,
    Tray,
    Who,
}

impl CommandId {
    /// Map a leading command token to its identity
    ///
    /// # Arguments
    /// * `token` - First token of the line, marker included
    ///
    /// # Returns
    /// * `Option<CommandId>` - `None` for commands without parameter rules
    pub fn from_token(token: &str) -> Option<Self> {
        let id = match token {
            "/account" => Self::Account,
            "/caps" => Self::Caps,
            "/connect" => Self::Connect,
            "/help" => Self::Help,
            "/info" => Self::Info,
            "/join" => Self::Join,
            "/msg" => Self::Msg,
            "/occupants" => Self::Occupants,
            "/ox" => Self::Ox,
            "/ping" => Self::Ping,
            "/plugins" => Self::Plugins,
            "/roster" => Self::Roster,
            "/script" => Self::Script,
            "/sendfile" => Self::Sendfile,
            "/status" => Self::Status,
            "/sub" => Self::Sub,
            "/theme" => Self::Theme,
            "/tray" => Self::Tray,
            "/who" => Self::Who,
            _ => return None,
        };
        Some(id)
    }
}

/// Rule table keyed by command, most specific rule first
#[derive(Default)]
pub struct CommandGrammar {
    rules: HashMap<CommandId, Vec<PathRule>>,
}

impl CommandGrammar {
    /// Create an empty grammar
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule for a command.
    ///
    /// Insertion keeps the command's rules sorted by descending path
    /// length; rules of equal length stay in registration order.
    pub fn register(&mut self, id: CommandId, rule: PathRule) {
        let rules = self.rules.entry(id).or_default();
        let pos = rules.partition_point(|r| r.priority() >= rule.priority());
        rules.insert(pos, rule);
    }

    /// Complete against the command's rules, most specific first
    ///
    /// # Returns
    /// * `Option<String>` - The first applicable rule's result
    pub fn complete(&mut self, id: CommandId, req: &Request<'_>) -> Option<String> {
        for rule in self.rules.get_mut(&id)?.iter_mut() {
            if let Some(found) = rule.try_complete(req) {
                trace!(?id, path = ?rule.path(), "parameter rule matched");
                return Some(found);
            }
        }
        None
    }

    /// Reset every rule's cycle state
    pub fn reset(&mut self) {
        for rules in self.rules.values_mut() {
            for rule in rules.iter_mut() {
                rule.reset();
            }
        }
    }
}
