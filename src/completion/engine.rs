//! Completion dispatch
//!
//! [`CompletionEngine`] is the single entry point: given the current window
//! context, the full input line, and a cycle direction, it returns the next
//! full replacement line or `None` when the line should stay untouched.
//!
//! Dispatch goes through three stages:
//!
//! 1. bare command: the line starts with the command marker and has no
//!    space yet; complete against the command-name registry
//! 2. parameter: the line contains a space; the leading token selects the
//!    command's rule list, most specific rule first
//! 3. fallback: plugin-registered completers get the whole line, then the
//!    boolean-toggle catalog is tried against its on/off vocabulary

use std::borrow::Cow;
use std::sync::Arc;

use tracing::debug;

use super::grammar::{CommandGrammar, CommandId};
use super::matcher::{PathRule, Request};
use super::prefix_set::{Direction, PrefixSet};
use super::reset::{ResetCoordinator, ResetReason};
use super::tokenizer::tokenize;
use super::vocab;
use crate::config::CompletionConfig;
use crate::session::{SessionContext, SessionHost};

/// Contextual completion engine for one shell session
pub struct CompletionEngine {
    config: CompletionConfig,
    host: Arc<dyn SessionHost>,
    /// Bare command-name registry, mutable at runtime for aliases
    commands: PrefixSet,
    grammar: CommandGrammar,
    /// Last-resort on/off rules for the toggle catalog
    boolean_rules: Vec<PathRule>,
    coordinator: ResetCoordinator,
}

impl CompletionEngine {
    /// Create an engine with the built-in command surface
    ///
    /// # Arguments
    /// * `config` - Completion configuration
    /// * `host` - Collaborator supplying live candidates
    pub fn new(config: CompletionConfig, host: Arc<dyn SessionHost>) -> Self {
        let marker = config.command_marker;
        let commands = PrefixSet::with_items(
            vocab::COMMAND_NAMES
                .iter()
                .map(|name| format!("{marker}{}", &name[1..])),
        );
        Self {
            config,
            host,
            commands,
            grammar: vocab::default_grammar(),
            boolean_rules: vocab::boolean_rules(),
            coordinator: ResetCoordinator::new(),
        }
    }

    /// Create an engine with default configuration
    pub fn with_defaults(host: Arc<dyn SessionHost>) -> Self {
        Self::new(CompletionConfig::default(), host)
    }

    /// Complete the input line
    ///
    /// # Arguments
    /// * `ctx` - Active window context
    /// * `input` - The full input line as typed
    /// * `direction` - Cycle direction
    ///
    /// # Returns
    /// * `Option<String>` - Full replacement line, or `None` to leave the
    ///   line unchanged
    pub fn complete(
        &mut self,
        ctx: &SessionContext,
        input: &str,
        direction: Direction,
    ) -> Option<String> {
        if !input.starts_with(self.config.command_marker) {
            return None;
        }

        if !input.contains(' ') {
            debug!(input, "bare command completion");
            return self.commands.complete(input, true, direction);
        }

        let canonical = self.canonical(input);
        let id = tokenize(&canonical).leading().and_then(CommandId::from_token);
        let req = Request {
            host: self.host.as_ref(),
            ctx,
            config: &self.config,
            generation: self.coordinator.generation(),
            input: &canonical,
            direction,
        };

        if let Some(id) = id {
            debug!(?id, "parameter completion");
            if let Some(found) = self.grammar.complete(id, &req) {
                return Some(self.apply_marker(found));
            }
        }

        // Plugins see the line exactly as typed
        if let Some(found) = self
            .host
            .plugin_complete(input, direction == Direction::Backward)
        {
            debug!("plugin completer matched");
            return Some(found);
        }

        let found = self
            .boolean_rules
            .iter_mut()
            .find_map(|rule| rule.try_complete(&req))?;
        Some(self.apply_marker(found))
    }

    /// Reset cycle state and invalidate cached candidate snapshots.
    ///
    /// Registry and vocabulary items are retained; only cursors and
    /// generation-stamped caches are affected.
    pub fn reset(&mut self, reason: ResetReason) {
        self.coordinator.advance(reason);
        self.commands.reset_cursor();
        self.grammar.reset();
        for rule in self.boolean_rules.iter_mut() {
            rule.reset();
        }
    }

    /// Add a name to the bare command registry (aliases, plugin commands)
    pub fn register_command(&mut self, name: impl Into<String>) {
        self.commands.add(name);
    }

    /// Remove a name from the bare command registry
    pub fn unregister_command(&mut self, name: &str) {
        self.commands.remove(name);
    }

    /// Rewrite a custom command marker to `/` so the grammar's literal
    /// paths apply
    fn canonical<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let marker = self.config.command_marker;
        if marker == '/' {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(format!("/{}", &input[marker.len_utf8()..]))
        }
    }

    /// Put the configured marker back onto a grammar result
    fn apply_marker(&self, mut line: String) -> String {
        let marker = self.config.command_marker;
        if marker != '/' {
            line.replace_range(0..1, marker.encode_utf8(&mut [0u8; 4]));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::mock::MockHost;
    use std::path::PathBuf;
    use std::sync::atomic::Ordering;

    fn engine_with(host: MockHost) -> (CompletionEngine, Arc<MockHost>) {
        let host = Arc::new(host);
        let engine = CompletionEngine::with_defaults(host.clone());
        (engine, host)
    }

    #[test]
    fn test_bare_command_cycles() {
        let (mut engine, _) = engine_with(MockHost::default());
        let ctx = SessionContext::console();

        assert_eq!(
            engine.complete(&ctx, "/ca", Direction::Forward),
            Some("/caps".to_string())
        );
        assert_eq!(
            engine.complete(&ctx, "/ca", Direction::Forward),
            Some("/carbons".to_string())
        );
        assert_eq!(
            engine.complete(&ctx, "/ca", Direction::Forward),
            Some("/caps".to_string())
        );
    }

    #[test]
    fn test_non_command_input_is_left_alone() {
        let (mut engine, _) = engine_with(MockHost::default());
        let ctx = SessionContext::console();

        assert_eq!(engine.complete(&ctx, "hello there", Direction::Forward), None);
        assert_eq!(engine.complete(&ctx, "", Direction::Forward), None);
    }

    #[test]
    fn test_parameter_rule_depth_selection() {
        let host = MockHost {
            theme_names: vec!["sober".to_string()],
            ..MockHost::connected()
        };
        let (mut engine, _) = engine_with(host);
        let ctx = SessionContext::console();

        // Cursor after "set": property names, including "theme"
        assert_eq!(
            engine.complete(&ctx, "/account set th", Direction::Forward),
            Some("/account set theme".to_string())
        );
        // Cursor after "set theme": installed themes
        assert_eq!(
            engine.complete(&ctx, "/account set theme ", Direction::Forward),
            Some("/account set theme sober".to_string())
        );
    }

    #[test]
    fn test_help_forward_forward_backward_returns_first() {
        let (mut engine, _) = engine_with(MockHost::default());
        let ctx = SessionContext::console();

        let first = engine.complete(&ctx, "/help co", Direction::Forward).unwrap();
        assert_eq!(first, "/help commands");
        assert_eq!(
            engine.complete(&ctx, "/help co", Direction::Forward),
            Some("/help connect".to_string())
        );
        assert_eq!(
            engine.complete(&ctx, "/help co", Direction::Backward),
            Some(first)
        );
    }

    #[test]
    fn test_reset_rebuilds_dynamic_snapshots() {
        let host = MockHost {
            theme_names: vec!["sober".to_string()],
            ..MockHost::connected()
        };
        let (mut engine, host) = engine_with(host);
        let ctx = SessionContext::console();

        engine.complete(&ctx, "/theme load so", Direction::Forward);
        engine.complete(&ctx, "/theme load so", Direction::Forward);
        assert_eq!(host.theme_calls.load(Ordering::Relaxed), 1);

        engine.reset(ResetReason::CommandExecuted);
        engine.complete(&ctx, "/theme load so", Direction::Forward);
        assert_eq!(host.theme_calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_filepath_argument_excludes_dotfiles() {
        let host = MockHost {
            dir_root: Some(PathBuf::from("/tmp")),
            dir_entries: vec![
                "upload.png".to_string(),
                ".secret".to_string(),
                "notes.txt".to_string(),
            ],
            ..MockHost::connected()
        };
        let (mut engine, _) = engine_with(host);
        let ctx = SessionContext::console();

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(
                engine
                    .complete(&ctx, "/ox announce /tmp/", Direction::Forward)
                    .unwrap(),
            );
        }
        assert_eq!(
            seen,
            [
                "/ox announce /tmp/upload.png",
                "/ox announce /tmp/notes.txt",
                "/ox announce /tmp/upload.png",
            ]
        );
    }

    #[test]
    fn test_room_window_completes_occupants() {
        let host = MockHost {
            occupants: vec!["alice".to_string(), "albert".to_string()],
            ..MockHost::connected()
        };
        let (mut engine, _) = engine_with(host);
        let ctx = SessionContext::room("rust@rooms");

        assert_eq!(
            engine.complete(&ctx, "/msg al", Direction::Forward),
            Some("/msg alice".to_string())
        );
        assert_eq!(
            engine.complete(&ctx, "/msg al", Direction::Forward),
            Some("/msg albert".to_string())
        );
    }

    #[test]
    fn test_multiword_contact_is_quoted() {
        let host = MockHost {
            contacts: vec!["My Friend".to_string()],
            ..MockHost::connected()
        };
        let (mut engine, _) = engine_with(host);
        let ctx = SessionContext::console();

        assert_eq!(
            engine.complete(&ctx, "/msg ", Direction::Forward),
            Some("/msg \"My Friend\"".to_string())
        );
    }

    #[test]
    fn test_host_matched_recipient_is_returned_directly() {
        let host = MockHost {
            contacts: vec!["Alice".to_string()],
            ..MockHost::connected()
        };
        let (mut engine, _) = engine_with(host);
        let ctx = SessionContext::console();

        // The roster matched "Alice" for "al"; the engine must not drop
        // the candidate for failing its own literal prefix check
        assert_eq!(
            engine.complete(&ctx, "/msg al", Direction::Forward),
            Some("/msg Alice".to_string())
        );
    }

    #[test]
    fn test_plugin_fallback_for_unknown_commands() {
        let host = MockHost {
            plugin_reply: Some("/customcmd argument".to_string()),
            ..MockHost::default()
        };
        let (mut engine, _) = engine_with(host);
        let ctx = SessionContext::console();

        assert_eq!(
            engine.complete(&ctx, "/customcmd a", Direction::Forward),
            Some("/customcmd argument".to_string())
        );
    }

    #[test]
    fn test_boolean_toggle_fallback() {
        let (mut engine, _) = engine_with(MockHost::default());
        let ctx = SessionContext::console();

        assert_eq!(
            engine.complete(&ctx, "/beep o", Direction::Forward),
            Some("/beep on".to_string())
        );
        assert_eq!(
            engine.complete(&ctx, "/beep o", Direction::Forward),
            Some("/beep off".to_string())
        );
    }

    #[test]
    fn test_unknown_command_yields_nothing() {
        let (mut engine, _) = engine_with(MockHost::default());
        let ctx = SessionContext::console();

        assert_eq!(engine.complete(&ctx, "/xyzzy foo", Direction::Forward), None);
    }

    #[test]
    fn test_register_and_unregister_command() {
        let (mut engine, _) = engine_with(MockHost::default());
        let ctx = SessionContext::console();

        engine.register_command("/banana");
        assert_eq!(
            engine.complete(&ctx, "/ban", Direction::Forward),
            Some("/banana".to_string())
        );

        engine.unregister_command("/banana");
        assert_eq!(engine.complete(&ctx, "/ban", Direction::Forward), None);
    }

    #[test]
    fn test_reset_restarts_bare_command_cycle() {
        let (mut engine, _) = engine_with(MockHost::default());
        let ctx = SessionContext::console();

        engine.complete(&ctx, "/ca", Direction::Forward);
        engine.reset(ResetReason::WindowSwitch);
        assert_eq!(
            engine.complete(&ctx, "/ca", Direction::Forward),
            Some("/caps".to_string())
        );
    }

    #[test]
    fn test_custom_command_marker() {
        let host: Arc<MockHost> = Arc::new(MockHost::default());
        let config = CompletionConfig {
            command_marker: '!',
            ..CompletionConfig::default()
        };
        let mut engine = CompletionEngine::new(config, host);
        let ctx = SessionContext::console();

        assert_eq!(
            engine.complete(&ctx, "!he", Direction::Forward),
            Some("!help".to_string())
        );
        assert_eq!(
            engine.complete(&ctx, "!beep o", Direction::Forward),
            Some("!beep on".to_string())
        );
        assert_eq!(engine.complete(&ctx, "/he", Direction::Forward), None);
    }
}
