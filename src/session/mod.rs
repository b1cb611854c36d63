//! Session collaborator interfaces
//!
//! The completion engine never talks to the messaging session, the roster,
//! the plugin runtime, or the filesystem directly. Everything it needs from
//! the outside world comes through the [`SessionHost`] trait, implemented by
//! the embedding shell. The engine is purely in-process: it defines no wire
//! protocol and persists nothing.
//!
//! [`SessionContext`] describes the window the user is currently typing in,
//! which changes which candidate sources apply (room occupants vs. roster
//! contacts, for example).

use std::path::Path;

/// Connection state of the underlying messaging session.
///
/// Contact-backed completions are offered only while connected; a
/// disconnected session simply yields no roster candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Session is connected and the roster is available
    Connected,
    /// Session is offline
    Disconnected,
}

/// The kind of window the user is typing in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowKind {
    /// The main console window
    Console,
    /// A one-to-one chat window
    Chat {
        /// Bare identifier of the chat partner
        contact: String,
    },
    /// A multi-user room window
    Room {
        /// Identifier of the room
        room: String,
    },
}

/// Per-window completion context supplied by the caller on every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Active window
    pub window: WindowKind,
}

impl SessionContext {
    /// Create a context for the console window
    pub fn console() -> Self {
        Self {
            window: WindowKind::Console,
        }
    }

    /// Create a context for a chat window
    pub fn chat(contact: impl Into<String>) -> Self {
        Self {
            window: WindowKind::Chat {
                contact: contact.into(),
            },
        }
    }

    /// Create a context for a room window
    pub fn room(room: impl Into<String>) -> Self {
        Self {
            window: WindowKind::Room { room: room.into() },
        }
    }
}

/// Trait for the external state the engine draws candidates from
///
/// Implementations are expected to be cheap: every method is called
/// synchronously from the input-editing loop. Failures must be expressed
/// as empty results, never as panics.
pub trait SessionHost: Send + Sync {
    /// Current connection state; gates contact-backed completions
    fn connection_status(&self) -> ConnectionStatus;

    /// Roster entries matching the partial token: display names and bare
    /// identifiers mixed, the way the contact list presents them
    fn roster_contacts(&self, partial: &str) -> Vec<String>;

    /// Bare identifiers from the roster matching the partial token
    fn roster_barejids(&self, partial: &str) -> Vec<String>;

    /// Full identifiers (with resource) matching the partial token
    fn roster_fulljids(&self, partial: &str) -> Vec<String>;

    /// Roster group names matching the partial token
    fn roster_groups(&self, partial: &str) -> Vec<String>;

    /// Occupant nicknames of the given room
    fn room_occupants(&self, room: &str) -> Vec<String>;

    /// Rooms with a pending invite
    fn room_invites(&self) -> Vec<String>;

    /// Raw entry names of a directory. Unreadable or missing directories
    /// yield an empty list. Hidden-file filtering and `~` expansion are the
    /// engine's responsibility, not the host's.
    fn list_directory(&self, path: &Path) -> Vec<String>;

    /// Installed theme names
    fn themes(&self) -> Vec<String>;

    /// Available script names
    fn scripts(&self) -> Vec<String>;

    /// Names of currently loaded plugins
    fn loaded_plugins(&self) -> Vec<String>;

    /// Names of installed but not loaded plugins
    fn unloaded_plugins(&self) -> Vec<String>;

    /// Give plugin-registered completers a chance at the full input line.
    /// `previous` requests the previous candidate instead of the next.
    fn plugin_complete(&self, _input: &str, _previous: bool) -> Option<String> {
        None
    }
}

#[cfg(test)]
pub mod mock {
    //! Call-counting host double shared by the completion test modules.

    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted host whose enumeration calls are counted, so tests can
    /// observe cache rebuilds.
    #[derive(Default)]
    pub struct MockHost {
        pub connected: bool,
        pub contacts: Vec<String>,
        pub barejids: Vec<String>,
        pub fulljids: Vec<String>,
        pub groups: Vec<String>,
        pub occupants: Vec<String>,
        pub invites: Vec<String>,
        pub theme_names: Vec<String>,
        pub script_names: Vec<String>,
        pub loaded: Vec<String>,
        pub unloaded: Vec<String>,
        pub dir_entries: Vec<String>,
        pub dir_root: Option<PathBuf>,
        pub plugin_reply: Option<String>,
        pub theme_calls: AtomicUsize,
        pub script_calls: AtomicUsize,
        pub plugin_calls: AtomicUsize,
        pub occupant_calls: AtomicUsize,
    }

    impl MockHost {
        pub fn connected() -> Self {
            Self {
                connected: true,
                ..Default::default()
            }
        }

        // Case-insensitive, the way display-name lookup behaves in a real
        // roster
        fn filter(items: &[String], partial: &str) -> Vec<String> {
            let partial = partial.to_lowercase();
            items
                .iter()
                .filter(|i| i.to_lowercase().starts_with(&partial))
                .cloned()
                .collect()
        }
    }

    impl SessionHost for MockHost {
        fn connection_status(&self) -> ConnectionStatus {
            if self.connected {
                ConnectionStatus::Connected
            } else {
                ConnectionStatus::Disconnected
            }
        }

        fn roster_contacts(&self, partial: &str) -> Vec<String> {
            Self::filter(&self.contacts, partial)
        }

        fn roster_barejids(&self, partial: &str) -> Vec<String> {
            Self::filter(&self.barejids, partial)
        }

        fn roster_fulljids(&self, partial: &str) -> Vec<String> {
            Self::filter(&self.fulljids, partial)
        }

        fn roster_groups(&self, partial: &str) -> Vec<String> {
            Self::filter(&self.groups, partial)
        }

        fn room_occupants(&self, _room: &str) -> Vec<String> {
            self.occupant_calls.fetch_add(1, Ordering::Relaxed);
            self.occupants.clone()
        }

        fn room_invites(&self) -> Vec<String> {
            self.invites.clone()
        }

        fn list_directory(&self, path: &Path) -> Vec<String> {
            if let Some(root) = &self.dir_root {
                if path != root.as_path() {
                    return Vec::new();
                }
            }
            self.dir_entries.clone()
        }

        fn themes(&self) -> Vec<String> {
            self.theme_calls.fetch_add(1, Ordering::Relaxed);
            self.theme_names.clone()
        }

        fn scripts(&self) -> Vec<String> {
            self.script_calls.fetch_add(1, Ordering::Relaxed);
            self.script_names.clone()
        }

        fn loaded_plugins(&self) -> Vec<String> {
            self.plugin_calls.fetch_add(1, Ordering::Relaxed);
            self.loaded.clone()
        }

        fn unloaded_plugins(&self) -> Vec<String> {
            self.plugin_calls.fetch_add(1, Ordering::Relaxed);
            self.unloaded.clone()
        }

        fn plugin_complete(&self, _input: &str, _previous: bool) -> Option<String> {
            self.plugin_reply.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_constructors() {
        assert_eq!(SessionContext::console().window, WindowKind::Console);

        let chat = SessionContext::chat("alice@server.org");
        assert_eq!(
            chat.window,
            WindowKind::Chat {
                contact: "alice@server.org".to_string()
            }
        );

        let room = SessionContext::room("rust@rooms.server.org");
        assert_eq!(
            room.window,
            WindowKind::Room {
                room: "rust@rooms.server.org".to_string()
            }
        );
    }

    #[test]
    fn test_mock_host_connection_status() {
        let host = mock::MockHost::connected();
        assert_eq!(host.connection_status(), ConnectionStatus::Connected);

        let host = mock::MockHost::default();
        assert_eq!(host.connection_status(), ConnectionStatus::Disconnected);
    }
}
