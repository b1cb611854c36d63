//! Static vocabularies and the default command grammar
//!
//! The tables here mirror the shell's command surface: the bare command
//! registry, the boolean-toggle catalog, and the per-command parameter
//! rules wired to their candidate sources.

use super::grammar::{CommandGrammar, CommandId};
use super::matcher::PathRule;
use super::prefix_set::PrefixSet;
use super::source::{DynamicSource, VolatileSource};
use crate::session::{ConnectionStatus, SessionHost, WindowKind};

/// Built-in command names, marker included
pub const COMMAND_NAMES: &[&str] = &[
    "/account",
    "/autoaway",
    "/beep",
    "/caps",
    "/carbons",
    "/clear",
    "/close",
    "/connect",
    "/disconnect",
    "/flash",
    "/help",
    "/history",
    "/info",
    "/join",
    "/leave",
    "/mam",
    "/msg",
    "/occupants",
    "/os",
    "/outtype",
    "/ox",
    "/ping",
    "/plugins",
    "/privileges",
    "/quit",
    "/roster",
    "/script",
    "/sendfile",
    "/silence",
    "/slashguard",
    "/splash",
    "/states",
    "/status",
    "/sub",
    "/theme",
    "/tray",
    "/vercheck",
    "/who",
    "/wintitle",
    "/wrap",
];

/// Commands whose only argument is an on/off switch
pub const BOOLEAN_TOGGLES: &[&str] = &[
    "/beep",
    "/carbons",
    "/flash",
    "/history",
    "/mam",
    "/os",
    "/outtype",
    "/privileges",
    "/silence",
    "/slashguard",
    "/splash",
    "/states",
    "/vercheck",
    "/wrap",
];

/// Presence filters understood by `/who` outside rooms
const WHO_PRESENCE: &[&str] = &[
    "chat",
    "online",
    "away",
    "xa",
    "dnd",
    "available",
    "unavailable",
    "offline",
    "any",
];

/// Role and affiliation filters understood by `/who` inside rooms
const WHO_ROOM: &[&str] = &[
    "moderator",
    "participant",
    "visitor",
    "owner",
    "admin",
    "member",
    "none",
];

/// Recipient lookup: room occupants in rooms, roster entries elsewhere
/// while connected. Roster matching is the host's; occupant nicknames are
/// matched here since the host lists them unfiltered.
fn recipients() -> VolatileSource {
    VolatileSource::new(|host, ctx, partial| match &ctx.window {
        WindowKind::Room { room } => host
            .room_occupants(room)
            .into_iter()
            .filter(|nick| nick.starts_with(partial))
            .collect(),
        _ => roster_gated(host, |h| {
            let mut items = h.roster_contacts(partial);
            items.extend(h.roster_barejids(partial));
            items
        }),
    })
}

/// Bare-identifier lookup, empty while disconnected
fn barejids() -> VolatileSource {
    VolatileSource::new(|host, _ctx, partial| {
        roster_gated(host, |h| h.roster_barejids(partial))
    })
}

fn roster_gated<F>(host: &dyn SessionHost, fetch: F) -> Vec<String>
where
    F: Fn(&dyn SessionHost) -> Vec<String>,
{
    match host.connection_status() {
        ConnectionStatus::Connected => fetch(host),
        ConnectionStatus::Disconnected => Vec::new(),
    }
}

/// Build the default parameter grammar for the built-in commands
pub fn default_grammar() -> CommandGrammar {
    let mut grammar = CommandGrammar::new();

    grammar.register(
        CommandId::Account,
        PathRule::with_set(
            "/account",
            PrefixSet::with_items([
                "list", "show", "add", "remove", "enable", "disable", "default", "rename",
                "set", "clear",
            ]),
        ),
    );
    grammar.register(
        CommandId::Account,
        PathRule::with_set(
            "/account set",
            PrefixSet::with_items([
                "jid", "server", "port", "status", "online", "chat", "away", "xa", "dnd",
                "resource", "password", "muc", "nick", "otr", "pgpkeyid", "startscript",
                "tls", "auth", "theme",
            ]),
        ),
    );
    grammar.register(
        CommandId::Account,
        PathRule::with_dynamic(
            "/account set theme",
            DynamicSource::new("account-themes", |h| h.themes()),
        ),
    );
    grammar.register(
        CommandId::Account,
        PathRule::with_set(
            "/account clear",
            PrefixSet::with_items([
                "password", "server", "port", "otr", "pgpkeyid", "startscript", "muc",
                "resource",
            ]),
        ),
    );
    grammar.register(
        CommandId::Account,
        PathRule::with_set("/account default", PrefixSet::with_items(["set", "off"])),
    );

    grammar.register(
        CommandId::Theme,
        PathRule::with_set(
            "/theme",
            PrefixSet::with_items(["list", "load", "full-load", "properties"]),
        ),
    );
    grammar.register(
        CommandId::Theme,
        PathRule::with_dynamic("/theme load", DynamicSource::new("themes", |h| h.themes())),
    );
    grammar.register(
        CommandId::Theme,
        PathRule::with_dynamic(
            "/theme full-load",
            DynamicSource::new("themes", |h| h.themes()),
        ),
    );

    grammar.register(
        CommandId::Plugins,
        PathRule::with_set(
            "/plugins",
            PrefixSet::with_items([
                "install", "uninstall", "update", "load", "unload", "reload",
                "python_version",
            ]),
        ),
    );
    grammar.register(
        CommandId::Plugins,
        PathRule::with_dynamic(
            "/plugins load",
            DynamicSource::new("unloaded-plugins", |h| h.unloaded_plugins()),
        ),
    );
    grammar.register(
        CommandId::Plugins,
        PathRule::with_dynamic(
            "/plugins unload",
            DynamicSource::new("loaded-plugins", |h| h.loaded_plugins()),
        ),
    );
    grammar.register(
        CommandId::Plugins,
        PathRule::with_dynamic(
            "/plugins reload",
            DynamicSource::new("loaded-plugins", |h| h.loaded_plugins()),
        ),
    );
    grammar.register(
        CommandId::Plugins,
        PathRule::with_dynamic(
            "/plugins uninstall",
            DynamicSource::new("loaded-plugins", |h| h.loaded_plugins()),
        ),
    );
    grammar.register(CommandId::Plugins, PathRule::with_filepath("/plugins install"));
    grammar.register(CommandId::Plugins, PathRule::with_filepath("/plugins update"));

    grammar.register(
        CommandId::Script,
        PathRule::with_set("/script", PrefixSet::with_items(["run", "list", "show"])),
    );
    grammar.register(
        CommandId::Script,
        PathRule::with_dynamic("/script run", DynamicSource::new("scripts", |h| h.scripts())),
    );
    grammar.register(
        CommandId::Script,
        PathRule::with_dynamic("/script show", DynamicSource::new("scripts", |h| h.scripts())),
    );

    // Topics first, then the command names with the marker stripped
    let mut help_words: Vec<String> =
        ["commands", "navigation", "search"].iter().map(|s| s.to_string()).collect();
    help_words.extend(COMMAND_NAMES.iter().map(|name| name[1..].to_string()));
    grammar.register(
        CommandId::Help,
        PathRule::with_set("/help", PrefixSet::with_items(help_words)),
    );
    grammar.register(
        CommandId::Help,
        PathRule::with_set(
            "/help commands",
            PrefixSet::with_items([
                "chat",
                "groupchat",
                "presence",
                "roster",
                "discovery",
                "connection",
                "ui",
                "plugins",
            ]),
        ),
    );

    grammar.register(
        CommandId::Who,
        PathRule::with_volatile(
            "/who",
            VolatileSource::new(|host, ctx, partial| match &ctx.window {
                WindowKind::Room { .. } => WHO_ROOM
                    .iter()
                    .filter(|s| s.starts_with(partial))
                    .map(|s| s.to_string())
                    .collect(),
                _ => {
                    let mut items: Vec<String> = WHO_PRESENCE
                        .iter()
                        .filter(|s| s.starts_with(partial))
                        .map(|s| s.to_string())
                        .collect();
                    items.extend(roster_gated(host, |h| h.roster_groups(partial)));
                    items
                }
            }),
        ),
    );

    grammar.register(CommandId::Msg, PathRule::with_volatile("/msg", recipients()));
    grammar.register(CommandId::Info, PathRule::with_volatile("/info", recipients()));
    grammar.register(CommandId::Caps, PathRule::with_volatile("/caps", recipients()));

    grammar.register(
        CommandId::Ping,
        PathRule::with_volatile(
            "/ping",
            VolatileSource::new(|host, _ctx, partial| {
                roster_gated(host, |h| h.roster_fulljids(partial))
            }),
        ),
    );

    grammar.register(
        CommandId::Join,
        PathRule::with_volatile(
            "/join",
            VolatileSource::new(|host, _ctx, partial| {
                host.room_invites()
                    .into_iter()
                    .filter(|room| room.starts_with(partial))
                    .collect()
            }),
        ),
    );

    grammar.register(CommandId::Sendfile, PathRule::with_filepath("/sendfile"));

    grammar.register(
        CommandId::Ox,
        PathRule::with_set(
            "/ox",
            PrefixSet::with_items([
                "keys", "contacts", "start", "end", "log", "announce", "discover",
                "request",
            ]),
        ),
    );
    grammar.register(CommandId::Ox, PathRule::with_filepath("/ox announce"));
    grammar.register(
        CommandId::Ox,
        PathRule::with_set("/ox log", PrefixSet::with_items(["on", "off", "redact"])),
    );
    grammar.register(
        CommandId::Ox,
        PathRule::with_volatile("/ox discover", barejids()),
    );
    grammar.register(
        CommandId::Ox,
        PathRule::with_volatile("/ox request", barejids()),
    );

    grammar.register(
        CommandId::Occupants,
        PathRule::with_set(
            "/occupants",
            PrefixSet::with_items(["show", "hide", "default", "size"]),
        ),
    );
    grammar.register(
        CommandId::Occupants,
        PathRule::with_set(
            "/occupants default",
            PrefixSet::with_items(["show", "hide", "size"]),
        ),
    );

    grammar.register(
        CommandId::Sub,
        PathRule::with_set(
            "/sub",
            PrefixSet::with_items(["request", "allow", "deny", "show", "sent", "received"]),
        ),
    );
    grammar.register(
        CommandId::Sub,
        PathRule::with_volatile("/sub allow", barejids()),
    );
    grammar.register(
        CommandId::Sub,
        PathRule::with_volatile("/sub deny", barejids()),
    );

    grammar.register(
        CommandId::Roster,
        PathRule::with_set(
            "/roster",
            PrefixSet::with_items([
                "add", "remove", "nick", "clearnick", "group", "show", "hide",
            ]),
        ),
    );
    grammar.register(
        CommandId::Roster,
        PathRule::with_volatile("/roster remove", barejids()),
    );
    grammar.register(
        CommandId::Roster,
        PathRule::with_volatile("/roster nick", barejids()),
    );
    grammar.register(
        CommandId::Roster,
        PathRule::with_volatile("/roster clearnick", barejids()),
    );
    grammar.register(
        CommandId::Roster,
        PathRule::with_set(
            "/roster group",
            PrefixSet::with_items(["add", "remove", "show"]),
        ),
    );

    grammar.register(
        CommandId::Connect,
        PathRule::with_set(
            "/connect",
            PrefixSet::with_items(["server", "port", "tls", "auth"]),
        ),
    );

    grammar.register(
        CommandId::Tray,
        PathRule::with_set(
            "/tray",
            PrefixSet::with_items(["on", "off", "read", "timer"]),
        ),
    );

    grammar.register(
        CommandId::Status,
        PathRule::with_set("/status", PrefixSet::with_items(["set", "get"])),
    );
    grammar.register(
        CommandId::Status,
        PathRule::with_set(
            "/status set",
            PrefixSet::with_items(["online", "chat", "away", "dnd", "xa"]),
        ),
    );

    grammar
}

/// Build the on/off rules for the boolean-toggle catalog
pub fn boolean_rules() -> Vec<PathRule> {
    BOOLEAN_TOGGLES
        .iter()
        .map(|command| PathRule::with_set(command, PrefixSet::with_items(["on", "off"])))
        .collect()
}
