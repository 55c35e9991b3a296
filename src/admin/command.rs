//! Slash-command parsing
//!
//! Commands are parsed by hand instead of through a `BotCommands` derive so
//! that wrong or missing arguments still reach the router, which answers
//! with the command's usage string.

use std::str::FromStr;

use strum::{AsRefStr, EnumIter, EnumString};

/// Every command the admin bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CommandKind {
    Start,
    Stats,
    Users,
    User,
    Search,
    Broadcast,
    ConfirmReg,
    ConfirmDep,
}

impl CommandKind {
    /// Localization key of the description shown in the Telegram command list.
    pub fn description_key(self) -> &'static str {
        match self {
            CommandKind::Start => "admin-cmd-start",
            CommandKind::Stats => "admin-cmd-stats",
            CommandKind::Users => "admin-cmd-users",
            CommandKind::User => "admin-cmd-user",
            CommandKind::Search => "admin-cmd-search",
            CommandKind::Broadcast => "admin-cmd-broadcast",
            CommandKind::ConfirmReg => "admin-cmd-confirm-reg",
            CommandKind::ConfirmDep => "admin-cmd-confirm-dep",
        }
    }
}

/// A recognized command and its raw, trimmed argument string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub kind: CommandKind,
    pub args: &'a str,
}

/// Parses `/name[@bot] args...`.
///
/// Returns `None` for text that is not a slash-command or names an unknown command.
pub fn parse_command(text: &str) -> Option<ParsedCommand<'_>> {
    let text = text.trim();
    let body = text.strip_prefix('/')?;

    let (head, args) = match body.find(char::is_whitespace) {
        Some(idx) => (&body[..idx], body[idx..].trim()),
        None => (body, ""),
    };
    let name = head.split('@').next().unwrap_or(head);

    let kind = CommandKind::from_str(name).ok()?;
    Some(ParsedCommand { kind, args })
}
