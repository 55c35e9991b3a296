//! Inline-button callback tokens: `admin:<action>[:<param>]`

use std::fmt;

pub const CALLBACK_PREFIX: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Stats,
    /// Re-render the user list starting at `offset`
    Users { offset: u32 },
    Search,
    Broadcast,
    Settings,
    Menu,
}

impl CallbackAction {
    /// Parses callback data. Returns `None` for anything that is not an admin token.
    ///
    /// A missing or malformed users offset falls back to 0. Parameters on
    /// parameterless actions are ignored.
    pub fn parse(data: &str) -> Option<Self> {
        let rest = data.strip_prefix(CALLBACK_PREFIX)?.strip_prefix(':')?;
        let (action, param) = match rest.split_once(':') {
            Some((action, param)) => (action, Some(param)),
            None => (rest, None),
        };

        let parsed = match action {
            "stats" => CallbackAction::Stats,
            "users" => CallbackAction::Users {
                offset: param.and_then(|p| p.trim().parse().ok()).unwrap_or(0),
            },
            "search" => CallbackAction::Search,
            "broadcast" => CallbackAction::Broadcast,
            "settings" => CallbackAction::Settings,
            "menu" => CallbackAction::Menu,
            _ => return None,
        };
        Some(parsed)
    }
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackAction::Stats => write!(f, "{CALLBACK_PREFIX}:stats"),
            CallbackAction::Users { offset } => write!(f, "{CALLBACK_PREFIX}:users:{offset}"),
            CallbackAction::Search => write!(f, "{CALLBACK_PREFIX}:search"),
            CallbackAction::Broadcast => write!(f, "{CALLBACK_PREFIX}:broadcast"),
            CallbackAction::Settings => write!(f, "{CALLBACK_PREFIX}:settings"),
            CallbackAction::Menu => write!(f, "{CALLBACK_PREFIX}:menu"),
        }
    }
}
