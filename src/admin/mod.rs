//! Admin panel: command parsing, callback tokens, menus, formatting and routing

pub mod callback;
pub mod command;
pub mod format;
pub mod menu;
pub mod router;

pub use callback::CallbackAction;
pub use command::{parse_command, CommandKind, ParsedCommand};
pub use menu::{Menu, MenuButton};
pub use router::{AdminError, AdminRouter, Inbound, Reply, Response};
