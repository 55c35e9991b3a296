//! Regadmin - admin Telegram bot for a registration database
//!
//! A single operator browses the `users` table, looks up individual users
//! and confirms registrations and deposits from a private chat with the bot.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors and logging
//! - `storage`: SQLite pool, migrations and the `UserStore` seam
//! - `admin`: command parsing, menus, text formatting and the router
//! - `telegram`: teloxide glue that feeds updates into the router

pub mod admin;
pub mod cli;
pub mod core;
pub mod i18n;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::admin::{AdminRouter, Inbound, Response};
pub use crate::core::{config, AppError, AppResult};
pub use crate::storage::{create_pool, get_connection, DbConnection, DbPool, SqliteUserStore, UserStore};
