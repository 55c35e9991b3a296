//! Telegram bot integration and handlers

pub mod bot;
pub mod delivery;
pub mod handlers;
pub mod keyboard;

// Re-exports for convenience
pub use bot::{create_bot, setup_admin_commands};
pub use delivery::{deliver_to_callback, deliver_to_chat};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use keyboard::inline_keyboard;
