//! Telegram bot handler tree configuration
//!
//! The handlers are organized in a testable way, allowing integration tests
//! to use the same handler tree as production code.

mod schema;
mod types;

pub use schema::schema;
pub use types::{caller_id, HandlerDeps, HandlerError};
