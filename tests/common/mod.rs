//! Common test utilities
//!
//! This module is shared across all integration tests

pub mod fixtures;
pub mod telegram;

#[allow(unused_imports)]
pub use fixtures::{new_user, TestDb, ADMIN_ID};
#[allow(unused_imports)]
pub use telegram::{callback_query, TelegramMock};
