//! Database access for the users table

pub mod db;
pub mod migrations;
pub mod store;

// Re-exports for convenience
pub use db::{create_pool, get_connection, DbConnection, DbPool, User, UserStats, UserSummary};
pub use store::{SqliteUserStore, UserStore};
