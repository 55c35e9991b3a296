//! The `UserStore` seam between the command router and SQLite

use std::sync::Arc;

use crate::core::error::AppResult;
use crate::storage::db::{self, DbPool, User, UserStats, UserSummary};

/// Read/write operations the admin router needs from the users table.
///
/// Implementations must be safe to call from several handlers at once.
pub trait UserStore: Send + Sync {
    fn stats(&self) -> AppResult<UserStats>;

    fn list_users(&self, offset: u32, limit: u32) -> AppResult<Vec<UserSummary>>;

    /// `user_id` match first, then exact username.
    fn find_user(&self, identifier: &str) -> AppResult<Option<User>>;

    fn search_users(&self, query: &str, offset: u32, limit: u32) -> AppResult<Vec<UserSummary>>;

    /// `Ok(false)` means the user does not exist.
    fn confirm_registration(&self, user_id: i64) -> AppResult<bool>;

    /// `Ok(false)` means the user does not exist.
    fn confirm_deposit(&self, user_id: i64, amount: f64) -> AppResult<bool>;
}

/// `UserStore` over an r2d2 SQLite pool. Every call checks out its own connection.
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: Arc<DbPool>,
}

impl SqliteUserStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Opens (and migrates) the database at `database_path`.
    pub fn open(database_path: &str) -> AppResult<Self> {
        Ok(Self::new(Arc::new(db::create_pool(database_path)?)))
    }

    pub fn pool(&self) -> &Arc<DbPool> {
        &self.pool
    }
}

impl UserStore for SqliteUserStore {
    fn stats(&self) -> AppResult<UserStats> {
        let conn = db::get_connection(&self.pool)?;
        Ok(db::get_stats(&conn)?)
    }

    fn list_users(&self, offset: u32, limit: u32) -> AppResult<Vec<UserSummary>> {
        let conn = db::get_connection(&self.pool)?;
        Ok(db::list_users(&conn, offset, limit)?)
    }

    fn find_user(&self, identifier: &str) -> AppResult<Option<User>> {
        let conn = db::get_connection(&self.pool)?;
        Ok(db::find_user(&conn, identifier)?)
    }

    fn search_users(&self, query: &str, offset: u32, limit: u32) -> AppResult<Vec<UserSummary>> {
        let conn = db::get_connection(&self.pool)?;
        Ok(db::search_users(&conn, query, offset, limit)?)
    }

    fn confirm_registration(&self, user_id: i64) -> AppResult<bool> {
        let conn = db::get_connection(&self.pool)?;
        let updated = db::confirm_registration(&conn, user_id)?;
        log::info!("confirm_registration user_id={} found={}", user_id, updated);
        Ok(updated)
    }

    fn confirm_deposit(&self, user_id: i64, amount: f64) -> AppResult<bool> {
        let conn = db::get_connection(&self.pool)?;
        let updated = db::confirm_deposit(&conn, user_id, amount)?;
        log::info!(
            "confirm_deposit user_id={} amount={} found={}",
            user_id,
            amount,
            updated
        );
        Ok(updated)
    }
}
