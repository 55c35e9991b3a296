//! Database fixtures: a migrated SQLite file in a temp directory

#![allow(dead_code)]

use std::sync::Arc;

use regadmin::core::config::admin::AdminSettings;
use regadmin::i18n::lang_from_code;
use regadmin::storage::db::{self, User};
use regadmin::storage::{SqliteUserStore, UserStore};
use regadmin::AdminRouter;
use rusqlite::params;
use tempfile::TempDir;

pub const ADMIN_ID: i64 = 777;

/// A fresh database file. Removed when dropped.
///
/// A file is used instead of `:memory:` because every pooled connection
/// to `:memory:` would see its own empty database.
pub struct TestDb {
    _dir: TempDir,
    pub path: String,
    pub store: Arc<SqliteUserStore>,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("users.db").to_string_lossy().into_owned();
        let store = Arc::new(SqliteUserStore::open(&path).expect("open test database"));
        Self { _dir: dir, path, store }
    }

    pub fn insert(&self, user: &User) {
        let conn = db::get_connection(self.store.pool()).expect("connection");
        conn.execute(
            "INSERT INTO users (user_id, username, registered, reg_date, deposit_amount,
                                deposit_confirmed, deposit_date, trader_id, click_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                user.user_id,
                user.username,
                user.registered,
                user.reg_date,
                user.deposit_amount,
                user.deposit_confirmed,
                user.deposit_date,
                user.trader_id,
                user.click_id,
            ],
        )
        .expect("insert user");
    }

    /// Inserts `count` plain users with IDs `1..=count`.
    pub fn insert_many(&self, count: i64) {
        for id in 1..=count {
            self.insert(&new_user(id, &format!("user{id}")));
        }
    }

    pub fn get(&self, user_id: i64) -> Option<User> {
        let conn = db::get_connection(self.store.pool()).expect("connection");
        db::get_user(&conn, user_id).expect("get user")
    }

    pub fn router(&self) -> AdminRouter {
        let store: Arc<dyn UserStore> = self.store.clone();
        AdminRouter::new(store, AdminSettings::new(ADMIN_ID, lang_from_code("en")))
    }
}

/// A user as the registration bot inserts it: nothing confirmed yet.
pub fn new_user(user_id: i64, username: &str) -> User {
    User {
        user_id,
        username: Some(username.to_string()),
        registered: false,
        reg_date: None,
        deposit_amount: Some(0.0),
        deposit_confirmed: false,
        deposit_date: None,
        trader_id: None,
        click_id: None,
    }
}
