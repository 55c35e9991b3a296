use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

use crate::core::config;
use crate::core::error::AppResult;
use crate::storage::migrations::run_migrations;

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Telegram ID of the user, immutable
    pub user_id: i64,
    /// Telegram username without the leading `@`, if known
    pub username: Option<String>,
    pub registered: bool,
    /// Set when the registration was confirmed
    pub reg_date: Option<String>,
    /// `None` only for rows inserted with an explicit NULL
    pub deposit_amount: Option<f64>,
    pub deposit_confirmed: bool,
    /// Set when the deposit was confirmed
    pub deposit_date: Option<String>,
    /// Trader ID reported by the partner platform
    pub trader_id: Option<String>,
    /// Click ID of the tracking link the user came from
    pub click_id: Option<String>,
}

/// Compact row used for list pages.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub user_id: i64,
    pub username: Option<String>,
    pub registered: bool,
    pub deposit_confirmed: bool,
}

/// Aggregate numbers for the stats screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UserStats {
    pub total: i64,
    pub registered: i64,
    pub deposited: i64,
    /// Sum of `deposit_amount` over deposit-confirmed users, 0.0 when there are none
    pub total_deposits: f64,
}

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

const USER_COLUMNS: &str =
    "user_id, username, registered, reg_date, deposit_amount, deposit_confirmed, deposit_date, trader_id, click_id";

const SUMMARY_COLUMNS: &str = "user_id, username, registered, deposit_confirmed";

/// Create a new database connection pool
///
/// Initializes a pool with up to `MAX_POOL_SIZE` connections, sets a busy
/// timeout on every connection and applies the embedded migrations.
///
/// # Arguments
///
/// * `database_path` - Path to SQLite database file
///
/// # Example
///
/// ```no_run
/// use regadmin::storage::db;
///
/// let pool = db::create_pool("users.db")?;
/// # Ok::<(), regadmin::core::AppError>(())
/// ```
pub fn create_pool(database_path: &str) -> AppResult<DbPool> {
    let manager = SqliteConnectionManager::file(database_path)
        .with_init(|conn| conn.busy_timeout(config::storage::busy_timeout()));
    let pool = Pool::builder().max_size(config::storage::MAX_POOL_SIZE).build(manager)?;

    let mut conn = pool.get()?;
    run_migrations(&mut conn)?;

    Ok(pool)
}

/// Get a connection from the pool
///
/// The connection is returned to the pool when dropped.
pub fn get_connection(pool: &DbPool) -> std::result::Result<DbConnection, r2d2::Error> {
    pool.get()
}

/// Current local time in the format stored in `reg_date` / `deposit_date`.
pub fn now_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

fn flag(row: &Row<'_>, idx: usize) -> Result<bool> {
    Ok(row.get::<_, Option<i64>>(idx)?.unwrap_or(0) != 0)
}

fn user_from_row(row: &Row<'_>) -> Result<User> {
    Ok(User {
        user_id: row.get(0)?,
        username: row.get(1)?,
        registered: flag(row, 2)?,
        reg_date: row.get(3)?,
        deposit_amount: row.get(4)?,
        deposit_confirmed: flag(row, 5)?,
        deposit_date: row.get(6)?,
        trader_id: row.get(7)?,
        click_id: row.get(8)?,
    })
}

fn summary_from_row(row: &Row<'_>) -> Result<UserSummary> {
    Ok(UserSummary {
        user_id: row.get(0)?,
        username: row.get(1)?,
        registered: flag(row, 2)?,
        deposit_confirmed: flag(row, 3)?,
    })
}

/// Wraps `query` into a LIKE pattern that matches it as a literal substring.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Counts users by status and sums confirmed deposits.
pub fn get_stats(conn: &Connection) -> Result<UserStats> {
    conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(registered = 1), 0),
                COALESCE(SUM(deposit_confirmed = 1), 0),
                COALESCE(SUM(CASE WHEN deposit_confirmed = 1 THEN deposit_amount END), 0.0)
         FROM users",
        [],
        |row| {
            Ok(UserStats {
                total: row.get(0)?,
                registered: row.get(1)?,
                deposited: row.get(2)?,
                total_deposits: row.get(3)?,
            })
        },
    )
}

/// Returns one page of users ordered by `user_id`.
pub fn list_users(conn: &Connection, offset: u32, limit: u32) -> Result<Vec<UserSummary>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SUMMARY_COLUMNS} FROM users ORDER BY user_id LIMIT ?1 OFFSET ?2"
    ))?;
    let rows = stmt.query_map(params![limit, offset], summary_from_row)?;
    rows.collect()
}

/// Looks a user up by Telegram ID.
pub fn get_user(conn: &Connection, user_id: i64) -> Result<Option<User>> {
    conn.query_row(
        &format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = ?1"),
        params![user_id],
        user_from_row,
    )
    .optional()
}

/// Looks a user up by exact username.
pub fn get_user_by_username(conn: &Connection, username: &str) -> Result<Option<User>> {
    conn.query_row(
        &format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1 ORDER BY user_id LIMIT 1"),
        params![username],
        user_from_row,
    )
    .optional()
}

/// Resolves an operator-supplied identifier to a user.
///
/// An identifier that parses as an integer is tried as `user_id` first; when
/// that finds nothing it is treated as a username. A leading `@` on the
/// username is ignored.
pub fn find_user(conn: &Connection, identifier: &str) -> Result<Option<User>> {
    if let Ok(user_id) = identifier.parse::<i64>() {
        if let Some(user) = get_user(conn, user_id)? {
            return Ok(Some(user));
        }
    }

    let username = identifier.strip_prefix('@').unwrap_or(identifier);
    get_user_by_username(conn, username)
}

/// Substring search over `user_id`, `username` and `trader_id`, ordered by `user_id`.
pub fn search_users(conn: &Connection, query: &str, offset: u32, limit: u32) -> Result<Vec<UserSummary>> {
    let pattern = like_pattern(query);
    let mut stmt = conn.prepare(&format!(
        "SELECT {SUMMARY_COLUMNS} FROM users
         WHERE CAST(user_id AS TEXT) LIKE ?1 ESCAPE '\\'
            OR username LIKE ?1 ESCAPE '\\'
            OR trader_id LIKE ?1 ESCAPE '\\'
         ORDER BY user_id LIMIT ?2 OFFSET ?3"
    ))?;
    let rows = stmt.query_map(params![pattern, limit, offset], summary_from_row)?;
    rows.collect()
}

/// Marks a user as registered. Keeps an existing `reg_date`, otherwise stamps now.
///
/// Returns `true` if the user exists. SQLite counts every row matched by the
/// WHERE clause, so re-confirming an already registered user is also `true`.
pub fn confirm_registration(conn: &Connection, user_id: i64) -> Result<bool> {
    let updated = conn.execute(
        "UPDATE users SET registered = 1, reg_date = COALESCE(reg_date, ?1) WHERE user_id = ?2",
        params![now_timestamp(), user_id],
    )?;
    Ok(updated > 0)
}

/// Confirms a deposit, overwriting any previous amount and date.
///
/// Returns `true` if the user exists.
pub fn confirm_deposit(conn: &Connection, user_id: i64, amount: f64) -> Result<bool> {
    let updated = conn.execute(
        "UPDATE users SET deposit_confirmed = 1, deposit_amount = ?1, deposit_date = ?2 WHERE user_id = ?3",
        params![amount, now_timestamp(), user_id],
    )?;
    Ok(updated > 0)
}
