use rusqlite::Connection;

use crate::core::config;
use crate::core::error::AppResult;

mod embedded {
    use refinery::embed_migrations;

    embed_migrations!("./migrations");
}

/// Applies the embedded SQL migrations.
///
/// The initial migration uses `CREATE TABLE IF NOT EXISTS`, so a database
/// that already holds a `users` table is adopted as-is.
pub fn run_migrations(conn: &mut Connection) -> AppResult<()> {
    conn.busy_timeout(config::storage::busy_timeout())?;

    let report = embedded::migrations::runner().run(conn)?;
    for migration in report.applied_migrations() {
        log::info!("Applied migration {}", migration);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();
        run_migrations(&mut conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'users'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_migrations_adopt_existing_table() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE users (
                user_id INTEGER PRIMARY KEY,
                username TEXT,
                registered INTEGER DEFAULT 0,
                reg_date TEXT,
                deposit_amount REAL DEFAULT 0,
                deposit_confirmed INTEGER DEFAULT 0,
                deposit_date TEXT,
                trader_id TEXT,
                click_id TEXT
            );
            INSERT INTO users (user_id, username) VALUES (1, 'legacy');",
        )
        .unwrap();

        run_migrations(&mut conn).unwrap();

        let username: String = conn
            .query_row("SELECT username FROM users WHERE user_id = 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(username, "legacy");
    }
}
