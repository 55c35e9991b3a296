use once_cell::sync::Lazy;
use secrecy::SecretString;
use std::env;
use std::time::Duration;

/// Reads the first non-empty value among `keys`.
fn env_any(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Database file path
/// Read from USERS_DB or DATABASE_PATH environment variable
/// Default: users.db
pub static DATABASE_PATH: Lazy<String> =
    Lazy::new(|| env_any(&["USERS_DB", "DATABASE_PATH"]).unwrap_or_else(|| "users.db".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: admin-bot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env_any(&["LOG_FILE_PATH"]).unwrap_or_else(|| "admin-bot.log".to_string()));

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<Option<SecretString>> =
    Lazy::new(|| env_any(&["BOT_TOKEN", "TELOXIDE_TOKEN"]).map(SecretString::from));

/// Custom Bot API server (local telegram-bot-api), if any
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env_any(&["BOT_API_URL"]));

/// Interface language code for operator-facing texts ("ru" or "en")
pub static BOT_LANG: Lazy<String> = Lazy::new(|| env_any(&["BOT_LANG"]).unwrap_or_else(|| "ru".to_string()));

pub mod admin {
    use once_cell::sync::Lazy;
    use unic_langid::LanguageIdentifier;

    use super::env_any;
    use crate::core::error::{AppError, AppResult};
    use crate::i18n;

    /// Number of users rendered per list page
    pub const PAGE_SIZE: u32 = 10;

    /// Telegram user ID of the only operator allowed to use the bot
    /// Read from ADMIN_ID environment variable
    pub static ADMIN_ID: Lazy<Option<i64>> = Lazy::new(|| env_any(&["ADMIN_ID"]).and_then(|raw| raw.parse().ok()));

    /// Everything the command router needs to know about its operator.
    #[derive(Debug, Clone)]
    pub struct AdminSettings {
        pub admin_id: i64,
        pub lang: LanguageIdentifier,
        pub page_size: u32,
    }

    impl AdminSettings {
        pub fn new(admin_id: i64, lang: LanguageIdentifier) -> Self {
            Self {
                admin_id,
                lang,
                page_size: PAGE_SIZE,
            }
        }

        /// Builds settings from `ADMIN_ID` and `BOT_LANG`.
        ///
        /// # Errors
        ///
        /// Returns `AppError::Config` when `ADMIN_ID` is missing or not an integer.
        pub fn from_env() -> AppResult<Self> {
            let admin_id = ADMIN_ID.ok_or_else(|| AppError::Config("ADMIN_ID is not set or is not an integer".into()))?;
            Ok(Self::new(admin_id, i18n::lang_from_code(&super::BOT_LANG)))
        }
    }
}

pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

pub mod storage {
    use super::Duration;

    /// Maximum number of pooled SQLite connections
    pub const MAX_POOL_SIZE: u32 = 10;

    /// How long a connection waits on a locked database before failing
    pub const BUSY_TIMEOUT_SECS: u64 = 5;

    pub fn busy_timeout() -> Duration {
        Duration::from_secs(BUSY_TIMEOUT_SECS)
    }
}
