//! Logging initialization and startup diagnostics

use anyhow::Result;
use simplelog::*;
use std::fs::OpenOptions;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// The log file is opened in append mode so restarts keep the history.
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to open the file or a logger is already set
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", log_file_path, e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the effective configuration at startup. Secrets are never printed.
pub fn log_startup_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("Database: {}", *config::DATABASE_PATH);
    log::info!("Log file: {}", *config::LOG_FILE_PATH);
    log::info!("Language: {}", *config::BOT_LANG);

    match *config::admin::ADMIN_ID {
        Some(id) => log::info!("Admin ID: {}", id),
        None => log::error!("ADMIN_ID: not set, every request would be denied"),
    }

    if config::BOT_TOKEN.is_some() {
        log::info!("BOT_TOKEN: set");
    } else {
        log::error!("BOT_TOKEN: not set");
    }

    if let Some(ref url) = *config::BOT_API_URL {
        log::info!("Bot API URL: {}", url);
    }
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn test_init_logger_creates_log_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bot.log");

        // Another test may already have installed a global logger, so only
        // the side effect on disk is asserted.
        let _ = init_logger(path.to_str().unwrap());

        assert!(path.exists());
    }

    #[test]
    fn test_init_logger_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("bot.log");

        assert!(init_logger(path.to_str().unwrap()).is_err());
    }
}
