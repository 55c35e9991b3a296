use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use regadmin::admin::format::format_stats;
use regadmin::admin::AdminRouter;
use regadmin::cli::{Cli, Commands};
use regadmin::core::config::{self, admin::AdminSettings};
use regadmin::core::{init_logger, log_startup_configuration};
use regadmin::i18n;
use regadmin::storage::{SqliteUserStore, UserStore};
use regadmin::telegram::{create_bot, schema, setup_admin_commands, HandlerDeps};

/// Main entry point for the admin bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, database, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env before any config is read
    let _ = dotenv();

    let cli = Cli::parse_args();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    let database_path = cli.db.clone().unwrap_or_else(|| config::DATABASE_PATH.clone());

    match cli.command {
        Some(Commands::Run) | None => run_bot(&database_path).await,
        Some(Commands::InitDb) => run_init_db(&database_path),
        Some(Commands::Stats) => run_print_stats(&database_path),
    }
}

fn open_store(database_path: &str) -> Result<SqliteUserStore> {
    SqliteUserStore::open(database_path)
        .map_err(|e| anyhow::anyhow!("Failed to open database {}: {}", database_path, e))
}

/// Creates the database and applies migrations
fn run_init_db(database_path: &str) -> Result<()> {
    open_store(database_path)?;
    log::info!("Database {} is ready", database_path);
    Ok(())
}

/// Prints the stats block to stdout
fn run_print_stats(database_path: &str) -> Result<()> {
    let store = open_store(database_path)?;
    let stats = store.stats()?;
    println!("{}", format_stats(&i18n::lang_from_code(&config::BOT_LANG), &stats));
    Ok(())
}

/// Runs the bot with long polling until Ctrl+C
async fn run_bot(database_path: &str) -> Result<()> {
    log_startup_configuration();

    let settings = AdminSettings::from_env()?;
    let token = config::BOT_TOKEN
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN environment variable not set"))?;

    let store: Arc<dyn UserStore> = Arc::new(open_store(database_path)?);
    let router = Arc::new(AdminRouter::new(store, settings.clone()));

    let bot = create_bot(token)?;

    if let Err(e) = setup_admin_commands(&bot, &settings).await {
        log::warn!("Failed to register admin commands: {}", e);
    }

    log::info!("Starting admin bot for user {}", settings.admin_id);

    Dispatcher::builder(bot, schema(HandlerDeps::new(router)))
        .enable_ctrlc_handler()
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
