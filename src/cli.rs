use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "regadmin")]
#[command(author, version, about = "Admin Telegram bot for the registration database", long_about = None)]
pub struct Cli {
    /// Path to the SQLite database (overrides USERS_DB)
    #[arg(long, global = true)]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot with long polling
    Run,

    /// Create the database file and apply migrations, then exit
    InitDb,

    /// Print user statistics and exit
    Stats,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
