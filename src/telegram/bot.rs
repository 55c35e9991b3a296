//! Bot instance creation and command registration

use reqwest::ClientBuilder;
use secrecy::{ExposeSecret, SecretString};
use strum::IntoEnumIterator;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, BotCommandScope, Recipient};

use crate::admin::CommandKind;
use crate::core::config::{self, admin::AdminSettings};
use crate::i18n::t;

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Invalid `BOT_API_URL` or HTTP client build failure
pub fn create_bot(token: &SecretString) -> anyhow::Result<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(token.expose_secret(), client);

    let bot = match config::BOT_API_URL.as_deref() {
        Some(bot_api_url) => {
            log::info!("Using custom Bot API URL: {}", bot_api_url);
            let url = url::Url::parse(bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
            bot.set_api_url(url)
        }
        None => bot,
    };

    Ok(bot)
}

/// The command list shown to the admin, in declaration order.
pub fn admin_commands(settings: &AdminSettings) -> Vec<BotCommand> {
    CommandKind::iter()
        .map(|kind| BotCommand::new(kind.as_ref(), t(&settings.lang, kind.description_key())))
        .collect()
}

/// Registers the admin command list, visible only in the admin's private chat.
pub async fn setup_admin_commands(bot: &Bot, settings: &AdminSettings) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(admin_commands(settings))
        .scope(BotCommandScope::Chat {
            chat_id: Recipient::Id(ChatId(settings.admin_id)),
        })
        .await?;

    Ok(())
}
