//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{caller_id, HandlerDeps, HandlerError};
use crate::admin::Inbound;
use crate::telegram::delivery::{deliver_to_callback, deliver_to_chat};

/// Creates the dispatcher schema for the admin bot.
///
/// The same tree is used in production and can be driven from integration tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(command_handler(deps.clone()))
        .branch(callback_handler(deps))
}

fn is_slash_command(msg: &Message) -> bool {
    msg.text().is_some_and(|text| text.trim_start().starts_with('/'))
}

/// Handler for slash-commands. Plain text is not routed.
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| is_slash_command(&msg))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move { handle_command_message(bot, msg, deps).await }
        })
}

/// Handler for callback queries (inline keyboard buttons)
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move { handle_callback_query(bot, q, deps).await }
    })
}

async fn handle_command_message(bot: Bot, msg: Message, deps: HandlerDeps) -> Result<(), HandlerError> {
    let Some(user_id) = caller_id(msg.from.as_ref()) else {
        log::debug!("Ignoring command without sender in chat {}", msg.chat.id.0);
        return Ok(());
    };
    let text = msg.text().unwrap_or_default().to_string();

    // The router talks to SQLite synchronously
    let router = deps.router.clone();
    let response = tokio::task::spawn_blocking(move || router.handle(user_id, Inbound::Command(&text))).await?;

    if let Err(e) = deliver_to_chat(&bot, msg.chat.id, response).await {
        log::error!("Failed to answer command from user {}: {}", user_id, e);
        return Err(Box::new(e));
    }
    Ok(())
}

async fn handle_callback_query(bot: Bot, q: CallbackQuery, deps: HandlerDeps) -> Result<(), HandlerError> {
    let Some(user_id) = caller_id(Some(&q.from)) else {
        bot.answer_callback_query(q.id.clone()).await?;
        return Ok(());
    };
    let data = q.data.clone().unwrap_or_default();

    let router = deps.router.clone();
    let response = tokio::task::spawn_blocking(move || router.handle(user_id, Inbound::Callback(&data))).await?;

    if let Err(e) = deliver_to_callback(&bot, &q, response).await {
        log::error!("Failed to answer callback from user {}: {}", user_id, e);
        return Err(Box::new(e));
    }
    Ok(())
}
