//! Turns router responses into Bot API calls

use teloxide::prelude::*;
use teloxide::types::MessageId;
use teloxide::{ApiError, RequestError};

use super::keyboard::inline_keyboard;
use crate::admin::{Reply, Response};

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> Result<(), RequestError> {
    let request = bot.send_message(chat_id, reply.text);
    match reply.menu {
        Some(menu) => request.reply_markup(inline_keyboard(&menu)).await?,
        None => request.await?,
    };
    Ok(())
}

async fn edit_reply(bot: &Bot, chat_id: ChatId, message_id: MessageId, reply: Reply) -> Result<(), RequestError> {
    let request = bot.edit_message_text(chat_id, message_id, reply.text);
    let result = match reply.menu {
        Some(menu) => request.reply_markup(inline_keyboard(&menu)).await,
        None => request.await,
    };

    match result {
        Ok(_) => Ok(()),
        // Pressing the same button twice renders identical content
        Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Delivers a response to a command message.
pub async fn deliver_to_chat(bot: &Bot, chat_id: ChatId, response: Response) -> Result<(), RequestError> {
    match response {
        Response::Send(reply) | Response::Edit(reply) => send_reply(bot, chat_id, reply).await,
        Response::Alert(text) => send_reply(bot, chat_id, Reply::text(text)).await,
        Response::Ack | Response::Ignore => Ok(()),
    }
}

/// Delivers a response to a pressed inline button.
///
/// The callback query is always answered so the client stops its spinner.
pub async fn deliver_to_callback(bot: &Bot, q: &CallbackQuery, response: Response) -> Result<(), RequestError> {
    let target = q.message.as_ref().map(|message| (message.chat().id, message.id()));

    match response {
        Response::Alert(text) => {
            bot.answer_callback_query(q.id.clone()).text(text).show_alert(true).await?;
        }
        Response::Edit(reply) => {
            bot.answer_callback_query(q.id.clone()).await?;
            match target {
                Some((chat_id, message_id)) => edit_reply(bot, chat_id, message_id, reply).await?,
                None => log::warn!("Callback {:?} has no message to edit", q.id),
            }
        }
        Response::Send(reply) => {
            bot.answer_callback_query(q.id.clone()).await?;
            match target {
                Some((chat_id, _)) => send_reply(bot, chat_id, reply).await?,
                None => log::warn!("Callback {:?} has no chat to reply to", q.id),
            }
        }
        Response::Ack | Response::Ignore => {
            bot.answer_callback_query(q.id.clone()).await?;
        }
    }

    Ok(())
}
