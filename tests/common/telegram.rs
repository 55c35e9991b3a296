//! Mock Bot API server built on wiremock

#![allow(dead_code)]

use serde_json::{json, Value};
use teloxide::prelude::*;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Answers every Bot API method the admin bot uses with a canned success.
pub struct TelegramMock {
    server: MockServer,
}

fn message_json(chat_id: i64, text: &str) -> Value {
    json!({
        "message_id": 456,
        "date": 1_700_000_000,
        "chat": {"id": chat_id, "type": "private", "first_name": "Admin"},
        "text": text
    })
}

impl TelegramMock {
    pub async fn start() -> Self {
        let server = MockServer::start().await;

        let ok_message = json!({"ok": true, "result": message_json(777, "ok")});
        for name in ["sendMessage", "editMessageText"] {
            Mock::given(method("POST"))
                .and(path_regex(format!("(?i)/bot[^/]+/{name}$")))
                .respond_with(ResponseTemplate::new(200).set_body_json(ok_message.clone()))
                .mount(&server)
                .await;
        }
        for name in ["answerCallbackQuery", "setMyCommands"] {
            Mock::given(method("POST"))
                .and(path_regex(format!("(?i)/bot[^/]+/{name}$")))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": true})))
                .mount(&server)
                .await;
        }

        Self { server }
    }

    /// Create a Bot instance that uses this mock server
    pub fn create_bot(&self) -> anyhow::Result<Bot> {
        let bot = Bot::new("test_token_12345:ABCDEF").set_api_url(self.server.uri().parse()?);
        Ok(bot)
    }

    /// Received calls as (lowercased method name, JSON body).
    pub async fn calls(&self) -> Vec<(String, Value)> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| {
                let name = request.url.path().rsplit('/').next().unwrap_or_default().to_lowercase();
                let body = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
                (name, body)
            })
            .collect()
    }
}

/// A callback query as Telegram delivers it, attached to a bot message.
pub fn callback_query(from_id: i64, data: &str) -> CallbackQuery {
    serde_json::from_value(json!({
        "id": "cbq-1",
        "from": {"id": from_id, "is_bot": false, "first_name": "Admin"},
        "chat_instance": "ci-1",
        "data": data,
        "message": {
            "message_id": 100,
            "date": 1_700_000_000,
            "chat": {"id": from_id, "type": "private", "first_name": "Admin"},
            "from": {"id": 42, "is_bot": true, "first_name": "Bot", "username": "admin_bot"},
            "text": "menu"
        }
    }))
    .expect("valid callback query json")
}
