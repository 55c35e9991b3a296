//! Command router: authorization, argument validation and dispatch to the store
//!
//! The router is synchronous and transport-neutral. It takes an inbound
//! command or callback token plus the caller's ID and returns a [`Response`]
//! describing what the transport should show.

use std::sync::Arc;

use thiserror::Error;
use unic_langid::LanguageIdentifier;

use super::callback::CallbackAction;
use super::command::{parse_command, CommandKind};
use super::format::{format_stats, format_user_card, format_user_list};
use super::menu::{back_to_menu, main_menu, users_nav_menu, Menu};
use crate::core::config::admin::AdminSettings;
use crate::core::error::AppError;
use crate::i18n::t;
use crate::storage::store::UserStore;

/// An event coming from the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound<'a> {
    /// Message text, e.g. `/confirm_dep 5 100`
    Command(&'a str),
    /// Callback data of a pressed inline button
    Callback(&'a str),
}

/// Text plus an optional keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub menu: Option<Menu>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            menu: None,
        }
    }

    pub fn with_menu(text: impl Into<String>, menu: Menu) -> Self {
        Self {
            text: text.into(),
            menu: Some(menu),
        }
    }
}

/// What the transport should do with an inbound event.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Send a new message to the chat
    Send(Reply),
    /// Replace the message the pressed button belongs to
    Edit(Reply),
    /// Answer a callback with a popup
    Alert(String),
    /// Answer a callback silently
    Ack,
    /// Nothing to send
    Ignore,
}

/// Failures of a single request. Each maps to a fixed operator-facing text.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("caller {0} is not the admin")]
    Unauthorized(i64),

    /// Wrong number of arguments; holds the usage message key
    #[error("wrong arguments, usage key {0}")]
    Usage(&'static str),

    /// Arguments present but malformed; holds the message key
    #[error("invalid arguments, message key {0}")]
    InvalidArguments(&'static str),

    #[error("user not found")]
    NotFound,

    #[error("storage unavailable: {0}")]
    Storage(#[from] AppError),
}

impl AdminError {
    /// Localization key of the text shown to the operator.
    pub fn message_key(&self) -> &'static str {
        match self {
            AdminError::Unauthorized(_) => "admin-denied",
            AdminError::Usage(key) | AdminError::InvalidArguments(key) => *key,
            AdminError::NotFound => "admin-user-not-found",
            AdminError::Storage(_) => "admin-storage-failure",
        }
    }
}

type AdminResult<T> = Result<T, AdminError>;

/// Routes operator commands and callbacks to the user store.
pub struct AdminRouter {
    store: Arc<dyn UserStore>,
    settings: AdminSettings,
}

impl AdminRouter {
    pub fn new(store: Arc<dyn UserStore>, settings: AdminSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &AdminSettings {
        &self.settings
    }

    fn lang(&self) -> &LanguageIdentifier {
        &self.settings.lang
    }

    pub fn is_admin(&self, caller_id: i64) -> bool {
        caller_id == self.settings.admin_id
    }

    /// Handles one inbound event from `caller_id`.
    ///
    /// Authorization runs before anything else: a non-admin caller gets the
    /// denial text and the store is never touched.
    pub fn handle(&self, caller_id: i64, inbound: Inbound<'_>) -> Response {
        if !self.is_admin(caller_id) {
            let err = AdminError::Unauthorized(caller_id);
            log::warn!("{} ({:?})", err, inbound);
            let text = self.error_text(&err);
            return match inbound {
                Inbound::Command(_) => Response::Send(Reply::text(text)),
                Inbound::Callback(_) => Response::Alert(text),
            };
        }

        match inbound {
            Inbound::Command(text) => match self.handle_command(text) {
                Ok(Some(reply)) => Response::Send(reply),
                Ok(None) => Response::Ignore,
                Err(err) => Response::Send(Reply::text(self.report(&err))),
            },
            Inbound::Callback(data) => match self.handle_callback(data) {
                Ok(Some(reply)) => Response::Edit(reply),
                Ok(None) => Response::Ack,
                Err(err) => Response::Alert(self.report(&err)),
            },
        }
    }

    fn error_text(&self, err: &AdminError) -> String {
        t(self.lang(), err.message_key())
    }

    /// Logs `err` at a level matching its kind and returns the operator text.
    fn report(&self, err: &AdminError) -> String {
        match err {
            AdminError::Storage(inner) => log::error!("Admin request failed: {}", inner),
            other => log::debug!("Admin request rejected: {}", other),
        }
        self.error_text(err)
    }

    fn handle_command(&self, text: &str) -> AdminResult<Option<Reply>> {
        let Some(cmd) = parse_command(text) else {
            log::debug!("Ignoring unknown command: {:?}", text);
            return Ok(None);
        };
        log::info!("Admin command /{} args={:?}", cmd.kind.as_ref(), cmd.args);

        let reply = match cmd.kind {
            CommandKind::Start => self.main_menu_reply(),
            CommandKind::Stats => Reply::text(format_stats(self.lang(), &self.store.stats()?)),
            CommandKind::Users => self.users_page(0)?,
            CommandKind::User => self.user_card(cmd.args)?,
            CommandKind::Search => self.search(cmd.args)?,
            CommandKind::Broadcast => Reply::text(t(self.lang(), "admin-broadcast-prompt")),
            CommandKind::ConfirmReg => self.confirm_registration(cmd.args)?,
            CommandKind::ConfirmDep => self.confirm_deposit(cmd.args)?,
        };
        Ok(Some(reply))
    }

    fn handle_callback(&self, data: &str) -> AdminResult<Option<Reply>> {
        let Some(action) = CallbackAction::parse(data) else {
            log::debug!("Acknowledging unknown callback: {:?}", data);
            return Ok(None);
        };
        log::info!("Admin callback {}", action);

        let lang = self.lang();
        let reply = match action {
            CallbackAction::Stats => Reply::with_menu(format_stats(lang, &self.store.stats()?), main_menu(lang)),
            CallbackAction::Users { offset } => self.users_page(offset)?,
            CallbackAction::Search => Reply::with_menu(t(lang, "admin-search-prompt"), main_menu(lang)),
            CallbackAction::Broadcast => Reply::with_menu(t(lang, "admin-broadcast-prompt"), main_menu(lang)),
            CallbackAction::Settings => Reply::with_menu(t(lang, "admin-settings-stub"), main_menu(lang)),
            CallbackAction::Menu => self.main_menu_reply(),
        };
        Ok(Some(reply))
    }

    fn main_menu_reply(&self) -> Reply {
        Reply::with_menu(t(self.lang(), "admin-menu-title"), main_menu(self.lang()))
    }

    fn users_page(&self, offset: u32) -> AdminResult<Reply> {
        let page_size = self.settings.page_size;
        let users = self.store.list_users(offset, page_size)?;
        let has_more = users.len() == page_size as usize;

        Ok(Reply::with_menu(
            format_user_list(self.lang(), &users),
            users_nav_menu(self.lang(), offset, has_more, page_size),
        ))
    }

    fn user_card(&self, args: &str) -> AdminResult<Reply> {
        if args.is_empty() {
            return Err(AdminError::Usage("admin-user-usage"));
        }
        let user = self.store.find_user(args)?.ok_or(AdminError::NotFound)?;
        Ok(Reply::text(format_user_card(self.lang(), &user)))
    }

    fn search(&self, query: &str) -> AdminResult<Reply> {
        if query.is_empty() {
            return Ok(Reply::text(t(self.lang(), "admin-search-prompt")));
        }
        let users = self.store.search_users(query, 0, self.settings.page_size)?;
        Ok(Reply::with_menu(format_user_list(self.lang(), &users), back_to_menu(self.lang())))
    }

    fn confirm_registration(&self, args: &str) -> AdminResult<Reply> {
        let parts: Vec<&str> = args.split_whitespace().collect();
        let [raw_id] = parts.as_slice() else {
            return Err(AdminError::Usage("admin-confirm-reg-usage"));
        };
        let user_id = raw_id
            .parse::<i64>()
            .map_err(|_| AdminError::InvalidArguments("admin-confirm-reg-invalid"))?;

        if !self.store.confirm_registration(user_id)? {
            return Err(AdminError::NotFound);
        }
        Ok(Reply::text(t(self.lang(), "admin-confirm-reg-ok")))
    }

    fn confirm_deposit(&self, args: &str) -> AdminResult<Reply> {
        let parts: Vec<&str> = args.split_whitespace().collect();
        let [raw_id, raw_amount] = parts.as_slice() else {
            return Err(AdminError::Usage("admin-confirm-dep-usage"));
        };
        let invalid = || AdminError::InvalidArguments("admin-confirm-dep-invalid");
        let user_id = raw_id.parse::<i64>().map_err(|_| invalid())?;
        let amount = raw_amount
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount >= 0.0)
            .ok_or_else(invalid)?;

        if !self.store.confirm_deposit(user_id, amount)? {
            return Err(AdminError::NotFound);
        }
        Ok(Reply::text(t(self.lang(), "admin-confirm-dep-ok")))
    }
}
