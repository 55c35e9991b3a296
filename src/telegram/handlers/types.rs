//! Handler types and dependencies

use std::sync::Arc;

use teloxide::types::User;

use crate::admin::AdminRouter;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub router: Arc<AdminRouter>,
}

impl HandlerDeps {
    pub fn new(router: Arc<AdminRouter>) -> Self {
        Self { router }
    }
}

/// Telegram user ID of the sender as the signed ID stored in the database.
pub fn caller_id(from: Option<&User>) -> Option<i64> {
    from.and_then(|u| i64::try_from(u.id.0).ok())
}
