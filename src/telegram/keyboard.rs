use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::admin::Menu;

/// Converts a menu into an inline keyboard, one keyboard row per menu row.
pub fn inline_keyboard(menu: &Menu) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = menu
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.action.to_string()))
                .collect()
        })
        .collect();

    InlineKeyboardMarkup::new(rows)
}
