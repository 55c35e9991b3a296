//! Transport-neutral menu structures
//!
//! The Telegram layer turns a [`Menu`] into an inline keyboard; nothing here
//! knows about teloxide.

use unic_langid::LanguageIdentifier;

use super::callback::CallbackAction;
use crate::i18n::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub label: String,
    pub action: CallbackAction,
}

impl MenuButton {
    pub fn new(label: impl Into<String>, action: CallbackAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Rows of buttons, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    pub rows: Vec<Vec<MenuButton>>,
}

impl Menu {
    /// All actions in row order, handy for assertions and logging.
    pub fn actions(&self) -> Vec<CallbackAction> {
        self.rows.iter().flatten().map(|button| button.action).collect()
    }
}

/// Top-level admin menu: one action per row.
pub fn main_menu(lang: &LanguageIdentifier) -> Menu {
    let entries = [
        ("admin-menu-stats", CallbackAction::Stats),
        ("admin-menu-users", CallbackAction::Users { offset: 0 }),
        ("admin-menu-search", CallbackAction::Search),
        ("admin-menu-broadcast", CallbackAction::Broadcast),
        ("admin-menu-settings", CallbackAction::Settings),
    ];

    Menu {
        rows: entries
            .into_iter()
            .map(|(key, action)| vec![MenuButton::new(t(lang, key), action)])
            .collect(),
    }
}

/// Navigation under a user list page.
///
/// Back appears only past the first page, Next only after a full page;
/// the back-to-menu row is always present.
pub fn users_nav_menu(lang: &LanguageIdentifier, offset: u32, has_more: bool, page_size: u32) -> Menu {
    let mut nav = Vec::new();
    if offset > 0 {
        nav.push(MenuButton::new(
            t(lang, "admin-nav-back"),
            CallbackAction::Users {
                offset: offset.saturating_sub(page_size),
            },
        ));
    }
    if has_more {
        nav.push(MenuButton::new(
            t(lang, "admin-nav-next"),
            CallbackAction::Users {
                offset: offset.saturating_add(page_size),
            },
        ));
    }

    let mut rows = Vec::new();
    if !nav.is_empty() {
        rows.push(nav);
    }
    rows.extend(back_to_menu(lang).rows);
    Menu { rows }
}

/// A single back-to-menu button.
pub fn back_to_menu(lang: &LanguageIdentifier) -> Menu {
    Menu {
        rows: vec![vec![MenuButton::new(t(lang, "admin-nav-menu"), CallbackAction::Menu)]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::lang_from_code;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_main_menu_has_five_rows() {
        let menu = main_menu(&lang_from_code("en"));
        assert_eq!(menu.rows.len(), 5);
        assert_eq!(
            menu.actions(),
            vec![
                CallbackAction::Stats,
                CallbackAction::Users { offset: 0 },
                CallbackAction::Search,
                CallbackAction::Broadcast,
                CallbackAction::Settings,
            ]
        );
        assert_eq!(menu.rows[0][0].label, "📊 Statistics");
    }

    #[test]
    fn test_first_partial_page_only_has_menu_button() {
        let menu = users_nav_menu(&lang_from_code("en"), 0, false, 10);
        assert_eq!(menu.actions(), vec![CallbackAction::Menu]);
    }

    #[test]
    fn test_first_full_page_has_next() {
        let menu = users_nav_menu(&lang_from_code("en"), 0, true, 10);
        assert_eq!(menu.rows.len(), 2);
        assert_eq!(
            menu.actions(),
            vec![CallbackAction::Users { offset: 10 }, CallbackAction::Menu]
        );
    }

    #[test]
    fn test_middle_page_has_both_directions() {
        let menu = users_nav_menu(&lang_from_code("en"), 20, true, 10);
        assert_eq!(menu.rows[0].len(), 2);
        assert_eq!(
            menu.actions(),
            vec![
                CallbackAction::Users { offset: 10 },
                CallbackAction::Users { offset: 30 },
                CallbackAction::Menu,
            ]
        );
    }

    #[test]
    fn test_back_never_goes_below_zero() {
        let menu = users_nav_menu(&lang_from_code("en"), 5, false, 10);
        assert_eq!(
            menu.actions(),
            vec![CallbackAction::Users { offset: 0 }, CallbackAction::Menu]
        );
    }
}
