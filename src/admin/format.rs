//! Text rendering for stats, user lists and user cards
//!
//! Pure functions: store results in, display text out.

use itertools::Itertools;
use unic_langid::LanguageIdentifier;

use crate::i18n::t;
use crate::storage::db::{User, UserStats, UserSummary};

/// Placeholder for absent optional fields.
pub const EMPTY_FIELD: &str = "—";

const CHECK: &str = "✅";
const CROSS: &str = "❌";

/// Formats a money amount: `150.0`, `12.5`, `0.1`.
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        amount.to_string()
    }
}

fn or_empty(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(EMPTY_FIELD)
}

fn mark(flag: bool) -> &'static str {
    if flag {
        CHECK
    } else {
        CROSS
    }
}

fn yes_no(lang: &LanguageIdentifier, flag: bool) -> String {
    t(lang, if flag { "admin-yes" } else { "admin-no" })
}

/// Four lines: total, registered, deposited, deposit sum.
pub fn format_stats(lang: &LanguageIdentifier, stats: &UserStats) -> String {
    format!(
        "{}: {}\n{}: {}\n{}: {}\n{}: {}",
        t(lang, "admin-stats-total"),
        stats.total,
        t(lang, "admin-stats-registered"),
        stats.registered,
        t(lang, "admin-stats-deposited"),
        stats.deposited,
        t(lang, "admin-stats-sum"),
        format_amount(stats.total_deposits),
    )
}

/// `ID: 1 | @alice | Registered: ✅ | Deposit: ❌`
pub fn format_user_line(lang: &LanguageIdentifier, user: &UserSummary) -> String {
    format!(
        "ID: {} | @{} | {}: {} | {}: {}",
        user.user_id,
        or_empty(user.username.as_deref()),
        t(lang, "admin-label-registered"),
        mark(user.registered),
        t(lang, "admin-label-deposit"),
        mark(user.deposit_confirmed),
    )
}

/// One line per user, or the "no users found" text for an empty page.
pub fn format_user_list(lang: &LanguageIdentifier, users: &[UserSummary]) -> String {
    if users.is_empty() {
        return t(lang, "admin-users-empty");
    }
    users.iter().map(|user| format_user_line(lang, user)).join("\n")
}

/// Nine-line card covering every column of the user.
pub fn format_user_card(lang: &LanguageIdentifier, user: &User) -> String {
    let amount = user
        .deposit_amount
        .map(format_amount)
        .unwrap_or_else(|| "0".to_string());

    [
        format!("ID: {}", user.user_id),
        format!("Username: @{}", or_empty(user.username.as_deref())),
        format!("{}: {}", t(lang, "admin-label-registered"), yes_no(lang, user.registered)),
        format!("{}: {}", t(lang, "admin-card-reg-date"), or_empty(user.reg_date.as_deref())),
        format!(
            "{}: {}",
            t(lang, "admin-card-dep-confirmed"),
            yes_no(lang, user.deposit_confirmed)
        ),
        format!("{}: {}", t(lang, "admin-card-dep-amount"), amount),
        format!("{}: {}", t(lang, "admin-card-dep-date"), or_empty(user.deposit_date.as_deref())),
        format!("Trader ID: {}", or_empty(user.trader_id.as_deref())),
        format!("Click ID: {}", or_empty(user.click_id.as_deref())),
    ]
    .join("\n")
}
