//! Command router over a real SQLite store

mod common;

use common::{new_user, TestDb, ADMIN_ID};
use pretty_assertions::assert_eq;
use regadmin::admin::{CallbackAction, Reply};
use regadmin::storage::UserStore;
use regadmin::{Inbound, Response};

fn sent(response: Response) -> Reply {
    match response {
        Response::Send(reply) => reply,
        other => panic!("expected Send, got {:?}", other),
    }
}

fn edited(response: Response) -> Reply {
    match response {
        Response::Edit(reply) => reply,
        other => panic!("expected Edit, got {:?}", other),
    }
}

#[test]
fn test_stranger_cannot_confirm_anything() {
    let db = TestDb::new();
    db.insert(&new_user(5, "alice"));
    let router = db.router();

    let reply = sent(router.handle(5, Inbound::Command("/confirm_reg 5")));
    assert_eq!(reply.text, "Access denied.");
    let reply = sent(router.handle(5, Inbound::Command("/confirm_dep 5 100")));
    assert_eq!(reply.text, "Access denied.");

    let user = db.get(5).unwrap();
    assert!(!user.registered);
    assert!(!user.deposit_confirmed);
}

#[test]
fn test_registration_and_deposit_flow() {
    let db = TestDb::new();
    db.insert(&new_user(1, "alice"));
    db.insert(&new_user(2, "bob"));
    let router = db.router();

    assert_eq!(
        sent(router.handle(ADMIN_ID, Inbound::Command("/confirm_reg 1"))).text,
        "Registration confirmed."
    );
    assert_eq!(
        sent(router.handle(ADMIN_ID, Inbound::Command("/confirm_dep 2 250"))).text,
        "Deposit confirmed."
    );
    assert_eq!(
        sent(router.handle(ADMIN_ID, Inbound::Command("/confirm_dep 3 10"))).text,
        "User not found."
    );

    let stats = sent(router.handle(ADMIN_ID, Inbound::Command("/stats")));
    assert_eq!(
        stats.text,
        "Total users: 2\nRegistered: 1\nWith deposit: 1\nTotal deposits: 250.0"
    );
    assert!(stats.menu.is_none());

    let card = sent(router.handle(ADMIN_ID, Inbound::Command("/user bob"))).text;
    assert!(card.contains("Deposit confirmed: Yes"));
    assert!(card.contains("Deposit amount: 250.0"));
}

#[test]
fn test_users_list_navigation() {
    let db = TestDb::new();
    db.insert_many(15);
    let router = db.router();

    let first = sent(router.handle(ADMIN_ID, Inbound::Command("/users")));
    assert!(first.text.starts_with("ID: 1 | @user1 | Registered: ❌ | Deposit: ❌"));
    let next = first.menu.unwrap().rows[0][0].action;
    assert_eq!(next, CallbackAction::Users { offset: 10 });

    let second = edited(router.handle(ADMIN_ID, Inbound::Callback(&next.to_string())));
    assert_eq!(second.text.lines().count(), 5);
    assert_eq!(
        second.menu.unwrap().actions(),
        vec![CallbackAction::Users { offset: 0 }, CallbackAction::Menu]
    );

    let past_end = edited(router.handle(ADMIN_ID, Inbound::Callback("admin:users:100")));
    assert_eq!(past_end.text, "No users found.");
}

#[test]
fn test_stats_button_matches_store() {
    let db = TestDb::new();
    db.insert_many(3);
    db.store.confirm_registration(2).unwrap();
    let router = db.router();

    let reply = edited(router.handle(ADMIN_ID, Inbound::Callback("admin:stats")));
    assert!(reply.text.starts_with("Total users: 3\nRegistered: 1\n"));
    assert_eq!(reply.menu.map(|m| m.rows.len()), Some(5));
}

#[test]
fn test_search_by_trader_id() {
    let db = TestDb::new();
    let mut user = new_user(11, "carol");
    user.trader_id = Some("TR-900".into());
    db.insert(&user);
    db.insert(&new_user(12, "dave"));
    let router = db.router();

    let reply = sent(router.handle(ADMIN_ID, Inbound::Command("/search TR-9")));
    assert_eq!(reply.text, "ID: 11 | @carol | Registered: ❌ | Deposit: ❌");
}
