use chrono::{DateTime, Duration, TimeZone, Utc};
use daymate_core::db::open_db_in_memory;
use daymate_core::store::{DataStore, SqliteDataStore};
use daymate_core::{ChatService, ChatServiceError, Sender};
use rusqlite::Connection;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 7, 10, 0, 0).unwrap()
}

fn store(conn: &Connection) -> SqliteDataStore<'_> {
    SqliteDataStore::try_new(conn).unwrap()
}

#[test]
fn sending_appends_a_user_and_assistant_pair() {
    let conn = open_db_in_memory().unwrap();
    let service = ChatService::new(store(&conn));
    let now = fixed_now();

    let history = service.load_messages(now).unwrap();
    assert_eq!(history.len(), 3);

    let sent_at = now + Duration::minutes(1);
    let exchange = service
        .send_message("What tasks do I have today?", sent_at)
        .unwrap();

    assert_eq!(exchange.user.sender, Sender::User);
    assert_eq!(exchange.user.text, "What tasks do I have today?");
    assert_eq!(exchange.user.timestamp, sent_at);
    assert_eq!(exchange.reply.sender, Sender::Ai);
    assert!(exchange.reply.text.contains("Tasks tab"));
    assert_ne!(exchange.user.id, exchange.reply.id);

    // Persisted in insertion order: seeded history, then the new pair.
    let stored = store(&conn).get_chat_messages().unwrap();
    assert_eq!(stored.len(), 5);
    assert_eq!(stored[..3], history[..]);
    assert_eq!(stored[3], exchange.user);
    assert_eq!(stored[4], exchange.reply);
}

#[test]
fn raw_input_text_is_stored_untrimmed() {
    let conn = open_db_in_memory().unwrap();
    let service = ChatService::new(store(&conn));
    let now = fixed_now();

    service.load_messages(now).unwrap();
    let exchange = service.send_message("  hello there  ", now).unwrap();

    assert_eq!(exchange.user.text, "  hello there  ");
    assert!(exchange.reply.text.starts_with("Hello!"));
}

#[test]
fn blank_input_is_rejected_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let service = ChatService::new(store(&conn));
    let now = fixed_now();

    service.load_messages(now).unwrap();
    let err = service.send_message("   \n ", now).unwrap_err();

    assert!(matches!(err, ChatServiceError::EmptyMessage));
    assert_eq!(store(&conn).get_chat_messages().unwrap().len(), 3);
}

#[test]
fn sending_into_an_empty_history_works_without_seeding() {
    // A send before any load writes just the pair; seeding belongs to load.
    let conn = open_db_in_memory().unwrap();
    let service = ChatService::new(store(&conn));
    let now = fixed_now();

    let exchange = service.send_message("remind me to stretch", now).unwrap();
    assert!(exchange
        .reply
        .text
        .starts_with("I'll help you set up a reminder"));

    let stored = store(&conn).get_chat_messages().unwrap();
    assert_eq!(stored.len(), 2);
}
