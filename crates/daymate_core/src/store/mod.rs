//! Collection store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist each entity collection as one JSON value under its reserved key.
//! - Keep SQL and serialization details inside the persistence boundary.
//!
//! # Invariants
//! - An absent key reads back as an empty collection (or `None` for the
//!   profile), never as an error.
//! - `save` then `get` round-trips a collection structurally unchanged:
//!   same order, same optional-field presence.
//! - Write paths reject duplicate task ids and invalid calendar events; read
//!   paths reject undecodable or invalid persisted state instead of masking
//!   it.

use crate::db::{migrations::latest_version, DbError};
use crate::model::chat::ChatMessage;
use crate::model::event::{CalendarEvent, EventValidationError};
use crate::model::profile::UserProfile;
use crate::model::reminder::Reminder;
use crate::model::task::Task;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reserved keys under which collections are persisted.
pub mod keys {
    pub const USER_PROFILE: &str = "@user_profile";
    pub const TASKS: &str = "@tasks";
    pub const CALENDAR_EVENTS: &str = "@calendar_events";
    pub const CHAT_MESSAGES: &str = "@chat_messages";
    pub const REMINDERS: &str = "@reminders";
    /// Declared for the onboarding flow; no in-scope reader or writer.
    pub const ONBOARDING_COMPLETED: &str = "@onboarding_completed";

    pub const ALL: [&str; 6] = [
        USER_PROFILE,
        TASKS,
        CALENDAR_EVENTS,
        CHAT_MESSAGES,
        REMINDERS,
        ONBOARDING_COMPLETED,
    ];
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for collection persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Persisted value under `key` cannot be decoded into its collection.
    Corrupt {
        key: &'static str,
        message: String,
    },
    /// A calendar event failed its invariant checks.
    Validation(EventValidationError),
    /// The tasks collection carries the same id twice.
    DuplicateId {
        key: &'static str,
        id: String,
    },
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt { key, message } => {
                write!(f, "corrupt value under `{key}`: {message}")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId { key, id } => {
                write!(f, "duplicate id `{id}` in collection `{key}`")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: expected schema version {expected_version}, found {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<EventValidationError> for StoreError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface for collection read/write/clear operations.
///
/// One get/save pair per entity collection; the profile is singular, so its
/// getter returns `Option` instead of a sequence.
pub trait DataStore {
    fn get_user_profile(&self) -> StoreResult<Option<UserProfile>>;
    fn save_user_profile(&self, profile: &UserProfile) -> StoreResult<()>;

    fn get_tasks(&self) -> StoreResult<Vec<Task>>;
    fn save_tasks(&self, tasks: &[Task]) -> StoreResult<()>;

    fn get_calendar_events(&self) -> StoreResult<Vec<CalendarEvent>>;
    fn save_calendar_events(&self, events: &[CalendarEvent]) -> StoreResult<()>;

    fn get_chat_messages(&self) -> StoreResult<Vec<ChatMessage>>;
    fn save_chat_messages(&self, messages: &[ChatMessage]) -> StoreResult<()>;

    fn get_reminders(&self) -> StoreResult<Vec<Reminder>>;
    fn save_reminders(&self, reminders: &[Reminder]) -> StoreResult<()>;

    /// Removes every reserved key. Used by logout/reset flows.
    fn clear_all(&self) -> StoreResult<()>;
}

/// SQLite-backed collection store.
///
/// Holds a shared connection borrow, so handles are cheap to copy; several
/// services can read and write through the same connection.
#[derive(Clone, Copy, Debug)]
pub struct SqliteDataStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDataStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn read_value(&self, key: &'static str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM collections WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_value(&self, key: &'static str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO collections (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &'static str) -> StoreResult<Vec<T>> {
        match self.read_value(key)? {
            None => Ok(Vec::new()),
            Some(raw) => decode(key, raw.as_str()),
        }
    }

    fn write_collection<T: Serialize>(&self, key: &'static str, items: &[T]) -> StoreResult<()> {
        self.write_value(key, encode(key, &items)?.as_str())
    }
}

impl DataStore for SqliteDataStore<'_> {
    fn get_user_profile(&self) -> StoreResult<Option<UserProfile>> {
        match self.read_value(keys::USER_PROFILE)? {
            None => Ok(None),
            Some(raw) => Ok(Some(decode(keys::USER_PROFILE, raw.as_str())?)),
        }
    }

    fn save_user_profile(&self, profile: &UserProfile) -> StoreResult<()> {
        self.write_value(keys::USER_PROFILE, encode(keys::USER_PROFILE, profile)?.as_str())
    }

    fn get_tasks(&self) -> StoreResult<Vec<Task>> {
        self.read_collection(keys::TASKS)
    }

    fn save_tasks(&self, tasks: &[Task]) -> StoreResult<()> {
        let mut seen = HashSet::new();
        for task in tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(StoreError::DuplicateId {
                    key: keys::TASKS,
                    id: task.id.clone(),
                });
            }
        }
        self.write_collection(keys::TASKS, tasks)
    }

    fn get_calendar_events(&self) -> StoreResult<Vec<CalendarEvent>> {
        let events: Vec<CalendarEvent> = self.read_collection(keys::CALENDAR_EVENTS)?;
        for event in &events {
            event.validate()?;
        }
        Ok(events)
    }

    fn save_calendar_events(&self, events: &[CalendarEvent]) -> StoreResult<()> {
        for event in events {
            event.validate()?;
        }
        self.write_collection(keys::CALENDAR_EVENTS, events)
    }

    fn get_chat_messages(&self) -> StoreResult<Vec<ChatMessage>> {
        self.read_collection(keys::CHAT_MESSAGES)
    }

    fn save_chat_messages(&self, messages: &[ChatMessage]) -> StoreResult<()> {
        self.write_collection(keys::CHAT_MESSAGES, messages)
    }

    fn get_reminders(&self) -> StoreResult<Vec<Reminder>> {
        self.read_collection(keys::REMINDERS)
    }

    fn save_reminders(&self, reminders: &[Reminder]) -> StoreResult<()> {
        self.write_collection(keys::REMINDERS, reminders)
    }

    fn clear_all(&self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM collections;", [])?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(key: &'static str, raw: &str) -> StoreResult<T> {
    serde_json::from_str(raw).map_err(|err| StoreError::Corrupt {
        key,
        message: err.to_string(),
    })
}

fn encode<T: Serialize>(key: &'static str, value: &T) -> StoreResult<String> {
    serde_json::to_string(value).map_err(|err| StoreError::Corrupt {
        key,
        message: err.to_string(),
    })
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let actual_version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .map_err(|err| StoreError::Db(DbError::Sqlite(err)))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "collections")? {
        return Err(StoreError::MissingRequiredTable("collections"));
    }

    for column in ["key", "value"] {
        if !table_has_column(conn, "collections", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "collections",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
