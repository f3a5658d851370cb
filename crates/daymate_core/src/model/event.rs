//! Calendar event domain model.
//!
//! # Responsibility
//! - Define the event record stored under the calendar collection key.
//! - Validate the event window and display color before persistence.
//!
//! # Invariants
//! - `start_date` must not be later than `end_date`.
//! - `color` is a `#rrggbb` display hex string.
//! - `reminders` holds opaque reference strings; targets are not validated
//!   against the reminders collection.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid color regex"));

/// Display palette offered by the event editor: blue, cyan, green, amber,
/// purple, red, pink.
pub const EVENT_COLORS: [&str; 7] = [
    "#3b82f6", "#06b6d4", "#10b981", "#f59e0b", "#8b5cf6", "#ef4444", "#ec4899",
];

/// Validation failure for a single calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// `end_date` is earlier than `start_date`.
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// `color` is not a `#rrggbb` hex string.
    InvalidColor(String),
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWindow { start, end } => {
                write!(f, "endDate ({end}) must not be earlier than startDate ({start})")
            }
            Self::InvalidColor(value) => {
                write!(f, "color `{value}` is not a #rrggbb hex string")
            }
        }
    }
}

impl Error for EventValidationError {}

/// Scheduled calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Display color as a `#rrggbb` hex string.
    pub color: String,
    pub all_day: bool,
    /// Opaque reminder references, unvalidated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<String>>,
}

impl CalendarEvent {
    /// Checks the event window and display color.
    ///
    /// Store write and read paths call this so an invalid event is rejected
    /// instead of silently persisted or surfaced.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.end_date < self.start_date {
            return Err(EventValidationError::InvalidWindow {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if !HEX_COLOR_RE.is_match(self.color.as_str()) {
            return Err(EventValidationError::InvalidColor(self.color.clone()));
        }
        Ok(())
    }
}
