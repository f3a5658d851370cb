//! Reminder domain model.

use crate::model::task::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One-shot reminder with a due timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub completed: bool,
    pub priority: Priority,
}
