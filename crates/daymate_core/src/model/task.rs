//! Task domain model.
//!
//! # Responsibility
//! - Define the task record stored under the tasks collection key.
//! - Provide the completion toggle used by task use-cases.
//!
//! # Invariants
//! - `id` is unique within the persisted tasks collection.
//! - Toggling completion always refreshes `updated_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category labels offered by the task editor. `Task::category` itself is
/// free-form and not checked against this list.
pub const TASK_CATEGORIES: [&str; 6] =
    ["Work", "Personal", "Health", "Shopping", "Finance", "Other"];

/// Urgency level shared by tasks and reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Actionable task with scheduling metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque id, unique within the collection.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Free-form grouping label, e.g. `Work` or `Personal`.
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Flips the completion flag and refreshes `updated_at`.
    ///
    /// No other field is touched.
    pub fn toggle_completed(&mut self, now: DateTime<Utc>) {
        self.completed = !self.completed;
        self.updated_at = now;
    }
}
