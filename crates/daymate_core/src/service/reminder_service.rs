//! Reminder use-case service.

use crate::model::reminder::Reminder;
use crate::seed;
use crate::store::{DataStore, StoreResult};
use chrono::{DateTime, Utc};

/// Reminder service facade over store implementations.
pub struct ReminderService<S: DataStore> {
    store: S,
}

impl<S: DataStore> ReminderService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads all reminders, writing the sample set first if the collection
    /// is empty.
    pub fn load_reminders(&self, now: DateTime<Utc>) -> StoreResult<Vec<Reminder>> {
        let reminders = self.store.get_reminders()?;
        if !reminders.is_empty() {
            return Ok(reminders);
        }

        let seeded = seed::sample_reminders(now);
        self.store.save_reminders(&seeded)?;
        Ok(seeded)
    }
}
