//! Dashboard overview stats.
//!
//! Pure projection over the stored collections; nothing here is persisted.

use crate::model::event::CalendarEvent;
use crate::model::reminder::Reminder;
use crate::model::task::Task;
use chrono::{DateTime, Utc};

/// Counters shown on the dashboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub tasks_completed: usize,
    pub tasks_total: usize,
    /// Events whose start lies strictly after `now`.
    pub upcoming_events: usize,
    /// Reminders not yet completed.
    pub active_reminders: usize,
}

/// Computes dashboard counters from the three collections.
pub fn dashboard_stats(
    tasks: &[Task],
    events: &[CalendarEvent],
    reminders: &[Reminder],
    now: DateTime<Utc>,
) -> DashboardStats {
    DashboardStats {
        tasks_completed: tasks.iter().filter(|task| task.completed).count(),
        tasks_total: tasks.len(),
        upcoming_events: events.iter().filter(|event| event.start_date > now).count(),
        active_reminders: reminders.iter().filter(|reminder| !reminder.completed).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::dashboard_stats;
    use crate::seed;
    use chrono::{TimeZone, Utc};

    #[test]
    fn counts_seeded_collections() {
        let now = Utc.with_ymd_and_hms(2026, 4, 7, 10, 0, 0).unwrap();
        let tasks = seed::sample_tasks(now);
        let events = seed::sample_events(now);
        let reminders = seed::sample_reminders(now);

        let stats = dashboard_stats(&tasks, &events, &reminders, now);
        assert_eq!(stats.tasks_completed, 1);
        assert_eq!(stats.tasks_total, 4);
        // Stand-up (09:00) is already past 10:00; the other three start later.
        assert_eq!(stats.upcoming_events, 3);
        assert_eq!(stats.active_reminders, 3);
    }

    #[test]
    fn empty_collections_yield_zeroes() {
        let now = Utc.with_ymd_and_hms(2026, 4, 7, 10, 0, 0).unwrap();
        let stats = dashboard_stats(&[], &[], &[], now);
        assert_eq!(stats.tasks_total, 0);
        assert_eq!(stats.tasks_completed, 0);
        assert_eq!(stats.upcoming_events, 0);
        assert_eq!(stats.active_reminders, 0);
    }
}
