//! Deterministic sample data for first-run bootstrap.
//!
//! # Responsibility
//! - Generate the fixed sample set for each collection, anchored to a caller
//!   supplied `now`.
//!
//! # Invariants
//! - Shapes are fixed: 1 profile, 4 tasks, 4 events, 3 messages, 3 reminders,
//!   ids `"1"` upward per collection.
//! - Task/message/reminder timestamps are exact offsets from `now`; event
//!   timestamps are wall-clock times on today/tomorrow/next-week.

use crate::model::chat::{ChatMessage, Sender};
use crate::model::event::CalendarEvent;
use crate::model::profile::{Preferences, Theme, UserProfile};
use crate::model::reminder::Reminder;
use crate::model::task::{Priority, Task};
use chrono::{DateTime, Days, Duration, NaiveDate, Utc};

pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: "1".to_owned(),
        name: "Alex Johnson".to_owned(),
        email: "alex.johnson@example.com".to_owned(),
        avatar: None,
        preferences: Preferences {
            notifications_enabled: true,
            theme: Theme::Light,
            language: "en".to_owned(),
        },
    }
}

pub fn sample_tasks(now: DateTime<Utc>) -> Vec<Task> {
    vec![
        Task {
            id: "1".to_owned(),
            title: "Review project proposal".to_owned(),
            description: Some("Go through the Q1 project proposal and provide feedback".to_owned()),
            completed: false,
            priority: Priority::High,
            due_date: Some(now + Duration::days(1)),
            category: "Work".to_owned(),
            created_at: now,
            updated_at: now,
        },
        Task {
            id: "2".to_owned(),
            title: "Grocery shopping".to_owned(),
            description: Some("Buy vegetables, fruits, and dairy products".to_owned()),
            completed: false,
            priority: Priority::Medium,
            due_date: Some(now + Duration::days(2)),
            category: "Personal".to_owned(),
            created_at: now,
            updated_at: now,
        },
        Task {
            id: "3".to_owned(),
            title: "Schedule dentist appointment".to_owned(),
            description: None,
            completed: true,
            priority: Priority::Low,
            due_date: None,
            category: "Health".to_owned(),
            created_at: now - Duration::days(1),
            updated_at: now,
        },
        Task {
            id: "4".to_owned(),
            title: "Prepare presentation slides".to_owned(),
            description: Some("Create slides for the upcoming team meeting".to_owned()),
            completed: false,
            priority: Priority::High,
            due_date: Some(now + Duration::days(3)),
            category: "Work".to_owned(),
            created_at: now,
            updated_at: now,
        },
    ]
}

pub fn sample_events(now: DateTime<Utc>) -> Vec<CalendarEvent> {
    let today = now.date_naive();
    let tomorrow = today + Days::new(1);
    let next_week = today + Days::new(7);

    vec![
        CalendarEvent {
            id: "1".to_owned(),
            title: "Team Stand-up".to_owned(),
            description: Some("Daily sync with the team".to_owned()),
            start_date: at(today, 9, 0, 0, 0),
            end_date: at(today, 9, 30, 0, 0),
            location: None,
            color: "#3b82f6".to_owned(),
            all_day: false,
            reminders: None,
        },
        CalendarEvent {
            id: "2".to_owned(),
            title: "Client Meeting".to_owned(),
            description: Some("Discuss Q1 objectives with client".to_owned()),
            start_date: at(tomorrow, 14, 0, 0, 0),
            end_date: at(tomorrow, 15, 30, 0, 0),
            location: Some("Conference Room A".to_owned()),
            color: "#06b6d4".to_owned(),
            all_day: false,
            reminders: None,
        },
        CalendarEvent {
            id: "3".to_owned(),
            title: "Yoga Class".to_owned(),
            description: None,
            start_date: at(today, 18, 0, 0, 0),
            end_date: at(today, 19, 0, 0, 0),
            location: Some("Wellness Center".to_owned()),
            color: "#10b981".to_owned(),
            all_day: false,
            reminders: None,
        },
        CalendarEvent {
            id: "4".to_owned(),
            title: "Conference Day".to_owned(),
            description: Some("Annual tech conference".to_owned()),
            start_date: at(next_week, 0, 0, 0, 0),
            end_date: at(next_week, 23, 59, 59, 999),
            location: None,
            color: "#8b5cf6".to_owned(),
            all_day: true,
            reminders: None,
        },
    ]
}

pub fn sample_messages(now: DateTime<Utc>) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: "1".to_owned(),
            text: "Hello! I'm your AI assistant. How can I help you today?".to_owned(),
            sender: Sender::Ai,
            timestamp: now - Duration::seconds(3600),
            kind: None,
        },
        ChatMessage {
            id: "2".to_owned(),
            text: "Show me my tasks for today".to_owned(),
            sender: Sender::User,
            timestamp: now - Duration::seconds(3500),
            kind: None,
        },
        ChatMessage {
            id: "3".to_owned(),
            text: "You have 2 tasks due today: \"Review project proposal\" and \"Grocery shopping\". Would you like me to provide more details?".to_owned(),
            sender: Sender::Ai,
            timestamp: now - Duration::seconds(3400),
            kind: None,
        },
    ]
}

pub fn sample_reminders(now: DateTime<Utc>) -> Vec<Reminder> {
    vec![
        Reminder {
            id: "1".to_owned(),
            title: "Team meeting in 30 minutes".to_owned(),
            description: None,
            due_date: now + Duration::minutes(30),
            completed: false,
            priority: Priority::High,
        },
        Reminder {
            id: "2".to_owned(),
            title: "Submit timesheet".to_owned(),
            description: Some("Weekly timesheet submission".to_owned()),
            due_date: now + Duration::days(1),
            completed: false,
            priority: Priority::Medium,
        },
        Reminder {
            id: "3".to_owned(),
            title: "Call mom".to_owned(),
            description: None,
            due_date: now + Duration::days(2),
            completed: false,
            priority: Priority::Low,
        },
    ]
}

fn at(date: NaiveDate, hour: u32, minute: u32, second: u32, millisecond: u32) -> DateTime<Utc> {
    date.and_hms_milli_opt(hour, minute, second, millisecond)
        .expect("sample wall-clock times are valid")
        .and_utc()
}
