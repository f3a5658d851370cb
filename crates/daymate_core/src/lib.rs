//! Core domain logic for Daymate.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::chat::{ChatMessage, MessageKind, Sender};
pub use model::event::{CalendarEvent, EventValidationError};
pub use model::profile::{Preferences, Theme, UserProfile};
pub use model::reminder::Reminder;
pub use model::stats::{dashboard_stats, DashboardStats};
pub use model::task::{Priority, Task};
pub use service::calendar_service::{
    month_grid, CalendarService, CalendarServiceError, DayCell, MonthGrid,
};
pub use service::chat_service::{reply_to, ChatExchange, ChatService, ChatServiceError};
pub use service::profile_service::ProfileService;
pub use service::reminder_service::ReminderService;
pub use service::task_service::{
    filter_tasks, task_counts, TaskCounts, TaskFilter, TaskService, TaskServiceError,
};
pub use store::{DataStore, SqliteDataStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
