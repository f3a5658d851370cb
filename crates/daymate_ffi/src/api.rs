//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the assistant's screen flows to Dart via FRB.
//! - Act as the composition root: open the database, build the store and
//!   services per call, and supply the clock.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures come back as `ok = false` envelopes with a readable message.
//! - Timestamps cross the boundary as RFC 3339 strings with millisecond
//!   precision and a `Z` suffix.

use chrono::{DateTime, SecondsFormat, Utc};
use daymate_core::db::open_db;
use daymate_core::{
    core_version as core_version_inner, dashboard_stats as dashboard_stats_inner, filter_tasks,
    init_logging as init_logging_inner, month_grid as month_grid_inner, ping as ping_inner,
    task_counts, CalendarEvent, CalendarService, ChatMessage, ChatService, DataStore, DayCell,
    MessageKind, MonthGrid, Priority, ProfileService, Reminder, ReminderService, Sender,
    SqliteDataStore, Task, TaskFilter, TaskService, Theme, UserProfile,
};
use log::error;
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "daymate_assistant.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; conflicting settings fail.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task record projected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    /// `low|medium|high`.
    pub priority: String,
    pub due_date: Option<String>,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Calendar event projected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub location: Option<String>,
    pub color: String,
    pub all_day: bool,
    pub reminders: Option<Vec<String>>,
}

/// Chat message projected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub id: String,
    pub text: String,
    /// `user|ai`.
    pub sender: String,
    pub timestamp: String,
    /// `text|suggestion|action` when present.
    pub kind: Option<String>,
}

/// Reminder projected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: String,
    pub completed: bool,
    /// `low|medium|high`.
    pub priority: String,
}

/// Profile projected for display, preferences flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub notifications_enabled: bool,
    /// `light|dark`.
    pub theme: String,
    pub language: String,
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsView {
    pub tasks_completed: u32,
    pub tasks_total: u32,
    pub upcoming_events: u32,
    pub active_reminders: u32,
}

/// One populated day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCellView {
    pub day: u32,
    pub is_today: bool,
    pub has_event: bool,
}

/// Month grid for the calendar screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGridView {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub days: Vec<DayCellView>,
}

/// Response envelope for task list flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    pub ok: bool,
    pub message: String,
    pub tasks: Vec<TaskView>,
}

impl TaskListResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            tasks: Vec::new(),
        }
    }
}

/// Response envelope for the filtered task list, carrying the per-tab
/// counts of the unfiltered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSearchResponse {
    pub ok: bool,
    pub message: String,
    pub tasks: Vec<TaskView>,
    pub all_count: u32,
    pub active_count: u32,
    pub completed_count: u32,
}

impl TaskSearchResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            tasks: Vec::new(),
            all_count: 0,
            active_count: 0,
            completed_count: 0,
        }
    }
}

/// Response envelope for single-task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    pub ok: bool,
    pub message: String,
    pub task: Option<TaskView>,
}

impl TaskActionResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            task: None,
        }
    }
}

/// Response envelope for event list flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListResponse {
    pub ok: bool,
    pub message: String,
    pub events: Vec<EventView>,
}

impl EventListResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            events: Vec::new(),
        }
    }
}

/// Response envelope for the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGridResponse {
    pub ok: bool,
    pub message: String,
    pub grid: Option<MonthGridView>,
}

impl MonthGridResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            grid: None,
        }
    }
}

/// Response envelope for chat history flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageListResponse {
    pub ok: bool,
    pub message: String,
    pub messages: Vec<MessageView>,
}

impl MessageListResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            messages: Vec::new(),
        }
    }
}

/// Response envelope for sending one chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageResponse {
    pub ok: bool,
    pub message: String,
    pub user: Option<MessageView>,
    pub reply: Option<MessageView>,
}

impl SendMessageResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            user: None,
            reply: None,
        }
    }
}

/// Response envelope for profile flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileResponse {
    pub ok: bool,
    pub message: String,
    pub profile: Option<ProfileView>,
}

impl ProfileResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            profile: None,
        }
    }
}

/// Response envelope for reminder list flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderListResponse {
    pub ok: bool,
    pub message: String,
    pub reminders: Vec<ReminderView>,
}

impl ReminderListResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            reminders: Vec::new(),
        }
    }
}

/// Response envelope for dashboard counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsResponse {
    pub ok: bool,
    pub message: String,
    pub stats: Option<StatsView>,
}

impl StatsResponse {
    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            stats: None,
        }
    }
}

/// Generic response envelope for commands without a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub message: String,
}

impl ActionResponse {
    fn failure(message: String) -> Self {
        Self { ok: false, message }
    }
}

/// Loads the task collection, seeding the sample set on first read.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn load_tasks() -> TaskListResponse {
    let now = Utc::now();
    match with_store("load_tasks", |store| {
        TaskService::new(store)
            .load_tasks(now)
            .map_err(|err| err.to_string())
    }) {
        Ok(tasks) => TaskListResponse {
            ok: true,
            message: format!("Loaded {} task(s).", tasks.len()),
            tasks: tasks.iter().map(task_view).collect(),
        },
        Err(err) => TaskListResponse::failure(format!("load_tasks failed: {err}")),
    }
}

/// Returns tasks matching a status tab and free-text search, plus the
/// unfiltered per-tab counts.
///
/// Input semantics:
/// - `filter`: one of `all|active|completed`.
/// - `search`: activates when non-blank; matched as a raw lowercased
///   substring of title or description.
///
/// # FFI contract
/// - Sync call, DB-backed execution; seeds on first read like `load_tasks`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn search_tasks(filter: String, search: String) -> TaskSearchResponse {
    let parsed = match TaskFilter::parse(filter.as_str()) {
        Some(parsed) => parsed,
        None => {
            return TaskSearchResponse::failure(format!(
                "search_tasks failed: unknown task filter `{filter}`"
            ))
        }
    };

    let now = Utc::now();
    match with_store("search_tasks", |store| {
        TaskService::new(store)
            .load_tasks(now)
            .map_err(|err| err.to_string())
    }) {
        Ok(tasks) => {
            let counts = task_counts(&tasks);
            let matching: Vec<TaskView> = filter_tasks(&tasks, parsed, search.as_str())
                .into_iter()
                .map(task_view)
                .collect();
            TaskSearchResponse {
                ok: true,
                message: format!("Found {} task(s).", matching.len()),
                tasks: matching,
                all_count: counts.all as u32,
                active_count: counts.active as u32,
                completed_count: counts.completed as u32,
            }
        }
        Err(err) => TaskSearchResponse::failure(format!("search_tasks failed: {err}")),
    }
}

/// Flips one task's completion state and persists the collection.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns the updated task on success.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_task(task_id: String) -> TaskActionResponse {
    let now = Utc::now();
    match with_store("toggle_task", |store| {
        TaskService::new(store)
            .toggle_completed(task_id.as_str(), now)
            .map_err(|err| err.to_string())
    }) {
        Ok(task) => TaskActionResponse {
            ok: true,
            message: "Task updated.".to_owned(),
            task: Some(task_view(&task)),
        },
        Err(err) => TaskActionResponse::failure(format!("toggle_task failed: {err}")),
    }
}

/// Loads the event collection, seeding the sample set on first read.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn load_events() -> EventListResponse {
    let now = Utc::now();
    match with_store("load_events", |store| {
        CalendarService::new(store)
            .load_events(now)
            .map_err(|err| err.to_string())
    }) {
        Ok(events) => EventListResponse {
            ok: true,
            message: format!("Loaded {} event(s).", events.len()),
            events: events.iter().map(event_view).collect(),
        },
        Err(err) => EventListResponse::failure(format!("load_events failed: {err}")),
    }
}

/// Builds the month grid for the calendar screen, marking today and days
/// with at least one stored event.
///
/// # FFI contract
/// - Sync call, DB-backed execution; seeds events on first read.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn month_grid(year: i32, month: u32) -> MonthGridResponse {
    let now = Utc::now();
    match with_store("month_grid", |store| {
        let events = CalendarService::new(store)
            .load_events(now)
            .map_err(|err| err.to_string())?;
        month_grid_inner(year, month, now.date_naive(), &events).map_err(|err| err.to_string())
    }) {
        Ok(grid) => MonthGridResponse {
            ok: true,
            message: format!("{} day(s).", grid.days.len()),
            grid: Some(month_grid_view(grid)),
        },
        Err(err) => MonthGridResponse::failure(format!("month_grid failed: {err}")),
    }
}

/// Loads the chat history, seeding the sample exchange on first read.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn load_messages() -> MessageListResponse {
    let now = Utc::now();
    match with_store("load_messages", |store| {
        ChatService::new(store)
            .load_messages(now)
            .map_err(|err| err.to_string())
    }) {
        Ok(messages) => MessageListResponse {
            ok: true,
            message: format!("Loaded {} message(s).", messages.len()),
            messages: messages.iter().map(message_view).collect(),
        },
        Err(err) => MessageListResponse::failure(format!("load_messages failed: {err}")),
    }
}

/// Appends the user's message and the assistant reply to the history.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Blank input fails without writing.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn send_message(text: String) -> SendMessageResponse {
    let now = Utc::now();
    match with_store("send_message", |store| {
        ChatService::new(store)
            .send_message(text.as_str(), now)
            .map_err(|err| err.to_string())
    }) {
        Ok(exchange) => SendMessageResponse {
            ok: true,
            message: "Message sent.".to_owned(),
            user: Some(message_view(&exchange.user)),
            reply: Some(message_view(&exchange.reply)),
        },
        Err(err) => SendMessageResponse::failure(format!("send_message failed: {err}")),
    }
}

/// Loads the profile, seeding the sample profile on first read.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn load_profile() -> ProfileResponse {
    match with_store("load_profile", |store| {
        ProfileService::new(store)
            .load_profile()
            .map_err(|err| err.to_string())
    }) {
        Ok(profile) => ProfileResponse {
            ok: true,
            message: "Profile loaded.".to_owned(),
            profile: Some(profile_view(&profile)),
        },
        Err(err) => ProfileResponse::failure(format!("load_profile failed: {err}")),
    }
}

/// Flips the notifications preference and persists the profile.
///
/// # FFI contract
/// - Sync call, DB-backed execution; seeds the profile when absent.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_notifications() -> ProfileResponse {
    match with_store("toggle_notifications", |store| {
        ProfileService::new(store)
            .toggle_notifications()
            .map_err(|err| err.to_string())
    }) {
        Ok(profile) => ProfileResponse {
            ok: true,
            message: "Preferences updated.".to_owned(),
            profile: Some(profile_view(&profile)),
        },
        Err(err) => ProfileResponse::failure(format!("toggle_notifications failed: {err}")),
    }
}

/// Loads the reminder collection, seeding the sample set on first read.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn load_reminders() -> ReminderListResponse {
    let now = Utc::now();
    match with_store("load_reminders", |store| {
        ReminderService::new(store)
            .load_reminders(now)
            .map_err(|err| err.to_string())
    }) {
        Ok(reminders) => ReminderListResponse {
            ok: true,
            message: format!("Loaded {} reminder(s).", reminders.len()),
            reminders: reminders.iter().map(reminder_view).collect(),
        },
        Err(err) => ReminderListResponse::failure(format!("load_reminders failed: {err}")),
    }
}

/// Computes the dashboard counters over all three collections, seeding each
/// on first read.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_stats() -> StatsResponse {
    let now = Utc::now();
    match with_store("dashboard_stats", |store| {
        let tasks = TaskService::new(store)
            .load_tasks(now)
            .map_err(|err| err.to_string())?;
        let events = CalendarService::new(store)
            .load_events(now)
            .map_err(|err| err.to_string())?;
        let reminders = ReminderService::new(store)
            .load_reminders(now)
            .map_err(|err| err.to_string())?;
        Ok(stats_view(dashboard_stats_inner(
            &tasks, &events, &reminders, now,
        )))
    }) {
        Ok(stats) => StatsResponse {
            ok: true,
            message: "Stats computed.".to_owned(),
            stats: Some(stats),
        },
        Err(err) => StatsResponse::failure(format!("dashboard_stats failed: {err}")),
    }
}

/// Removes every stored collection. Used by logout/reset flows.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn clear_all() -> ActionResponse {
    match with_store("clear_all", |store| {
        store.clear_all().map_err(|err| err.to_string())
    }) {
        Ok(()) => ActionResponse {
            ok: true,
            message: "All collections cleared.".to_owned(),
        },
        Err(err) => ActionResponse::failure(format!("clear_all failed: {err}")),
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("DAYMATE_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(
    operation: &'static str,
    f: impl FnOnce(SqliteDataStore<'_>) -> Result<T, String>,
) -> Result<T, String> {
    let result = run_with_store(f);
    if let Err(err) = &result {
        error!("event={operation} module=ffi status=error error={err}");
    }
    result
}

fn run_with_store<T>(
    f: impl FnOnce(SqliteDataStore<'_>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("database open failed: {err}"))?;
    let store =
        SqliteDataStore::try_new(&conn).map_err(|err| format!("store init failed: {err}"))?;
    f(store)
}

fn task_view(task: &Task) -> TaskView {
    TaskView {
        id: task.id.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        completed: task.completed,
        priority: priority_label(task.priority).to_owned(),
        due_date: task.due_date.map(format_timestamp),
        category: task.category.clone(),
        created_at: format_timestamp(task.created_at),
        updated_at: format_timestamp(task.updated_at),
    }
}

fn event_view(event: &CalendarEvent) -> EventView {
    EventView {
        id: event.id.clone(),
        title: event.title.clone(),
        description: event.description.clone(),
        start_date: format_timestamp(event.start_date),
        end_date: format_timestamp(event.end_date),
        location: event.location.clone(),
        color: event.color.clone(),
        all_day: event.all_day,
        reminders: event.reminders.clone(),
    }
}

fn message_view(message: &ChatMessage) -> MessageView {
    MessageView {
        id: message.id.clone(),
        text: message.text.clone(),
        sender: sender_label(message.sender).to_owned(),
        timestamp: format_timestamp(message.timestamp),
        kind: message.kind.map(|kind| kind_label(kind).to_owned()),
    }
}

fn reminder_view(reminder: &Reminder) -> ReminderView {
    ReminderView {
        id: reminder.id.clone(),
        title: reminder.title.clone(),
        description: reminder.description.clone(),
        due_date: format_timestamp(reminder.due_date),
        completed: reminder.completed,
        priority: priority_label(reminder.priority).to_owned(),
    }
}

fn profile_view(profile: &UserProfile) -> ProfileView {
    ProfileView {
        id: profile.id.clone(),
        name: profile.name.clone(),
        email: profile.email.clone(),
        avatar: profile.avatar.clone(),
        notifications_enabled: profile.preferences.notifications_enabled,
        theme: theme_label(profile.preferences.theme).to_owned(),
        language: profile.preferences.language.clone(),
    }
}

fn stats_view(stats: daymate_core::DashboardStats) -> StatsView {
    StatsView {
        tasks_completed: stats.tasks_completed as u32,
        tasks_total: stats.tasks_total as u32,
        upcoming_events: stats.upcoming_events as u32,
        active_reminders: stats.active_reminders as u32,
    }
}

fn month_grid_view(grid: MonthGrid) -> MonthGridView {
    MonthGridView {
        year: grid.year,
        month: grid.month,
        leading_blanks: grid.leading_blanks,
        days: grid.days.iter().map(day_cell_view).collect(),
    }
}

fn day_cell_view(cell: &DayCell) -> DayCellView {
    DayCellView {
        day: cell.day,
        is_today: cell.is_today,
        has_event: cell.has_event,
    }
}

fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "user",
        Sender::Ai => "ai",
    }
}

fn kind_label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Text => "text",
        MessageKind::Suggestion => "suggestion",
        MessageKind::Action => "action",
    }
}

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}

#[cfg(test)]
mod tests {
    use super::{
        clear_all, core_version, dashboard_stats, init_logging, load_events, load_messages,
        load_profile, load_reminders, load_tasks, month_grid, ping, search_tasks, send_message,
        toggle_notifications, toggle_task,
    };
    use chrono::{Datelike, Utc};
    use daymate_core::db::open_db;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn search_tasks_rejects_unknown_filter_before_touching_storage() {
        let response = search_tasks("archived".to_string(), String::new());
        assert!(!response.ok);
        assert!(response.message.contains("unknown task filter"));
    }

    // Endpoints below share one database file, so the whole journey runs as
    // a single sequential test.
    #[test]
    fn assistant_flows_share_one_database() {
        let cleared = clear_all();
        assert!(cleared.ok, "{}", cleared.message);

        // First task read seeds the sample set.
        let tasks = load_tasks();
        assert!(tasks.ok, "{}", tasks.message);
        let ids: Vec<&str> = tasks.tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(tasks.tasks[0].priority, "high");
        assert!(tasks.tasks[2].completed);

        // Toggling the seeded-complete task leaves nothing completed.
        let toggled = toggle_task("3".to_string());
        assert!(toggled.ok, "{}", toggled.message);
        let toggled_task = toggled.task.expect("toggled task present");
        assert!(!toggled_task.completed);

        let missing = toggle_task("99".to_string());
        assert!(!missing.ok);
        assert!(missing.message.contains("task not found"));

        let searched = search_tasks("active".to_string(), "proposal".to_string());
        assert!(searched.ok, "{}", searched.message);
        assert_eq!(searched.tasks.len(), 1);
        assert_eq!(searched.tasks[0].id, "1");
        assert_eq!(searched.all_count, 4);
        assert_eq!(searched.active_count, 4);
        assert_eq!(searched.completed_count, 0);

        // Events seed on first read; today's cell carries the stand-up.
        let events = load_events();
        assert!(events.ok, "{}", events.message);
        assert_eq!(events.events.len(), 4);

        let today = Utc::now();
        let grid = month_grid(today.year(), today.month());
        assert!(grid.ok, "{}", grid.message);
        let grid = grid.grid.expect("grid present");
        let today_cell = grid
            .days
            .iter()
            .find(|cell| cell.is_today)
            .expect("today is in its own month");
        assert_eq!(today_cell.day, today.day());
        assert!(today_cell.has_event);

        let bad_grid = month_grid(2026, 13);
        assert!(!bad_grid.ok);
        assert!(bad_grid.message.contains("invalid calendar month"));

        // Chat: seeded history plus one exchange.
        let history = load_messages();
        assert!(history.ok, "{}", history.message);
        assert_eq!(history.messages.len(), 3);

        let sent = send_message("what does my calendar look like".to_string());
        assert!(sent.ok, "{}", sent.message);
        let reply = sent.reply.expect("reply present");
        assert_eq!(reply.sender, "ai");
        assert!(reply.text.contains("Calendar tab"));

        let blank = send_message("   ".to_string());
        assert!(!blank.ok);

        let history_after = load_messages();
        assert_eq!(history_after.messages.len(), 5);

        // Profile: seed then flip notifications.
        let profile = load_profile();
        assert!(profile.ok, "{}", profile.message);
        let loaded = profile.profile.expect("profile present");
        assert_eq!(loaded.name, "Alex Johnson");
        assert!(loaded.notifications_enabled);

        let toggled_profile = toggle_notifications();
        assert!(toggled_profile.ok, "{}", toggled_profile.message);
        assert!(
            !toggled_profile
                .profile
                .expect("profile present")
                .notifications_enabled
        );

        let reminders = load_reminders();
        assert!(reminders.ok, "{}", reminders.message);
        assert_eq!(reminders.reminders.len(), 3);

        // Stats reflect the toggled task and seeded collections.
        let stats = dashboard_stats();
        assert!(stats.ok, "{}", stats.message);
        let stats = stats.stats.expect("stats present");
        assert_eq!(stats.tasks_total, 4);
        assert_eq!(stats.tasks_completed, 0);
        assert_eq!(stats.active_reminders, 3);
        // Tomorrow's meeting and next week's conference are always ahead.
        assert!(stats.upcoming_events >= 2);

        // Clearing empties the backing table entirely.
        let cleared = clear_all();
        assert!(cleared.ok, "{}", cleared.message);
        let conn = open_db(super::resolve_db_path()).expect("open db");
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM collections;", [], |row| row.get(0))
            .expect("count rows");
        assert_eq!(rows, 0);
    }
}
