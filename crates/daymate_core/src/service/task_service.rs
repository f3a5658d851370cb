//! Task use-case service.
//!
//! # Responsibility
//! - Load the task collection, seeding sample tasks on first read.
//! - Toggle task completion and persist the full collection.
//! - Provide pure filter/count projections for the task list view.
//!
//! # Invariants
//! - Seeding fires only when the stored collection is empty.
//! - Toggling flips `completed` and refreshes `updated_at` on exactly the
//!   toggled task.
//! - Filtering is the conjunction of the status filter and the substring
//!   search.

use crate::model::task::Task;
use crate::seed;
use crate::store::{DataStore, StoreError};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for task use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Target task does not exist.
    TaskNotFound(String),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(task_id) => write!(f, "task not found: {task_id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for TaskServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Status dimension of the task list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Parses the tab label used by list views (`all`/`active`/`completed`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Per-tab counts shown next to the filter labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

/// Task service facade over store implementations.
pub struct TaskService<S: DataStore> {
    store: S,
}

impl<S: DataStore> TaskService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads all tasks, writing the sample set first if the collection is
    /// empty.
    pub fn load_tasks(&self, now: DateTime<Utc>) -> Result<Vec<Task>, TaskServiceError> {
        let tasks = self.store.get_tasks()?;
        if !tasks.is_empty() {
            return Ok(tasks);
        }

        let seeded = seed::sample_tasks(now);
        self.store.save_tasks(&seeded)?;
        Ok(seeded)
    }

    /// Flips `completed` on one task, refreshes its `updated_at`, and
    /// persists the collection. Returns the updated task.
    pub fn toggle_completed(
        &self,
        task_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Task, TaskServiceError> {
        let mut tasks = self.store.get_tasks()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| TaskServiceError::TaskNotFound(task_id.to_owned()))?;

        task.toggle_completed(now);
        let updated = task.clone();
        self.store.save_tasks(&tasks)?;
        Ok(updated)
    }
}

/// Applies the status filter and substring search over a task slice.
///
/// The search activates only when the query is non-blank; once active, the
/// raw query is lowercased as-is (no trimming) and matched against lowercased
/// title and description.
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: TaskFilter, search: &str) -> Vec<&'a Task> {
    let query = if search.trim().is_empty() {
        None
    } else {
        Some(search.to_lowercase())
    };

    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .filter(|task| {
            query
                .as_deref()
                .map_or(true, |query| matches_query(task, query))
        })
        .collect()
}

fn matches_query(task: &Task, query: &str) -> bool {
    task.title.to_lowercase().contains(query)
        || task
            .description
            .as_ref()
            .map_or(false, |description| description.to_lowercase().contains(query))
}

/// Counts tasks per filter tab.
pub fn task_counts(tasks: &[Task]) -> TaskCounts {
    let active = tasks.iter().filter(|task| !task.completed).count();
    let completed = tasks.iter().filter(|task| task.completed).count();
    TaskCounts {
        all: tasks.len(),
        active,
        completed,
    }
}
