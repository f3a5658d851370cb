//! Calendar use-case service.
//!
//! # Responsibility
//! - Load the event collection, seeding sample events on first read.
//! - Build the month grid projection consumed by the calendar view.
//!
//! # Invariants
//! - Leading blank count equals the weekday index (Sunday = 0) of the first
//!   day of the month.
//! - `has_event` compares calendar days, never full timestamps.
//! - All day math happens on the UTC calendar day.

use crate::model::event::CalendarEvent;
use crate::seed;
use crate::store::{DataStore, StoreError};
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for calendar use-cases.
#[derive(Debug)]
pub enum CalendarServiceError {
    /// Year/month pair does not name a real calendar month.
    InvalidMonth { year: i32, month: u32 },
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for CalendarServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { year, month } => {
                write!(f, "invalid calendar month: year {year}, month {month}")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CalendarServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for CalendarServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One populated day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    pub is_today: bool,
    /// Whether any event starts on this calendar day.
    pub has_event: bool,
}

/// Month grid projection: blanks pad the first week up to the weekday of
/// day 1, then one cell per day of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

/// Calendar service facade over store implementations.
pub struct CalendarService<S: DataStore> {
    store: S,
}

impl<S: DataStore> CalendarService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads all events, writing the sample set first if the collection is
    /// empty.
    pub fn load_events(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, CalendarServiceError> {
        let events = self.store.get_calendar_events()?;
        if !events.is_empty() {
            return Ok(events);
        }

        let seeded = seed::sample_events(now);
        self.store.save_calendar_events(&seeded)?;
        Ok(seeded)
    }
}

/// Builds the month grid for `year`/`month`, marking today and days with at
/// least one event start.
pub fn month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    events: &[CalendarEvent],
) -> Result<MonthGrid, CalendarServiceError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarServiceError::InvalidMonth { year, month })?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or(CalendarServiceError::InvalidMonth { year, month })?;

    let leading_blanks = first.weekday().num_days_from_sunday();
    let days_in_month = first_of_next.signed_duration_since(first).num_days() as u32;

    let days = (1..=days_in_month)
        .map(|day| {
            let date = first + Days::new(u64::from(day - 1));
            DayCell {
                day,
                is_today: date == today,
                has_event: events
                    .iter()
                    .any(|event| event.start_date.date_naive() == date),
            }
        })
        .collect();

    Ok(MonthGrid {
        year,
        month,
        leading_blanks,
        days,
    })
}
