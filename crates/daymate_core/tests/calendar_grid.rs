use chrono::{DateTime, TimeZone, Utc};
use daymate_core::db::open_db_in_memory;
use daymate_core::store::SqliteDataStore;
use daymate_core::{dashboard_stats, month_grid, CalendarService, CalendarServiceError};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 7, 10, 0, 0).unwrap()
}

#[test]
fn grid_over_seeded_events_marks_their_days() {
    let conn = open_db_in_memory().unwrap();
    let service = CalendarService::new(SqliteDataStore::try_new(&conn).unwrap());
    let now = fixed_now();

    let events = service.load_events(now).unwrap();
    let grid = month_grid(2026, 4, now.date_naive(), &events).unwrap();

    // April 2026 starts on a Wednesday.
    assert_eq!(grid.leading_blanks, 3);
    assert_eq!(grid.days.len(), 30);

    let marked: Vec<u32> = grid
        .days
        .iter()
        .filter(|cell| cell.has_event)
        .map(|cell| cell.day)
        .collect();
    assert_eq!(marked, [7, 8, 14]);

    assert!(grid.days[6].is_today);
    assert_eq!(grid.days.iter().filter(|cell| cell.is_today).count(), 1);
}

#[test]
fn december_grid_wraps_the_year_for_its_length() {
    let now = fixed_now();
    let grid = month_grid(2026, 12, now.date_naive(), &[]).unwrap();

    // December 2026 starts on a Tuesday.
    assert_eq!(grid.leading_blanks, 2);
    assert_eq!(grid.days.len(), 31);
    assert!(grid.days.iter().all(|cell| !cell.is_today));
}

#[test]
fn month_zero_is_rejected() {
    let err = month_grid(2026, 0, fixed_now().date_naive(), &[]).unwrap_err();
    assert!(matches!(
        err,
        CalendarServiceError::InvalidMonth {
            year: 2026,
            month: 0
        }
    ));
}

#[test]
fn upcoming_count_over_seeded_events() {
    let conn = open_db_in_memory().unwrap();
    let service = CalendarService::new(SqliteDataStore::try_new(&conn).unwrap());
    let now = fixed_now();

    let events = service.load_events(now).unwrap();
    let stats = dashboard_stats(&[], &events, &[], now);

    // The 09:00 stand-up is already past 10:00; the other three lie ahead.
    assert_eq!(stats.upcoming_events, 3);
}
