use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

use crate::api::EventsByDate;
use crate::models::JobEvent;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The (year, zero-based month) pair currently displayed.
///
/// Months stay zero-based everywhere outside this module; chrono's one-based
/// months only appear in the date arithmetic below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleMonth {
    pub year: i32,
    pub month: u32,
}

impl VisibleMonth {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!(month < 12);
        Self { year, month }
    }

    /// Month shifted by `direction` steps, over/underflow normalized
    /// (January - 1 is December of the previous year).
    pub fn advanced(self, direction: i32) -> Self {
        let (year, month) = add_months(self.year, self.month, direction);
        Self { year, month }
    }

    /// First day of the month 00:00 through last day of the month 00:00,
    /// the window sent with every job-events request.
    pub fn request_window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = first_of_month(self.year, self.month);
        let end = last_of_month(self.year, self.month);
        (
            start.and_time(NaiveTime::MIN).and_utc(),
            end.and_time(NaiveTime::MIN).and_utc(),
        )
    }
}

impl fmt::Display for VisibleMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", MONTH_NAMES[self.month as usize % 12], self.year)
    }
}

/// One slot of the 7-column month grid, in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub enum GridCell {
    /// Leading filler before day 1
    Blank,
    Day {
        day: u32,
        date_key: String,
        events: Vec<JobEvent>,
    },
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month + 1, 1).expect("valid month start date")
}

fn last_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = add_months(year, month, 1);
    first_of_month(next_year, next_month)
        .pred_opt()
        .expect("month start has a predecessor")
}

/// Normalizes `(year, zero-based month) + delta` into a valid pair.
pub fn add_months(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 + delta;
    (total.div_euclid(12), total.rem_euclid(12) as u32)
}

/// Day count of the given month, leap years included; computed as the day
/// before the first of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    last_of_month(year, month).day()
}

/// Weekday index of day 1, 0 = Sunday.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    first_of_month(year, month).weekday().num_days_from_sunday()
}

/// Canonical zero-padded `YYYY-MM-DD` key; zero-based month rendered one-based.
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month + 1, day)
}

/// Lays out one month as leading blanks followed by one cell per day, each
/// carrying its date key and the events filed under it. No trailing padding.
pub fn build_grid(year: i32, month: u32, events: &EventsByDate) -> Vec<GridCell> {
    let offset = first_weekday_offset(year, month);
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity((offset + days) as usize);
    for _ in 0..offset {
        cells.push(GridCell::Blank);
    }
    for day in 1..=days {
        let key = date_key(year, month, day);
        let day_events = events.get(&key).cloned().unwrap_or_default();
        cells.push(GridCell::Day {
            day,
            date_key: key,
            events: day_events,
        });
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobEventKind;

    fn event(company: &str) -> JobEvent {
        JobEvent {
            company: company.to_string(),
            kind: JobEventKind::Internship,
            role: "SWE Intern".to_string(),
            time: "10:00 AM".to_string(),
        }
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2025, 0), 31);
        assert_eq!(days_in_month(2025, 3), 30);
    }

    #[test]
    fn test_first_weekday_offset_january_2025_is_wednesday() {
        assert_eq!(first_weekday_offset(2025, 0), 3);
    }

    #[test]
    fn test_date_key_zero_pads_and_shifts_month() {
        assert_eq!(date_key(2025, 0, 5), "2025-01-05");
        assert_eq!(date_key(2025, 10, 23), "2025-11-23");
    }

    #[test]
    fn test_add_months_normalizes_overflow() {
        assert_eq!(add_months(2025, 0, -1), (2024, 11));
        assert_eq!(add_months(2025, 11, 1), (2026, 0));
        assert_eq!(add_months(2025, 5, 14), (2026, 7));
    }

    #[test]
    fn test_advanced_round_trip_returns_same_month() {
        let month = VisibleMonth::new(2025, 5);
        assert_eq!(month.advanced(1).advanced(-1), month);
        assert_eq!(
            VisibleMonth::new(2025, 0).advanced(-1),
            VisibleMonth::new(2024, 11)
        );
    }

    #[test]
    fn test_build_grid_emits_offset_blanks_then_days() {
        let cells = build_grid(2025, 0, &EventsByDate::new());

        assert_eq!(cells.len(), 3 + 31);
        assert!(cells.len() <= 42);
        assert!(cells[..3].iter().all(|cell| *cell == GridCell::Blank));
        assert!(matches!(cells[3], GridCell::Day { day: 1, .. }));
        assert!(matches!(cells.last(), Some(GridCell::Day { day: 31, .. })));
    }

    #[test]
    fn test_build_grid_attaches_events_to_matching_day_only() {
        let mut events = EventsByDate::new();
        events.insert(
            "2025-01-05".to_string(),
            vec![event("Acme"), event("Globex")],
        );

        let cells = build_grid(2025, 0, &events);
        for cell in &cells {
            if let GridCell::Day { day, events, .. } = cell {
                if *day == 5 {
                    assert_eq!(events.len(), 2);
                    assert_eq!(events[0].company, "Acme");
                } else {
                    assert!(events.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_request_window_spans_whole_month() {
        let (start, end) = VisibleMonth::new(2025, 0).request_window();
        assert_eq!(start.to_rfc3339(), "2025-01-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-01-31T00:00:00+00:00");

        let (_, leap_end) = VisibleMonth::new(2024, 1).request_window();
        assert_eq!(leap_end.date_naive().day(), 29);
    }

    #[test]
    fn test_visible_month_label() {
        assert_eq!(VisibleMonth::new(2025, 0).to_string(), "January 2025");
    }
}
