// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// NOTE: Matches the format the hosted backend stores date-only fields in,
/// so it must stay stable.
pub(crate) const FORMAT_DATEONLY: &str = "%Y-%m-%d";
pub(crate) const FORMAT_FLOATING: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a date-only string (`2025-06-01`) to a date.
///
/// Returns `None` on missing or malformed input; callers treat that as
/// "skip this item" rather than failing the whole expansion.
pub fn parse_date_only(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, FORMAT_DATEONLY).ok()
}

/// Combines a date with an optional `HH:MM[:SS]` wall-clock time.
///
/// An absent time yields midnight. Any unparsable or out-of-range component
/// defaults to 0 rather than erroring.
pub fn combine(date: NaiveDate, time: Option<&str>) -> NaiveDateTime {
    let time = time.map(parse_wall_time).unwrap_or_else(midnight);
    NaiveDateTime::new(date, time)
}

fn parse_wall_time(s: &str) -> NaiveTime {
    let mut parts = s.trim().splitn(3, ':');
    let mut component = |limit: u32| {
        parts
            .next()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|v| *v < limit)
            .unwrap_or(0)
    };
    let hour = component(24);
    let minute = component(60);
    let second = component(60);
    NaiveTime::from_hms_opt(hour, minute, second).unwrap_or_else(midnight)
}

const fn midnight() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("00:00:00 must exist in NaiveTime")
}

/// Case-insensitive English weekday name to Sunday-based index (0..=6).
///
/// Unknown names yield `None` and are filtered out by callers, never an
/// error.
pub fn weekday_index(name: &str) -> Option<u32> {
    match name.trim().to_ascii_lowercase().as_str() {
        "sunday" => Some(0),
        "monday" => Some(1),
        "tuesday" => Some(2),
        "wednesday" => Some(3),
        "thursday" => Some(4),
        "friday" => Some(5),
        "saturday" => Some(6),
        _ => None,
    }
}

/// The Sunday on or before the given date, anchoring its week.
pub fn sunday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// The half-open date interval `[start, end)` currently visible in the
/// calendar UI.
///
/// Windows are always computed by the caller from its clock source; the
/// expansion engine only ever receives them as plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First visible date, inclusive.
    pub start: NaiveDate,

    /// First date past the window, exclusive.
    pub end: NaiveDate,
}

impl Window {
    /// Creates a window from explicit bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The calendar month containing `day`.
    pub fn month_of(day: NaiveDate) -> Self {
        let start = day.with_day(1).expect("day 1 exists in every month");
        let end = match start.month() {
            12 => NaiveDate::from_ymd_opt(start.year() + 1, 1, 1),
            m => NaiveDate::from_ymd_opt(start.year(), m + 1, 1),
        }
        .expect("first day of next month is a valid date");
        Self { start, end }
    }

    /// The Sunday-aligned week containing `day`.
    pub fn week_of(day: NaiveDate) -> Self {
        let start = sunday_of(day);
        Self {
            start,
            end: start + Duration::days(7),
        }
    }

    /// Whether the date falls inside `[start, end)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}
