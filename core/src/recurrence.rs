// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Duration, NaiveDate};

use crate::datetime::{Window, parse_date_only, sunday_of, weekday_index};
use crate::event::{Event, Recurrence};

/// Resolves an event's recurrence rule to the ordered occurrence dates that
/// intersect the window.
///
/// Dates only; turning them into renderable occurrences is a separate step.
/// An event whose start date does not parse resolves to nothing, it never
/// aborts the surrounding expansion.
pub fn resolve(event: &Event, window: Window) -> Vec<NaiveDate> {
    let Some(start) = parse_date_only(&event.start_date) else {
        tracing::warn!(id = %event.id, start_date = %event.start_date, "skipping event with unparsable start date");
        return Vec::new();
    };

    match event.recurrence {
        Recurrence::None => resolve_single(event, start, window),
        _ => resolve_weekly(event, start, window),
    }
}

/// A one-shot event is emitted iff it intersects the window.
///
/// The test is deliberately asymmetric: the event end is compared against
/// the window start but the event start against the window end, so a
/// multi-day event already in progress when the window opens stays visible.
fn resolve_single(event: &Event, start: NaiveDate, window: Window) -> Vec<NaiveDate> {
    let end = event
        .end_date
        .as_deref()
        .and_then(parse_date_only)
        .unwrap_or(start);

    if end >= window.start && start < window.end {
        vec![start]
    } else {
        Vec::new()
    }
}

/// Shared week sweep for the four recurring kinds.
///
/// Walks Sunday-aligned weeks from the clipped series start, emitting the
/// active weekdays of each week until the occurrence budget or the search
/// end cuts the series off. The outer bound is always the finite window,
/// so even an indefinite series terminates.
fn resolve_weekly(event: &Event, start: NaiveDate, window: Window) -> Vec<NaiveDate> {
    let active_days = active_days(event, start);
    let series_start = start.max(window.start);

    // Only a deadline series has a hard date bound; fixed-count and
    // indefinite series are cut by the counter or the window alone.
    let hard_end = match event.recurrence {
        Recurrence::Deadline => event.series_deadline.as_deref().and_then(parse_date_only),
        _ => None,
    };
    let search_end = hard_end.map_or(window.end, |d| d.min(window.end));

    // A missing or non-positive limit degrades to "unbounded by count".
    let mut remaining = match event.recurrence {
        Recurrence::FixedCount => event.occurrence_limit.filter(|n| *n > 0),
        _ => None,
    };

    let mut dates = Vec::new();
    let mut week = sunday_of(series_start);
    'sweep: while week <= search_end {
        for &offset in &active_days {
            let day = week + Duration::days(i64::from(offset));
            if day < series_start || day > search_end {
                continue;
            }
            if hard_end.is_some_and(|end| day > end) {
                continue;
            }

            dates.push(day);
            if let Some(n) = remaining.as_mut() {
                *n -= 1;
                if *n == 0 {
                    break 'sweep;
                }
            }
        }
        week += Duration::days(7);
    }

    dates
}

/// The weekday indices the rule falls on, in declared order. Unrecognized
/// names are dropped; an empty result defaults to the start date's weekday.
fn active_days(event: &Event, start: NaiveDate) -> Vec<u32> {
    let mut days: Vec<u32> = event
        .days_of_week
        .iter()
        .filter_map(|name| weekday_index(name))
        .collect();

    if days.is_empty() {
        days.push(start.weekday().num_days_from_sunday());
    }
    days
}
