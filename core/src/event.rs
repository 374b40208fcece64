// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

/// How an event repeats.
///
/// These are the only recurrence rules the planner supports; anything
/// richer belongs to a full RRULE engine, which this is deliberately not.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Recurrence {
    /// A one-shot event, possibly spanning multiple days.
    #[default]
    None,

    /// Repeats on the listed weekdays, bounded only by the window.
    WeeklyDays,

    /// Repeats on the listed weekdays for a fixed number of occurrences.
    FixedCount,

    /// Repeats on the listed weekdays until an explicit end date.
    Deadline,

    /// Repeats on the listed weekdays forever.
    Indefinite,
}

/// A calendar event as stored by the hosted backend.
///
/// Date and time fields are kept as the raw strings the store returns
/// (`2025-06-01`, `09:30`); the engine parses them on demand and skips the
/// event when its start date does not parse. Events are immutable input to
/// the engine, never mutated by it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque identifier, stable across calls.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Display location, if any.
    #[serde(default)]
    pub place: Option<String>,

    /// Date-only start, required; the first possible occurrence date.
    pub start_date: String,

    /// Date-only end; only meaningful for a non-recurring event spanning
    /// multiple days.
    #[serde(default)]
    pub end_date: Option<String>,

    /// Optional `HH:MM[:SS]` wall-clock start time.
    #[serde(default)]
    pub start_time: Option<String>,

    /// Optional `HH:MM[:SS]` wall-clock end time.
    #[serde(default)]
    pub end_time: Option<String>,

    /// The recurrence rule kind.
    #[serde(default, rename = "recurrenceType")]
    pub recurrence: Recurrence,

    /// Weekday names the recurrence falls on; when empty, the weekday of
    /// `start_date` applies.
    #[serde(default)]
    pub days_of_week: Vec<String>,

    /// Maximum number of occurrences; meaningful only for
    /// [`Recurrence::FixedCount`].
    #[serde(default)]
    pub occurrence_limit: Option<u32>,

    /// Date-only end of the series; meaningful only for
    /// [`Recurrence::Deadline`].
    #[serde(default)]
    pub series_deadline: Option<String>,

    /// Display color, if the user assigned one.
    #[serde(default)]
    pub color: Option<String>,
}

impl Event {
    /// Whether the event carries any recurrence rule at all.
    pub fn is_recurring(&self) -> bool {
        self.recurrence != Recurrence::None
    }
}
