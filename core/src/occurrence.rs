// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::activity::Activity;
use crate::datetime::{FORMAT_FLOATING, combine, parse_date_only};
use crate::event::Event;

/// One concrete, dated rendering of a recurring or one-shot item.
///
/// Occurrences are recomputed on every expansion and carry no identity
/// beyond the current render cycle; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// Deterministic identity for deduplication: `E:<eventId>:<start>` or
    /// `A:<activityId>`.
    pub key: String,

    /// Display title.
    pub title: String,

    /// Start timestamp (naive local wall-clock).
    pub start: NaiveDateTime,

    /// End timestamp, when one is known.
    pub end: Option<NaiveDateTime>,

    /// Whether the item has no wall-clock times at all.
    pub all_day: bool,

    /// Hint for the render boundary: the source's display color or id for
    /// events, the status token for activities.
    pub color_hint: String,
}

impl Occurrence {
    /// Materializes one resolved occurrence date of an event.
    ///
    /// Total and side-effect free; the window is never consulted here.
    pub fn materialize(event: &Event, day: NaiveDate) -> Self {
        let start = combine(day, event.start_time.as_deref());

        let end = if event.end_time.is_some() {
            Some(combine(day, event.end_time.as_deref()))
        } else {
            event
                .end_date
                .as_deref()
                .and_then(parse_date_only)
                .filter(|d| *d != day)
                .map(|d| combine(d, event.end_time.as_deref()))
        };

        Self {
            key: format!("E:{}:{}", event.id, start.format(FORMAT_FLOATING)),
            title: event.title.clone(),
            start,
            end,
            all_day: event.start_time.is_none() && event.end_time.is_none(),
            color_hint: event
                .color
                .clone()
                .unwrap_or_else(|| event.id.clone()),
        }
    }

    /// Maps an activity due on `day` to an all-day occurrence.
    pub fn from_activity(activity: &Activity, day: NaiveDate) -> Self {
        Self {
            key: format!("A:{}", activity.id),
            title: activity.title.clone(),
            start: combine(day, None),
            end: None,
            all_day: true,
            color_hint: activity.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityStatus;
    use crate::event::Recurrence;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event() -> Event {
        Event {
            id: "ev-7".into(),
            title: "Seminar".into(),
            place: None,
            start_date: "2025-06-02".into(),
            end_date: None,
            start_time: None,
            end_time: None,
            recurrence: Recurrence::None,
            days_of_week: Vec::new(),
            occurrence_limit: None,
            series_deadline: None,
            color: None,
        }
    }

    #[test]
    fn timed_event_gets_start_and_end() {
        let mut e = event();
        e.start_time = Some("10:00".into());
        e.end_time = Some("11:30".into());

        let occ = Occurrence::materialize(&e, date(2025, 6, 2));
        assert_eq!(occ.start, date(2025, 6, 2).and_hms_opt(10, 0, 0).unwrap());
        assert_eq!(
            occ.end,
            Some(date(2025, 6, 2).and_hms_opt(11, 30, 0).unwrap())
        );
        assert!(!occ.all_day);
        assert_eq!(occ.key, "E:ev-7:2025-06-02T10:00:00");
    }

    #[test]
    fn timeless_event_is_all_day() {
        let occ = Occurrence::materialize(&event(), date(2025, 6, 2));
        assert!(occ.all_day);
        assert_eq!(occ.start, date(2025, 6, 2).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(occ.end, None);
    }

    #[test]
    fn multi_day_event_ends_on_its_end_date() {
        let mut e = event();
        e.start_date = "2025-05-30".into();
        e.end_date = Some("2025-06-02".into());

        let occ = Occurrence::materialize(&e, date(2025, 5, 30));
        assert_eq!(
            occ.end,
            Some(date(2025, 6, 2).and_hms_opt(0, 0, 0).unwrap())
        );
        assert!(occ.all_day);
    }

    #[test]
    fn end_date_equal_to_occurrence_day_yields_no_end() {
        let mut e = event();
        e.end_date = Some("2025-06-02".into());

        let occ = Occurrence::materialize(&e, date(2025, 6, 2));
        assert_eq!(occ.end, None);
    }

    #[test]
    fn end_time_wins_over_end_date() {
        let mut e = event();
        e.start_time = Some("09:00".into());
        e.end_time = Some("10:00".into());
        e.end_date = Some("2025-06-05".into());

        let occ = Occurrence::materialize(&e, date(2025, 6, 2));
        assert_eq!(
            occ.end,
            Some(date(2025, 6, 2).and_hms_opt(10, 0, 0).unwrap())
        );
    }

    #[test]
    fn color_hint_falls_back_to_event_id() {
        let occ = Occurrence::materialize(&event(), date(2025, 6, 2));
        assert_eq!(occ.color_hint, "ev-7");

        let mut e = event();
        e.color = Some("#1d4ed8".into());
        let occ = Occurrence::materialize(&e, date(2025, 6, 2));
        assert_eq!(occ.color_hint, "#1d4ed8");
    }

    #[test]
    fn activity_maps_to_all_day_occurrence() {
        let activity = Activity {
            id: "1".into(),
            title: "Essay".into(),
            due_date: "2025-06-15".into(),
            status: ActivityStatus::Done,
        };

        let occ = Occurrence::from_activity(&activity, date(2025, 6, 15));
        assert_eq!(occ.key, "A:1");
        assert!(occ.all_day);
        assert_eq!(occ.start, date(2025, 6, 15).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(occ.color_hint, "DONE");
    }
}
