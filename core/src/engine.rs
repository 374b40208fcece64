// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use crate::activity::Activity;
use crate::datetime::{Window, parse_date_only};
use crate::event::Event;
use crate::occurrence::Occurrence;
use crate::recurrence;

/// Expands events and activities into the renderable occurrences of one
/// display window.
///
/// Activities are mapped first, then every event is resolved and
/// materialized; the merged stream is deduplicated by key, first seen wins.
/// The function is pure and deterministic for fixed inputs: no clock reads,
/// no shared state. A malformed item contributes nothing and never aborts
/// the rest.
///
/// Callers must not rely on the output ordering beyond "activities before
/// events"; sort by start when display order matters.
pub fn expand(events: &[Event], activities: &[Activity], window: Window) -> Vec<Occurrence> {
    let mut seen = HashSet::new();
    let mut occurrences = Vec::new();

    for activity in activities {
        let Some(due) = parse_date_only(&activity.due_date) else {
            tracing::warn!(id = %activity.id, due_date = %activity.due_date, "skipping activity with unparsable due date");
            continue;
        };
        if !window.contains(due) {
            continue;
        }
        push_unique(&mut occurrences, &mut seen, Occurrence::from_activity(activity, due));
    }

    for event in events {
        for day in recurrence::resolve(event, window) {
            push_unique(&mut occurrences, &mut seen, Occurrence::materialize(event, day));
        }
    }

    tracing::debug!(
        events = events.len(),
        activities = activities.len(),
        occurrences = occurrences.len(),
        "expanded window"
    );
    occurrences
}

fn push_unique(occurrences: &mut Vec<Occurrence>, seen: &mut HashSet<String>, occ: Occurrence) {
    if seen.insert(occ.key.clone()) {
        occurrences.push(occ);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityStatus;
    use crate::event::Recurrence;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: &str, recurrence: Recurrence, start_date: &str) -> Event {
        Event {
            id: id.into(),
            title: format!("Event {id}"),
            place: None,
            start_date: start_date.into(),
            end_date: None,
            start_time: None,
            end_time: None,
            recurrence,
            days_of_week: Vec::new(),
            occurrence_limit: None,
            series_deadline: None,
            color: None,
        }
    }

    fn activity(id: &str, due_date: &str, status: ActivityStatus) -> Activity {
        Activity {
            id: id.into(),
            title: format!("Activity {id}"),
            due_date: due_date.into(),
            status,
        }
    }

    #[test]
    fn merges_activities_before_events() {
        let events = vec![event("e1", Recurrence::None, "2025-06-10")];
        let activities = vec![activity("1", "2025-06-15", ActivityStatus::Pending)];
        let w = Window::new(date(2025, 6, 1), date(2025, 7, 1));

        let occurrences = expand(&events, &activities, w);
        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[0].key, "A:1");
        assert!(occurrences[1].key.starts_with("E:e1:"));
    }

    #[test]
    fn activity_outside_window_is_dropped() {
        let activities = vec![
            activity("in", "2025-06-15", ActivityStatus::Pending),
            activity("before", "2025-05-31", ActivityStatus::Pending),
            activity("on-end", "2025-07-01", ActivityStatus::Pending),
        ];
        let w = Window::new(date(2025, 6, 1), date(2025, 7, 1));

        let occurrences = expand(&[], &activities, w);
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].key, "A:in");
    }

    #[test]
    fn unparsable_event_does_not_abort_expansion() {
        let events = vec![
            event("bad", Recurrence::None, "not-a-date"),
            event("good", Recurrence::None, "2025-06-10"),
        ];
        let activities = vec![activity("1", "2025-06-15", ActivityStatus::Pending)];
        let w = Window::new(date(2025, 6, 1), date(2025, 7, 1));

        let occurrences = expand(&events, &activities, w);
        assert_eq!(occurrences.len(), 2);
        assert!(occurrences.iter().all(|o| !o.key.contains("bad")));
    }

    #[test]
    fn duplicate_keys_are_dropped_first_seen_wins() {
        // The same event listed twice, as a caller re-adding on overlapping
        // windows would produce.
        let e = event("dup", Recurrence::None, "2025-06-10");
        let events = vec![e.clone(), e];
        let w = Window::new(date(2025, 6, 1), date(2025, 7, 1));

        let occurrences = expand(&events, &[], w);
        assert_eq!(occurrences.len(), 1);
    }

    #[test]
    fn no_two_occurrences_share_a_key() {
        let mut weekly = event("w", Recurrence::WeeklyDays, "2025-06-02");
        weekly.days_of_week = vec!["Monday".into(), "Wednesday".into(), "Monday".into()];
        let events = vec![weekly, event("s", Recurrence::None, "2025-06-10")];
        let activities = vec![
            activity("1", "2025-06-15", ActivityStatus::Pending),
            activity("2", "2025-06-15", ActivityStatus::Done),
        ];
        let w = Window::new(date(2025, 6, 1), date(2025, 7, 1));

        let occurrences = expand(&events, &activities, w);
        let mut keys: Vec<&str> = occurrences.iter().map(|o| o.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), occurrences.len());
    }

    #[test]
    fn expansion_is_deterministic() {
        let mut weekly = event("w", Recurrence::Indefinite, "2025-01-06");
        weekly.days_of_week = vec!["Monday".into(), "Friday".into()];
        let events = vec![weekly, event("s", Recurrence::None, "2025-06-10")];
        let activities = vec![activity("1", "2025-06-15", ActivityStatus::Pending)];
        let w = Window::new(date(2025, 6, 1), date(2025, 7, 1));

        let a = expand(&events, &activities, w);
        let b = expand(&events, &activities, w);
        assert_eq!(a, b);
    }

    #[test]
    fn occurrences_fall_inside_the_window() {
        let mut weekly = event("w", Recurrence::Indefinite, "2024-01-01");
        weekly.days_of_week = vec!["Wednesday".into(), "Friday".into()];
        let activities = vec![activity("1", "2025-06-15", ActivityStatus::Pending)];
        let w = Window::new(date(2025, 6, 1), date(2025, 7, 1));

        let occurrences = expand(&[weekly], &activities, w);
        assert!(!occurrences.is_empty());
        for occ in occurrences {
            assert!(occ.start >= w.start.and_hms_opt(0, 0, 0).unwrap());
            assert!(occ.start < w.end.and_hms_opt(0, 0, 0).unwrap());
        }
    }
}
