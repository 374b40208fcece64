// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for integration tests: data factories and in-memory
//! store collaborators.

use async_trait::async_trait;
use chrono::NaiveDate;

use semestra_core::{
    Activity, ActivityStatus, ActivityStore, DueFilter, Event, EventStore, Recurrence, StoreError,
    parse_date_only,
};

/// Creates a minimal one-shot event starting on the given date.
pub fn one_shot(id: &str, start_date: &str) -> Event {
    Event {
        id: id.into(),
        title: format!("Event {id}"),
        place: None,
        start_date: start_date.into(),
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

/// Creates a recurring event on the given weekdays.
pub fn recurring(id: &str, start_date: &str, kind: Recurrence, days: &[&str]) -> Event {
    let mut event = one_shot(id, start_date);
    event.recurrence = kind;
    event.days_of_week = days.iter().map(|d| (*d).to_string()).collect();
    event
}

/// Creates an activity due on the given date.
pub fn activity(id: &str, due_date: &str, status: ActivityStatus) -> Activity {
    Activity {
        id: id.into(),
        title: format!("Activity {id}"),
        due_date: due_date.into(),
        status,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// In-memory event store, standing in for the hosted backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryEventStore {
    pub events: Vec<Event>,
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.events.clone())
    }
}

/// In-memory activity store applying the due-date filter the way a real
/// backend would.
#[derive(Debug, Default, Clone)]
pub struct MemoryActivityStore {
    pub activities: Vec<Activity>,
}

#[async_trait]
impl ActivityStore for MemoryActivityStore {
    async fn list(&self, filter: Option<DueFilter>) -> Result<Vec<Activity>, StoreError> {
        let Some(filter) = filter else {
            return Ok(self.activities.clone());
        };
        Ok(self
            .activities
            .iter()
            .filter(|a| match parse_date_only(&a.due_date) {
                Some(due) => {
                    filter.from.is_none_or(|from| due >= from)
                        && filter.to.is_none_or(|to| due < to)
                }
                // Let malformed rows through; the engine skips them itself.
                None => true,
            })
            .cloned()
            .collect())
    }
}
