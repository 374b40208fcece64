// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;

use crate::clock::Clock;
use crate::datetime::Window;
use crate::engine;
use crate::occurrence::Occurrence;
use crate::store::{ActivityStore, DueFilter, EventStore, StoreError};

/// Caller-side coordinator: owns the store collaborators and a clock,
/// derives window bounds, and runs the expansion engine.
///
/// This is the only place "now" is read; everything below it is a pure
/// function of the window. Re-run a view method whenever the visible window
/// or the clock changes - occurrences are never cached.
#[derive(Debug, Clone)]
pub struct Planner<E, A, C> {
    events: E,
    activities: A,
    clock: C,
}

impl<E, A, C> Planner<E, A, C>
where
    E: EventStore,
    A: ActivityStore,
    C: Clock,
{
    /// Wires the planner to its collaborators.
    pub fn new(events: E, activities: A, clock: C) -> Self {
        Self {
            events,
            activities,
            clock,
        }
    }

    /// The current time according to the injected clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Expands the calendar month containing "now".
    pub async fn month_view(&self) -> Result<Vec<Occurrence>, StoreError> {
        self.view(Window::month_of(self.now().date())).await
    }

    /// Expands the Sunday-aligned week containing "now".
    pub async fn week_view(&self) -> Result<Vec<Occurrence>, StoreError> {
        self.view(Window::week_of(self.now().date())).await
    }

    /// Fetches the full collections, expands them into the window, and
    /// sorts the result by start for display.
    pub async fn view(&self, window: Window) -> Result<Vec<Occurrence>, StoreError> {
        tracing::debug!(start = %window.start, end = %window.end, "expanding window");

        let events = self.events.list().await?;
        let filter = DueFilter {
            from: Some(window.start),
            to: Some(window.end),
        };
        let activities = self.activities.list(Some(filter)).await?;

        let mut occurrences = engine::expand(&events, &activities, window);
        occurrences.sort_by(|a, b| a.start.cmp(&b.start));
        Ok(occurrences)
    }
}
