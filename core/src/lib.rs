// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the semestra student planner: the recurring-event window
//! expansion engine and the minimal data model it operates on.
//!
//! The engine itself is pure and synchronous. Everything stateful lives
//! behind the [`EventStore`], [`ActivityStore`] and [`Clock`] boundary
//! traits, wired together by the [`Planner`] facade.

mod activity;
mod clock;
mod datetime;
mod engine;
mod event;
mod occurrence;
mod planner;
mod recurrence;
mod store;

pub use crate::activity::{Activity, ActivityStatus};
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::datetime::{Window, combine, parse_date_only, sunday_of, weekday_index};
pub use crate::engine::expand;
pub use crate::event::{Event, Recurrence};
pub use crate::occurrence::Occurrence;
pub use crate::planner::Planner;
pub use crate::recurrence::resolve;
pub use crate::store::{ActivityStore, DueFilter, EventStore, StoreError};

/// The name of the semestra application.
pub const APP_NAME: &str = "semestra";
