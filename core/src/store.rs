// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::activity::Activity;
use crate::event::Event;

/// Errors surfaced by a store backend.
///
/// The expansion engine itself has no error path; only the collaborators
/// that fetch collections can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading from the backing medium failed.
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend returned data the store could not decode.
    #[error("malformed store data: {0}")]
    Malformed(String),
}

/// Optional due-date bounds for listing activities. Half-open, like the
/// display window: `from` inclusive, `to` exclusive.
#[derive(Debug, Default, Clone, Copy)]
pub struct DueFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Source of the events visible to the current user.
///
/// Returns the full collection; no server-side date filtering is assumed,
/// the engine does all windowing itself.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, StoreError>;
}

/// Source of the activities visible to the current user.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn list(&self, filter: Option<DueFilter>) -> Result<Vec<Activity>, StoreError>;
}
