// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use semestra_core::{
    Activity, ActivityStore, DueFilter, Event, EventStore, StoreError, parse_date_only,
};

/// Event store backed by a JSON file of backend rows.
///
/// Stands in for the hosted backend the real app talks to; the shape of the
/// rows is identical.
#[derive(Debug, Clone)]
pub struct JsonEventStore {
    path: PathBuf,
}

impl JsonEventStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl EventStore for JsonEventStore {
    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        let content = fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content)
            .map_err(|e| StoreError::Malformed(format!("{}: {e}", self.path.display())))
    }
}

/// Activity store backed by a JSON file of backend rows.
#[derive(Debug, Clone)]
pub struct JsonActivityStore {
    path: PathBuf,
}

impl JsonActivityStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ActivityStore for JsonActivityStore {
    async fn list(&self, filter: Option<DueFilter>) -> Result<Vec<Activity>, StoreError> {
        let content = fs::read_to_string(&self.path).await?;
        let activities: Vec<Activity> = serde_json::from_str(&content)
            .map_err(|e| StoreError::Malformed(format!("{}: {e}", self.path.display())))?;

        let Some(filter) = filter else {
            return Ok(activities);
        };
        Ok(activities
            .into_iter()
            .filter(|a| match parse_date_only(&a.due_date) {
                Some(due) => {
                    filter.from.is_none_or(|from| due >= from)
                        && filter.to.is_none_or(|to| due < to)
                }
                // Malformed rows pass through; the engine skips them with a
                // warning so the data problem stays visible.
                None => true,
            })
            .collect())
    }
}
