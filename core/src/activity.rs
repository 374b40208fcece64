// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use serde::Deserialize;

/// A one-shot due-date item (homework, hand-in, errand). Never recurring.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Opaque identifier, stable across calls.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Date-only due date, as stored by the backend.
    pub due_date: String,

    /// Completion status.
    #[serde(default)]
    pub status: ActivityStatus,
}

/// The completion status of an activity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ActivityStatus {
    /// Still to be done.
    #[default]
    Pending,

    /// Completed.
    Done,
}

const STATUS_PENDING: &str = "PENDING";
const STATUS_DONE: &str = "DONE";

impl AsRef<str> for ActivityStatus {
    fn as_ref(&self) -> &str {
        match self {
            ActivityStatus::Pending => STATUS_PENDING,
            ActivityStatus::Done => STATUS_DONE,
        }
    }
}

impl Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ActivityStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATUS_PENDING => Ok(ActivityStatus::Pending),
            STATUS_DONE => Ok(ActivityStatus::Done),
            _ => Err(()),
        }
    }
}
