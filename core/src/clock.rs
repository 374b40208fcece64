// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Local, NaiveDateTime};

/// Source of "current time" for window selection.
///
/// Only the code that picks window bounds ever consults a clock; the
/// expansion engine is a pure function of the bounds it is handed, which is
/// what makes its output reproducible in tests.
pub trait Clock: Send + Sync {
    /// The current wall-clock time, as a naive local value.
    fn now(&self) -> NaiveDateTime;
}

/// The real system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to a fixed instant.
///
/// This is the "time machine": travel is expressed by constructing a new
/// value, never by mutating shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
