// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for the semestra planner: loads the stored
//! calendar, picks a window from the (possibly pinned) clock, and prints
//! the expanded view.

mod cli;
mod cmd_month;
mod cmd_week;
mod config;
mod formatter;
mod store;
mod util;

pub use crate::cli::run;
