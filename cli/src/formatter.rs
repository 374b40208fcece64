// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt::Write as _;

use chrono::{Datelike, NaiveDateTime};
use colored::Colorize;
use semestra_core::Occurrence;

use crate::util::ArgOutputFormat;

/// Prints an expanded view in the requested output format.
pub fn print_view(
    now: NaiveDateTime,
    occurrences: &[Occurrence],
    format: ArgOutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(occurrences)?),
        ArgOutputFormat::Table if occurrences.is_empty() => {
            println!("No entries in this window");
        }
        ArgOutputFormat::Table => print!("{}", AgendaFormatter::new(now).format(occurrences)),
    }
    Ok(())
}

/// Renders occurrences as a day-grouped agenda.
///
/// Expects its input sorted by start, as the planner returns it.
#[derive(Debug)]
pub struct AgendaFormatter {
    now: NaiveDateTime,
}

impl AgendaFormatter {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn format(&self, occurrences: &[Occurrence]) -> String {
        let mut out = String::new();
        let mut current_day = None;

        for occ in occurrences {
            let day = occ.start.date();
            if current_day != Some(day) {
                let header = format!("{} {}", day.format("%Y-%m-%d"), day.weekday());
                if day == self.now.date() {
                    let _ = writeln!(out, "{} {}", "►".green(), header.bold());
                } else {
                    let _ = writeln!(out, "  {header}");
                }
                current_day = Some(day);
            }
            let _ = writeln!(out, "    {} {}", self.time_span(occ), self.title(occ));
        }
        out
    }

    fn time_span(&self, occ: &Occurrence) -> String {
        if occ.all_day {
            return "all-day    ".to_string();
        }
        match occ.end {
            Some(end) if end.date() == occ.start.date() => {
                format!("{}~{}", occ.start.format("%H:%M"), end.format("%H:%M"))
            }
            Some(end) => format!(
                "{}~{} {}",
                occ.start.format("%H:%M"),
                end.format("%m-%d"),
                end.format("%H:%M")
            ),
            None => format!("{}      ", occ.start.format("%H:%M")),
        }
    }

    /// The render boundary owns the mapping from color hints to terminal
    /// colors: activity status tokens get status colors, event hints are
    /// left to the terminal theme.
    fn title(&self, occ: &Occurrence) -> String {
        match occ.color_hint.as_str() {
            "DONE" => occ.title.green().strikethrough().to_string(),
            "PENDING" => occ.title.yellow().to_string(),
            _ => occ.title.clone(),
        }
    }
}
