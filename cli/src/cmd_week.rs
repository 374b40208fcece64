// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};

use crate::cli::CliPlanner;
use crate::formatter::print_view;
use crate::util::ArgOutputFormat;

/// Show the week view around "now".
#[derive(Debug, Default, Clone, Copy)]
pub struct CmdWeek {
    output_format: ArgOutputFormat,
}

impl CmdWeek {
    pub const NAME: &str = "week";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("w")
            .about("Show the Sunday-aligned week containing \"now\"")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, planner: &CliPlanner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating week view...");
        let occurrences = planner.week_view().await?;
        print_view(planner.now(), &occurrences, self.output_format)
    }
}
