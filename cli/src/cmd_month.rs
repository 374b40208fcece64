// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};

use crate::cli::CliPlanner;
use crate::formatter::print_view;
use crate::util::ArgOutputFormat;

/// Show the month view around "now".
#[derive(Debug, Default, Clone, Copy)]
pub struct CmdMonth {
    output_format: ArgOutputFormat,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("m")
            .about("Show the calendar month containing \"now\"")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, planner: &CliPlanner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating month view...");
        let occurrences = planner.month_view().await?;
        print_view(planner.now(), &occurrences, self.output_format)
    }
}
