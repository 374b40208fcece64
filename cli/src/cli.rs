// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use chrono::NaiveDateTime;
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use semestra_core::{APP_NAME, Clock, FixedClock, Planner, SystemClock};
use tracing_subscriber::EnvFilter;

use crate::cmd_month::CmdMonth;
use crate::cmd_week::CmdWeek;
use crate::config::parse_config;
use crate::store::{JsonActivityStore, JsonEventStore};
use crate::util::parse_at;

/// The planner as wired by this CLI: JSON-file stores and an injectable
/// clock (real or pinned).
pub type CliPlanner = Planner<JsonEventStore, JsonActivityStore, Box<dyn Clock>>;

/// Run the semestra command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = Cli::parse().run().await {
        println!("{} {}", "Error:".red(), e);
    }
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Pinned "now" for the time machine, when given
    pub at: Option<NaiveDateTime>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Semestra - your study calendar, expanded into month and week views.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to the month view
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(--at [DATETIME] "Pin \"now\" to a fixed date or datetime")
                    .long_help(
                        "\
Pin \"now\" to a fixed date (YYYY-MM-DD) or datetime (YYYY-MM-DDTHH:MM:SS). The window is \
computed around the pinned instant instead of the system clock.",
                    )
                    .value_parser(parse_at),
            )
            .subcommand(CmdMonth::command())
            .subcommand(CmdWeek::command())
    }

    /// Parse the command-line arguments into a `Cli` instance.
    ///
    /// Help and version requests are printed by clap itself, which then
    /// exits; they never reach the error reporting path.
    pub fn parse() -> Self {
        Self::from(&Self::command().get_matches())
    }

    #[cfg(test)]
    fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from(&Self::command().try_get_matches_from(args)?))
    }

    fn from(matches: &ArgMatches) -> Self {
        Self {
            config: matches.get_one("config").cloned(),
            at: matches.get_one("at").copied(),
            command: Commands::from(matches),
        }
    }

    /// Execute the parsed command.
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self.command, at = ?self.at, "running command...");

        let config = parse_config(self.config).await?;
        let clock: Box<dyn Clock> = match self.at {
            Some(instant) => Box::new(FixedClock(instant)),
            None => Box::new(SystemClock),
        };
        let planner = Planner::new(
            JsonEventStore::new(config.events_path),
            JsonActivityStore::new(config.activities_path),
            clock,
        );

        match self.command {
            Commands::Month(cmd) => cmd.run(&planner).await,
            Commands::Week(cmd) => cmd.run(&planner).await,
        }
    }
}

/// Subcommands of the CLI
#[derive(Debug, Clone, Copy)]
pub enum Commands {
    Month(CmdMonth),
    Week(CmdWeek),
}

impl Commands {
    fn from(matches: &ArgMatches) -> Self {
        match matches.subcommand() {
            Some((CmdWeek::NAME, sub)) => Commands::Week(CmdWeek::from(sub)),
            Some((CmdMonth::NAME, sub)) => Commands::Month(CmdMonth::from(sub)),
            // No subcommand defaults to the month view.
            _ => Commands::Month(CmdMonth::default()),
        }
    }
}
