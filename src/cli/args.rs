use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::{HourCycle, Language};

#[derive(Parser, Debug)]
#[command(name = "hawler", version, author, about = "Hawler prayer times with a live countdown, in English and Kurdish")]
pub struct Cli {
    /// Display language
    #[arg(long, global = true, value_enum)]
    pub lang: Option<Language>,

    /// Clock style for prayer times
    #[arg(long, global = true, value_enum)]
    pub hour_cycle: Option<HourCycle>,

    /// Path to the prayer times database (overrides config)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayer times and the countdown to the next prayer
    Times,
    /// Print only the next prayer and time remaining
    Next {
        /// Emit the resolved prayer as JSON (null when none)
        #[arg(long)]
        json: bool,
    },
    /// List prayer times for several days
    Days {
        /// Only this month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12), conflicts_with = "ramadan")]
        month: Option<u32>,
        /// Only the Ramadan window
        #[arg(long)]
        ramadan: bool,
    },
    /// Print the fetched rows as JSON (raw 24-hour times)
    Export,
}
