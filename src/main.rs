use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use hawler_times::cli::args::{Cli, Commands};
use hawler_times::cli::handlers;
use hawler_times::config::AppConfig;
use hawler_times::db::{ScheduleRepo, open_read_only};
use hawler_times::tui;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    // Flags win over the config file
    if let Some(lang) = cli.lang {
        config.display.language = lang;
    }
    if let Some(cycle) = cli.hour_cycle {
        config.display.hour_cycle = cycle;
    }
    if let Some(db) = cli.db {
        config.source.db_path = Some(db);
    }

    // Rows are fetched once and held for the whole run
    let db_path = config.db_path()?;
    let days = {
        let conn = open_read_only(&db_path)?;
        ScheduleRepo::fetch(&conn, &config.source)
            .with_context(|| format!("Loading prayer times from {:?}", db_path))?
    };
    log::info!("Loaded {} days from {:?}", days.len(), db_path);

    let now = Local::now().naive_local();
    match cli.command {
        Some(Commands::Times) => handlers::handle_times(&days, &config, now)?,
        Some(Commands::Next { json }) => handlers::handle_next(&days, &config, now, json)?,
        Some(Commands::Days { month, ramadan }) => {
            handlers::handle_days(&days, &config, now, month, ramadan)?
        }
        Some(Commands::Export) => handlers::handle_export(&days)?,
        // No subcommand → launch TUI
        None => tui::app::run(config, days)?,
    }

    Ok(())
}
