use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::db::repository::validate_table_name;
use crate::models::{HourCycle, Language, parse_month_day};
use crate::utils::hijri::ramadan_window;

fn default_table() -> String {
    "PrayerTimesforKurdistantable".to_string()
}
fn default_city() -> String {
    "Hawler".to_string()
}
fn default_iso() -> String {
    "IQ".to_string()
}
fn default_range_start() -> String {
    "01-01".to_string()
}
fn default_range_end() -> String {
    "12-31".to_string()
}
fn default_tick_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Defaults to `player.db` in the data directory.
    #[serde(default)]
    pub db_path: Option<PathBuf>,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_iso")]
    pub iso: String,
    #[serde(default = "default_range_start")]
    pub range_start: String,
    #[serde(default = "default_range_end")]
    pub range_end: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            table: default_table(),
            city: default_city(),
            iso: default_iso(),
            range_start: default_range_start(),
            range_end: default_range_end(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub hour_cycle: HourCycle,
    /// Days to add/subtract from the Hijri date for local moon sighting.
    #[serde(default)]
    pub hijri_offset: i32,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            hour_cycle: HourCycle::default(),
            hijri_offset: 0,
            tick_ms: default_tick_ms(),
        }
    }
}

/// Fixed Ramadan window; when absent it is derived from the Hijri calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RamadanConfig {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ramadan: Option<RamadanConfig>,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "hawler-times")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.source.db_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join("player.db")),
        }
    }

    /// Configured Ramadan window, else the one the Hijri calendar gives for `today`.
    pub fn ramadan_range(&self, today: NaiveDate) -> Option<(String, String)> {
        match &self.ramadan {
            Some(r) => Some((r.start.clone(), r.end.clone())),
            None => ramadan_window(today, self.display.hijri_offset),
        }
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {:?}", path);
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_table_name(&self.source.table)?;
        parse_month_day(&self.source.range_start).context("source.range_start")?;
        parse_month_day(&self.source.range_end).context("source.range_end")?;
        if let Some(ramadan) = &self.ramadan {
            parse_month_day(&ramadan.start).context("ramadan.start")?;
            parse_month_day(&ramadan.end).context("ramadan.end")?;
        }
        if self.display.tick_ms == 0 {
            anyhow::bail!("display.tick_ms must be greater than 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_config_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.source.city, "Hawler");
        assert_eq!(config.source.iso, "IQ");
        assert_eq!(config.source.table, "PrayerTimesforKurdistantable");
        assert_eq!(config.display.language, Language::Kurdish);
        assert_eq!(config.display.hour_cycle, HourCycle::H12);
        assert_eq!(config.display.tick_ms, 1000);
        assert!(config.ramadan.is_none());
    }

    #[test]
    fn sections_override_defaults() {
        let file = write_config(
            r#"
            [source]
            db_path = "/srv/player.db"
            range_start = "02-18"
            range_end = "03-19"

            [display]
            language = "en"
            hour_cycle = "h24"

            [ramadan]
            start = "02-18"
            end = "03-19"
            "#,
        );
        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.db_path().unwrap(), PathBuf::from("/srv/player.db"));
        assert_eq!(config.source.range_start, "02-18");
        assert_eq!(config.display.language, Language::English);
        assert_eq!(
            config.ramadan,
            Some(RamadanConfig {
                start: "02-18".to_string(),
                end: "03-19".to_string()
            })
        );
    }

    #[test]
    fn configured_ramadan_window_wins() {
        let config = AppConfig {
            ramadan: Some(RamadanConfig {
                start: "12-20".to_string(),
                end: "01-18".to_string(),
            }),
            ..AppConfig::default()
        };
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert_eq!(
            config.ramadan_range(today),
            Some(("12-20".to_string(), "01-18".to_string()))
        );
    }

    #[test]
    fn bad_month_day_is_rejected() {
        let file = write_config("[source]\nrange_start = \"2-18\"\n");
        assert!(AppConfig::load_from_path(file.path()).is_err());
    }

    #[test]
    fn table_name_must_be_an_identifier() {
        let file = write_config("[source]\ntable = \"times; DROP TABLE x\"\n");
        assert!(AppConfig::load_from_path(file.path()).is_err());
    }

    #[test]
    fn zero_tick_is_rejected() {
        let file = write_config("[display]\ntick_ms = 0\n");
        assert!(AppConfig::load_from_path(file.path()).is_err());
    }
}
