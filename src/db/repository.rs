use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags, Statement, params};
use std::path::Path;

use crate::config::SourceConfig;
use crate::error::ScheduleError;
use crate::models::DailySchedule;

/// The table name is spliced into SQL, so it must be a bare identifier.
pub fn validate_table_name(table: &str) -> Result<(), ScheduleError> {
    let valid = !table.is_empty()
        && !table.starts_with(|c: char| c.is_ascii_digit())
        && table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ScheduleError::InvalidTable(table.to_string()))
    }
}

/// Open the externally owned prayer database without write access.
pub fn open_read_only(path: &Path) -> Result<Connection> {
    if !path.exists() {
        anyhow::bail!("Prayer database not found at {:?}", path);
    }
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("Opening database at {:?}", path))
}

pub struct ScheduleRepo;

impl ScheduleRepo {
    /// All rows for the configured city and month-day window, in calendar order.
    ///
    /// A window with `range_start > range_end` crosses New Year and is read
    /// as `[start, 12-31]` followed by `[01-01, end]`.
    pub fn fetch(conn: &Connection, source: &SourceConfig) -> Result<Vec<DailySchedule>> {
        validate_table_name(&source.table)?;
        log::debug!(
            "Fetching {} for {}/{} between {} and {}",
            source.table,
            source.city,
            source.iso,
            source.range_start,
            source.range_end
        );

        let sql = format!(
            "SELECT bayani, xorhalatn, niwaro, asr, eywara, esha, date
             FROM {}
             WHERE cities = ?1
               AND iso = ?2
               AND date BETWEEN ?3 AND ?4
             ORDER BY date ASC",
            source.table
        );
        let mut stmt = conn
            .prepare(&sql)
            .with_context(|| format!("Preparing query on {}", source.table))?;

        let (start, end) = (source.range_start.as_str(), source.range_end.as_str());
        let mut result: Vec<DailySchedule> = Vec::new();
        if start <= end {
            Self::fetch_span(&mut stmt, source, start, end, &mut result)?;
        } else {
            log::debug!("Window {}..{} crosses New Year, fetching in two parts", start, end);
            Self::fetch_span(&mut stmt, source, start, "12-31", &mut result)?;
            Self::fetch_span(&mut stmt, source, "01-01", end, &mut result)?;
        }

        log::debug!("Fetched {} rows", result.len());
        Ok(result)
    }

    fn fetch_span(
        stmt: &mut Statement<'_>,
        source: &SourceConfig,
        start: &str,
        end: &str,
        result: &mut Vec<DailySchedule>,
    ) -> Result<()> {
        let rows = stmt.query_map(params![source.city, source.iso, start, end], |row| {
            Ok((
                row.get::<_, Option<String>>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<String>>(5)?,
                row.get::<_, String>(6)?,
            ))
        })?;

        for r in rows {
            let (bayani, xorhalatn, niwaro, asr, eywara, esha, date) = r?;
            let day = DailySchedule::from_raw(
                &date,
                [
                    bayani.as_deref(),
                    xorhalatn.as_deref(),
                    niwaro.as_deref(),
                    asr.as_deref(),
                    eywara.as_deref(),
                    esha.as_deref(),
                ],
            )
            .inspect_err(|e| log::warn!("Rejecting row: {}", e))?;

            if result.last().is_some_and(|prev| prev.date == day.date) {
                log::warn!("Duplicate row for {}, keeping the first", day.date);
                continue;
            }
            result.push(day);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE PrayerTimesforKurdistantable (
                cities TEXT, iso TEXT, date TEXT,
                bayani TEXT, xorhalatn TEXT, niwaro TEXT,
                asr TEXT, eywara TEXT, esha TEXT
            );",
        )
        .unwrap();
        let rows = [
            ("Hawler", "IQ", "03-19", "04:48", "06:08", "12:10", "15:35", "18:12", "19:27"),
            ("Hawler", "IQ", "02-18", "05:22", "06:44", "12:16", "15:21", "17:48", "19:04"),
            ("Hawler", "IQ", "02-17", "05:23", "06:45", "12:16", "15:20", "17:47", "19:03"),
            ("Duhok", "IQ", "02-18", "05:25", "06:48", "12:20", "15:24", "17:52", "19:08"),
            ("Hawler", "IQ", "03-20", "04:47", "06:07", "12:10", "15:36", "18:13", "19:28"),
        ];
        for r in rows {
            conn.execute(
                "INSERT INTO PrayerTimesforKurdistantable
                    (cities, iso, date, bayani, xorhalatn, niwaro, asr, eywara, esha)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![r.0, r.1, r.2, r.3, r.4, r.5, r.6, r.7, r.8],
            )
            .unwrap();
        }
        conn
    }

    fn window(start: &str, end: &str) -> SourceConfig {
        SourceConfig {
            range_start: start.to_string(),
            range_end: end.to_string(),
            ..SourceConfig::default()
        }
    }

    #[test]
    fn fetch_filters_city_and_range_in_date_order() {
        let conn = fixture();
        let days = ScheduleRepo::fetch(&conn, &window("02-18", "03-19")).unwrap();
        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, ["02-18", "03-19"]);
        assert_eq!(days[0].niwaro.unwrap().format("%H:%M").to_string(), "12:16");
    }

    #[test]
    fn window_across_new_year_fetches_december_then_january() {
        let conn = fixture();
        for date in ["12-20", "01-05"] {
            conn.execute(
                "INSERT INTO PrayerTimesforKurdistantable
                    (cities, iso, date, bayani, xorhalatn, niwaro, asr, eywara, esha)
                 VALUES ('Hawler', 'IQ', ?1, '06:05', '07:30', '12:00', '14:35', '16:50', '18:10')",
                params![date],
            )
            .unwrap();
        }
        let days = ScheduleRepo::fetch(&conn, &window("12-01", "01-31")).unwrap();
        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, ["12-20", "01-05"]);
    }

    #[test]
    fn null_and_empty_columns_become_unset() {
        let conn = fixture();
        conn.execute(
            "UPDATE PrayerTimesforKurdistantable SET xorhalatn = NULL, asr = '' WHERE date = '02-17'",
            [],
        )
        .unwrap();
        let days = ScheduleRepo::fetch(&conn, &window("02-17", "02-17")).unwrap();
        assert_eq!(days.len(), 1);
        assert!(days[0].xorhalatn.is_none());
        assert!(days[0].asr.is_none());
        assert!(days[0].bayani.is_some());
    }

    #[test]
    fn malformed_time_fails_the_load() {
        let conn = fixture();
        conn.execute(
            "UPDATE PrayerTimesforKurdistantable SET esha = '7:27 PM' WHERE date = '03-20'",
            [],
        )
        .unwrap();
        let err = ScheduleRepo::fetch(&conn, &window("01-01", "12-31")).unwrap_err();
        assert!(err.to_string().contains("7:27 PM"), "{}", err);
    }

    #[test]
    fn table_names_are_checked() {
        assert!(validate_table_name("PrayerTimesforKurdistantable").is_ok());
        assert!(validate_table_name("times_2026").is_ok());
        assert!(validate_table_name("").is_err());
        assert!(validate_table_name("1times").is_err());
        assert!(validate_table_name("times; --").is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_read_only(&dir.path().join("player.db")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
