use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use crate::config::AppConfig;
use crate::models::{DailySchedule, ScheduleRow, Slot, ViewMode, month_day_key};
use crate::prayer_times::{
    ResolvedNextPrayer, TargetDay, month_key, resolve_for_now, resolve_next, select_days,
};
use crate::utils::format::{
    describe_next, format_clock_time, format_month_day, format_slot_time, pad_display,
};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

const NAME_WIDTH: usize = 12;
const CELL_WIDTH: usize = 10;

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(days: &[DailySchedule], config: &AppConfig, now: NaiveDateTime) -> Result<()> {
    let lang = config.display.language;
    let cycle = config.display.hour_cycle;
    let labels = lang.labels();
    let today_key = month_day_key(now.date());

    println!();
    println_colored!(
        GOLD,
        "  {} - {} {}",
        labels.title,
        labels.today,
        format_month_day(&today_key, lang)
    );
    println!();

    let Some(today) = days.iter().find(|d| d.date == today_key) else {
        println_colored!(DIM, "  {}", labels.no_today);
        println!();
        return Ok(());
    };

    let next = resolve_next(today, days, now);
    let next_today = next
        .as_ref()
        .filter(|n| n.day == TargetDay::Today)
        .map(|n| n.slot);

    for (slot, time) in today.slots() {
        let line = format!(
            "{} {}{}",
            slot.icon(),
            pad_display(slot.display_name(lang), NAME_WIDTH),
            format_clock_time(time, lang, cycle)
        );
        if next_today == Some(slot) {
            println_colored!(AMBER, "  ▶ {}", line);
        } else if now.date().and_time(time) <= now {
            println_colored!(DIM, "    {}", line);
        } else {
            println_colored!(BOLD, "    {}", line);
        }
    }

    let (name, remaining) = describe_next(next.as_ref(), lang);
    println!();
    println_colored!(GOLD, "  {}: {}", labels.next_prayer, name);
    println_colored!(
        AMBER,
        "  {}: {}",
        labels.remaining,
        if remaining.is_empty() { labels.placeholder } else { remaining.as_str() }
    );
    println!();
    Ok(())
}

// ─── Next ────────────────────────────────────────────────────────────────────

pub fn handle_next(
    days: &[DailySchedule],
    config: &AppConfig,
    now: NaiveDateTime,
    json: bool,
) -> Result<()> {
    let lang = config.display.language;
    let labels = lang.labels();

    let next = resolve_for_now(days, now);
    if next.is_none() {
        log::warn!("No next prayer for {} among {} rows", month_day_key(now.date()), days.len());
    }
    if json {
        println!("{}", next_json(next.as_ref())?);
        return Ok(());
    }

    let (name, remaining) = describe_next(next.as_ref(), lang);
    let at = next
        .as_ref()
        .map(|n| format_clock_time(n.target.time(), lang, config.display.hour_cycle))
        .unwrap_or_else(|| labels.placeholder.to_string());
    let remaining = if remaining.is_empty() { labels.placeholder.to_string() } else { remaining };

    println!("{} {}  ({})", name, at, remaining);
    Ok(())
}

pub fn next_json(next: Option<&ResolvedNextPrayer>) -> Result<String> {
    serde_json::to_string_pretty(&next).context("Serializing next prayer")
}

// ─── Days ────────────────────────────────────────────────────────────────────

pub fn handle_days(
    days: &[DailySchedule],
    config: &AppConfig,
    now: NaiveDateTime,
    month: Option<u32>,
    ramadan: bool,
) -> Result<()> {
    let lang = config.display.language;
    let cycle = config.display.hour_cycle;
    let labels = lang.labels();
    let today_key = month_day_key(now.date());

    let (view, title) = match (month, ramadan) {
        (_, true) => (ViewMode::Ramadan, labels.ramadan.to_string()),
        (Some(m), false) => (
            ViewMode::Month,
            format!("{} {}", labels.month, format_month_day(&month_key(m), lang)),
        ),
        (None, false) => (ViewMode::All, labels.see_all.to_string()),
    };
    let window = if ramadan { config.ramadan_range(now.date()) } else { None };
    if ramadan && window.is_none() {
        log::warn!("Ramadan window unknown; set [ramadan] start/end in config");
    }
    let selected = select_days(
        days,
        view,
        &today_key,
        month.unwrap_or(1),
        window.as_ref().map(|(s, e)| (s.as_str(), e.as_str())),
    );

    println!();
    println_colored!(GOLD, "  {} - {}", labels.title, title);
    println!();

    let mut header = format!("    {}", pad_display(labels.date, CELL_WIDTH));
    for slot in Slot::ALL {
        header.push_str(&pad_display(slot.display_name(lang), CELL_WIDTH));
    }
    println_colored!(DIM, "{}", header.trim_end());

    for day in &selected {
        let mut line = pad_display(&format_month_day(&day.date, lang), CELL_WIDTH);
        for slot in Slot::ALL {
            line.push_str(&pad_display(&format_slot_time(day.time(slot), lang, cycle), CELL_WIDTH));
        }
        if day.date == today_key {
            println_colored!(AMBER, "  ▶ {}", line.trim_end());
        } else {
            println!("    {}", line.trim_end());
        }
    }

    if selected.is_empty() {
        println_colored!(DIM, "    {}", labels.placeholder);
    }
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(days: &[DailySchedule]) -> Result<()> {
    println!("{}", export_json(days)?);
    Ok(())
}

pub fn export_json(days: &[DailySchedule]) -> Result<String> {
    let rows: Vec<ScheduleRow> = days.iter().map(ScheduleRow::from).collect();
    serde_json::to_string_pretty(&rows).context("Serializing rows")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_matches_endpoint_shape() {
        let days = vec![
            DailySchedule::from_raw(
                "02-18",
                [Some("05:22"), Some("06:44"), Some("12:16"), Some("15:21"), Some("17:48"), Some("19:04")],
            )
            .unwrap(),
        ];
        let json = export_json(&days).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["date"], "02-18");
        assert_eq!(value[0]["bayani"], "05:22");
        assert_eq!(value[0]["esha"], "19:04");
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn next_json_carries_slot_day_and_countdown() {
        let days = vec![
            DailySchedule::from_raw(
                "02-18",
                [Some("05:22"), Some("06:44"), Some("12:16"), Some("15:21"), Some("17:48"), Some("19:04")],
            )
            .unwrap(),
        ];
        let now = chrono::NaiveDate::from_ymd_opt(2026, 2, 18)
            .unwrap()
            .and_hms_opt(16, 0, 30)
            .unwrap();
        let next = resolve_for_now(&days, now);
        let value: serde_json::Value =
            serde_json::from_str(&next_json(next.as_ref()).unwrap()).unwrap();
        assert_eq!(value["slot"], "eywara");
        assert_eq!(value["day"], "today");
        assert_eq!(value["target"], "2026-02-18T17:48:00");
        assert_eq!(value["remaining"]["hours"], 1);
        assert_eq!(value["remaining"]["minutes"], 47);
        assert_eq!(value["remaining"]["seconds"], 30);
    }

    #[test]
    fn next_json_is_null_without_a_row_for_today() {
        assert_eq!(next_json(None).unwrap(), "null");
    }
}
