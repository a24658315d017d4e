use chrono::{NaiveTime, Timelike};
use unicode_width::UnicodeWidthStr;

use crate::models::{HourCycle, Language};
use crate::prayer_times::ResolvedNextPrayer;

const EASTERN_ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Replace ASCII digits with Eastern Arabic-Indic ones; everything else passes through.
pub fn to_kurdish_numerals(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => EASTERN_ARABIC_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

fn localize(text: String, lang: Language) -> String {
    match lang {
        Language::English => text,
        Language::Kurdish => to_kurdish_numerals(&text),
    }
}

/// Format a clock time for display.
///
/// 12-hour English carries an AM/PM suffix; Kurdish drops it and uses
/// Eastern Arabic-Indic numerals.
pub fn format_clock_time(time: NaiveTime, lang: Language, cycle: HourCycle) -> String {
    let text = match cycle {
        HourCycle::H24 => format!("{:02}:{:02}", time.hour(), time.minute()),
        HourCycle::H12 => {
            let hour = match time.hour() % 12 {
                0 => 12,
                h => h,
            };
            match lang {
                Language::English => {
                    let meridiem = if time.hour() >= 12 { "PM" } else { "AM" };
                    format!("{}:{:02} {}", hour, time.minute(), meridiem)
                }
                Language::Kurdish => format!("{}:{:02}", hour, time.minute()),
            }
        }
    };
    localize(text, lang)
}

/// Like [`format_clock_time`] but for an optional slot.
pub fn format_slot_time(time: Option<NaiveTime>, lang: Language, cycle: HourCycle) -> String {
    time.map(|t| format_clock_time(t, lang, cycle))
        .unwrap_or_default()
}

pub fn format_duration(hours: i64, minutes: i64, seconds: i64, lang: Language) -> String {
    match lang {
        Language::English => format!("{}h {}m {}s", hours, minutes, seconds),
        Language::Kurdish => localize(format!("{} : {} : {}", hours, minutes, seconds), lang),
    }
}

pub fn format_month_day(key: &str, lang: Language) -> String {
    localize(key.to_string(), lang)
}

/// Name and countdown text for the next-prayer card. Without a result the
/// name falls back to "tomorrow" and the countdown is empty.
pub fn describe_next(next: Option<&ResolvedNextPrayer>, lang: Language) -> (String, String) {
    match next {
        Some(n) => (
            n.slot.display_name(lang).to_string(),
            format_duration(n.remaining.hours, n.remaining.minutes, n.remaining.seconds, lang),
        ),
        None => (lang.labels().tomorrow.to_string(), String::new()),
    }
}

/// Right-pad to a display width; Kurdish glyphs and emoji are not one column each.
pub fn pad_display(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}
