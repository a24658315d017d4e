use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

use crate::models::{Language, month_day_key};
use crate::utils::format::to_kurdish_numerals;

const RAMADAN: usize = 9;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const HIJRI_MONTH_NAMES_KU: &[&str] = &[
    "موحەڕەم",
    "سەفەر",
    "ڕەبیعولئەووەڵ",
    "ڕەبیعولسانی",
    "جومادەلئوولا",
    "جومادەلئاخیرە",
    "ڕەجەب",
    "شەعبان",
    "ڕەمەزان",
    "شەووال",
    "زولقەعدە",
    "زولحیججە",
];

fn hijri_month_name(month: usize, lang: Language) -> &'static str {
    let names = match lang {
        Language::English => HIJRI_MONTH_NAMES,
        Language::Kurdish => HIJRI_MONTH_NAMES_KU,
    };
    names.get(month.wrapping_sub(1)).copied().unwrap_or("Unknown")
}

fn to_hijri(date: NaiveDate, offset_days: i32) -> Option<HijriDate> {
    let adjusted = date + Duration::days(offset_days as i64);
    HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    )
    .ok()
}

/// Hijri date for `date`, shifted by `offset_days` for local moon sighting.
/// Kurdish output uses Kurdish month names and Eastern Arabic-Indic digits.
pub fn hijri_string(date: NaiveDate, offset_days: i32, lang: Language) -> Option<String> {
    let hd = to_hijri(date, offset_days)?;
    let text = format!("{} {} {}", hd.day(), hijri_month_name(hd.month(), lang), hd.year());
    Some(match lang {
        Language::English => text,
        Language::Kurdish => to_kurdish_numerals(&text),
    })
}

/// Month-day window of the Ramadan that is in progress on `today` or comes next.
///
/// The end key may sort before the start key when Ramadan runs from
/// December into January.
pub fn ramadan_window(today: NaiveDate, offset_days: i32) -> Option<(String, String)> {
    let is_ramadan = |d: NaiveDate| to_hijri(d, offset_days).is_some_and(|hd| hd.month() == RAMADAN);

    // Ramadan lasts at most 30 days and recurs within 355
    let mut day = today - Duration::days(31);
    let horizon = today + Duration::days(400);
    let mut start = None;

    while day <= horizon {
        match (is_ramadan(day), start) {
            (true, None) => start = Some(day),
            (false, Some(first)) => {
                let last = day - Duration::days(1);
                if last >= today {
                    return Some((month_day_key(first), month_day_key(last)));
                }
                start = None;
            }
            _ => {}
        }
        day += Duration::days(1);
    }
    log::warn!("No Ramadan found in the Hijri calendar around {}", today);
    None
}
