use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::ScheduleError;
use crate::models::Language;

/// The six daily markers, in the order they occur through the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Bayani,
    Xorhalatn,
    Niwaro,
    Asr,
    Eywara,
    Esha,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Bayani,
        Slot::Xorhalatn,
        Slot::Niwaro,
        Slot::Asr,
        Slot::Eywara,
        Slot::Esha,
    ];

    /// Column name in the source table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Bayani => "bayani",
            Slot::Xorhalatn => "xorhalatn",
            Slot::Niwaro => "niwaro",
            Slot::Asr => "asr",
            Slot::Eywara => "eywara",
            Slot::Esha => "esha",
        }
    }

    pub fn display_name(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Slot::Bayani => "Fajr",
                Slot::Xorhalatn => "Sunrise",
                Slot::Niwaro => "Dhuhr",
                Slot::Asr => "Asr",
                Slot::Eywara => "Maghrib",
                Slot::Esha => "Isha",
            },
            Language::Kurdish => match self {
                Slot::Bayani => "بەیانی",
                Slot::Xorhalatn => "خۆرھەڵاتن",
                Slot::Niwaro => "نیوەڕۆ",
                Slot::Asr => "عەسر",
                Slot::Eywara => "ئێوارە",
                Slot::Esha => "عیشا",
            },
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Slot::Bayani => "🌙",
            Slot::Xorhalatn => "🌅",
            Slot::Niwaro => "☀️",
            Slot::Asr => "🌆",
            Slot::Eywara => "🌇",
            Slot::Esha => "🌃",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One calendar day's prayer times for one city.
///
/// `date` is a recurring `MM-DD` key with no year. A slot is `None` when
/// the source column is NULL or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySchedule {
    pub date: String,
    pub bayani: Option<NaiveTime>,
    pub xorhalatn: Option<NaiveTime>,
    pub niwaro: Option<NaiveTime>,
    pub asr: Option<NaiveTime>,
    pub eywara: Option<NaiveTime>,
    pub esha: Option<NaiveTime>,
}

impl DailySchedule {
    /// Build a schedule from raw column strings, in slot order.
    pub fn from_raw(date: &str, times: [Option<&str>; 6]) -> Result<Self, ScheduleError> {
        let date = parse_month_day(date)?;
        let mut parsed = [None; 6];
        for (i, (slot, raw)) in Slot::ALL.iter().zip(times).enumerate() {
            parsed[i] = parse_slot_time(&date, *slot, raw)?;
        }
        let [bayani, xorhalatn, niwaro, asr, eywara, esha] = parsed;
        Ok(Self {
            date,
            bayani,
            xorhalatn,
            niwaro,
            asr,
            eywara,
            esha,
        })
    }

    pub fn time(&self, slot: Slot) -> Option<NaiveTime> {
        match slot {
            Slot::Bayani => self.bayani,
            Slot::Xorhalatn => self.xorhalatn,
            Slot::Niwaro => self.niwaro,
            Slot::Asr => self.asr,
            Slot::Eywara => self.eywara,
            Slot::Esha => self.esha,
        }
    }

    /// Configured slots in canonical order.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, NaiveTime)> + '_ {
        Slot::ALL
            .iter()
            .filter_map(|slot| self.time(*slot).map(|t| (*slot, t)))
    }

    pub fn month(&self) -> &str {
        &self.date[..2]
    }
}

/// Row shape served to external consumers: raw 24-hour strings, empty when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub bayani: String,
    pub xorhalatn: String,
    pub niwaro: String,
    pub asr: String,
    pub eywara: String,
    pub esha: String,
    pub date: String,
}

impl From<&DailySchedule> for ScheduleRow {
    fn from(day: &DailySchedule) -> Self {
        let raw = |slot: Slot| {
            day.time(slot)
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default()
        };
        Self {
            bayani: raw(Slot::Bayani),
            xorhalatn: raw(Slot::Xorhalatn),
            niwaro: raw(Slot::Niwaro),
            asr: raw(Slot::Asr),
            eywara: raw(Slot::Eywara),
            esha: raw(Slot::Esha),
            date: day.date.clone(),
        }
    }
}

/// The `MM-DD` key for a calendar date.
pub fn month_day_key(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

/// Validate an `MM-DD` key. Feb 29 is accepted since the calendar has no year.
pub fn parse_month_day(s: &str) -> Result<String, ScheduleError> {
    let malformed = || ScheduleError::MalformedDate(s.to_string());
    let (month, day) = s.split_once('-').ok_or_else(malformed)?;
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(month) || !two_digits(day) {
        return Err(malformed());
    }
    let month: u32 = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    // 2024 is a leap year, so every recurring month-day is representable
    NaiveDate::from_ymd_opt(2024, month, day).ok_or_else(malformed)?;
    Ok(s.to_string())
}

fn parse_slot_time(
    date: &str,
    slot: Slot,
    raw: Option<&str>,
) -> Result<Option<NaiveTime>, ScheduleError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(s) => s,
    };
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map(Some)
        .map_err(|_| ScheduleError::MalformedTime {
            date: date.to_string(),
            slot,
            value: raw.to_string(),
        })
}
