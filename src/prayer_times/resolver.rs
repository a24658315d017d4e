use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::models::{DailySchedule, Slot, month_day_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetDay {
    Today,
    Tomorrow,
}

/// Whole-second countdown, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Remaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            hours: total / 3600,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }

    pub fn between(now: NaiveDateTime, target: NaiveDateTime) -> Self {
        // num_seconds truncates toward zero, which floors any positive diff
        Self::from_seconds((target - now).num_seconds())
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNextPrayer {
    pub slot: Slot,
    pub day: TargetDay,
    pub target: NaiveDateTime,
    pub remaining: Remaining,
}

impl ResolvedNextPrayer {
    /// Countdown from a later instant, clamped at zero once the target passes.
    pub fn remaining_at(&self, now: NaiveDateTime) -> Remaining {
        Remaining::between(now, self.target)
    }
}

/// Find the next prayer after `now`.
///
/// Today's slots are checked in order and the first one strictly after
/// `now` wins. When none is left, the entry following `today` in `all`
/// (wrapping to the first entry) supplies tomorrow's dawn. Returns `None`
/// when that entry cannot be found or has no dawn time.
pub fn resolve_next(
    today: &DailySchedule,
    all: &[DailySchedule],
    now: NaiveDateTime,
) -> Option<ResolvedNextPrayer> {
    let date = now.date();

    for (slot, time) in today.slots() {
        let target = date.and_time(time);
        if target > now {
            return Some(ResolvedNextPrayer {
                slot,
                day: TargetDay::Today,
                target,
                remaining: Remaining::between(now, target),
            });
        }
    }

    let idx = all.iter().position(|d| d.date == today.date)?;
    let next = &all[(idx + 1) % all.len()];
    let dawn = next.time(Slot::Bayani)?;
    let target = date.checked_add_signed(TimeDelta::days(1))?.and_time(dawn);

    Some(ResolvedNextPrayer {
        slot: Slot::Bayani,
        day: TargetDay::Tomorrow,
        target,
        remaining: Remaining::between(now, target),
    })
}

/// Look up today's entry by month-day key and resolve from it.
pub fn resolve_for_now(all: &[DailySchedule], now: NaiveDateTime) -> Option<ResolvedNextPrayer> {
    let key = month_day_key(now.date());
    let today = all.iter().find(|d| d.date == key)?;
    resolve_next(today, all, now)
}
