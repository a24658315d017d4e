pub mod language;
pub mod schedule;

pub use language::{HourCycle, Labels, Language, ViewMode};
pub use schedule::{DailySchedule, ScheduleRow, Slot, month_day_key, parse_month_day};
