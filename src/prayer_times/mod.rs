pub mod calendar;
pub mod resolver;

pub use calendar::{
    filter_by_month, filter_by_range, filter_by_wrapping_range, month_key, select_days,
};
pub use resolver::{Remaining, ResolvedNextPrayer, TargetDay, resolve_for_now, resolve_next};
