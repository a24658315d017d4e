use crate::models::{DailySchedule, ViewMode};

/// Entries with `start <= date <= end`, compared as `MM-DD` strings.
///
/// A range that crosses the year end (`start > end`) matches nothing;
/// use [`filter_by_wrapping_range`] for those.
pub fn filter_by_range<'a>(
    schedules: &'a [DailySchedule],
    start: &str,
    end: &str,
) -> Vec<&'a DailySchedule> {
    schedules
        .iter()
        .filter(|d| d.date.as_str() >= start && d.date.as_str() <= end)
        .collect()
}

/// Like [`filter_by_range`], but `start > end` is read as December into
/// January: `[start, 12-31]` followed by `[01-01, end]`.
pub fn filter_by_wrapping_range<'a>(
    schedules: &'a [DailySchedule],
    start: &str,
    end: &str,
) -> Vec<&'a DailySchedule> {
    if start <= end {
        return filter_by_range(schedules, start, end);
    }
    let mut days = filter_by_range(schedules, start, "12-31");
    days.extend(filter_by_range(schedules, "01-01", end));
    days
}

/// Entries whose date starts with the two-digit `month` key.
pub fn filter_by_month<'a>(schedules: &'a [DailySchedule], month: &str) -> Vec<&'a DailySchedule> {
    schedules.iter().filter(|d| d.month() == month).collect()
}

pub fn month_key(month: u32) -> String {
    format!("{:02}", month)
}

/// Rows a view shows. `month` is 1-12; `ramadan` is an inclusive window.
pub fn select_days<'a>(
    all: &'a [DailySchedule],
    view: ViewMode,
    today_key: &str,
    month: u32,
    ramadan: Option<(&str, &str)>,
) -> Vec<&'a DailySchedule> {
    match view {
        ViewMode::Today => all.iter().filter(|d| d.date == today_key).collect(),
        ViewMode::All => all.iter().collect(),
        ViewMode::Month => filter_by_month(all, &month_key(month)),
        ViewMode::Ramadan => match ramadan {
            Some((start, end)) => filter_by_wrapping_range(all, start, end),
            None => Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(keys: &[&str]) -> Vec<DailySchedule> {
        keys.iter()
            .map(|k| DailySchedule::from_raw(k, [Some("05:00"), None, None, None, None, None]).unwrap())
            .collect()
    }

    fn keys(selected: &[&DailySchedule]) -> Vec<String> {
        selected.iter().map(|d| d.date.clone()).collect()
    }

    #[test]
    fn range_is_inclusive() {
        let all = days(&["02-17", "02-18", "03-19", "03-20"]);
        assert_eq!(keys(&filter_by_range(&all, "02-18", "03-19")), ["02-18", "03-19"]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let all = days(&["01-02", "06-01", "12-30"]);
        assert!(filter_by_range(&all, "12-01", "01-31").is_empty());
    }

    #[test]
    fn wrapping_range_spans_new_year_in_calendar_order() {
        let all = days(&["01-02", "02-10", "06-01", "12-20", "12-30"]);
        assert_eq!(
            keys(&filter_by_wrapping_range(&all, "12-15", "02-01")),
            ["12-20", "12-30", "01-02"]
        );
        assert_eq!(
            keys(&filter_by_wrapping_range(&all, "02-01", "06-30")),
            ["02-10", "06-01"]
        );
    }

    #[test]
    fn month_filter_matches_prefix() {
        let all = days(&["02-28", "03-01", "03-31", "04-01"]);
        assert_eq!(keys(&filter_by_month(&all, "03")), ["03-01", "03-31"]);
        assert_eq!(keys(&filter_by_month(&all, &month_key(2))), ["02-28"]);
        assert!(filter_by_month(&all, "11").is_empty());
    }

    #[test]
    fn views_select_their_rows() {
        let all = days(&["02-17", "02-18", "03-19", "03-20"]);
        let pick = |view, ramadan| keys(&select_days(&all, view, "03-19", 2, ramadan));
        assert_eq!(pick(ViewMode::Today, None), ["03-19"]);
        assert_eq!(pick(ViewMode::All, None).len(), 4);
        assert_eq!(pick(ViewMode::Month, None), ["02-17", "02-18"]);
        assert_eq!(pick(ViewMode::Ramadan, Some(("02-18", "03-19"))), ["02-18", "03-19"]);
        assert!(pick(ViewMode::Ramadan, None).is_empty());
    }
}
