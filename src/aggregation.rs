use crate::models::{Entry, Summary};
use std::collections::BTreeSet;

pub fn total_activity(entries: &[Entry]) -> f64 {
    entries
        .iter()
        .filter(|entry| !entry.exclude)
        .map(|entry| entry.duration)
        .sum()
}

/// Distinct dates over every entry, excluded ones included.
pub fn number_of_active_days(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|entry| entry.date)
        .collect::<BTreeSet<_>>()
        .len()
}

pub fn average_daily_activity(total: f64, active_days: usize) -> Option<f64> {
    (active_days > 0).then(|| total / active_days as f64)
}

pub fn summarize(entries: &[Entry]) -> Summary {
    let total = total_activity(entries);
    let active_days = number_of_active_days(entries);
    Summary {
        total_activity: total,
        number_of_active_days: active_days,
        average_daily_activity: average_daily_activity(total, active_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: u32, day: u32, duration: f64, exclude: bool) -> Entry {
        Entry {
            id,
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            activity_id: 1,
            duration,
            exclude,
            notes: None,
        }
    }

    #[test]
    fn single_entry() {
        let summary = summarize(&[entry(1, 1, 30.0, false)]);
        assert_eq!(summary.total_activity, 30.0);
        assert_eq!(summary.number_of_active_days, 1);
        assert_eq!(summary.average_daily_activity, Some(30.0));
    }

    #[test]
    fn excluded_entries_count_as_active_days_only() {
        let entries = [entry(1, 1, 100.0, true), entry(2, 1, 20.0, false)];
        let summary = summarize(&entries);
        assert_eq!(summary.total_activity, 20.0);
        assert_eq!(summary.number_of_active_days, 1);
        assert_eq!(summary.average_daily_activity, Some(20.0));

        let entries = [entry(1, 1, 20.0, false), entry(2, 2, 100.0, true)];
        let summary = summarize(&entries);
        assert_eq!(summary.number_of_active_days, 2);
        assert_eq!(summary.average_daily_activity, Some(10.0));
    }

    #[test]
    fn order_does_not_matter() {
        let mut entries = vec![
            entry(1, 3, 15.0, false),
            entry(2, 1, 40.0, true),
            entry(3, 2, 25.0, false),
            entry(4, 3, 5.0, false),
        ];
        let forward = summarize(&entries);
        entries.reverse();
        assert_eq!(summarize(&entries), forward);
        assert_eq!(forward.total_activity, 45.0);
        assert_eq!(forward.number_of_active_days, 3);
    }

    #[test]
    fn empty_list_has_no_average() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_activity, 0.0);
        assert_eq!(summary.number_of_active_days, 0);
        assert_eq!(summary.average_daily_activity, None);
    }

    #[test]
    fn all_excluded_still_averages_to_zero() {
        let summary = summarize(&[entry(1, 1, 50.0, true)]);
        assert_eq!(summary.total_activity, 0.0);
        assert_eq!(summary.average_daily_activity, Some(0.0));
    }
}
