//! Message counts over time.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    /// Display label, e.g. `"Feb 2023"`.
    pub label: String,
    pub count: usize,
}

/// Messages on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Message counts per (year, month), oldest first.
///
/// Months without messages are omitted.
pub fn monthly_timeline(records: &[MessageRecord]) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in records {
        *months
            .entry((record.timestamp.year(), record.timestamp.month()))
            .or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month), count)| MonthlyPoint {
            year,
            month,
            label: month_label(year, month),
            count,
        })
        .collect()
}

/// Message counts per calendar date, oldest first.
///
/// Dates without messages are omitted.
pub fn daily_timeline(records: &[MessageRecord]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *days.entry(record.date()).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyPoint { date, count })
        .collect()
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{month:02} {year}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(y: i32, m: u32, d: u32) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        MessageRecord::new(ts, "Alice", "x")
    }

    #[test]
    fn test_monthly_timeline_groups_and_orders() {
        let records = vec![rec(2023, 3, 5), rec(2022, 12, 31), rec(2023, 3, 1), rec(2023, 1, 9)];
        let timeline = monthly_timeline(&records);

        let labels: Vec<&str> = timeline.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Dec 2022", "Jan 2023", "Mar 2023"]);
        let counts: Vec<usize> = timeline.iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![1, 1, 2]);
        assert_eq!((timeline[2].year, timeline[2].month), (2023, 3));
    }

    #[test]
    fn test_daily_timeline() {
        let records = vec![rec(2023, 3, 5), rec(2023, 3, 1), rec(2023, 3, 5)];
        let timeline = daily_timeline(&records);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].date, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
        assert_eq!(timeline[1].count, 2);
    }

    #[test]
    fn test_timelines_empty() {
        assert!(monthly_timeline(&[]).is_empty());
        assert!(daily_timeline(&[]).is_empty());
    }
}
