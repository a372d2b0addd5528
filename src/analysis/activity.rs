//! When people write: weekday and month maps, weekday × hour heatmap,
//! hour-of-day counts.
//!
//! All results cover the full category range (7 weekdays, 12 months, 24
//! hours) with zeros where nothing was sent.

use chrono::{Datelike, Month, Weekday};
use serde::{Deserialize, Serialize};

use super::LabelCount;
use crate::message::MessageRecord;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Messages per weekday, Monday first, all seven days present.
pub fn week_activity_map(records: &[MessageRecord]) -> Vec<LabelCount> {
    let mut counts = [0usize; 7];
    for record in records {
        counts[record.weekday().num_days_from_monday() as usize] += 1;
    }

    WEEKDAYS
        .iter()
        .zip(counts)
        .map(|(&day, count)| LabelCount::new(weekday_name(day), count))
        .collect()
}

/// Messages per calendar month name, January first, all twelve present.
///
/// Months of different years are added together.
pub fn month_activity_map(records: &[MessageRecord]) -> Vec<LabelCount> {
    let mut counts = [0usize; 12];
    for record in records {
        counts[record.timestamp.month0() as usize] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let name = Month::try_from(i as u8 + 1).map_or("", |m| m.name());
            LabelCount::new(name, count)
        })
        .collect()
}

/// The entry with the highest count; ties go to the earlier entry.
///
/// Returns `None` when every count is zero.
pub fn busiest(map: &[LabelCount]) -> Option<&LabelCount> {
    map.iter()
        .filter(|entry| entry.count > 0)
        .fold(None, |best: Option<&LabelCount>, entry| match best {
            Some(b) if b.count >= entry.count => Some(b),
            _ => Some(entry),
        })
}

/// The weekday with the most messages.
pub fn busiest_day(records: &[MessageRecord]) -> Option<LabelCount> {
    busiest(&week_activity_map(records)).cloned()
}

/// The calendar month name with the most messages.
pub fn busiest_month(records: &[MessageRecord]) -> Option<LabelCount> {
    busiest(&month_activity_map(records)).cloned()
}

/// Messages per hour of day; index is the hour (`0..=23`).
pub fn active_hours(records: &[MessageRecord]) -> [usize; 24] {
    let mut hours = [0usize; 24];
    for record in records {
        hours[record.hour() as usize] += 1;
    }
    hours
}

/// Weekday × hour-period grid of message counts.
///
/// ```rust
/// use chatlens::analysis::activity_heatmap;
/// use chatlens::parser::parse;
///
/// let records = parse("01/02/23, 11:30 PM - Alice: late");
/// let heatmap = activity_heatmap(&records, 2);
///
/// assert_eq!(heatmap.periods.len(), 12);
/// assert_eq!(heatmap.periods[11], "22-00");
/// assert_eq!(heatmap.get("Wednesday", 23), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Row labels, Monday first.
    pub weekdays: Vec<String>,
    /// Column labels such as `"09-10"`; the last one wraps to `"00"`.
    pub periods: Vec<String>,
    /// Hours per column.
    pub bucket_hours: u32,
    /// `counts[weekday][period]`.
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for the row named `weekday` and the column containing `hour`.
    ///
    /// Returns `None` for an unknown row, an out-of-range hour, or a zero
    /// `bucket_hours`.
    pub fn get(&self, weekday: &str, hour: u32) -> Option<usize> {
        let row = self.weekdays.iter().position(|w| w == weekday)?;
        let col = hour.checked_div(self.bucket_hours)? as usize;
        self.counts.get(row)?.get(col).copied()
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Builds the weekday × period heatmap.
///
/// `bucket_hours` must divide 24; any other value falls back to 1-hour
/// columns.
pub fn activity_heatmap(records: &[MessageRecord], bucket_hours: u32) -> Heatmap {
    let width = if bucket_hours > 0 && 24 % bucket_hours == 0 {
        bucket_hours
    } else {
        1
    };
    let columns = (24 / width) as usize;

    let periods = (0..columns as u32)
        .map(|i| {
            let start = i * width;
            let end = (start + width) % 24;
            format!("{start:02}-{end:02}")
        })
        .collect();

    let mut counts = vec![vec![0usize; columns]; 7];
    for record in records {
        let row = record.weekday().num_days_from_monday() as usize;
        let col = (record.hour() / width) as usize;
        counts[row][col] += 1;
    }

    Heatmap {
        weekdays: WEEKDAYS.iter().map(|&d| weekday_name(d).to_string()).collect(),
        periods,
        bucket_hours: width,
        counts,
    }
}
