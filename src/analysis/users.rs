//! Group-level participant metrics.
//!
//! Both functions describe the conversation as a whole and expect the
//! unfiltered record sequence; callers only show them for the `Overall`
//! selection.

use serde::{Deserialize, Serialize};

use super::{LabelCount, rank_by_frequency, round2};
use crate::message::MessageRecord;

/// One participant's share of all participant messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    pub name: String,
    /// Percentage of non-system messages, rounded to two decimals.
    pub percent: f64,
}

/// Busiest participants ranking plus everyone's share.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusyUsers {
    /// The `top_n` most active participants, most active first.
    pub top: Vec<LabelCount>,
    /// Every participant's percentage, same order as the full ranking.
    pub shares: Vec<UserShare>,
}

/// Ranks participants by message count.
///
/// System notifications are not counted. Ties keep first-appearance order.
///
/// ```rust
/// use chatlens::analysis::most_busy_users;
/// use chatlens::parser::parse;
///
/// let records = parse(
///     "01/02/23, 10:00 AM - Alice: hello\n\
///      01/02/23, 10:01 AM - Bob: hi\n\
///      01/02/23, 10:02 AM - Bob: how are you",
/// );
/// let busy = most_busy_users(&records, 5);
/// assert_eq!(busy.top[0].label, "Bob");
/// assert_eq!(busy.shares[0].percent, 66.67);
/// ```
pub fn most_busy_users(records: &[MessageRecord], top_n: usize) -> BusyUsers {
    let ranked = rank_by_frequency(records.iter().filter_map(MessageRecord::author_name));
    let total: usize = ranked.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return BusyUsers::default();
    }

    let shares = ranked
        .iter()
        .map(|&(name, count)| UserShare {
            name: name.to_string(),
            percent: round2(count as f64 * 100.0 / total as f64),
        })
        .collect();

    let top = ranked
        .iter()
        .take(top_n)
        .map(|&(name, count)| LabelCount::new(name, count))
        .collect();

    BusyUsers { top, shares }
}

/// Average gap between a message and the next message from someone else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimes {
    /// Mean gap in minutes; `0.0` when there are no samples.
    pub average_minutes: f64,
    /// Number of author changes that were measured.
    pub samples: usize,
}

/// Averages the time between consecutive messages from different authors.
///
/// System notifications are skipped entirely. Consecutive messages from the
/// same author are not responses. Gaps that go backwards in time (export clock
/// anomalies) are ignored.
pub fn response_time_analysis(records: &[MessageRecord]) -> ResponseTimes {
    let mut total_minutes = 0.0;
    let mut samples = 0usize;

    let mut participants = records.iter().filter(|r| !r.is_system());
    let Some(mut previous) = participants.next() else {
        return ResponseTimes::default();
    };

    for current in participants {
        if current.author != previous.author {
            let gap = current.timestamp - previous.timestamp;
            if gap.num_seconds() >= 0 {
                total_minutes += gap.num_seconds() as f64 / 60.0;
                samples += 1;
            }
        }
        previous = current;
    }

    if samples == 0 {
        return ResponseTimes::default();
    }

    ResponseTimes {
        average_minutes: total_minutes / samples as f64,
        samples,
    }
}
