//! Analytics over a (filtered) record sequence.
//!
//! Every function here is pure: it takes its input slice explicitly, keeps no
//! state between calls, and returns the zero/empty form of its result for an
//! empty slice. Functions can run in any order, or concurrently, against the
//! same records.
//!
//! - [`stats`] - totals, message types, keyword counts
//! - [`timeline`] - monthly and daily message counts
//! - [`activity`] - weekday/month maps, weekday × hour heatmap, active hours
//! - [`users`] - busiest participants, response times (group level)
//! - [`words`] - common words, word cloud weights, emoji
//! - [`sentiment`] - lexicon-based positive/negative/neutral tally
//! - [`report`] - all of the above bundled for one selector
//!
//! # System notifications
//!
//! | Function | System rows |
//! |---|---|
//! | [`fetch_stats`] | counted as messages; ignored for words, media, links |
//! | timelines, activity maps, heatmap, [`active_hours`] | included |
//! | [`keyword_analysis`] | included |
//! | everything else | excluded |

pub mod activity;
pub mod report;
pub mod sentiment;
pub mod stats;
pub mod timeline;
pub mod users;
pub mod words;

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

pub use activity::{
    Heatmap, active_hours, activity_heatmap, busiest, busiest_day, busiest_month,
    month_activity_map, week_activity_map,
};
pub use report::AnalysisReport;
pub use sentiment::{Sentiment, SentimentTally, classify_sentiment, sentiment_analysis};
pub use stats::{MessageTypes, Stats, fetch_stats, keyword_analysis, message_type_analysis};
pub use timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
pub use users::{BusyUsers, ResponseTimes, UserShare, most_busy_users, response_time_analysis};
pub use words::{WeightedWord, WordCloud, create_wordcloud, emoji_helper, most_common_words};

/// A named count, used for ordered category tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

impl LabelCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Counts items and orders them most frequent first.
///
/// Ties keep first-occurrence order.
pub(crate) fn rank_by_frequency<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
