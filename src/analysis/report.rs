//! Every aggregator bundled for one selection.
//!
//! [`AnalysisReport`] is what a presentation layer consumes: it holds plain
//! data only and serializes to JSON as-is.

use serde::{Deserialize, Serialize};

use super::{
    BusyUsers, DailyPoint, Heatmap, LabelCount, MessageTypes, MonthlyPoint, ResponseTimes,
    SentimentTally, Stats, WordCloud, active_hours, activity_heatmap, busiest, create_wordcloud,
    daily_timeline, emoji_helper, fetch_stats, keyword_analysis, message_type_analysis,
    month_activity_map, monthly_timeline, most_busy_users, most_common_words,
    response_time_analysis, sentiment_analysis, week_activity_map,
};
use crate::config::AnalysisConfig;
use crate::filter::{Selector, filter, participants};
use crate::lexicon::Lexicon;
use crate::message::MessageRecord;

/// Occurrences of a searched keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// All analytics for one selector.
///
/// ```rust
/// use chatlens::analysis::AnalysisReport;
/// use chatlens::config::AnalysisConfig;
/// use chatlens::filter::Selector;
/// use chatlens::lexicon::Lexicon;
/// use chatlens::parser::parse;
///
/// let records = parse(
///     "01/02/23, 10:00 AM - Alice: hello\n\
///      01/02/23, 10:05 AM - Bob: hi there\n\
///      01/02/23, 10:06 AM - Bob: how are you",
/// );
/// let report = AnalysisReport::build(
///     &records,
///     &Selector::Overall,
///     Some("hi"),
///     Lexicon::shared(),
///     &AnalysisConfig::default(),
/// );
///
/// assert_eq!(report.stats.messages, 3);
/// assert_eq!(report.keyword.map(|k| k.count), Some(1));
/// assert!(report.response_times.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// `"Overall"` or the selected author.
    pub selector: String,
    /// Distinct participants of the whole conversation, sorted.
    pub participants: Vec<String>,
    pub stats: Stats,
    pub message_types: MessageTypes,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: Vec<LabelCount>,
    pub month_activity: Vec<LabelCount>,
    pub busiest_day: Option<LabelCount>,
    pub busiest_month: Option<LabelCount>,
    pub heatmap: Heatmap,
    pub active_hours: [usize; 24],
    pub common_words: Vec<LabelCount>,
    pub wordcloud: WordCloud,
    /// Emoji (as a one-character label) with counts, most frequent first.
    pub emoji: Vec<LabelCount>,
    pub sentiment: SentimentTally,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub keyword: Option<KeywordCount>,
    /// Group-level ranking; present only for the `Overall` selection.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub busy_users: Option<BusyUsers>,
    /// Group-level response times; present only for the `Overall` selection.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub response_times: Option<ResponseTimes>,
}

impl AnalysisReport {
    /// Filters `records` by `selector` and runs every aggregator.
    ///
    /// Group-level metrics use the full `records` slice and are only computed
    /// when `selector` is [`Selector::Overall`]. A blank or absent `keyword`
    /// leaves [`AnalysisReport::keyword`] empty.
    pub fn build(
        records: &[MessageRecord],
        selector: &Selector,
        keyword: Option<&str>,
        lexicon: &Lexicon,
        config: &AnalysisConfig,
    ) -> Self {
        let selected = filter(records, selector);
        let placeholder = config.media_placeholder.as_str();

        let week_activity = week_activity_map(&selected);
        let month_activity = month_activity_map(&selected);
        let busiest_day = busiest(&week_activity).cloned();
        let busiest_month = busiest(&month_activity).cloned();

        let keyword = keyword
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| KeywordCount {
                keyword: k.to_string(),
                count: keyword_analysis(k, &selected),
            });

        let (busy_users, response_times) = if selector.is_overall() {
            (
                Some(most_busy_users(records, config.top_users)),
                Some(response_time_analysis(records)),
            )
        } else {
            (None, None)
        };

        let report = Self {
            selector: selector.to_string(),
            participants: participants(records),
            stats: fetch_stats(&selected, placeholder),
            message_types: message_type_analysis(&selected, placeholder),
            monthly_timeline: monthly_timeline(&selected),
            daily_timeline: daily_timeline(&selected),
            week_activity,
            month_activity,
            busiest_day,
            busiest_month,
            heatmap: activity_heatmap(&selected, config.heatmap_bucket_hours),
            active_hours: active_hours(&selected),
            common_words: most_common_words(&selected, lexicon, placeholder, config.top_words),
            wordcloud: create_wordcloud(
                &selected,
                lexicon,
                placeholder,
                config.wordcloud_max_words,
            ),
            emoji: emoji_helper(&selected, lexicon)
                .into_iter()
                .map(|(c, count)| LabelCount::new(c, count))
                .collect(),
            sentiment: sentiment_analysis(&selected, lexicon),
            keyword,
            busy_users,
            response_times,
        };

        log::debug!(
            "Built report for {}: {} of {} records",
            report.selector,
            selected.len(),
            records.len()
        );

        report
    }

    /// Returns `true` if the selection holds no records.
    pub fn is_empty(&self) -> bool {
        self.stats.messages == 0
    }
}
