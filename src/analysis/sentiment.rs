//! Lexicon-based sentiment tally.
//!
//! Each message is scored by counting tokens found in the positive and
//! negative keyword lists; no model is involved.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::message::MessageRecord;

/// Sentiment class of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Classifies a message body by lexicon hits.
///
/// More positive than negative hits is [`Sentiment::Positive`], the reverse
/// is [`Sentiment::Negative`], anything else (including no hits) is neutral.
///
/// ```rust
/// use chatlens::analysis::{Sentiment, classify_sentiment};
/// use chatlens::lexicon::Lexicon;
///
/// let lexicon = Lexicon::empty()
///     .with_positive(["great", "love"])
///     .with_negative(["bad"]);
///
/// assert_eq!(classify_sentiment("Great, I LOVE it", &lexicon), Sentiment::Positive);
/// assert_eq!(classify_sentiment("bad day", &lexicon), Sentiment::Negative);
/// assert_eq!(classify_sentiment("great but bad", &lexicon), Sentiment::Neutral);
/// ```
pub fn classify_sentiment(body: &str, lexicon: &Lexicon) -> Sentiment {
    let (mut positive, mut negative) = (0usize, 0usize);

    for token in body.split_whitespace().filter_map(crate::message::normalize_token) {
        if lexicon.is_positive(&token) {
            positive += 1;
        }
        if lexicon.is_negative(&token) {
            negative += 1;
        }
    }

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

/// Message counts per sentiment class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentTally {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

/// Tallies sentiment over participant messages.
///
/// System notifications are skipped; every other record, media placeholders
/// included, lands in exactly one class, so the tally total equals the
/// number of participant messages.
pub fn sentiment_analysis(records: &[MessageRecord], lexicon: &Lexicon) -> SentimentTally {
    let mut tally = SentimentTally::default();
    for record in records.iter().filter(|r| !r.is_system()) {
        tally.record(classify_sentiment(&record.body, lexicon));
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(author: &str, body: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        MessageRecord::new(ts, author, body)
    }

    fn lexicon() -> Lexicon {
        Lexicon::empty()
            .with_positive(["good", "happy"])
            .with_negative(["sad", "bad"])
    }

    #[test]
    fn test_classify_counts_hits() {
        let lex = lexicon();
        assert_eq!(classify_sentiment("good good bad", &lex), Sentiment::Positive);
        assert_eq!(classify_sentiment("sad, bad... happy", &lex), Sentiment::Negative);
        assert_eq!(classify_sentiment("happy sad", &lex), Sentiment::Neutral);
        assert_eq!(classify_sentiment("nothing here", &lex), Sentiment::Neutral);
        assert_eq!(classify_sentiment("", &lex), Sentiment::Neutral);
    }

    #[test]
    fn test_classify_whole_tokens_only() {
        // "goodbye" is not "good"
        assert_eq!(classify_sentiment("goodbye", &lexicon()), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_analysis_excludes_system() {
        let records = vec![
            rec("Alice", "so happy"),
            rec("Bob", "bad news"),
            rec("Bob", "<Media omitted>"),
            rec("", "Alice is happy to add Bob"),
        ];
        let tally = sentiment_analysis(&records, &lexicon());
        assert_eq!(
            tally,
            SentimentTally {
                positive: 1,
                negative: 1,
                neutral: 1
            }
        );
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.get(Sentiment::Neutral), 1);
    }

    #[test]
    fn test_sentiment_analysis_empty() {
        assert_eq!(sentiment_analysis(&[], &lexicon()), SentimentTally::default());
    }
}
