//! Lexical analysis: most common words, word cloud weights, emoji usage.
//!
//! System notifications and media placeholders are excluded everywhere here.

use serde::{Deserialize, Serialize};

use super::{LabelCount, rank_by_frequency};
use crate::lexicon::Lexicon;
use crate::message::MessageRecord;

/// A word with its count and weight relative to the most frequent word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedWord {
    pub word: String,
    pub count: usize,
    /// `count / max_count`, in `(0, 1]`.
    pub weight: f64,
}

/// Frequency weighting for a density (word cloud) rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordCloud {
    /// Most frequent first.
    pub words: Vec<WeightedWord>,
}

impl WordCloud {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Lowercased non-stop-word tokens from participant, non-media messages.
fn content_tokens<'a>(
    records: &'a [MessageRecord],
    lexicon: &'a Lexicon,
    media_placeholder: &'a str,
) -> impl Iterator<Item = String> + 'a {
    records
        .iter()
        .filter(move |r| !r.is_system() && !r.is_media(media_placeholder))
        .flat_map(MessageRecord::tokens)
        .filter(|token| !lexicon.is_stop_word(token))
}

/// The `top_n` most frequent words, most frequent first.
///
/// Ties keep first-occurrence order.
///
/// ```rust
/// use chatlens::analysis::most_common_words;
/// use chatlens::lexicon::Lexicon;
/// use chatlens::parser::parse;
///
/// let records = parse(
///     "01/02/23, 10:00 AM - Alice: Pizza tonight?\n\
///      01/02/23, 10:01 AM - Bob: pizza yes, pizza!",
/// );
/// let lexicon = Lexicon::empty().with_stop_words(["yes"]);
/// let words = most_common_words(&records, &lexicon, "<Media omitted>", 2);
///
/// assert_eq!(words[0].label, "pizza");
/// assert_eq!(words[0].count, 3);
/// assert_eq!(words[1].label, "tonight");
/// ```
pub fn most_common_words(
    records: &[MessageRecord],
    lexicon: &Lexicon,
    media_placeholder: &str,
    top_n: usize,
) -> Vec<LabelCount> {
    rank_by_frequency(content_tokens(records, lexicon, media_placeholder))
        .into_iter()
        .take(top_n)
        .map(|(word, count)| LabelCount::new(word, count))
        .collect()
}

/// Word weights for a word cloud, capped at `max_words` entries.
pub fn create_wordcloud(
    records: &[MessageRecord],
    lexicon: &Lexicon,
    media_placeholder: &str,
    max_words: usize,
) -> WordCloud {
    let ranked = rank_by_frequency(content_tokens(records, lexicon, media_placeholder));
    let Some(&(_, max_count)) = ranked.first() else {
        return WordCloud::default();
    };

    let words = ranked
        .into_iter()
        .take(max_words)
        .map(|(word, count)| WeightedWord {
            word,
            count,
            weight: count as f64 / max_count as f64,
        })
        .collect();

    WordCloud { words }
}

/// Emoji usage, most frequent first.
///
/// Each codepoint in the lexicon's emoji set counts once per occurrence.
pub fn emoji_helper(records: &[MessageRecord], lexicon: &Lexicon) -> Vec<(char, usize)> {
    rank_by_frequency(
        records
            .iter()
            .filter(|r| !r.is_system())
            .flat_map(|r| r.body.chars())
            .filter(|&c| lexicon.is_emoji(c)),
    )
}
