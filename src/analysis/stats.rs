//! Headline totals, message-type breakdown and keyword counts.

use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;

/// Headline totals for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Every record, system notifications included.
    pub messages: usize,
    /// Whitespace tokens over participant messages that are not media.
    pub words: usize,
    /// Participant messages whose body is the media placeholder.
    pub media: usize,
    /// URLs in participant messages; one message may hold several.
    pub links: usize,
}

/// Computes message, word, media and link totals.
///
/// ```rust
/// use chatlens::analysis::fetch_stats;
/// use chatlens::parser::parse;
///
/// let records = parse(
///     "01/02/23, 10:00 AM - Alice: hello\n\
///      01/02/23, 10:05 AM - Bob: <Media omitted>",
/// );
/// let stats = fetch_stats(&records, "<Media omitted>");
/// assert_eq!((stats.messages, stats.words, stats.media), (2, 1, 1));
/// ```
pub fn fetch_stats(records: &[MessageRecord], media_placeholder: &str) -> Stats {
    let mut stats = Stats {
        messages: records.len(),
        ..Stats::default()
    };

    for record in records.iter().filter(|r| !r.is_system()) {
        if record.is_media(media_placeholder) {
            stats.media += 1;
        } else {
            stats.words += record.word_count();
            stats.links += record.link_count();
        }
    }

    stats
}

/// Message counts per kind. Each participant message lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTypes {
    pub text: usize,
    pub media: usize,
    pub link: usize,
}

impl MessageTypes {
    pub fn total(&self) -> usize {
        self.text + self.media + self.link
    }
}

/// Classifies participant messages as media, link or text, in that priority.
pub fn message_type_analysis(records: &[MessageRecord], media_placeholder: &str) -> MessageTypes {
    let mut types = MessageTypes::default();

    for record in records.iter().filter(|r| !r.is_system()) {
        if record.is_media(media_placeholder) {
            types.media += 1;
        } else if record.has_link() {
            types.link += 1;
        } else {
            types.text += 1;
        }
    }

    types
}

/// Counts whole-word, case-insensitive occurrences of `keyword` in all bodies.
///
/// A match must not be preceded or followed by a letter, digit or `_`, so
/// `"hi"` matches in `"hi there"` and `"oh, hi!"` but not in `"hello"` or
/// `"this"`. Multi-word keywords match as a phrase. A blank keyword counts 0.
///
/// ```rust
/// use chatlens::analysis::keyword_analysis;
/// use chatlens::parser::parse;
///
/// let records = parse(
///     "01/02/23, 10:00 AM - Alice: hello\n\
///      01/02/23, 10:05 AM - Bob: Hi there, hi",
/// );
/// assert_eq!(keyword_analysis("hi", &records), 2);
/// ```
pub fn keyword_analysis(keyword: &str, records: &[MessageRecord]) -> usize {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return 0;
    }

    records
        .iter()
        .map(|record| count_word_occurrences(&record.body.to_lowercase(), &needle))
        .sum()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn count_word_occurrences(haystack: &str, needle: &str) -> usize {
    let mut count = 0;
    let mut from = 0;

    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();

        let before_ok = haystack[..start].chars().next_back().is_none_or(|c| !is_word_char(c));
        let after_ok = haystack[end..].chars().next().is_none_or(|c| !is_word_char(c));

        if before_ok && after_ok {
            count += 1;
            from = end;
        } else {
            // advance one character past the rejected match start
            from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
        }
    }

    count
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

    const MEDIA: &str = "<Media omitted>";

    #[test]
    fn test_fetch_stats() {
        let records = vec![
            rec("Alice", "hello world"),
            rec("Bob", "<Media omitted>"),
            rec("Bob", "look https://a.example and https://b.example"),
            rec("", "Alice added Carol"),
        ];
        let stats = fetch_stats(&records, MEDIA);
        assert_eq!(stats.messages, 4);
        assert_eq!(stats.words, 6);
        assert_eq!(stats.media, 1);
        assert_eq!(stats.links, 2);
    }

    #[test]
    fn test_fetch_stats_empty() {
        assert_eq!(fetch_stats(&[], MEDIA), Stats::default());
    }

    #[test]
    fn test_message_types_priority() {
        let records = vec![
            rec("Alice", "plain"),
            rec("Alice", "<Media omitted>"),
            rec("Bob", "www.example.com"),
            rec("Bob", "another plain"),
            rec("", "Bob left"),
        ];
        let types = message_type_analysis(&records, MEDIA);
        assert_eq!(
            types,
            MessageTypes {
                text: 2,
                media: 1,
                link: 1
            }
        );
        assert_eq!(types.total(), 4);
    }

    #[test]
    fn test_message_types_empty() {
        assert_eq!(message_type_analysis(&[], MEDIA), MessageTypes::default());
    }

    #[test]
    fn test_keyword_word_boundaries() {
        let records = vec![
            rec("Alice", "hello"),
            rec("Bob", "hi there"),
            rec("Bob", "how are you"),
        ];
        assert_eq!(keyword_analysis("hi", &records), 1);
        assert_eq!(keyword_analysis("HI", &records), 1);
        assert_eq!(keyword_analysis("hell", &records), 0);
    }

    #[test]
    fn test_keyword_multiple_occurrences_and_punctuation() {
        let records = vec![rec("Alice", "Hi! hi, oh hi... this high-five")];
        assert_eq!(keyword_analysis("hi", &records), 3);
        assert_eq!(keyword_analysis("high", &records), 1);
    }

    #[test]
    fn test_keyword_phrase_and_unicode() {
        let records = vec![rec("Alice", "Good Morning all, good morning!"), rec("Bob", "Привет мир")];
        assert_eq!(keyword_analysis("good morning", &records), 2);
        assert_eq!(keyword_analysis("привет", &records), 1);
    }

    #[test]
    fn test_keyword_blank_and_empty() {
        let records = vec![rec("Alice", "anything")];
        assert_eq!(keyword_analysis("", &records), 0);
        assert_eq!(keyword_analysis("   ", &records), 0);
        assert_eq!(keyword_analysis("x", &[]), 0);
    }

    #[test]
    fn test_keyword_includes_system_rows() {
        let records = vec![rec("", "Alice changed the group name to party")];
        assert_eq!(keyword_analysis("party", &records), 1);
    }
}
