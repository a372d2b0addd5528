//! Static reference data: stop words, emoji set and sentiment keywords.
//!
//! A [`Lexicon`] is built once and only read afterwards. The embedded default
//! lists are available through [`Lexicon::shared`]; callers that need
//! reproducible results independent of those lists inject their own, either in
//! code or from one-word-per-line files.
//!
//! # Example
//!
//! ```rust
//! use chatlens::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::empty()
//!     .with_stop_words(["the", "a"])
//!     .with_positive(["great"])
//!     .with_negative(["awful"]);
//!
//! assert!(lexicon.is_stop_word("The"));
//! assert!(lexicon.is_positive("great"));
//! assert!(lexicon.is_emoji('😂'));
//! ```

use std::collections::HashSet;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::ChatlensError;

const DEFAULT_STOP_WORDS: &str = include_str!("../data/stop_words.txt");
const DEFAULT_POSITIVE: &str = include_str!("../data/positive.txt");
const DEFAULT_NEGATIVE: &str = include_str!("../data/negative.txt");

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::default);

/// Codepoint blocks treated as emoji by default.
const DEFAULT_EMOJI_RANGES: &[RangeInclusive<char>] = &[
    '\u{1F1E6}'..='\u{1F1FF}', // regional indicators (flags)
    '\u{1F300}'..='\u{1F5FF}', // symbols & pictographs
    '\u{1F600}'..='\u{1F64F}', // emoticons
    '\u{1F680}'..='\u{1F6FF}', // transport & map
    '\u{1F900}'..='\u{1F9FF}', // supplemental symbols & pictographs
    '\u{1FA70}'..='\u{1FAFF}', // symbols & pictographs extended-A
    '\u{2600}'..='\u{26FF}',   // miscellaneous symbols
    '\u{2700}'..='\u{27BF}',   // dingbats
    '\u{1F004}'..='\u{1F004}',
    '\u{1F0CF}'..='\u{1F0CF}',
    '\u{231A}'..='\u{231B}',
    '\u{23E9}'..='\u{23F3}',
    '\u{2B1B}'..='\u{2B1C}',
    '\u{2B50}'..='\u{2B50}',
    '\u{2B55}'..='\u{2B55}',
];

/// Set of characters counted as emoji.
///
/// Membership is per codepoint, so a multi-codepoint sequence such as a
/// family emoji contributes each of its pictographic parts. Joiners and
/// variation selectors are never members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiSet {
    ranges: Vec<RangeInclusive<char>>,
    extra: HashSet<char>,
}

impl Default for EmojiSet {
    fn default() -> Self {
        Self {
            ranges: DEFAULT_EMOJI_RANGES.to_vec(),
            extra: HashSet::new(),
        }
    }
}

impl EmojiSet {
    /// A set with no members.
    pub fn empty() -> Self {
        Self {
            ranges: Vec::new(),
            extra: HashSet::new(),
        }
    }

    /// A set containing exactly the given characters.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            ranges: Vec::new(),
            extra: chars.into_iter().collect(),
        }
    }

    /// Adds a codepoint range.
    #[must_use]
    pub fn with_range(mut self, range: RangeInclusive<char>) -> Self {
        self.ranges.push(range);
        self
    }

    /// Returns `true` if `c` is a member.
    pub fn contains(&self, c: char) -> bool {
        self.extra.contains(&c) || self.ranges.iter().any(|range| range.contains(&c))
    }
}

/// Stop words, emoji set and sentiment keyword lists.
///
/// All word lookups are case-insensitive; stored words are lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    positive: HashSet<String>,
    negative: HashSet<String>,
    emoji: EmojiSet,
}

impl Default for Lexicon {
    /// Builds the lexicon from the embedded default lists.
    fn default() -> Self {
        Self {
            stop_words: parse_word_list(DEFAULT_STOP_WORDS),
            positive: parse_word_list(DEFAULT_POSITIVE),
            negative: parse_word_list(DEFAULT_NEGATIVE),
            emoji: EmojiSet::default(),
        }
    }
}

impl Lexicon {
    /// Returns the process-wide default lexicon, built on first use.
    pub fn shared() -> &'static Lexicon {
        &DEFAULT_LEXICON
    }

    /// A lexicon with no words and the default emoji set.
    pub fn empty() -> Self {
        Self {
            stop_words: HashSet::new(),
            positive: HashSet::new(),
            negative: HashSet::new(),
            emoji: EmojiSet::default(),
        }
    }

    /// Starts from the defaults and replaces each list whose file is given.
    ///
    /// Files hold one word per line; blank lines and `#` comments are skipped.
    pub fn from_files(
        stop_words: Option<&Path>,
        positive: Option<&Path>,
        negative: Option<&Path>,
    ) -> Result<Self, ChatlensError> {
        let mut lexicon = Self::default();
        if let Some(path) = stop_words {
            lexicon.stop_words = read_word_list(path)?;
        }
        if let Some(path) = positive {
            lexicon.positive = read_word_list(path)?;
        }
        if let Some(path) = negative {
            lexicon.negative = read_word_list(path)?;
        }
        Ok(lexicon)
    }

    /// Replaces the stop-word list.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = lowercase_set(words);
        self
    }

    /// Replaces the positive keyword list.
    #[must_use]
    pub fn with_positive<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.positive = lowercase_set(words);
        self
    }

    /// Replaces the negative keyword list.
    #[must_use]
    pub fn with_negative<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.negative = lowercase_set(words);
        self
    }

    /// Replaces the emoji set.
    #[must_use]
    pub fn with_emoji(mut self, emoji: EmojiSet) -> Self {
        self.emoji = emoji;
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        contains_folded(&self.stop_words, word)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        contains_folded(&self.positive, word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        contains_folded(&self.negative, word)
    }

    pub fn is_emoji(&self, c: char) -> bool {
        self.emoji.contains(c)
    }

    /// Number of stop words loaded.
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

fn contains_folded(set: &HashSet<String>, word: &str) -> bool {
    if word.chars().any(char::is_uppercase) {
        set.contains(&word.to_lowercase())
    } else {
        set.contains(word)
    }
}

fn lowercase_set<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Parses a one-word-per-line list.
pub fn parse_word_list(text: &str) -> HashSet<String> {
    lowercase_set(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

fn read_word_list(path: &Path) -> Result<HashSet<String>, ChatlensError> {
    let text = fs::read_to_string(path).map_err(|e| ChatlensError::lexicon(path, e))?;
    Ok(parse_word_list(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_lists_loaded() {
        let lexicon = Lexicon::shared();
        assert!(lexicon.is_stop_word("the"));
        assert!(lexicon.is_stop_word("hai"));
        assert!(lexicon.is_positive("happy"));
        assert!(lexicon.is_negative("sad"));
        assert!(!lexicon.is_stop_word("pizza"));
        // comment lines are not words
        assert!(!lexicon.is_stop_word("#"));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let lexicon = Lexicon::empty().with_positive(["Great"]);
        assert!(lexicon.is_positive("great"));
        assert!(lexicon.is_positive("GREAT"));
    }

    #[test]
    fn test_default_emoji_set() {
        let lexicon = Lexicon::shared();
        for c in ['😂', '❤', '👍', '🎉', '🔥', '☀', '🥳', '⭐'] {
            assert!(lexicon.is_emoji(c), "{c} should be an emoji");
        }
        for c in ['a', '1', ':', '\u{200d}', '\u{fe0f}', 'é'] {
            assert!(!lexicon.is_emoji(c), "{c:?} should not be an emoji");
        }
    }

    #[test]
    fn test_custom_emoji_set() {
        let set = EmojiSet::from_chars(['x']).with_range('0'..='9');
        assert!(set.contains('x'));
        assert!(set.contains('5'));
        assert!(!set.contains('😂'));
        assert!(!EmojiSet::empty().contains('😂'));
    }

    #[test]
    fn test_parse_word_list() {
        let words = parse_word_list("# header\nAlpha\n\n  beta  \n#gamma\n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("alpha"));
        assert!(words.contains("beta"));
    }

    #[test]
    fn test_from_files_overrides_only_given_lists() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "pizza\npasta").unwrap();

        let lexicon = Lexicon::from_files(Some(file.path()), None, None).unwrap();
        assert!(lexicon.is_stop_word("pizza"));
        assert!(!lexicon.is_stop_word("the"));
        assert!(lexicon.is_positive("happy"));
        assert_eq!(lexicon.stop_word_count(), 2);
    }

    #[test]
    fn test_from_files_missing() {
        let err = Lexicon::from_files(None, Some(Path::new("/no/such/list.txt")), None)
            .unwrap_err();
        assert!(err.is_lexicon());
    }
}
