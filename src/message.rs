//! Typed message records produced by the transcript parser.
//!
//! A [`MessageRecord`] is one logical chat entry: a timestamp, an [`Author`]
//! and the body text with any continuation lines already merged in.
//!
//! # Overview
//!
//! Records are created once by the parser and never mutated afterwards. The
//! derived attributes the analytics need (word tokens, media placeholder check,
//! links) are computed on demand from the body rather than stored.
//!
//! # Examples
//!
//! ```
//! use chatlens::{Author, MessageRecord};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//!
//! let msg = MessageRecord::new(ts, "Alice", "see https://example.com");
//! assert_eq!(msg.author_name(), Some("Alice"));
//! assert_eq!(msg.link_count(), 1);
//! assert!(!msg.is_system());
//! ```

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Reserved author value for lines that have no sender.
///
/// Group notifications (joins, leaves, subject changes, encryption notices)
/// carry this sentinel when serialized.
pub const SYSTEM_AUTHOR: &str = "SYSTEM";

/// Default placeholder WhatsApp writes in place of omitted media.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"']+"#).expect("URL pattern is valid")
});

/// Who wrote a record.
///
/// Serializes as a plain string; [`Author::System`] becomes
/// [`SYSTEM_AUTHOR`]. A participant literally named `SYSTEM` therefore
/// round-trips as a system author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Author {
    /// Group notification with no single sender.
    System,
    /// A named chat participant.
    Participant(String),
}

impl Author {
    /// Returns `true` for the system sentinel.
    pub fn is_system(&self) -> bool {
        matches!(self, Author::System)
    }

    /// Returns the participant name, or `None` for system rows.
    pub fn name(&self) -> Option<&str> {
        match self {
            Author::System => None,
            Author::Participant(name) => Some(name),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Author::System => f.write_str(SYSTEM_AUTHOR),
            Author::Participant(name) => f.write_str(name),
        }
    }
}

impl From<String> for Author {
    fn from(value: String) -> Self {
        if value == SYSTEM_AUTHOR || value.trim().is_empty() {
            Author::System
        } else {
            Author::Participant(value)
        }
    }
}

impl From<&str> for Author {
    fn from(value: &str) -> Self {
        Author::from(value.to_string())
    }
}

impl From<Author> for String {
    fn from(value: Author) -> Self {
        match value {
            Author::System => SYSTEM_AUTHOR.to_string(),
            Author::Participant(name) => name,
        }
    }
}

/// One parsed chat entry.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Wall-clock time from the export |
/// | `author` | [`Author`] | Sender, or the system sentinel |
/// | `body` | `String` | Text, continuation lines joined with `\n` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent, as printed in the export (no offset).
    pub timestamp: NaiveDateTime,

    /// Who sent the message.
    pub author: Author,

    /// Text content. Never empty for records produced by the parser.
    pub body: String,
}

impl MessageRecord {
    /// Creates a record authored by a participant.
    ///
    /// An empty or `"SYSTEM"` author yields a system record.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: Author::from(author.into()),
            body: body.into(),
        }
    }

    /// Creates a group notification record.
    pub fn system(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            author: Author::System,
            body: body.into(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns `true` if this is a group notification.
    pub fn is_system(&self) -> bool {
        self.author.is_system()
    }

    /// Returns the participant name, or `None` for system rows.
    pub fn author_name(&self) -> Option<&str> {
        self.author.name()
    }

    /// Calendar date of the message.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Hour of day, `0..=23`.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    // =========================================================================
    // Derived attributes
    // =========================================================================

    /// Returns `true` if the body is exactly the media placeholder.
    ///
    /// Surrounding whitespace is ignored.
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.body.trim() == placeholder
    }

    /// Number of whitespace-separated tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Lowercased word tokens with surrounding punctuation removed.
    ///
    /// Tokens that consist only of punctuation or symbols are skipped.
    pub fn tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.body.split_whitespace().filter_map(normalize_token)
    }

    /// URLs found in the body, in order of appearance.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        URL_PATTERN.find_iter(&self.body).map(|m| m.as_str())
    }

    /// Number of URLs in the body. A message may contribute more than one.
    pub fn link_count(&self) -> usize {
        self.links().count()
    }

    /// Returns `true` if the body contains at least one URL.
    pub fn has_link(&self) -> bool {
        URL_PATTERN.is_match(&self.body)
    }
}

/// Lowercases a raw token and strips leading/trailing non-alphanumerics.
pub(crate) fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
