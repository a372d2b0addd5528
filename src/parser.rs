//! Transcript parser: exported chat text to ordered [`MessageRecord`]s.
//!
//! WhatsApp exports vary by platform and locale. Each line is tried against
//! the accepted [`TimestampFormat`]s in order; the first format that matches
//! and yields a valid timestamp opens a record. A transcript may mix formats.
//!
//! Supported formats:
//! - Android, 12-hour: `01/02/23, 10:00 AM - Alice: hello`
//! - Android, 24-hour: `01/02/2023, 22:00 - Alice: hello`
//! - Dotted, 24-hour: `26.10.2025, 20:40 - Alice: hello`
//! - iOS, bracketed: `[15/01/2024, 10:30:45] Alice: hello`
//!
//! # Line rules
//!
//! - A line starting with a timestamp opens a new record.
//! - `Author: text` after the timestamp sets the author; anything without such
//!   a colon is a group notification ([`Author::System`]).
//! - Any other line is a continuation of the previous record, or dropped if
//!   no record has been opened yet.
//! - Records whose body is empty after merging are dropped.
//! - A body equal to the configured media placeholder is rewritten to
//!   [`MEDIA_PLACEHOLDER`].
//!
//! Input with no recognizable timestamp yields an empty vector, not an error.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::parse;
//!
//! let records = parse(
//!     "01/02/23, 10:00 AM - Alice: hello\n\
//!      01/02/23, 10:05 AM - Bob: hi there\n\
//!      and a second line",
//! );
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].body, "hi there\nand a second line");
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use log::{debug, trace, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{DateOrder, ParserConfig};
use crate::error::ChatlensError;
use crate::message::{Author, MEDIA_PLACEHOLDER, MessageRecord};

/// Number of non-blank lines inspected when detecting the format.
const DETECTION_SAMPLE: usize = 50;

/// Timestamp layouts the parser recognizes.
///
/// The declaration order is the default precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Android, 12-hour clock with AM/PM marker
    /// Example: `01/02/23, 10:00 AM - Alice: hello`
    Dash12Hour,
    /// Android, 24-hour clock
    /// Example: `01/02/2023, 22:00 - Alice: hello`
    Dash24Hour,
    /// Dotted date, 24-hour clock
    /// Example: `26.10.2025, 20:40 - Alice: hello`
    DotDash24Hour,
    /// iOS, timestamp in brackets, either clock
    /// Example: `[15/01/2024, 10:30:45] Alice: hello`
    Bracketed,
}

static DASH_12_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{1,2}/\d{1,2}/\d{2,4}),?\s(\d{1,2}:\d{2}(?::\d{2})?\s?[AaPp][Mm])\s[-–]\s(.*)$",
    )
    .expect("12-hour pattern is valid")
});

static DASH_24_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}/\d{1,2}/\d{2,4}),?\s(\d{1,2}:\d{2}(?::\d{2})?)\s[-–]\s(.*)$")
        .expect("24-hour pattern is valid")
});

static DOT_DASH_24_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}\.\d{1,2}\.\d{2,4}),?\s(\d{1,2}:\d{2}(?::\d{2})?)\s[-–]\s(.*)$")
        .expect("dotted pattern is valid")
});

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(\d{1,2}[/.]\d{1,2}[/.]\d{2,4}),?\s(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp][Mm])?)\]\s?(.*)$",
    )
    .expect("bracketed pattern is valid")
});

impl TimestampFormat {
    /// Returns all formats in default precedence order.
    pub fn all() -> &'static [TimestampFormat] {
        &[
            TimestampFormat::Dash12Hour,
            TimestampFormat::Dash24Hour,
            TimestampFormat::DotDash24Hour,
            TimestampFormat::Bracketed,
        ]
    }

    /// Compiled line pattern. Captures: date, time, remainder.
    pub fn regex(self) -> &'static Regex {
        match self {
            TimestampFormat::Dash12Hour => &*DASH_12_HOUR,
            TimestampFormat::Dash24Hour => &*DASH_24_HOUR,
            TimestampFormat::DotDash24Hour => &*DOT_DASH_24_HOUR,
            TimestampFormat::Bracketed => &*BRACKETED,
        }
    }

    /// Returns `true` if `line` starts with this timestamp layout.
    pub fn matches(self, line: &str) -> bool {
        self.regex().is_match(line)
    }
}

/// Picks the format matching the most lines of the sample.
///
/// Ties go to the format that comes first in `formats`. Returns `None` if no
/// line matches any format. Parsing does not depend on this; it reports the
/// dominant layout of a transcript.
pub fn detect_format(lines: &[&str], formats: &[TimestampFormat]) -> Option<TimestampFormat> {
    let sample: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
        .take(DETECTION_SAMPLE)
        .collect();

    let mut best: Option<(TimestampFormat, usize)> = None;
    for &format in formats {
        let score = sample.iter().filter(|line| format.matches(line)).count();
        if score > 0 && best.is_none_or(|(_, top)| score > top) {
            best = Some((format, score));
        }
    }

    best.map(|(format, _)| format)
}

/// Converts captured date and time text to a timestamp.
///
/// Two-digit years follow chrono's `%y` century rule.
pub fn parse_timestamp(date_str: &str, time_str: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let date = date_str.replace('.', "/");
    let year_len = date.rsplit('/').next()?.len();

    let date_format = match (order, year_len) {
        (DateOrder::DayFirst, 2) => "%d/%m/%y",
        (DateOrder::DayFirst, _) => "%d/%m/%Y",
        (DateOrder::MonthFirst, 2) => "%m/%d/%y",
        (DateOrder::MonthFirst, _) => "%m/%d/%Y",
    };

    let (clock, twelve_hour) = normalize_clock(time_str);
    let time_formats: &[&str] = if twelve_hour {
        &["%I:%M:%S %p", "%I:%M %p"]
    } else {
        &["%H:%M:%S", "%H:%M"]
    };

    let datetime_str = format!("{date} {clock}");
    time_formats.iter().find_map(|time_format| {
        NaiveDateTime::parse_from_str(&datetime_str, &format!("{date_format} {time_format}")).ok()
    })
}

/// Normalizes `10:00am` / `10:00\u{202f}AM` to `10:00 AM`.
fn normalize_clock(time_str: &str) -> (String, bool) {
    let compact: String = time_str
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    match compact.strip_suffix("AM").or_else(|| compact.strip_suffix("PM")) {
        Some(clock) => {
            let marker = &compact[clock.len()..];
            (format!("{clock} {marker}"), true)
        }
        None => (compact, false),
    }
}

/// Splits `Author: text` at the first colon followed by whitespace or end of line.
///
/// Without such a colon the whole remainder is a system notification.
fn split_author(rest: &str) -> (Author, &str) {
    for (idx, _) in rest.match_indices(':') {
        let after = &rest[idx + 1..];
        if after.is_empty() || after.starts_with(char::is_whitespace) {
            let author = rest[..idx].trim();
            if author.is_empty() {
                break;
            }
            return (Author::from(author), after.trim_start());
        }
    }

    (Author::System, rest.trim())
}

/// Strips the byte-order mark and direction marks some exports prepend.
fn clean_line(line: &str) -> &str {
    line.trim_start_matches(['\u{feff}', '\u{200e}', '\u{200f}'])
}

/// Parser for exported chat transcripts.
///
/// # Example
///
/// ```rust
/// use chatlens::config::{DateOrder, ParserConfig};
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::with_config(
///     ParserConfig::new().with_date_order(DateOrder::MonthFirst),
/// );
/// let records = parser.parse("[1/15/24, 10:30:45 AM] Alice: Hello");
/// assert_eq!(records[0].timestamp.to_string(), "2024-01-15 10:30:45");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reports the dominant timestamp format of a transcript without parsing it.
    pub fn detect(&self, raw: &str) -> Option<TimestampFormat> {
        let lines: Vec<&str> = raw.lines().map(clean_line).collect();
        detect_format(&lines, &self.config.formats)
    }

    /// Parses transcript text into records, in source order.
    pub fn parse(&self, raw: &str) -> Vec<MessageRecord> {
        let mut records: Vec<MessageRecord> = Vec::new();
        let mut dropped = 0usize;

        for line in raw.lines().map(clean_line) {
            match self.parse_line(line) {
                Some(record) => {
                    if let Some(last) = records.last() {
                        if record.timestamp < last.timestamp {
                            warn!(
                                "timestamp goes backwards: {} after {}",
                                record.timestamp, last.timestamp
                            );
                        }
                    }
                    records.push(record);
                }
                None => {
                    if let Some(last) = records.last_mut() {
                        // Continuation of previous message (multiline)
                        if !last.body.is_empty() {
                            last.body.push('\n');
                        }
                        last.body.push_str(line);
                    } else if !line.trim().is_empty() {
                        trace!("dropping orphan line before first record: {line:?}");
                        dropped += 1;
                    }
                }
            }
        }

        if records.is_empty() && !raw.trim().is_empty() {
            warn!("no line matches a known timestamp format; transcript yields no records");
        }

        let placeholder = self.config.media_placeholder.trim();
        for record in &mut records {
            let kept = record.body.trim_end().len();
            record.body.truncate(kept);
            if !placeholder.is_empty() && record.body.trim() == placeholder {
                record.body = MEDIA_PLACEHOLDER.to_string();
            }
        }

        let before = records.len();
        records.retain(|record| !record.body.trim().is_empty());
        dropped += before - records.len();

        debug!("parsed {} records ({dropped} lines dropped)", records.len());
        records
    }

    /// Parses raw bytes, which must be valid UTF-8.
    pub fn parse_bytes(&self, bytes: Vec<u8>) -> Result<Vec<MessageRecord>, ChatlensError> {
        let text =
            String::from_utf8(bytes).map_err(|e| ChatlensError::utf8("transcript decoding", e))?;
        Ok(self.parse(&text))
    }

    /// Reads and parses a transcript file.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<MessageRecord>, ChatlensError> {
        let bytes = fs::read(path)?;
        self.parse_bytes(bytes)
    }

    /// Reads one line as the start of a record, if it is one.
    ///
    /// Formats are tried in configured order; the first whose pattern matches
    /// and whose timestamp is valid wins.
    fn parse_line(&self, line: &str) -> Option<MessageRecord> {
        self.config
            .formats
            .iter()
            .find_map(|&format| self.parse_line_as(line, format))
    }

    fn parse_line_as(&self, line: &str, format: TimestampFormat) -> Option<MessageRecord> {
        let caps = format.regex().captures(line)?;
        let date_str = caps.get(1).map_or("", |m| m.as_str());
        let time_str = caps.get(2).map_or("", |m| m.as_str());
        let rest = caps.get(3).map_or("", |m| m.as_str());

        let Some(timestamp) = parse_timestamp(date_str, time_str, self.config.date_order) else {
            trace!("unparseable {format:?} timestamp '{date_str}, {time_str}'");
            return None;
        };

        let (author, body) = split_author(rest);
        Some(MessageRecord {
            timestamp,
            author,
            body: body.to_string(),
        })
    }
}

/// Parses transcript text with the default configuration.
pub fn parse(raw: &str) -> Vec<MessageRecord> {
    TranscriptParser::new().parse(raw)
}

/// Reads and parses a transcript file with the default configuration.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<MessageRecord>, ChatlensError> {
    TranscriptParser::new().parse_file(path.as_ref())
}
