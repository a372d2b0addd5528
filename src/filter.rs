//! Select records by participant and date range.
//!
//! This module provides [`Selector`] and [`filter`] for narrowing a parsed
//! transcript to one participant, plus [`FilterConfig`] / [`apply_filters`]
//! for combining that with an inclusive date range.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Participant | [`with_selector`](FilterConfig::with_selector) | `Overall` or one author |
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//!
//! # Examples
//!
//! ```
//! use chatlens::filter::{Selector, filter, selector_options};
//! use chatlens::parser::parse;
//!
//! let records = parse(
//!     "01/02/23, 10:00 AM - Alice: hello\n\
//!      01/02/23, 10:01 AM - Bob added Carol\n\
//!      01/02/23, 10:05 AM - Bob: hi there",
//! );
//!
//! assert_eq!(selector_options(&records), vec!["Overall", "Alice", "Bob"]);
//!
//! let bob = filter(&records, &Selector::from("Bob"));
//! assert_eq!(bob.len(), 1);
//!
//! let all = filter(&records, &Selector::Overall);
//! assert_eq!(all.len(), 3);
//! ```
//!
//! # Behavior Notes
//!
//! - Author matching is exact (case-sensitive), as names appear in the export
//! - System notifications never match a participant selector
//! - An unknown participant yields an empty result, not an error
//! - Multiple filters are combined with AND logic

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;
use crate::message::MessageRecord;

/// Label used for the whole-conversation selector.
pub const OVERALL: &str = "Overall";

/// Which part of the conversation to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    /// Every record, including system notifications.
    #[default]
    Overall,
    /// Records written by one participant.
    Author(String),
}

impl Selector {
    /// Returns `true` for the whole-conversation selector.
    pub fn is_overall(&self) -> bool {
        matches!(self, Selector::Overall)
    }

    /// Returns `true` if `record` belongs to this selection.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            Selector::Overall => true,
            Selector::Author(name) => record.author_name() == Some(name.as_str()),
        }
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        if value == OVERALL {
            Selector::Overall
        } else {
            Selector::Author(value.to_string())
        }
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        if value == OVERALL {
            Selector::Overall
        } else {
            Selector::Author(value)
        }
    }
}

impl From<Selector> for String {
    fn from(value: Selector) -> Self {
        match value {
            Selector::Overall => OVERALL.to_string(),
            Selector::Author(name) => name,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Overall => f.write_str(OVERALL),
            Selector::Author(name) => f.write_str(name),
        }
    }
}

/// Returns the records matching `selector`, in original order.
///
/// `Overall` returns every record unchanged.
pub fn filter(records: &[MessageRecord], selector: &Selector) -> Vec<MessageRecord> {
    match selector {
        Selector::Overall => records.to_vec(),
        Selector::Author(_) => records
            .iter()
            .filter(|record| selector.matches(record))
            .cloned()
            .collect(),
    }
}

/// Distinct participant names, sorted. System notifications are excluded.
pub fn participants(records: &[MessageRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(MessageRecord::author_name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Values a caller can offer as selectors: `"Overall"` then every participant.
pub fn selector_options(records: &[MessageRecord]) -> Vec<String> {
    let mut options = vec![OVERALL.to_string()];
    options.extend(participants(records));
    options
}

/// Participant selector plus an optional inclusive date range.
///
/// # Examples
///
/// ```
/// use chatlens::filter::{FilterConfig, Selector};
///
/// # fn main() -> chatlens::Result<()> {
/// let config = FilterConfig::new()
///     .with_selector(Selector::from("Alice"))
///     .with_date_from("2024-06-01")?
///     .with_date_to("2024-12-31")?;
/// assert!(config.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Participant selection.
    pub selector: Selector,

    /// Include only records on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this timestamp.
    pub before: Option<NaiveDateTime>,
}

impl FilterConfig {
    /// Creates a configuration that keeps every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the participant selector.
    #[must_use]
    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = selector;
        self
    }

    /// Sets the start date filter (inclusive), format `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_date(date_str)?;
        self.after = Some(date.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive), format `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_date(date_str)?;
        // End of the day to include the full day
        let end = date
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| ChatlensError::invalid_date(date_str))?;
        self.before = Some(end);
        Ok(self)
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        !self.selector.is_overall() || self.has_date_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    fn in_range(&self, record: &MessageRecord) -> bool {
        !(self.after.is_some_and(|after| record.timestamp < after)
            || self.before.is_some_and(|before| record.timestamp > before))
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Filters records by every active criterion of `config`.
///
/// If no filter is active, returns the records unchanged.
pub fn apply_filters(records: Vec<MessageRecord>, config: &FilterConfig) -> Vec<MessageRecord> {
    if !config.is_active() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| config.selector.matches(record) && config.in_range(record))
        .collect()
}
