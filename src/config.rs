//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how transcript timestamps and placeholders are read
//! - [`AnalysisConfig`] - ranking sizes and heatmap resolution
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, DateOrder, ParserConfig};
//!
//! let parser_config = ParserConfig::new().with_date_order(DateOrder::MonthFirst);
//!
//! let analysis_config = AnalysisConfig::new()
//!     .with_top_words(10)
//!     .with_heatmap_bucket_hours(2)?;
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;
use crate::message::MEDIA_PLACEHOLDER;
use crate::parser::TimestampFormat;

/// Order of the day and month fields in numeric dates.
///
/// Exports do not say which one they use, so `01/02/23` is ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `DD/MM/YY` (default)
    #[default]
    DayFirst,
    /// `MM/DD/YY`
    MonthFirst,
}

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
/// use chatlens::parser::TranscriptParser;
///
/// let config = ParserConfig::new().with_media_placeholder("<Medien ausgeschlossen>");
/// assert_eq!(config.media_placeholder, "<Medien ausgeschlossen>");
///
/// let records = TranscriptParser::with_config(config)
///     .parse("01/02/2023, 10:00 - Alice: <Medien ausgeschlossen>");
/// assert_eq!(records[0].body, "<Media omitted>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Field order for numeric dates (default: day first)
    pub date_order: DateOrder,

    /// Text the export uses for omitted media (default: `<Media omitted>`).
    /// Matching bodies are rewritten to `<Media omitted>`.
    pub media_placeholder: String,

    /// Accepted timestamp formats, tried in order for every line
    pub formats: Vec<TimestampFormat>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::DayFirst,
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
            formats: TimestampFormat::all().to_vec(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day/month order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets the localized media placeholder the export uses.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Restricts and reorders the accepted timestamp formats.
    #[must_use]
    pub fn with_formats(mut self, formats: Vec<TimestampFormat>) -> Self {
        self.formats = formats;
        self
    }
}

/// Configuration for the analytics.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.top_words, 20);
/// assert_eq!(config.heatmap_bucket_hours, 1);
///
/// assert!(AnalysisConfig::new().with_heatmap_bucket_hours(5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Length of the most-common-words ranking (default: 20)
    pub top_words: usize,

    /// Length of the busiest-users ranking (default: 5)
    pub top_users: usize,

    /// Maximum number of words in the word cloud (default: 200)
    pub wordcloud_max_words: usize,

    /// Width of one heatmap column in hours, a divisor of 24 (default: 1)
    pub heatmap_bucket_hours: u32,

    /// Media placeholder the aggregators look for (default: `<Media omitted>`)
    pub media_placeholder: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 20,
            top_users: 5,
            wordcloud_max_words: 200,
            heatmap_bucket_hours: 1,
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length of the most-common-words ranking.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the length of the busiest-users ranking.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the word cloud size limit.
    #[must_use]
    pub fn with_wordcloud_max_words(mut self, n: usize) -> Self {
        self.wordcloud_max_words = n;
        self
    }

    /// Sets the heatmap column width.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidConfig`] unless `hours` divides 24.
    pub fn with_heatmap_bucket_hours(mut self, hours: u32) -> Result<Self, ChatlensError> {
        validate_bucket_hours(hours)?;
        self.heatmap_bucket_hours = hours;
        Ok(self)
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Checks values that serde cannot constrain.
    pub fn validate(&self) -> Result<(), ChatlensError> {
        validate_bucket_hours(self.heatmap_bucket_hours)
    }

    /// Parses a JSON configuration. Missing fields take their defaults.
    ///
    /// ```rust
    /// use chatlens::config::AnalysisConfig;
    ///
    /// let config = AnalysisConfig::from_json_str(r#"{"top_words": 5}"#)?;
    /// assert_eq!(config.top_words, 5);
    /// assert_eq!(config.top_users, 5);
    /// # Ok::<(), chatlens::ChatlensError>(())
    /// ```
    #[cfg(feature = "json-output")]
    pub fn from_json_str(json: &str) -> Result<Self, ChatlensError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, ChatlensError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

fn validate_bucket_hours(hours: u32) -> Result<(), ChatlensError> {
    if hours == 0 || 24 % hours != 0 {
        return Err(ChatlensError::invalid_config(
            "heatmap_bucket_hours",
            format!("{hours} does not divide 24"),
        ));
    }
    Ok(())
}
