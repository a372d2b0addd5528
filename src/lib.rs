//! # Chatlens
//!
//! A Rust library for turning exported WhatsApp chat transcripts into typed
//! message records and computing descriptive statistics over them.
//!
//! ## Overview
//!
//! The pipeline has three stages:
//!
//! 1. **Parse**: [`parser`] matches each line against the known timestamp layouts and turns
//!    the raw text into an ordered sequence of [`MessageRecord`]s, merging
//!    multi-line messages and marking group notifications as system rows.
//! 2. **Filter**: [`filter`] narrows the sequence to `Overall` or one
//!    participant, optionally within a date range.
//! 3. **Analyze**: [`analysis`] holds pure aggregators (totals, timelines,
//!    activity maps, heatmap, word and emoji frequencies, sentiment tally,
//!    response times, keyword counts) and [`AnalysisReport`] bundling them.
//!
//! Parsing and analysis never fail on malformed text; unrecognized input
//! simply produces empty results.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let raw = "01/02/23, 10:00 AM - Alice: hello\n\
//!            01/02/23, 10:05 AM - Bob: hi there\n\
//!            01/02/23, 10:06 AM - Bob: how are you";
//!
//! let records = parse(raw);
//! assert_eq!(records.len(), 3);
//!
//! let stats = fetch_stats(&records, MEDIA_PLACEHOLDER);
//! assert_eq!(stats.words, 6);
//!
//! let report = AnalysisReport::build(
//!     &records,
//!     &Selector::Overall,
//!     Some("hi"),
//!     Lexicon::shared(),
//!     &AnalysisConfig::default(),
//! );
//! assert_eq!(report.keyword.map(|k| k.count), Some(1));
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - transcript parser and timestamp formats
//! - [`message`] - [`MessageRecord`] and [`Author`]
//! - [`filter`] - [`Selector`](filter::Selector), [`FilterConfig`](filter::FilterConfig)
//! - [`analysis`] - aggregators and [`AnalysisReport`]
//! - [`lexicon`] - stop words, emoji set, sentiment keywords
//! - [`config`] - parser and analysis settings
//! - [`output`] - JSON report and CSV record writers
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - convenient re-exports
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade: parse totals
//! at `debug`, dropped lines at `trace`, suspicious input at `warn`. Install
//! any logger (the `chatlens` binary uses `env_logger`) to see it.

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod lexicon;
pub mod message;
pub mod output;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use analysis::AnalysisReport;
pub use error::{ChatlensError, Result};
pub use message::{Author, MessageRecord};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::message::{Author, MEDIA_PLACEHOLDER, MessageRecord, SYSTEM_AUTHOR};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{TimestampFormat, TranscriptParser, parse, parse_file};

    // Configuration
    pub use crate::config::{AnalysisConfig, DateOrder, ParserConfig};
    pub use crate::lexicon::Lexicon;

    // Filtering
    pub use crate::filter::{
        FilterConfig, Selector, apply_filters, filter, participants, selector_options,
    };

    // Analytics
    pub use crate::analysis::{
        AnalysisReport, active_hours, activity_heatmap, busiest_day, busiest_month,
        create_wordcloud, daily_timeline, emoji_helper, fetch_stats, keyword_analysis,
        message_type_analysis, month_activity_map, monthly_timeline, most_busy_users,
        most_common_words, response_time_analysis, sentiment_analysis, week_activity_map,
    };

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
}
