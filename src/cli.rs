//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! # Example
//!
//! ```rust
//! use chatlens::cli::OutputFormat;
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format.extension(), "json");
//! println!("Format: {}", format); // "JSON"
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::DateOrder;

/// Analyze an exported WhatsApp chat: activity, words, emoji, sentiment
/// and response times, overall or for one participant.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice --keyword pizza
    chatlens chat.txt --format json -o report.json
    chatlens chat.txt --format csv --after 2024-01-01 -o messages.csv
    chatlens chat.txt --list-users")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: PathBuf,

    /// Analyze a single participant instead of the whole chat
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Count whole-word occurrences of this keyword
    #[arg(short, long, value_name = "WORD")]
    pub keyword: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only include messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only include messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Read numeric dates as month/day instead of day/month
    #[arg(long)]
    pub month_first: bool,

    /// Replace the stop-word list (one word per line)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Replace the positive keyword list (one word per line)
    #[arg(long, value_name = "FILE")]
    pub positive: Option<PathBuf>,

    /// Replace the negative keyword list (one word per line)
    #[arg(long, value_name = "FILE")]
    pub negative: Option<PathBuf>,

    /// Analysis settings as JSON (top_words, top_users, heatmap_bucket_hours, ...)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Length of the most-common-words ranking (overrides --config)
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Print the participants and exit
    #[arg(long)]
    pub list_users: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Date order implied by `--month-first`.
    pub fn date_order(&self) -> DateOrder {
        if self.month_first {
            DateOrder::MonthFirst
        } else {
            DateOrder::DayFirst
        }
    }

    /// Returns `true` if any lexicon list was overridden.
    pub fn has_custom_lexicon(&self) -> bool {
        self.stop_words.is_some() || self.positive.is_some() || self.negative.is_some()
    }
}

/// Output format options.
///
/// - [`Text`](OutputFormat::Text) - human-readable report (default)
/// - [`Json`](OutputFormat::Json) - the full analysis report as JSON
/// - [`Csv`](OutputFormat::Csv) - the selected records, `;`-delimited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,

    /// Analysis report as JSON
    Json,

    /// Parsed records as CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json", "csv"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "Text");
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("TXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("jsonl".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Csv).unwrap();
        assert_eq!(json, "\"csv\"");
        let parsed: OutputFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, OutputFormat::Text);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "chatlens",
            "chat.txt",
            "--user",
            "Alice",
            "--format",
            "json",
            "--month-first",
            "--top",
            "5",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.user.as_deref(), Some("Alice"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.date_order(), DateOrder::MonthFirst);
        assert_eq!(args.top, Some(5));
        assert!(!args.has_custom_lexicon());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["chatlens", "chat.txt"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.date_order(), DateOrder::DayFirst);
        assert!(args.output.is_none());
        assert!(!args.list_users);
    }
}
