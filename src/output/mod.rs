//! Output writers for handing results to a presentation layer.
//!
//! - [`write_json`] / [`to_json`] - the full [`AnalysisReport`] as pretty JSON -
//!   requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - parsed records as CSV with `;` delimiter -
//!   requires `csv-output` feature
//!
//! [`AnalysisReport`]: crate::analysis::AnalysisReport
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::analysis::AnalysisReport;
//! use chatlens::config::AnalysisConfig;
//! use chatlens::filter::Selector;
//! use chatlens::lexicon::Lexicon;
//! use chatlens::output::{to_csv, write_json};
//! use chatlens::parser::parse_file;
//!
//! let records = parse_file("chat.txt")?;
//! let report = AnalysisReport::build(
//!     &records,
//!     &Selector::Overall,
//!     None,
//!     Lexicon::shared(),
//!     &AnalysisConfig::default(),
//! );
//!
//! write_json(&report, "report.json")?;
//! let csv = to_csv(&records)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};

/// Timestamp layout used by every writer.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
