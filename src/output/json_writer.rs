//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::analysis::AnalysisReport;
use crate::error::Result;

/// Writes a report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "selector": "Overall",
///   "participants": ["Alice", "Bob"],
///   "stats": {"messages": 3, "words": 6, "media": 0, "links": 0},
///   ...
/// }
/// ```
///
/// `keyword`, `busy_users` and `response_times` are omitted when absent.
pub fn write_json(report: &AnalysisReport, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
///
/// Same format as [`write_json`], but returns a String instead of writing to
/// a file.
pub fn to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
