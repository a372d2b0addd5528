//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::TIMESTAMP_FORMAT;
use crate::error::Result;
use crate::message::MessageRecord;

const HEADER: [&str; 3] = ["Timestamp", "Author", "Body"];

/// Writes records to a CSV file.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Author`, `Body`
/// - Timestamps as `YYYY-MM-DD HH:MM:SS`; system notifications as `SYSTEM`
/// - Multi-line bodies are quoted
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file)
}

/// Converts records to a CSV string, same format as [`write_csv`].
///
/// ```rust
/// use chatlens::output::to_csv;
/// use chatlens::parser::parse;
///
/// let records = parse("01/02/23, 10:00 AM - Alice: hello");
/// let csv = to_csv(&records)?;
/// assert_eq!(csv, "Timestamp;Author;Body\n2023-02-01 10:00:00;Alice;hello\n");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn to_csv(records: &[MessageRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(records: &[MessageRecord], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for record in records {
        let timestamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
        let author = record.author.to_string();
        writer.write_record([timestamp.as_str(), author.as_str(), record.body.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
