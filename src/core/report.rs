// logtriage - core/report.rs
//
// Plain-text and JSON rendering of extraction reports.
// Core layer: writes to any Write trait object; callers choose the
// destination (stdout, file, in-memory buffer).

use crate::core::model::{ExtractReport, FrequencyTable};
use crate::util::error::ReportError;
use std::io::Write;

/// Category display labels, paired with their table accessor order.
const CATEGORY_LABELS: [&str; 3] = ["Address", "Verb", "Status Code"];

/// Render a report as plain text:
///
/// ```text
/// Address Counts:
/// 192.168.1.1: 2
///
/// Verb Counts:
/// GET: 2
/// ...
/// ```
///
/// Empty tables render as a header with no entries — never an error.
pub fn render_text<W: Write>(report: &ExtractReport, mut writer: W) -> Result<(), ReportError> {
    let tables = [&report.addresses, &report.verbs, &report.statuses];

    for (i, (label, table)) in CATEGORY_LABELS.iter().zip(tables).enumerate() {
        if i > 0 {
            writeln!(writer).map_err(|e| ReportError::Io { source: e })?;
        }
        write_table(label, table, &mut writer)?;
    }

    writer.flush().map_err(|e| ReportError::Io { source: e })?;
    Ok(())
}

fn write_table<W: Write>(
    label: &str,
    table: &FrequencyTable,
    writer: &mut W,
) -> Result<(), ReportError> {
    writeln!(writer, "{label} Counts:").map_err(|e| ReportError::Io { source: e })?;
    for (value, count) in table.iter() {
        writeln!(writer, "{value}: {count}").map_err(|e| ReportError::Io { source: e })?;
    }
    Ok(())
}

/// Render a report as pretty-printed JSON, one object per category with
/// values keyed in first-seen order.
pub fn render_json<W: Write>(report: &ExtractReport, writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, report).map_err(|e| ReportError::Json { source: e })
}
