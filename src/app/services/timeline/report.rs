//! Tab-separated report rendering
//!
//! One header line followed by one line per row, in the order produced by the
//! pipeline sort. The file is written in a single operation so a failed run
//! never leaves a partial report behind.

use std::path::Path;

use tracing::info;

use crate::app::models::OutputRow;
use crate::constants::{REPORT_COLUMNS, REPORT_DATE_FORMAT};
use crate::{Error, Result};

/// Render the full report (header plus rows) as a string
pub fn render_report(rows: &[OutputRow]) -> String {
    let mut out = String::new();
    out.push_str(&REPORT_COLUMNS.join("\t"));
    out.push('\n');

    for row in rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }

    out
}

/// Write the report to a file in one operation
pub fn write_report(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let content = render_report(rows);

    std::fs::write(path, content).map_err(|e| {
        Error::io(
            format!("Failed to write report to {}", path.display()),
            e,
        )
    })?;

    info!("Wrote {} report rows to {}", rows.len(), path.display());
    Ok(())
}

/// Render one row as a tab-separated line (without trailing newline)
fn render_row(row: &OutputRow) -> String {
    let pressure = row
        .pressure
        .map(|p| p.to_string())
        .unwrap_or_default();

    [
        row.storm_id.clone(),
        row.storm_name.clone(),
        row.date.format(REPORT_DATE_FORMAT).to_string(),
        row.record_identifier.clone(),
        row.phase.clone(),
        format!("{:.1}", row.latitude),
        format!("{:.1}", row.longitude),
        row.winds.to_string(),
        pressure,
        row.breakpoint_name.clone(),
        row.state.clone(),
        row.country.clone(),
        format!("{}", row.miles.round() as i64),
        format!("{}", row.kilometers.round() as i64),
        row.direction.to_string(),
    ]
    .join("\t")
}
