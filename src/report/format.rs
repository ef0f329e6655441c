use crate::config::ReportConfig;
use crate::number::format_amount;
use crate::report::report::{Report, ReportRow};

use std::io::{self, Write};

/// Writes a blank line, the `==title==` heading and one line per row.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &Report,
    config: &ReportConfig,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "=={}==", report.title)?;

    for row in &report.rows {
        writeln!(writer, "{}", format_row(row, config))?;
    }

    Ok(())
}

pub fn write_reports<W: Write>(
    writer: &mut W,
    reports: &[Report],
    config: &ReportConfig,
) -> io::Result<()> {
    for report in reports {
        write_report(writer, report, config)?;
    }
    writer.flush()
}

/// The label is padded to at least `label_width` characters, never cut.
pub fn format_row(row: &ReportRow, config: &ReportConfig) -> String {
    let value = format_amount(row.value, config.fraction_digits, &config.number);
    format!(
        "{:<label_width$}\t{:>value_width$}",
        row.label,
        value,
        label_width = config.label_width,
        value_width = config.value_width,
    )
}
