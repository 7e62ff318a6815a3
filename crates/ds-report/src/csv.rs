//! CSV row sink.
//!
//! Cells containing a comma, quote, or line break are quoted, with embedded
//! quotes doubled. Records end with `\n`, so multi-line type signatures stay
//! intact inside their quoted cell.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use ds_model::REPORT_HEADER;

use crate::builder::Report;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to write CSV record: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Write the header and all rows of `report` to `writer`.
pub fn write_csv<W: Write>(report: &Report, writer: W) -> Result<(), CsvError> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer.write_record(REPORT_HEADER)?;
    for row in &report.rows {
        csv_writer.write_record(row.cells())?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv_string(report: &Report) -> Result<String, CsvError> {
    let mut buffer = Vec::new();
    write_csv(report, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
