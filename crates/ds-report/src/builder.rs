//! Report entry point.

use std::time::Instant;

use tracing::{info, info_span};

use ds_model::{DataStandard, REPORT_HEADER, ReportRow};

use crate::error::Result;
use crate::index::StandardIndex;
use crate::walker::walk;

/// Options for report generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Deepest allowed type nesting level. `None` leaves nesting unbounded;
    /// cyclic types are rejected either way.
    pub max_depth: Option<usize>,
}

impl ReportOptions {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// A finished report: the rows below one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub category_id: String,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn header(&self) -> [&'static str; 5] {
        REPORT_HEADER
    }

    /// Number of data rows, header excluded.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header followed by every row, as plain text cells.
    pub fn records(&self) -> Vec<Vec<String>> {
        with_header(
            self.rows.len(),
            self.rows
                .iter()
                .map(|row| row.cells().iter().map(|cell| (*cell).to_string()).collect()),
        )
    }

    pub fn into_records(self) -> Vec<Vec<String>> {
        with_header(
            self.rows.len(),
            self.rows.into_iter().map(ReportRow::into_cells),
        )
    }
}

fn with_header(
    row_count: usize,
    rows: impl Iterator<Item = Vec<String>>,
) -> Vec<Vec<String>> {
    let mut records = Vec::with_capacity(row_count + 1);
    records.push(REPORT_HEADER.iter().map(|cell| (*cell).to_string()).collect());
    records.extend(rows);
    records
}

/// Builds reports over one data standard.
///
/// The id index is built once in [`ReportBuilder::new`] and shared by every
/// report produced afterwards.
#[derive(Debug, Clone)]
pub struct ReportBuilder<'a> {
    index: StandardIndex<'a>,
    options: ReportOptions,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(standard: &'a DataStandard) -> Self {
        Self {
            index: StandardIndex::new(standard),
            options: ReportOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn index(&self) -> &StandardIndex<'a> {
        &self.index
    }

    /// Rows below `category_id` without the header.
    pub fn build_rows(&self, category_id: &str) -> Result<Vec<ReportRow>> {
        walk(&self.index, category_id, self.options.max_depth)
    }

    /// Report for `category_id`. An unknown category gives a report with no
    /// rows, which still renders its header.
    pub fn report(&self, category_id: &str) -> Result<Report> {
        let span = info_span!("report", category_id);
        let _guard = span.enter();
        let start = Instant::now();

        let rows = self.build_rows(category_id)?;
        info!(
            rows = rows.len(),
            duration_ms = start.elapsed().as_millis(),
            "report complete"
        );
        Ok(Report {
            category_id: category_id.to_string(),
            rows,
        })
    }
}

/// Header and rows for `category_id` as plain text cells.
///
/// # Errors
///
/// See [`ReportError`](crate::ReportError).
pub fn report(standard: &DataStandard, category_id: &str) -> Result<Vec<Vec<String>>> {
    ReportBuilder::new(standard)
        .report(category_id)
        .map(Report::into_records)
}
