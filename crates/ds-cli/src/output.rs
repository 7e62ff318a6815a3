//! Report and category rendering for the terminal.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ds_model::DataStandard;
use ds_report::Report;
use ds_report::csv::write_csv;

/// Report serializations offered by the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Csv,
    Table,
    Json,
}

/// Write `report` to `writer` in the requested format.
pub fn write_report<W: Write>(report: &Report, format: ReportFormat, mut writer: W) -> Result<()> {
    match format {
        ReportFormat::Csv => write_csv(report, &mut writer).context("write CSV report")?,
        ReportFormat::Table => {
            writeln!(writer, "{}", report_table(report)).context("write report table")?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &report.records())
                .context("write JSON report")?;
            writeln!(writer).context("write JSON report")?;
        }
    }
    writer.flush().context("flush report output")?;
    Ok(())
}

/// One table row per report row; multi-line types stay multi-line.
pub fn report_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.set_header(report.header().into_iter().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::UpperBoundary(Width::Percentage(15)),
    ]);
    for row in &report.rows {
        let [category, attribute, description, type_signature, groups] = row.cells();
        table.add_row(vec![
            Cell::new(category),
            attribute_cell(attribute, row.mandatory),
            text_or_dash(description),
            Cell::new(type_signature),
            text_or_dash(&groups.replace('\n', ", ")),
        ]);
    }
    table
}

/// Categories in declared order with their parent and link count.
pub fn categories_table(standard: &DataStandard) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Parent"),
        header_cell("Links"),
    ]);
    apply_table_style(&mut table);
    for category in &standard.categories {
        table.add_row(vec![
            Cell::new(&category.id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&category.name),
            match &category.parent_id {
                Some(parent) => Cell::new(parent),
                None => dim_cell("-"),
            },
            Cell::new(category.attribute_links.len()),
        ]);
    }
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn attribute_cell(name: &str, mandatory: bool) -> Cell {
    if mandatory {
        Cell::new(name).add_attribute(Attribute::Bold)
    } else {
        Cell::new(name)
    }
}

fn text_or_dash(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
