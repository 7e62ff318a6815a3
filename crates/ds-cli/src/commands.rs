use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use ds_cli::output::{ReportFormat, categories_table, write_report};
use ds_model::DataStandard;
use ds_report::{ReportBuilder, ReportOptions};
use ds_standards::{default_document_path, load_from_path};

use crate::cli::{CategoriesArgs, OutputFormatArg, ReportArgs};

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let standard = load_standard(args.standard.as_deref())?;
    let options = ReportOptions::default().with_max_depth(args.max_depth);
    let builder = ReportBuilder::new(&standard).with_options(options);
    if builder.index().category(&args.category_id).is_none() {
        warn!(
            category_id = %args.category_id,
            "category not found, report has no rows"
        );
    }
    let report = builder
        .report(&args.category_id)
        .with_context(|| format!("build report for category '{}'", args.category_id))?;

    let format = match args.format {
        OutputFormatArg::Csv => ReportFormat::Csv,
        OutputFormatArg::Table => ReportFormat::Table,
        OutputFormatArg::Json => ReportFormat::Json,
    };
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            write_report(&report, format, BufWriter::new(file))?;
            info!(path = %path.display(), rows = report.len(), "report written");
        }
        None => write_report(&report, format, io::stdout().lock())?,
    }
    Ok(())
}

pub fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let standard = load_standard(args.standard.as_deref())?;
    let table = categories_table(&standard);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", standard.display_name()).context("write categories")?;
    writeln!(stdout, "{table}").context("write categories")?;
    Ok(())
}

fn load_standard(path: Option<&Path>) -> Result<DataStandard> {
    let path = path.map_or_else(default_document_path, Path::to_path_buf);
    load_from_path(&path).with_context(|| format!("load data standard {}", path.display()))
}
