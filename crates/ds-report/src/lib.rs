//! Data standard report generation.
//!
//! Flattens the category subtree below a requested category into one row per
//! (category, attribute link), in pre-order:
//!
//! - [`index`]: id lookups built once per data standard
//! - [`render`]: textual type signatures for (possibly composite) attributes
//! - [`walker`]: the category traversal producing [`ReportRow`]s
//! - [`builder`]: the [`ReportBuilder`] entry point that adds the header
//! - [`csv`]: CSV row sink
//!
//! # Example
//!
//! ```rust,ignore
//! let standard = ds_standards::load_default()?;
//! let report = ds_report::ReportBuilder::new(&standard).report("root")?;
//! let csv = ds_report::csv::to_csv_string(&report)?;
//! ```

pub mod builder;
pub mod csv;
pub mod error;
pub mod index;
pub mod render;
pub mod walker;

pub use builder::{Report, ReportBuilder, ReportOptions, report};
pub use ds_model::{REPORT_HEADER, ReportRow};
pub use error::{LinkOwner, ReportError, Result};
pub use index::{StandardIndex, resolve};
pub use render::{format_groups, indent, mandatory_marker, render_type};
pub use walker::build_rows;
