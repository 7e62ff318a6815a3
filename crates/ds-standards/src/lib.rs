//! Data standard document loading.
//!
//! Data standards are JSON documents holding `categories`, `attributes` and
//! optionally `attributeGroups`. The default document lives at
//! `standards/acme-datastandard.json` in the workspace and can be replaced
//! through the `DATASTANDARD_PATH` environment variable.
//!
//! # Example
//!
//! ```rust,ignore
//! let standard = ds_standards::load_from_path(Path::new("acme.json"))?;
//! println!("{} categories", standard.categories.len());
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod paths;

pub use error::{Result, StandardsError};
pub use loader::{load_default, load_from_path, load_from_reader, load_from_str};
pub use paths::{STANDARD_ENV_VAR, default_document_path};
