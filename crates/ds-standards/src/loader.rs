//! JSON loaders for data standard documents.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use ds_model::DataStandard;

use crate::error::{Result, StandardsError};
use crate::paths::default_document_path;

const INPUT_ORIGIN: &str = "<input>";

/// Load the default data standard document.
///
/// See [`default_document_path`] for how the path is chosen.
pub fn load_default() -> Result<DataStandard> {
    load_from_path(&default_document_path())
}

/// Load a data standard from a JSON file.
///
/// # Errors
///
/// Returns [`StandardsError::FileNotFound`] for a missing file, and
/// [`StandardsError::Io`] or [`StandardsError::Json`] when the file cannot be
/// read or parsed.
pub fn load_from_path(path: &Path) -> Result<DataStandard> {
    if !path.is_file() {
        return Err(StandardsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "loading data standard");
    let file = File::open(path).map_err(|source| StandardsError::io(path, source))?;
    let standard = parse(BufReader::new(file), &path.display().to_string())?;
    info!(
        path = %path.display(),
        categories = standard.categories.len(),
        attributes = standard.attributes.len(),
        "data standard loaded"
    );
    Ok(standard)
}

/// Load a data standard from any JSON byte stream.
pub fn load_from_reader<R: Read>(reader: R) -> Result<DataStandard> {
    parse(reader, INPUT_ORIGIN)
}

/// Load a data standard from a JSON string.
pub fn load_from_str(content: &str) -> Result<DataStandard> {
    parse(content.as_bytes(), INPUT_ORIGIN)
}

/// The top level must be a JSON object; arrays and scalars are rejected.
fn parse<R: Read>(reader: R, origin: &str) -> Result<DataStandard> {
    serde_json::from_reader::<_, Map<String, Value>>(reader)
        .and_then(|document| serde_json::from_value(Value::Object(document)))
        .map_err(|source| StandardsError::Json {
            origin: origin.to_string(),
            source,
        })
}
