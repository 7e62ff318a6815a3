//! Default document path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the default data standard document.
pub const STANDARD_ENV_VAR: &str = "DATASTANDARD_PATH";

/// Get the default data standard document path.
///
/// Resolution order:
/// 1. `DATASTANDARD_PATH` environment variable
/// 2. `standards/acme-datastandard.json` relative to the workspace root
pub fn default_document_path() -> PathBuf {
    if let Ok(path) = std::env::var(STANDARD_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards/acme-datastandard.json")
}
