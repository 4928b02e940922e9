use crate::error::{ValidationError, ValidationErrorExt};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a metadata document and parses it as JSON.
///
/// The value is returned exactly as parsed; no keys are checked here.
///
/// # Errors
/// * [`ValidationError::Io`] if the file cannot be read.
/// * [`ValidationError::Json`] if its contents are not valid JSON.
pub fn load_metadata(path: impl AsRef<Path>) -> Result<Value, ValidationError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).context(format!("Reading {}", path.display()))?;
    let metadata =
        serde_json::from_str::<Value>(&raw).context(format!("Parsing {}", path.display()))?;

    debug!(path = %path.display(), "Loaded metadata document");
    Ok(metadata)
}
