//! Input checks run before a request is built.
//!
//! Both validators are pure: they inspect their input and either return it (or
//! `()`) or a [`ValidationError`] describing the first problem found.

use crate::error::{ValidationError, ValidationErrorExt};
use crate::metadata::load_metadata;
use eshare_domain::constants::REQUIRED_METADATA_FIELDS;
use serde_json::Value;
use std::path::Path;

/// Why an identifier failed the `prefix/suffix` check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum PidDefect {
    #[strum(to_string = "no slash")]
    NoSeparator,
    #[strum(to_string = "empty prefix")]
    EmptyPrefix,
    #[strum(to_string = "empty suffix")]
    EmptySuffix,
}

/// Checks that a handle has the form `prefix/suffix`.
///
/// Only the first `/` is the split point, so `a/b/c` is accepted with suffix `b/c`.
///
/// # Errors
/// * [`ValidationError::MissingValue`] when `pid` is `None`.
/// * [`ValidationError::MalformedPid`] when there is no `/`, or the prefix or suffix is empty.
pub fn check_pid_syntax(pid: Option<&str>) -> Result<(), ValidationError> {
    let pid = pid.ok_or(ValidationError::MissingValue { context: None })?;

    let malformed = |defect| ValidationError::MalformedPid {
        pid: pid.to_owned(),
        defect,
        context: None,
    };

    let Some((prefix, suffix)) = pid.split_once('/') else {
        return Err(malformed(PidDefect::NoSeparator));
    };
    if prefix.is_empty() {
        return Err(malformed(PidDefect::EmptyPrefix));
    }
    if suffix.is_empty() {
        return Err(malformed(PidDefect::EmptySuffix));
    }

    Ok(())
}

/// Confirms that every key in [`REQUIRED_METADATA_FIELDS`] is present.
///
/// Values are not type-checked; the mapping is handed back unchanged.
///
/// # Errors
/// * [`ValidationError::WrongType`] if `metadata` is not a JSON object.
/// * [`ValidationError::MissingField`] naming the first absent key.
pub fn validate_metadata(metadata: Value) -> Result<Value, ValidationError> {
    let Some(object) = metadata.as_object() else {
        return Err(ValidationError::WrongType {
            field: "<document>".into(),
            expected: "a JSON object".into(),
            context: None,
        });
    };

    if let Some(missing) = REQUIRED_METADATA_FIELDS.iter().find(|key| !object.contains_key(**key)) {
        return Err(ValidationError::MissingField { field: (*missing).into(), context: None });
    }

    Ok(metadata)
}

/// Loads a JSON file and runs [`validate_metadata`] on it.
///
/// # Errors
/// Everything [`load_metadata`] and [`validate_metadata`] can return.
pub fn validate_metadata_file(path: impl AsRef<Path>) -> Result<Value, ValidationError> {
    let path = path.as_ref();
    validate_metadata(load_metadata(path)?).context(format!("Validating {}", path.display()))
}

/// Runs [`check_pid_syntax`] on every `related_identifiers[*].related_identifier`.
///
/// An entry without a string `related_identifier` counts as a missing value.
///
/// # Errors
/// * [`ValidationError::MissingField`] if `related_identifiers` is absent.
/// * [`ValidationError::WrongType`] if it is not an array.
/// * The first PID error found, with the entry index as context.
pub fn check_related_identifiers(metadata: &Value) -> Result<(), ValidationError> {
    let related = metadata.get("related_identifiers").ok_or(ValidationError::MissingField {
        field: "related_identifiers".into(),
        context: None,
    })?;

    let entries = related.as_array().ok_or(ValidationError::WrongType {
        field: "related_identifiers".into(),
        expected: "an array".into(),
        context: None,
    })?;

    for (index, entry) in entries.iter().enumerate() {
        let pid = entry.get("related_identifier").and_then(Value::as_str);
        check_pid_syntax(pid).context(format!("related_identifiers[{index}]"))?;
    }

    Ok(())
}

/// Rejects empty path arguments, which would otherwise address a different endpoint.
///
/// # Errors
/// Returns [`ValidationError::EmptyArgument`] if `value` is empty or whitespace.
pub fn require_argument<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyArgument { name: name.into(), context: None });
    }
    Ok(trimmed)
}
