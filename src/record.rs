//! # Input Schema and Parsing
//!
//! This module defines the data structure that represents a single project
//! record in the input file, as well as the logic for loading and validating
//! a batch of records.
//!
//! ## Key Components
//!
//! - **`ProjectRecord`**: One input unit — a named project, its priority, and
//!   the manager/watcher identities associated with it.
//!
//! ## Parsing
//!
//! The `parse` function is the main entry point for turning a JSON string
//! into a `Vec<ProjectRecord>`. It validates shape explicitly rather than
//! relying on serde's derived deserializer, so that failures map onto the
//! crate's error taxonomy: a non-array top level is `Error::InvalidInput`,
//! and a record with a missing field, a wrong-typed field, or a non-finite
//! priority is `Error::MalformedRecord` carrying the record's position.
//!
//! `from_file` is a convenience wrapper that reads a path and parses it.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A single project record from the input batch.
///
/// `name` is assumed unique within a batch for meaningful output, but
/// uniqueness is not enforced: colliding names are treated as independent
/// contributions.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRecord {
    /// Project name, unique within a batch by convention.
    pub name: String,
    /// Numeric rank; a lower value means a higher priority. Always finite.
    pub priority: f64,
    /// Manager identities associated with this project.
    pub managers: Vec<String>,
    /// Watcher identities associated with this project.
    pub watchers: Vec<String>,
}

/// Parse a JSON string into a batch of project records.
///
/// The top level must be an array; every element must be an object with the
/// four required fields (`name`, `priority`, `managers`, `watchers`).
///
/// # Errors
///
/// Returns `Error::InvalidInput` if the document is not valid JSON or its
/// top level is not an array, and `Error::MalformedRecord` for the first
/// record that fails field validation. A single bad record invalidates the
/// entire batch.
pub fn parse(input: &str) -> Result<Vec<ProjectRecord>> {
    let value: Value = serde_json::from_str(input).map_err(|e| Error::InvalidInput {
        message: format!("not valid JSON: {}", e),
    })?;

    let items = value.as_array().ok_or_else(|| Error::InvalidInput {
        message: format!("expected a JSON array of records, got {}", type_name(&value)),
    })?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        records.push(record_from_value(item, index)?);
    }

    log::debug!("parsed {} project records", records.len());
    Ok(records)
}

/// Load and parse a batch of project records from a file.
pub fn from_file(path: &Path) -> Result<Vec<ProjectRecord>> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Validate one array element into a `ProjectRecord`.
fn record_from_value(value: &Value, index: usize) -> Result<ProjectRecord> {
    let obj = value.as_object().ok_or_else(|| Error::MalformedRecord {
        index,
        message: format!("expected an object, got {}", type_name(value)),
    })?;

    let name = obj
        .get("name")
        .ok_or_else(|| missing_field(index, "name"))?
        .as_str()
        .ok_or_else(|| wrong_type(index, "name", "a string"))?
        .to_string();

    let priority = obj
        .get("priority")
        .ok_or_else(|| missing_field(index, "priority"))?
        .as_f64()
        .ok_or_else(|| wrong_type(index, "priority", "a number"))?;

    // JSON cannot express NaN or infinities, but the ordering contract
    // requires a well-ordered priority, so check regardless of source.
    if !priority.is_finite() {
        return Err(Error::MalformedRecord {
            index,
            message: format!("priority {} is not a comparable number", priority),
        });
    }

    let managers = string_list(obj, "managers", index)?;
    let watchers = string_list(obj, "watchers", index)?;

    Ok(ProjectRecord {
        name,
        priority,
        managers,
        watchers,
    })
}

/// Extract a required array-of-strings field from a record object.
fn string_list(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
    index: usize,
) -> Result<Vec<String>> {
    let items = obj
        .get(field)
        .ok_or_else(|| missing_field(index, field))?
        .as_array()
        .ok_or_else(|| wrong_type(index, field, "an array of strings"))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| wrong_type(index, field, "an array of strings"))
        })
        .collect()
}

fn missing_field(index: usize, field: &'static str) -> Error {
    Error::MalformedRecord {
        index,
        message: format!("missing required field '{}'", field),
    }
}

fn wrong_type(index: usize, field: &'static str, expected: &'static str) -> Error {
    Error::MalformedRecord {
        index,
        message: format!("field '{}' must be {}", field, expected),
    }
}

/// Human-readable JSON type name for diagnostics.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
