//! Validation of pasted task input

use serde_json::Value;

use crate::error::ReviewError;
use crate::types::Task;

/// Parse raw input text into a list of tasks.
///
/// Surrounding whitespace is ignored. The top-level value must be a JSON
/// array; its elements are passed through untouched.
pub fn parse_task_input(raw_text: &str) -> Result<Vec<Task>, ReviewError> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return Err(ReviewError::EmptyInput);
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| ReviewError::Parse(e.to_string()))?;

    match value {
        Value::Array(tasks) => Ok(tasks),
        _ => Err(ReviewError::Shape),
    }
}
