//! Decoding of the JSON input record.
//!
//! The record is a single JSON object whose fields are substituted into the
//! template body before the markup is parsed.

use crate::error::{Error, Result};
use std::io::Read;

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Decodes the input record from a reader.
///
/// # Errors
/// * `Error::DecodeError` if the input is not valid JSON
/// * `Error::RecordNotObject` if the decoded value is not a JSON object
pub fn decode_record<R: Read>(rd: R) -> Result<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_reader(rd)?;
    if !value.is_object() {
        return Err(Error::RecordNotObject { kind: json_kind(&value) });
    }
    Ok(value)
}

/// Decodes the input record from standard input.
pub fn record_from_stdin() -> Result<serde_json::Value> {
    decode_record(std::io::stdin().lock())
}
