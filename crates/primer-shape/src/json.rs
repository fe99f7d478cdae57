//! JSON encoding and prototype-restoring decoding.

use primer_common::warning::warn_once;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ShapeError;
use crate::prototype::{Instance, Prototype};

/// Serialize `value` as compact JSON.
///
/// Struct fields are written in declaration order and map keys in insertion
/// order. Methods are never part of the output.
///
/// # Errors
///
/// Returns [`ShapeError::Json`] if `value` cannot be represented as JSON,
/// e.g. a map with non-string keys.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, ShapeError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse `text` and bind the result to `prototype`.
///
/// Fields are neither copied nor checked against what the prototype's
/// methods will read; a missing field only surfaces when a method is called.
///
/// # Errors
///
/// Returns [`ShapeError::Json`] if `text` is not valid JSON.
pub fn decode<'p>(prototype: &'p Prototype, text: &str) -> Result<Instance<'p>, ShapeError> {
    let fields: Value = serde_json::from_str(text)?;

    if !fields.is_object() {
        let _ = warn_once(
            "Shape",
            &format!(
                "decoded {} bound to {}; its methods expect an object",
                json_type(&fields),
                prototype.name()
            ),
        );
    }

    Ok(Instance::new(fields, prototype))
}

/// Parse `text` straight into a Rust type, whose methods are then available
/// natively.
///
/// # Errors
///
/// Returns [`ShapeError::Json`] if `text` is not valid JSON or does not have
/// the shape of `T`.
pub fn decode_as<T: DeserializeOwned>(text: &str) -> Result<T, ShapeError> {
    Ok(serde_json::from_str(text)?)
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
