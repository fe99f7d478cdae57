//! Shape errors.

use thiserror::Error;

/// Failure while encoding, decoding or dispatching a method.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Malformed JSON or a value that cannot be serialized. The
    /// `serde_json` message is passed through unchanged.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The prototype has no method with this name.
    #[error("{prototype} has no method `{method}`")]
    UnknownMethod {
        /// Name of the prototype that was searched.
        prototype: String,
        /// The requested method.
        method: String,
    },

    /// A method read a field that the parsed data does not contain.
    #[error("missing field `{field}`")]
    MissingField {
        /// The field that was read.
        field: String,
    },

    /// A method expected a number but found another JSON type.
    #[error("field `{field}` is not a number")]
    NotANumber {
        /// The field that was read.
        field: String,
    },

    /// A method computed a number that JSON cannot represent (infinite or NaN).
    #[error("`{method}` produced {value}, which is not a finite number")]
    NotFinite {
        /// The method that computed the value.
        method: String,
        /// The computed value.
        value: f64,
    },

    /// A field was assigned on data that is not a JSON object.
    #[error("cannot set field `{field}` on a non-object value")]
    NotAnObject {
        /// The field that was assigned.
        field: String,
    },
}
