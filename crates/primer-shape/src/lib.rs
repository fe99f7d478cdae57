//! Data objects and JSON helpers for the Primer crates.
//!
//! # Scope
//!
//! - **Rectangle** - a width/height pair whose area is computed on every call
//! - **Encoding** - compact JSON with object keys kept in insertion order
//! - **Decoding** - parsed JSON bound to a [`Prototype`], a named table of
//!   methods, without copying or validating the parsed fields
//!
//! ```
//! use primer_shape::{decode, encode, make_rectangle, rectangle};
//!
//! let text = encode(&make_rectangle(20.0, 10.0)).unwrap();
//! let rect = decode(rectangle::prototype(), &text).unwrap();
//! assert_eq!(rect.call("area").unwrap(), serde_json::json!(200.0));
//! ```

/// Errors raised while encoding, decoding or calling methods.
pub mod error;
/// `encode`, `decode` and `decode_as`.
pub mod json;
/// Named method tables and the instances bound to them.
pub mod prototype;
/// The rectangle data object and its prototype.
pub mod rectangle;

// Re-exports for convenience
pub use error::ShapeError;
pub use json::{decode, decode_as, encode};
pub use prototype::{Instance, Method, Prototype, number_field};
pub use rectangle::{Rectangle, make_rectangle};
