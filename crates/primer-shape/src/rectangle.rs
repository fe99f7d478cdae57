//! A rectangle data object.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::ShapeError;
use crate::prototype::{Prototype, number_field};

/// A width/height pair. The area is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`, computed from the current fields.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Alias for [`Rectangle::area`].
    #[must_use]
    pub fn get_area(&self) -> f64 {
        self.area()
    }
}

/// Construct a [`Rectangle`].
#[must_use]
pub const fn make_rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}

static PROTOTYPE: LazyLock<Prototype> = LazyLock::new(|| {
    Prototype::new("Rectangle")
        .with_method("area", area)
        .with_method("getArea", area)
});

/// The shared `Rectangle` prototype, with `area` and `getArea` methods that
/// read `width` and `height` from the bound data.
#[must_use]
pub fn prototype() -> &'static Prototype {
    &PROTOTYPE
}

fn area(fields: &Value) -> Result<Value, ShapeError> {
    let width = number_field(fields, "width")?;
    let height = number_field(fields, "height")?;
    let product = width * height;
    Number::from_f64(product)
        .map(Value::Number)
        .ok_or_else(|| ShapeError::NotFinite {
            method: "area".to_string(),
            value: product,
        })
}
