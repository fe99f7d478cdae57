//! Named method tables bound to parsed data.
//!
//! A [`Prototype`] owns behavior, an [`Instance`] owns data. Binding the two
//! never copies or checks the data: a method sees exactly the fields that
//! were parsed, read at call time.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::ShapeError;

/// A method in a prototype's table. Receives the bound fields.
pub type Method = fn(&Value) -> Result<Value, ShapeError>;

/// A named set of methods shared by every instance bound to it.
#[derive(Clone)]
pub struct Prototype {
    name: String,
    methods: HashMap<String, Method>,
}

impl Prototype {
    /// A prototype with no methods.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: HashMap::new(),
        }
    }

    /// Register `method` under `name`, replacing any previous entry.
    #[must_use]
    pub fn with_method(mut self, name: &str, method: Method) -> Self {
        let _ = self.methods.insert(name.to_string(), method);
        self
    }

    /// The prototype name, used in error messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<Method> {
        self.methods.get(name).copied()
    }

    /// Method names in lexicographic order.
    #[must_use]
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prototype")
            .field("name", &self.name)
            .field("methods", &self.method_names())
            .finish()
    }
}

/// Parsed data bound by reference to a [`Prototype`].
#[derive(Debug, Clone)]
pub struct Instance<'p> {
    fields: Value,
    prototype: &'p Prototype,
}

impl<'p> Instance<'p> {
    /// Bind `fields` to `prototype` as is.
    #[must_use]
    pub const fn new(fields: Value, prototype: &'p Prototype) -> Self {
        Self { fields, prototype }
    }

    /// Call a method from the prototype on the current fields.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::UnknownMethod`] if the prototype has no such
    /// method, or whatever error the method itself reports.
    pub fn call(&self, method: &str) -> Result<Value, ShapeError> {
        let Some(method_fn) = self.prototype.method(method) else {
            return Err(ShapeError::UnknownMethod {
                prototype: self.prototype.name().to_string(),
                method: method.to_string(),
            });
        };
        method_fn(&self.fields)
    }

    /// Read a field. `None` when absent or when the data is not an object.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Assign a field. Later method calls see the new value.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NotAnObject`] if the bound data is not a JSON
    /// object.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<(), ShapeError> {
        let Value::Object(map) = &mut self.fields else {
            return Err(ShapeError::NotAnObject {
                field: field.to_string(),
            });
        };
        let _ = map.insert(field.to_string(), value.into());
        Ok(())
    }

    /// The bound data as an object map, if it is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.fields.as_object()
    }

    /// The prototype this instance dispatches to.
    #[must_use]
    pub const fn prototype(&self) -> &'p Prototype {
        self.prototype
    }

    /// Unbind and return the data.
    #[must_use]
    pub fn into_fields(self) -> Value {
        self.fields
    }
}

impl Serialize for Instance<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// Read `name` from `fields` as a number. For use inside [`Method`]s.
///
/// # Errors
///
/// Returns [`ShapeError::MissingField`] if the field is absent and
/// [`ShapeError::NotANumber`] if it holds another JSON type.
pub fn number_field(fields: &Value, name: &str) -> Result<f64, ShapeError> {
    let value = fields.get(name).ok_or_else(|| ShapeError::MissingField {
        field: name.to_string(),
    })?;
    value.as_f64().ok_or_else(|| ShapeError::NotANumber {
        field: name.to_string(),
    })
}
