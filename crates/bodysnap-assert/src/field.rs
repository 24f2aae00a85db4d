//! Per-field validators
//!
//! A [`FieldTest`] runs each registered validator on the value at its path,
//! for the body object or for every object element of a body array.

use crate::errors::AssertionFailure;
use crate::response::HttpResponse;
use crate::Assertion;
use bodysnap_core::errors::SnapError;
use bodysnap_core::path::{extract_object, objects, FieldPath};
use serde_json::{Map, Value};

/// Validator over a single decoded field value
pub type FieldFn = Box<dyn Fn(&Value) -> Result<(), String> + Send + Sync>;

/// Accepts anything
pub fn ignore_field(_: &Value) -> Result<(), String> {
    Ok(())
}

pub fn field_is_number(value: &Value) -> Result<(), String> {
    match value {
        Value::Number(_) => Ok(()),
        other => Err(format!("{} is not a number", other)),
    }
}

pub fn field_is_bool(value: &Value) -> Result<(), String> {
    match value {
        Value::Bool(_) => Ok(()),
        other => Err(format!("{} is not a boolean", other)),
    }
}

pub fn field_is_string(value: &Value) -> Result<(), String> {
    match value {
        Value::String(_) => Ok(()),
        other => Err(format!("{} is not a string", other)),
    }
}

/// Validators keyed by field path, run in registration order
#[derive(Default)]
pub struct FieldTest {
    fields: Vec<(FieldPath, FieldFn)>,
}

impl FieldTest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator for `path`.
    ///
    /// # Errors
    ///
    /// `InvalidPath` if `path` is empty or has an empty segment.
    pub fn field<F>(mut self, path: &str, validator: F) -> Result<Self, SnapError>
    where
        F: Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.fields
            .push((FieldPath::parse(path)?, Box::new(validator)));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn check_object(&self, object: &Map<String, Value>) -> Result<(), AssertionFailure> {
        for (path, validator) in &self.fields {
            let value = extract_object(object, path)?;
            validator(value).map_err(|message| AssertionFailure::Field {
                path: path.to_string(),
                message,
            })?;
        }
        Ok(())
    }
}

impl Assertion for FieldTest {
    fn check(&self, res: &HttpResponse) -> Result<(), AssertionFailure> {
        let body = res.json()?;
        for object in objects(&body, "field_test")? {
            self.check_object(object)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for FieldTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldTest")
            .field(
                "paths",
                &self.fields.iter().map(|(p, _)| p.to_string()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
