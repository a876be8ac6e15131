//! Typed partial-update documents for advertisements.
//!
//! Clients send an RFC 6902-shaped array:
//!
//! ```text
//! [{ "op": "replace", "path": "/price", "value": 14.99 }]
//! ```
//!
//! Each entry is parsed into a [`PatchOperation`] carrying a [`FieldValue`]
//! whose variant fixes both the target field and the value type. Parsing
//! validates the whole document up front; [`PatchDocument::apply_to`] then
//! applies it to a working copy and only writes back if every operation
//! succeeded.

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::timestamp::parse_timestamp;
use crate::types::{Price, Timestamp};

// ---------------------------------------------------------------------------
// Fields and values
// ---------------------------------------------------------------------------

/// The mutable fields of an advertisement. `id` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvertField {
    Name,
    Description,
    Price,
    DateAdded,
}

impl AdvertField {
    /// Resolve a JSON pointer such as `/price` or `/DateAdded`.
    ///
    /// Matching is case-insensitive and accepts both `date_added` and
    /// `dateAdded` spellings.
    pub fn from_path(path: &str) -> Result<Self, CoreError> {
        let segment = path.strip_prefix('/').unwrap_or(path);
        match segment.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "description" => Ok(Self::Description),
            "price" => Ok(Self::Price),
            "date_added" | "dateadded" => Ok(Self::DateAdded),
            "id" => Err(CoreError::Validation(
                "Field 'id' cannot be patched".to_string(),
            )),
            _ => Err(CoreError::Validation(format!("Unknown patch path '{path}'"))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Price => "price",
            Self::DateAdded => "date_added",
        }
    }
}

/// A field paired with a value of that field's type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Name(String),
    Description(String),
    Price(Price),
    DateAdded(Timestamp),
}

impl FieldValue {
    pub fn field(&self) -> AdvertField {
        match self {
            Self::Name(_) => AdvertField::Name,
            Self::Description(_) => AdvertField::Description,
            Self::Price(_) => AdvertField::Price,
            Self::DateAdded(_) => AdvertField::DateAdded,
        }
    }

    /// Convert a raw JSON value into the typed value for `field`.
    pub fn parse(field: AdvertField, value: &Value) -> Result<Self, CoreError> {
        let type_error = |expected: &str| {
            CoreError::Validation(format!(
                "Field '{}' expects {expected}, got {value}",
                field.as_str()
            ))
        };

        match field {
            AdvertField::Name => value
                .as_str()
                .map(|s| Self::Name(s.to_string()))
                .ok_or_else(|| type_error("a string")),
            AdvertField::Description => value
                .as_str()
                .map(|s| Self::Description(s.to_string()))
                .ok_or_else(|| type_error("a string")),
            AdvertField::Price => {
                let text = match value {
                    Value::Number(n) => n.to_string(),
                    Value::String(s) => s.trim().to_string(),
                    _ => return Err(type_error("a decimal number")),
                };
                Price::from_str(&text)
                    .map(Self::Price)
                    .map_err(|_| type_error("a decimal number"))
            }
            AdvertField::DateAdded => value
                .as_str()
                .and_then(parse_timestamp)
                .map(Self::DateAdded)
                .ok_or_else(|| type_error("a timestamp")),
        }
    }
}

// ---------------------------------------------------------------------------
// Operations and documents
// ---------------------------------------------------------------------------

/// One validated patch step.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOperation {
    /// Overwrite the field (`add` and `replace` on the wire).
    Replace(FieldValue),
    /// Abort the whole patch unless the field currently equals the value.
    Test(FieldValue),
}

/// Wire shape of a single RFC 6902 operation, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPatchOperation {
    pub op: String,
    pub path: String,
    #[serde(default)]
    pub value: Option<Value>,
}

impl TryFrom<&RawPatchOperation> for PatchOperation {
    type Error = CoreError;

    fn try_from(raw: &RawPatchOperation) -> Result<Self, Self::Error> {
        let op = raw.op.to_ascii_lowercase();
        if !matches!(op.as_str(), "add" | "replace" | "test") {
            return Err(CoreError::Validation(format!(
                "Unsupported patch op '{}' (expected add, replace or test)",
                raw.op
            )));
        }

        let field = AdvertField::from_path(&raw.path)?;
        let value = raw.value.as_ref().ok_or_else(|| {
            CoreError::Validation(format!("Patch op '{}' on '{}' needs a value", raw.op, raw.path))
        })?;
        let value = FieldValue::parse(field, value)?;

        Ok(match op.as_str() {
            "test" => PatchOperation::Test(value),
            _ => PatchOperation::Replace(value),
        })
    }
}

/// An ordered, fully validated list of patch operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchDocument {
    operations: Vec<PatchOperation>,
}

impl PatchDocument {
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self { operations }
    }

    pub fn operations(&self) -> &[PatchOperation] {
        &self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Apply every operation in order. On error `target` is left untouched.
    pub fn apply_to<T: Patchable>(&self, target: &mut T) -> Result<(), CoreError> {
        let mut working = target.clone();

        for operation in &self.operations {
            match operation {
                PatchOperation::Replace(value) => working.set_field(value.clone()),
                PatchOperation::Test(expected) => {
                    let field = expected.field();
                    if working.field_value(field) != *expected {
                        return Err(CoreError::Validation(format!(
                            "Patch test failed for '{}'",
                            field.as_str()
                        )));
                    }
                }
            }
        }

        *target = working;
        Ok(())
    }
}

impl TryFrom<&[RawPatchOperation]> for PatchDocument {
    type Error = CoreError;

    fn try_from(raw: &[RawPatchOperation]) -> Result<Self, Self::Error> {
        raw.iter()
            .map(PatchOperation::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

/// Records whose mutable fields can be read and written through [`FieldValue`].
pub trait Patchable: Clone {
    fn field_value(&self, field: AdvertField) -> FieldValue;
    fn set_field(&mut self, value: FieldValue);
}
