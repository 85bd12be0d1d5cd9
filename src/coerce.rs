//! Field coercion shared by every record builder.
//!
//! A nested field may arrive either as a raw JSON mapping straight off the
//! wire or as a record that has already been built. [`Shape`] carries both
//! cases and [`Record::build`] turns either one into the record: built values
//! pass through untouched, raw mappings are decoded and assembled.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::PokeApiError;

/// A field value that is either still raw JSON or an already-built record.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<T> {
    Raw(Value),
    Built(T),
}

impl<T> Shape<T> {
    pub fn raw(value: Value) -> Self {
        Shape::Raw(value)
    }
}

impl<T> From<T> for Shape<T> {
    fn from(record: T) -> Self {
        Shape::Built(record)
    }
}

// Anything decoded from JSON is raw; only callers can hand in built records.
impl<'de, T> Deserialize<'de> for Shape<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Shape::Raw)
    }
}

/// A typed record that can be assembled from a raw JSON mapping.
pub trait Record: Sized {
    /// Loose form a raw mapping is decoded into before assembly.
    type Draft: DeserializeOwned;

    /// Human-readable name used in error messages.
    const KIND: &'static str;

    fn assemble(draft: Self::Draft) -> Result<Self, PokeApiError>;

    fn build(shape: Shape<Self>) -> Result<Self, PokeApiError> {
        match shape {
            Shape::Built(record) => Ok(record),
            Shape::Raw(Value::Object(map)) => {
                tracing::trace!("Building {} from raw mapping", Self::KIND);
                let draft = serde_json::from_value::<Self::Draft>(Value::Object(map))
                    .map_err(|e| {
                        PokeApiError::MalformedResponse(format!("invalid {}: {}", Self::KIND, e))
                    })?;
                Self::assemble(draft)
            }
            Shape::Raw(other) => Err(PokeApiError::MalformedResponse(format!(
                "expected a mapping for {}, found {}",
                Self::KIND,
                value_kind(&other)
            ))),
        }
    }

    fn from_value(value: Value) -> Result<Self, PokeApiError> {
        Self::build(Shape::Raw(value))
    }
}

/// Coerce an optional singular field.
pub fn build_optional<T: Record>(field: Option<Shape<T>>) -> Result<Option<T>, PokeApiError> {
    field.map(T::build).transpose()
}

/// Coerce a list field element by element.
///
/// An absent or empty list yields a fresh empty `Vec` without touching any
/// builder.
pub fn build_list<T: Record>(field: Option<Vec<Shape<T>>>) -> Result<Vec<T>, PokeApiError> {
    match field {
        Some(items) if !items.is_empty() => items.into_iter().map(T::build).collect(),
        _ => Ok(Vec::new()),
    }
}

/// Deserialize an opaque mapping, treating `null` like an absent field.
pub fn nullable_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Map<String, Value>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
