//! Runtime values flowing through the event pipeline.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attribute::AttributeType;

/// A runtime value produced by evaluating an expression against one event.
///
/// Carries one variant per declared attribute type plus `Null`, the marker
/// for an expression that produced nothing for this event. Structured data
/// rides in `Object` as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    /// Structured data (arrays, objects, nested structures).
    Object(serde_json::Value),
}

impl Value {
    /// True if this is the null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The declared type this value inhabits, or `None` for `Null`.
    pub fn type_of(&self) -> Option<AttributeType> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(AttributeType::Bool),
            Value::Int(_) => Some(AttributeType::Int),
            Value::Long(_) => Some(AttributeType::Long),
            Value::Float(_) => Some(AttributeType::Float),
            Value::Double(_) => Some(AttributeType::Double),
            Value::String(_) => Some(AttributeType::String),
            Value::Object(_) => Some(AttributeType::Object),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Delegate to value_to_json for a consistent JSON representation.
        // Non-finite floats → null, Object → inline.
        value_to_json(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(json_to_value(json))
    }
}

/// Convert a value to its JSON representation.
///
/// Non-finite floats have no JSON form and become null.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        Value::Long(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(f64::from(*f))
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::Double(f) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Object(v) => v.clone(),
    }
}

/// Convert JSON into a runtime value.
///
/// Integers land in `Int` when they fit in 32 bits, otherwise `Long`;
/// fractional numbers land in `Double`. Arrays and objects ride as `Object`.
pub fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).map_or(Value::Long(i), Value::Int),
            None => n.as_f64().map_or(Value::Null, Value::Double),
        },
        serde_json::Value::String(s) => Value::String(s),
        other => Value::Object(other),
    }
}
