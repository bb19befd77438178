//! Declared attribute types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The static type an expression is declared to produce.
///
/// Declared once in a query definition and checked at configuration time;
/// runtime values carry the matching [`crate::Value`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// UTF-8 string.
    String,
    /// Boolean.
    Bool,
    /// Structured data of no particular declared shape.
    Object,
}

impl AttributeType {
    /// All declared types, in schema listing order.
    pub const ALL: [AttributeType; 7] = [
        AttributeType::Int,
        AttributeType::Long,
        AttributeType::Float,
        AttributeType::Double,
        AttributeType::String,
        AttributeType::Bool,
        AttributeType::Object,
    ];

    /// Short lowercase name, used in schemas and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            AttributeType::Int => "int",
            AttributeType::Long => "long",
            AttributeType::Float => "float",
            AttributeType::Double => "double",
            AttributeType::String => "string",
            AttributeType::Bool => "bool",
            AttributeType::Object => "object",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
