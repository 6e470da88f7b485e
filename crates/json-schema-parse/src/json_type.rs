// JSON instance types named by the `type` keyword

use json_schema_events::JsonNumber;
use std::fmt;

/// One of the seven JSON Schema instance types, or `Undefined` while no
/// `type` has been declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JsonType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
    #[default]
    Undefined,
}

impl JsonType {
    /// Parse a `type` keyword value. `undefined` is not a legal name.
    pub fn from_name(name: &str) -> Option<JsonType> {
        match name {
            "array" => Some(JsonType::Array),
            "boolean" => Some(JsonType::Boolean),
            "integer" => Some(JsonType::Integer),
            "null" => Some(JsonType::Null),
            "number" => Some(JsonType::Number),
            "object" => Some(JsonType::Object),
            "string" => Some(JsonType::String),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::Array => "array",
            JsonType::Boolean => "boolean",
            JsonType::Integer => "integer",
            JsonType::Null => "null",
            JsonType::Number => "number",
            JsonType::Object => "object",
            JsonType::String => "string",
            JsonType::Undefined => "undefined",
        }
    }

    /// The type of a number event: integers are `Integer`, everything else
    /// is `Number`.
    pub fn of_number(value: &JsonNumber) -> JsonType {
        if value.is_integer() {
            JsonType::Integer
        } else {
            JsonType::Number
        }
    }

    /// The name with an indefinite article, for messages.
    pub(crate) fn with_article(self) -> &'static str {
        match self {
            JsonType::Array => "an array",
            JsonType::Boolean => "a boolean",
            JsonType::Integer => "an integer",
            JsonType::Null => "null",
            JsonType::Number => "a number",
            JsonType::Object => "an object",
            JsonType::String => "a string",
            JsonType::Undefined => "undefined",
        }
    }

    pub(crate) fn is_container(self) -> bool {
        matches!(self, JsonType::Array | JsonType::Object)
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for ty in [
            JsonType::Array,
            JsonType::Boolean,
            JsonType::Integer,
            JsonType::Null,
            JsonType::Number,
            JsonType::Object,
            JsonType::String,
        ] {
            assert_eq!(JsonType::from_name(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(JsonType::from_name("undefined"), None);
        assert_eq!(JsonType::from_name("bogus"), None);
        assert_eq!(JsonType::from_name("String"), None);
    }

    #[test]
    fn test_of_number() {
        assert_eq!(JsonType::of_number(&JsonNumber::Uint(u64::MAX)), JsonType::Integer);
        assert_eq!(JsonType::of_number(&JsonNumber::Float(1.0)), JsonType::Number);
    }
}
