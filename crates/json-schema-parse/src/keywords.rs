//! Draft-04 schema keywords and the rules attached to each.
//!
//! Every keyword carries two independent rules:
//!
//! - a **value rule**: which JSON value types the keyword itself accepts
//!   (`minLength` takes an integer, `items` takes an object or an array).
//!   Checked as each value arrives.
//! - an **instance family**: which declared instance types the keyword
//!   constrains (`minLength` only means something for strings). Checked when
//!   the schema object closes, so `type` may appear anywhere in the object.

use crate::json_type::JsonType;
use std::fmt;

/// The recognised keywords. Anything else is `Unknown` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaKeyword {
    // Core and metadata
    Id,
    Schema,
    Ref,
    Title,
    Description,
    Default,
    Format,
    Definitions,

    // Numbers
    MultipleOf,
    Maximum,
    ExclusiveMaximum,
    Minimum,
    ExclusiveMinimum,

    // Strings
    MaxLength,
    MinLength,
    Pattern,

    // Arrays
    AdditionalItems,
    Items,
    MaxItems,
    MinItems,
    UniqueItems,

    // Objects
    MaxProperties,
    MinProperties,
    Required,
    AdditionalProperties,
    Properties,
    PatternProperties,
    Dependencies,

    // Any instance type
    Enum,
    Type,
    AllOf,
    AnyOf,
    OneOf,
    Not,

    Unknown,
}

impl SchemaKeyword {
    /// Map an object key to its keyword.
    pub fn lookup(name: &str) -> SchemaKeyword {
        match name {
            "id" => SchemaKeyword::Id,
            "$schema" => SchemaKeyword::Schema,
            "$ref" => SchemaKeyword::Ref,
            "title" => SchemaKeyword::Title,
            "description" => SchemaKeyword::Description,
            "default" => SchemaKeyword::Default,
            "format" => SchemaKeyword::Format,
            "definitions" => SchemaKeyword::Definitions,
            "multipleOf" => SchemaKeyword::MultipleOf,
            "maximum" => SchemaKeyword::Maximum,
            "exclusiveMaximum" => SchemaKeyword::ExclusiveMaximum,
            "minimum" => SchemaKeyword::Minimum,
            "exclusiveMinimum" => SchemaKeyword::ExclusiveMinimum,
            "maxLength" => SchemaKeyword::MaxLength,
            "minLength" => SchemaKeyword::MinLength,
            "pattern" => SchemaKeyword::Pattern,
            "additionalItems" => SchemaKeyword::AdditionalItems,
            "items" => SchemaKeyword::Items,
            "maxItems" => SchemaKeyword::MaxItems,
            "minItems" => SchemaKeyword::MinItems,
            "uniqueItems" => SchemaKeyword::UniqueItems,
            "maxProperties" => SchemaKeyword::MaxProperties,
            "minProperties" => SchemaKeyword::MinProperties,
            "required" => SchemaKeyword::Required,
            "additionalProperties" => SchemaKeyword::AdditionalProperties,
            "properties" => SchemaKeyword::Properties,
            "patternProperties" => SchemaKeyword::PatternProperties,
            "dependencies" => SchemaKeyword::Dependencies,
            "enum" => SchemaKeyword::Enum,
            "type" => SchemaKeyword::Type,
            "allOf" => SchemaKeyword::AllOf,
            "anyOf" => SchemaKeyword::AnyOf,
            "oneOf" => SchemaKeyword::OneOf,
            "not" => SchemaKeyword::Not,
            _ => SchemaKeyword::Unknown,
        }
    }

    /// The keyword as written in a schema document.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKeyword::Id => "id",
            SchemaKeyword::Schema => "$schema",
            SchemaKeyword::Ref => "$ref",
            SchemaKeyword::Title => "title",
            SchemaKeyword::Description => "description",
            SchemaKeyword::Default => "default",
            SchemaKeyword::Format => "format",
            SchemaKeyword::Definitions => "definitions",
            SchemaKeyword::MultipleOf => "multipleOf",
            SchemaKeyword::Maximum => "maximum",
            SchemaKeyword::ExclusiveMaximum => "exclusiveMaximum",
            SchemaKeyword::Minimum => "minimum",
            SchemaKeyword::ExclusiveMinimum => "exclusiveMinimum",
            SchemaKeyword::MaxLength => "maxLength",
            SchemaKeyword::MinLength => "minLength",
            SchemaKeyword::Pattern => "pattern",
            SchemaKeyword::AdditionalItems => "additionalItems",
            SchemaKeyword::Items => "items",
            SchemaKeyword::MaxItems => "maxItems",
            SchemaKeyword::MinItems => "minItems",
            SchemaKeyword::UniqueItems => "uniqueItems",
            SchemaKeyword::MaxProperties => "maxProperties",
            SchemaKeyword::MinProperties => "minProperties",
            SchemaKeyword::Required => "required",
            SchemaKeyword::AdditionalProperties => "additionalProperties",
            SchemaKeyword::Properties => "properties",
            SchemaKeyword::PatternProperties => "patternProperties",
            SchemaKeyword::Dependencies => "dependencies",
            SchemaKeyword::Enum => "enum",
            SchemaKeyword::Type => "type",
            SchemaKeyword::AllOf => "allOf",
            SchemaKeyword::AnyOf => "anyOf",
            SchemaKeyword::OneOf => "oneOf",
            SchemaKeyword::Not => "not",
            SchemaKeyword::Unknown => "<unknown>",
        }
    }

    /// Which JSON value types this keyword accepts.
    pub fn value_rule(self) -> ValueRule {
        use JsonType as T;
        use SchemaKeyword as K;

        match self {
            K::Id | K::Schema | K::Ref | K::Title | K::Description | K::Pattern | K::Format => {
                ValueRule::One(T::String)
            }
            K::Default | K::Unknown => ValueRule::Any,
            K::MultipleOf | K::Maximum | K::Minimum => ValueRule::Either(T::Integer, T::Number),
            K::ExclusiveMaximum | K::ExclusiveMinimum | K::UniqueItems => {
                ValueRule::One(T::Boolean)
            }
            K::MaxLength
            | K::MinLength
            | K::MaxItems
            | K::MinItems
            | K::MaxProperties
            | K::MinProperties => ValueRule::One(T::Integer),
            K::AdditionalItems | K::AdditionalProperties => {
                ValueRule::Either(T::Boolean, T::Object)
            }
            K::Items => ValueRule::Either(T::Object, T::Array),
            K::Required | K::Enum | K::AllOf | K::AnyOf | K::OneOf => ValueRule::One(T::Array),
            K::Type => ValueRule::Either(T::String, T::Array),
            K::Dependencies | K::Not | K::Definitions | K::Properties | K::PatternProperties => {
                ValueRule::One(T::Object)
            }
        }
    }

    /// The instance types this keyword constrains, or `None` for keywords
    /// that apply to every type.
    pub fn instance_family(self) -> Option<InstanceFamily> {
        use SchemaKeyword as K;

        match self {
            K::MinLength | K::MaxLength | K::Pattern => Some(InstanceFamily::String),
            K::MinItems | K::MaxItems | K::UniqueItems | K::Items | K::AdditionalItems => {
                Some(InstanceFamily::Array)
            }
            K::MinProperties
            | K::MaxProperties
            | K::Properties
            | K::Required
            | K::AdditionalProperties => Some(InstanceFamily::Object),
            K::Minimum | K::Maximum | K::ExclusiveMinimum | K::ExclusiveMaximum | K::MultipleOf => {
                Some(InstanceFamily::Numeric)
            }
            _ => None,
        }
    }
}

impl fmt::Display for SchemaKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The keywords that constrain a single instance family, in draft order.
pub const CONSTRAINT_KEYWORDS: [SchemaKeyword; 18] = [
    SchemaKeyword::MultipleOf,
    SchemaKeyword::Maximum,
    SchemaKeyword::ExclusiveMaximum,
    SchemaKeyword::Minimum,
    SchemaKeyword::ExclusiveMinimum,
    SchemaKeyword::MaxLength,
    SchemaKeyword::MinLength,
    SchemaKeyword::Pattern,
    SchemaKeyword::AdditionalItems,
    SchemaKeyword::Items,
    SchemaKeyword::MaxItems,
    SchemaKeyword::MinItems,
    SchemaKeyword::UniqueItems,
    SchemaKeyword::MaxProperties,
    SchemaKeyword::MinProperties,
    SchemaKeyword::Required,
    SchemaKeyword::AdditionalProperties,
    SchemaKeyword::Properties,
];

/// The JSON value types a keyword accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    Any,
    One(JsonType),
    Either(JsonType, JsonType),
}

impl ValueRule {
    /// Integers are numbers, so `Number` also admits `Integer`.
    pub fn accepts(self, found: JsonType) -> bool {
        let admits = |expected: JsonType| {
            expected == found || (expected == JsonType::Number && found == JsonType::Integer)
        };
        match self {
            ValueRule::Any => true,
            ValueRule::One(expected) => admits(expected),
            ValueRule::Either(a, b) => admits(a) || admits(b),
        }
    }

    /// e.g. "an integer", "a boolean or an object"
    pub fn describe(self) -> String {
        match self {
            ValueRule::Any => "any value".to_string(),
            ValueRule::One(expected) => expected.with_article().to_string(),
            ValueRule::Either(a, b) => format!("{} or {}", a.with_article(), b.with_article()),
        }
    }
}

/// A group of keywords that only constrain one kind of instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InstanceFamily {
    String,
    Array,
    Object,
    Numeric,
}

impl InstanceFamily {
    /// True if keywords of this family may appear next to `declared`.
    pub fn admits(self, declared: JsonType) -> bool {
        match self {
            InstanceFamily::String => declared == JsonType::String,
            InstanceFamily::Array => declared == JsonType::Array,
            InstanceFamily::Object => declared == JsonType::Object,
            InstanceFamily::Numeric => {
                matches!(declared, JsonType::Integer | JsonType::Number)
            }
        }
    }

    /// The type assumed when no `type` is declared. Numeric keywords imply
    /// `number`, which also covers integers.
    pub fn inferred_type(self) -> JsonType {
        match self {
            InstanceFamily::String => JsonType::String,
            InstanceFamily::Array => JsonType::Array,
            InstanceFamily::Object => JsonType::Object,
            InstanceFamily::Numeric => JsonType::Number,
        }
    }
}
