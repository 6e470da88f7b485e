// Validator tree produced by schema compilation
//
// Validators are plain data describing the constraints of one schema object.
// Evaluating JSON instances against them is left to the embedder.

use crate::definitions::{SchemaDefinitions, SharedDefinitions, definition_name};
use json_schema_events::JsonNumber;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::{Rc, Weak};

/// Compiled form of one schema object.
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    /// No `type` and no type-specific keywords: accepts anything
    Wildcard(WildcardValidator),
    Boolean(BooleanValidator),
    Null(NullValidator),
    Integer(NumberValidator),
    Number(NumberValidator),
    String(StringValidator),
    Array(ArrayValidator),
    Object(ObjectValidator),
    /// `$ref` to a named entry of the definitions cache
    Reference(ReferenceValidator),
}

/// Metadata keywords carried by every validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorAnnotations {
    pub id: Option<String>,
    /// `$schema`
    pub schema: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Scalar `default` values only
    pub default: Option<serde_json::Value>,
}

impl ValidatorAnnotations {
    pub fn is_empty(&self) -> bool {
        *self == ValidatorAnnotations::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WildcardValidator {
    pub annotations: ValidatorAnnotations,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooleanValidator {
    pub annotations: ValidatorAnnotations,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullValidator {
    pub annotations: ValidatorAnnotations,
}

/// Lower or upper bound of a numeric validator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberBound {
    pub value: JsonNumber,
    pub exclusive: bool,
}

/// Used for both `integer` and `number`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberValidator {
    pub annotations: ValidatorAnnotations,
    pub minimum: Option<NumberBound>,
    pub maximum: Option<NumberBound>,
    pub multiple_of: Option<JsonNumber>,
}

/// `pattern` and `format` are recorded but not enforced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringValidator {
    pub annotations: ValidatorAnnotations,
    pub min_length: u64,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub format: Option<String>,
}

/// The `items` keyword in either of its forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ArrayItems {
    #[default]
    Unspecified,
    /// One schema for every element
    Single(Box<Validator>),
    /// One schema per position; later elements fall to `additionalItems`
    Positional(Vec<PositionalItem>),
}

/// One element of the array form of `items`.
///
/// `index` is the element's position in the schema's `items` array, which
/// differs from its position in [`ArrayItems::Positional`] once an earlier
/// element has been left out.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalItem {
    pub index: usize,
    pub validator: Validator,
}

/// `additionalItems` / `additionalProperties`: a flag or a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Additional {
    Allowed(bool),
    Schema(Box<Validator>),
}

impl Default for Additional {
    fn default() -> Self {
        Additional::Allowed(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayValidator {
    pub annotations: ValidatorAnnotations,
    pub items: ArrayItems,
    pub additional_items: Additional,
    pub min_items: u64,
    pub max_items: Option<u64>,
    pub unique_items: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectValidator {
    pub annotations: ValidatorAnnotations,
    pub properties: HashMap<String, Validator>,
    pub required: BTreeSet<String>,
    pub min_properties: u64,
    pub max_properties: Option<u64>,
    pub additional_properties: Additional,
}

impl ObjectValidator {
    /// Register the validator for a property, returning the one it replaces.
    pub fn add_property(
        &mut self,
        name: impl Into<String>,
        validator: Validator,
    ) -> Option<Validator> {
        self.properties.insert(name.into(), validator)
    }

    pub fn property(&self, name: &str) -> Option<&Validator> {
        self.properties.get(name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }
}

/// A `$ref` kept as a name and resolved on demand.
///
/// Holds a weak handle to the definitions cache: the cache may hold
/// validators that refer back to it.
#[derive(Debug, Clone)]
pub struct ReferenceValidator {
    pub annotations: ValidatorAnnotations,
    reference: String,
    name: String,
    definitions: Weak<RefCell<SchemaDefinitions>>,
}

impl ReferenceValidator {
    pub fn new(reference: impl Into<String>, definitions: &SharedDefinitions) -> Self {
        let reference = reference.into();
        Self {
            annotations: ValidatorAnnotations::default(),
            name: definition_name(&reference),
            reference,
            definitions: Rc::downgrade(definitions),
        }
    }

    /// The `$ref` value as written.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The definitions entry the reference names.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look the target up in the definitions cache. `None` if nothing is
    /// registered under the name, or the cache has been dropped.
    pub fn resolve(&self) -> Option<Rc<Validator>> {
        let definitions = self.definitions.upgrade()?;
        definitions.borrow().lookup(&self.name)
    }
}

impl PartialEq for ReferenceValidator {
    fn eq(&self, other: &Self) -> bool {
        self.annotations == other.annotations && self.reference == other.reference
    }
}

impl Validator {
    pub fn annotations(&self) -> &ValidatorAnnotations {
        match self {
            Validator::Wildcard(v) => &v.annotations,
            Validator::Boolean(v) => &v.annotations,
            Validator::Null(v) => &v.annotations,
            Validator::Integer(v) | Validator::Number(v) => &v.annotations,
            Validator::String(v) => &v.annotations,
            Validator::Array(v) => &v.annotations,
            Validator::Object(v) => &v.annotations,
            Validator::Reference(v) => &v.annotations,
        }
    }

    /// Name of the instance type this validator checks.
    pub fn type_name(&self) -> &'static str {
        match self {
            Validator::Wildcard(_) => "any",
            Validator::Boolean(_) => "boolean",
            Validator::Null(_) => "null",
            Validator::Integer(_) => "integer",
            Validator::Number(_) => "number",
            Validator::String(_) => "string",
            Validator::Array(_) => "array",
            Validator::Object(_) => "object",
            Validator::Reference(_) => "ref",
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValidator> {
        match self {
            Validator::Object(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayValidator> {
        match self {
            Validator::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&StringValidator> {
        match self {
            Validator::String(v) => Some(v),
            _ => None,
        }
    }

    /// Numeric constraints of an `integer` or `number` validator.
    pub fn as_number(&self) -> Option<&NumberValidator> {
        match self {
            Validator::Integer(v) | Validator::Number(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&ReferenceValidator> {
        match self {
            Validator::Reference(v) => Some(v),
            _ => None,
        }
    }

    /// Every reference in this tree, depth first.
    pub fn references(&self) -> Vec<&ReferenceValidator> {
        let mut found = Vec::new();
        self.collect_references(&mut found);
        found
    }

    fn collect_references<'a>(&'a self, found: &mut Vec<&'a ReferenceValidator>) {
        match self {
            Validator::Reference(v) => found.push(v),
            Validator::Array(v) => {
                match &v.items {
                    ArrayItems::Unspecified => {}
                    ArrayItems::Single(item) => item.collect_references(found),
                    ArrayItems::Positional(items) => {
                        for item in items {
                            item.validator.collect_references(found);
                        }
                    }
                }
                if let Additional::Schema(extra) = &v.additional_items {
                    extra.collect_references(found);
                }
            }
            Validator::Object(v) => {
                let mut names: Vec<&String> = v.properties.keys().collect();
                names.sort();
                for name in names {
                    v.properties[name].collect_references(found);
                }
                if let Additional::Schema(extra) = &v.additional_properties {
                    extra.collect_references(found);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup_ignores_insertion_order() {
        let string = Validator::String(StringValidator::default());
        let number = Validator::Number(NumberValidator::default());

        let mut a = ObjectValidator::default();
        a.add_property("x", string.clone());
        a.add_property("y", number.clone());

        let mut b = ObjectValidator::default();
        b.add_property("y", number);
        b.add_property("x", string);

        assert_eq!(a, b);
        assert_eq!(a.property("x").map(Validator::type_name), Some("string"));
    }

    #[test]
    fn test_add_property_replaces() {
        let mut v = ObjectValidator::default();
        assert!(v.add_property("a", Validator::Null(NullValidator::default())).is_none());
        let previous = v.add_property("a", Validator::Boolean(BooleanValidator::default()));
        assert_eq!(previous.map(|p| p.type_name()), Some("null"));
        assert_eq!(v.properties.len(), 1);
    }

    #[test]
    fn test_defaults_are_permissive() {
        let array = ArrayValidator::default();
        assert_eq!(array.items, ArrayItems::Unspecified);
        assert_eq!(array.additional_items, Additional::Allowed(true));
        assert_eq!(array.min_items, 0);
        assert!(!array.unique_items);
    }

    #[test]
    fn test_reference_resolves_lazily() {
        let definitions = SchemaDefinitions::shared();
        let reference = ReferenceValidator::new("#/definitions/positive", &definitions);
        assert_eq!(reference.name(), "positive");
        assert!(reference.resolve().is_none());

        definitions
            .borrow_mut()
            .register("positive", Validator::Integer(NumberValidator::default()));
        assert_eq!(
            reference.resolve().map(|v| v.type_name()),
            Some("integer")
        );
    }

    #[test]
    fn test_reference_outliving_cache() {
        let definitions = SchemaDefinitions::shared();
        let reference = ReferenceValidator::new("a", &definitions);
        drop(definitions);
        assert!(reference.resolve().is_none());
    }

    #[test]
    fn test_collect_references() {
        let definitions = SchemaDefinitions::shared();
        let mut object = ObjectValidator::default();
        object.add_property(
            "list",
            Validator::Array(ArrayValidator {
                items: ArrayItems::Single(Box::new(Validator::Reference(ReferenceValidator::new(
                    "item", &definitions,
                )))),
                ..ArrayValidator::default()
            }),
        );
        object.additional_properties = Additional::Schema(Box::new(Validator::Reference(
            ReferenceValidator::new("extra", &definitions),
        )));

        let root = Validator::Object(object);
        let names: Vec<&str> = root.references().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["item", "extra"]);
    }
}
