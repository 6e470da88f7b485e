use super::{ContextEvents, KeywordTracker, ParseContext, SchemaParseContext};
use crate::definitions::SharedDefinitions;
use crate::error::{SchemaErrorLogger, SchemaParseError};
use crate::json_type::JsonType;
use crate::keywords::SchemaKeyword;
use crate::options::SchemaParseOptions;
use crate::validator::ObjectValidator;
use json_schema_events::JsonNumber;
use std::collections::BTreeMap;
use tracing::trace;

const EXPECTED: &str = "a schema object";

/// Reads the object given to `properties`: property name to sub-schema.
///
/// A name that appears twice keeps its last schema.
#[derive(Debug)]
pub struct PropertiesParseContext {
    definitions: SharedDefinitions,
    options: SchemaParseOptions,
    keyword: KeywordTracker<String>,
    property_contexts: BTreeMap<String, SchemaParseContext>,
}

impl PropertiesParseContext {
    pub fn new(definitions: SharedDefinitions, options: SchemaParseOptions) -> Self {
        Self {
            definitions,
            options,
            keyword: KeywordTracker::new(),
            property_contexts: BTreeMap::new(),
        }
    }

    /// Build each property's validator and add it to `validator`.
    ///
    /// Properties whose schema can't be built are reported by their own
    /// context and left out.
    pub fn add_property_validators(
        self,
        validator: &mut ObjectValidator,
        logger: &mut SchemaErrorLogger,
    ) {
        for (name, schema) in self.property_contexts {
            if let Some(property) = schema.into_validator(logger) {
                validator.add_property(name, property);
            }
        }
    }

    fn report_error_for_type(&mut self, logger: &mut SchemaErrorLogger, found: JsonType) {
        self.keyword.take_pending();
        let error = if found.is_container() {
            SchemaParseError::StructuralMismatch {
                keyword: SchemaKeyword::Properties,
                expected: EXPECTED.to_string(),
                found,
            }
        } else {
            SchemaParseError::TypeMismatch {
                keyword: SchemaKeyword::Properties,
                expected: EXPECTED.to_string(),
                found,
            }
        };
        logger.error(error);
    }
}

impl ContextEvents for PropertiesParseContext {
    fn string(&mut self, logger: &mut SchemaErrorLogger, _value: &str) {
        self.report_error_for_type(logger, JsonType::String);
    }

    fn number(&mut self, logger: &mut SchemaErrorLogger, value: JsonNumber) {
        self.report_error_for_type(logger, JsonType::of_number(&value));
    }

    fn bool(&mut self, logger: &mut SchemaErrorLogger, _value: bool) {
        self.report_error_for_type(logger, JsonType::Boolean);
    }

    fn null(&mut self, logger: &mut SchemaErrorLogger) {
        self.report_error_for_type(logger, JsonType::Null);
    }

    fn open_array(&mut self, logger: &mut SchemaErrorLogger) -> Option<ParseContext> {
        self.report_error_for_type(logger, JsonType::Array);
        None
    }

    fn open_object(&mut self, logger: &mut SchemaErrorLogger) -> Option<ParseContext> {
        if !self.keyword.has_pending() {
            return None;
        }
        let schema =
            SchemaParseContext::new(self.definitions.clone(), self.options, logger.pointer());
        Some(ParseContext::Schema(Box::new(schema)))
    }

    fn object_key(&mut self, _logger: &mut SchemaErrorLogger, key: &str) {
        self.keyword.on_object_key(key.to_string());
    }

    fn close_child(&mut self, _logger: &mut SchemaErrorLogger, child: ParseContext) {
        let Some(name) = self.keyword.take_pending() else {
            return;
        };
        if let ParseContext::Schema(schema) = child {
            if self.property_contexts.insert(name.clone(), *schema).is_some() {
                trace!(property = %name, "property schema replaced");
            }
        }
    }
}
