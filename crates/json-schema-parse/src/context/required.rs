use super::{ContextEvents, ParseContext};
use crate::error::{SchemaErrorLogger, SchemaParseError};
use crate::json_type::JsonType;
use crate::keywords::SchemaKeyword;
use json_schema_events::JsonNumber;
use std::collections::BTreeSet;

const EXPECTED: &str = "an array of strings";

/// Reads the array of property names given to `required`.
///
/// Repeated names collapse. Anything that is not a string is reported and
/// skipped; the rest of the array is still read.
#[derive(Debug, Default)]
pub struct RequiredPropertiesParseContext {
    required_items: BTreeSet<String>,
}

impl RequiredPropertiesParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The names collected so far.
    pub fn collect_required_items(self) -> BTreeSet<String> {
        self.required_items
    }

    fn report_error_for_type(&self, logger: &mut SchemaErrorLogger, found: JsonType) {
        let error = if found.is_container() {
            SchemaParseError::StructuralMismatch {
                keyword: SchemaKeyword::Required,
                expected: EXPECTED.to_string(),
                found,
            }
        } else {
            SchemaParseError::TypeMismatch {
                keyword: SchemaKeyword::Required,
                expected: EXPECTED.to_string(),
                found,
            }
        };
        logger.error(error);
    }
}

impl ContextEvents for RequiredPropertiesParseContext {
    fn string(&mut self, _logger: &mut SchemaErrorLogger, value: &str) {
        self.required_items.insert(value.to_string());
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
        self.report_error_for_type(logger, JsonType::Object);
        None
    }

    fn object_key(&mut self, _logger: &mut SchemaErrorLogger, _key: &str) {}

    fn close_child(&mut self, _logger: &mut SchemaErrorLogger, _child: ParseContext) {}
}
