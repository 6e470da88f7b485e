use super::{ContextEvents, KeywordTracker, ParseContext, SchemaParseContext};
use crate::definitions::SharedDefinitions;
use crate::error::{SchemaErrorLogger, SchemaParseError};
use crate::json_type::JsonType;
use crate::keywords::SchemaKeyword;
use crate::options::SchemaParseOptions;
use json_schema_events::JsonNumber;

const EXPECTED: &str = "a schema object";

/// Reads the object given to `definitions`.
///
/// Each named sub-schema is built as soon as it closes and registered in the
/// shared definitions cache, replacing any entry of the same name. Nothing
/// is handed back to the owning schema.
#[derive(Debug)]
pub struct DefinitionsParseContext {
    definitions: SharedDefinitions,
    options: SchemaParseOptions,
    keyword: KeywordTracker<String>,
}

impl DefinitionsParseContext {
    pub fn new(definitions: SharedDefinitions, options: SchemaParseOptions) -> Self {
        Self {
            definitions,
            options,
            keyword: KeywordTracker::new(),
        }
    }

    fn report_error_for_type(&mut self, logger: &mut SchemaErrorLogger, found: JsonType) {
        self.keyword.take_pending();
        let error = if found.is_container() {
            SchemaParseError::StructuralMismatch {
                keyword: SchemaKeyword::Definitions,
                expected: EXPECTED.to_string(),
                found,
            }
        } else {
            SchemaParseError::TypeMismatch {
                keyword: SchemaKeyword::Definitions,
                expected: EXPECTED.to_string(),
                found,
            }
        };
        logger.error(error);
    }
}

impl ContextEvents for DefinitionsParseContext {
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

    fn close_child(&mut self, logger: &mut SchemaErrorLogger, child: ParseContext) {
        let Some(name) = self.keyword.take_pending() else {
            return;
        };
        if let ParseContext::Schema(schema) = child {
            if let Some(validator) = schema.into_validator(logger) {
                self.definitions.borrow_mut().register(name, validator);
            }
        }
    }
}
