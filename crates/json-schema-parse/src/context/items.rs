use super::{ContextEvents, ParseContext, SchemaParseContext};
use crate::definitions::SharedDefinitions;
use crate::error::{SchemaErrorLogger, SchemaParseError};
use crate::json_type::JsonType;
use crate::keywords::SchemaKeyword;
use crate::options::SchemaParseOptions;
use crate::validator::PositionalItem;
use json_schema_events::JsonNumber;

const EXPECTED: &str = "an array of schema objects";

/// Reads the array form of `items`: one sub-schema per position.
#[derive(Debug)]
pub struct ArrayItemsParseContext {
    definitions: SharedDefinitions,
    options: SchemaParseOptions,
    item_schemas: Vec<(usize, SchemaParseContext)>,
    /// Index of the next element of the `items` array
    next_index: usize,
    /// Index of the element whose schema is being read
    open_index: Option<usize>,
}

impl ArrayItemsParseContext {
    pub fn new(definitions: SharedDefinitions, options: SchemaParseOptions) -> Self {
        Self {
            definitions,
            options,
            item_schemas: Vec::new(),
            next_index: 0,
            open_index: None,
        }
    }

    /// Build the validator of each element, in array order.
    ///
    /// Elements that fail to build are reported by their own context and
    /// left out, so the result may be shorter than the array. Each item keeps
    /// the index of the element it came from.
    pub fn build_validators(self, logger: &mut SchemaErrorLogger) -> Vec<PositionalItem> {
        self.item_schemas
            .into_iter()
            .filter_map(|(index, schema)| {
                schema
                    .into_validator(logger)
                    .map(|validator| PositionalItem { index, validator })
            })
            .collect()
    }

    fn next_element(&mut self) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    fn report_error_for_type(&mut self, logger: &mut SchemaErrorLogger, found: JsonType) {
        self.next_element();
        let error = if found.is_container() {
            SchemaParseError::StructuralMismatch {
                keyword: SchemaKeyword::Items,
                expected: EXPECTED.to_string(),
                found,
            }
        } else {
            SchemaParseError::TypeMismatch {
                keyword: SchemaKeyword::Items,
                expected: EXPECTED.to_string(),
                found,
            }
        };
        logger.error(error);
    }
}

impl ContextEvents for ArrayItemsParseContext {
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
        self.open_index = Some(self.next_element());
        let schema =
            SchemaParseContext::new(self.definitions.clone(), self.options, logger.pointer());
        Some(ParseContext::Schema(Box::new(schema)))
    }

    fn object_key(&mut self, _logger: &mut SchemaErrorLogger, _key: &str) {}

    fn close_child(&mut self, _logger: &mut SchemaErrorLogger, child: ParseContext) {
        if let (ParseContext::Schema(schema), Some(index)) = (child, self.open_index.take()) {
            self.item_schemas.push((index, *schema));
        }
    }
}
