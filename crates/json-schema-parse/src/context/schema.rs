use super::{
    ArrayItemsParseContext, ContextEvents, DefinitionsParseContext, KeywordTracker, ParseContext,
    PropertiesParseContext, RequiredPropertiesParseContext,
};
use crate::definitions::SharedDefinitions;
use crate::error::{SchemaErrorLogger, SchemaParseError};
use crate::json_type::JsonType;
use crate::keywords::{CONSTRAINT_KEYWORDS, InstanceFamily, SchemaKeyword};
use crate::optional::OptionalItem;
use crate::options::SchemaParseOptions;
use crate::pointer::JsonPointer;
use crate::validator::{
    Additional, ArrayItems, ArrayValidator, BooleanValidator, NullValidator, NumberBound,
    NumberValidator, ObjectValidator, ReferenceValidator, StringValidator, Validator,
    ValidatorAnnotations, WildcardValidator,
};
use json_schema_events::JsonNumber;
use std::collections::{BTreeSet, HashSet};
use tracing::trace;

/// Reads one schema object and builds its validator.
///
/// Keyword values are checked against the JSON type each keyword takes as
/// they arrive; a bad value is reported and the keyword stays unset. Whether
/// a keyword fits the declared `type` is only checked in
/// [`SchemaParseContext::into_validator`], so `type` may come last.
#[derive(Debug)]
pub struct SchemaParseContext {
    definitions: SharedDefinitions,
    options: SchemaParseOptions,
    /// Where this schema object sits in the document
    location: JsonPointer,
    keyword: KeywordTracker<SchemaKeyword>,
    /// Recognised keywords seen so far, for duplicate detection
    seen: HashSet<SchemaKeyword>,

    // Fields follow the order of the draft.

    // Core and metadata
    id: OptionalItem<String>,
    schema: OptionalItem<String>,
    ref_schema: OptionalItem<String>,
    title: OptionalItem<String>,
    description: OptionalItem<String>,
    default_value: OptionalItem<serde_json::Value>,
    format: OptionalItem<String>,

    // Numbers
    multiple_of: OptionalItem<JsonNumber>,
    maximum: OptionalItem<JsonNumber>,
    exclusive_maximum: OptionalItem<bool>,
    minimum: OptionalItem<JsonNumber>,
    exclusive_minimum: OptionalItem<bool>,

    // Strings
    max_length: OptionalItem<u64>,
    min_length: OptionalItem<u64>,
    pattern: OptionalItem<String>,

    // Arrays. `additionalItems` is a bool or a schema, `items` a schema or
    // an array of schemas; at most one form of each is held.
    additional_items: OptionalItem<bool>,
    additional_items_context: Option<Box<SchemaParseContext>>,
    items_single_context: Option<Box<SchemaParseContext>>,
    items_context_array: Option<ArrayItemsParseContext>,
    max_items: OptionalItem<u64>,
    min_items: OptionalItem<u64>,
    unique_items: OptionalItem<bool>,

    // Objects
    max_properties: OptionalItem<u64>,
    min_properties: OptionalItem<u64>,
    required_items: Option<RequiredPropertiesParseContext>,
    additional_properties: OptionalItem<bool>,
    additional_properties_context: Option<Box<SchemaParseContext>>,
    properties_context: Option<PropertiesParseContext>,

    type_: JsonType,
}

impl SchemaParseContext {
    /// Create a context for the schema object at `location`.
    pub fn new(
        definitions: SharedDefinitions,
        options: SchemaParseOptions,
        location: JsonPointer,
    ) -> Self {
        Self {
            definitions,
            options,
            location,
            keyword: KeywordTracker::new(),
            seen: HashSet::new(),
            id: OptionalItem::new(),
            schema: OptionalItem::new(),
            ref_schema: OptionalItem::new(),
            title: OptionalItem::new(),
            description: OptionalItem::new(),
            default_value: OptionalItem::new(),
            format: OptionalItem::new(),
            multiple_of: OptionalItem::new(),
            maximum: OptionalItem::new(),
            exclusive_maximum: OptionalItem::new(),
            minimum: OptionalItem::new(),
            exclusive_minimum: OptionalItem::new(),
            max_length: OptionalItem::new(),
            min_length: OptionalItem::new(),
            pattern: OptionalItem::new(),
            additional_items: OptionalItem::new(),
            additional_items_context: None,
            items_single_context: None,
            items_context_array: None,
            max_items: OptionalItem::new(),
            min_items: OptionalItem::new(),
            unique_items: OptionalItem::new(),
            max_properties: OptionalItem::new(),
            min_properties: OptionalItem::new(),
            required_items: None,
            additional_properties: OptionalItem::new(),
            additional_properties_context: None,
            properties_context: None,
            type_: JsonType::Undefined,
        }
    }

    pub fn location(&self) -> &JsonPointer {
        &self.location
    }

    /// The type named by `type`, or `Undefined`.
    pub fn declared_type(&self) -> JsonType {
        self.type_
    }

    /// Build the validator for this schema object.
    ///
    /// With `$ref` set the result is a reference, resolved later by name.
    /// Otherwise keywords that don't fit the declared type are reported and
    /// dropped, and the validator matching the declared type is built. With
    /// no `type`, the type is inferred from the constraint keywords present.
    ///
    /// Returns `None` if the constraints can't form a validator; the problem
    /// has been reported.
    pub fn into_validator(mut self, logger: &mut SchemaErrorLogger) -> Option<Validator> {
        let annotations = self.take_annotations();

        if let Some(reference) = self.ref_schema.take() {
            let mut validator = ReferenceValidator::new(reference, &self.definitions);
            validator.annotations = annotations;
            return Some(Validator::Reference(validator));
        }

        let instance_type = match self.type_ {
            JsonType::Undefined => self.infer_type(logger)?,
            declared => {
                self.drop_incompatible_keywords(logger, declared);
                declared
            }
        };

        match instance_type {
            JsonType::Array => self
                .build_array_validator(logger, annotations)
                .map(Validator::Array),
            JsonType::Object => self
                .build_object_validator(logger, annotations)
                .map(Validator::Object),
            JsonType::String => self
                .build_string_validator(logger, annotations)
                .map(Validator::String),
            JsonType::Integer => self
                .build_number_validator(logger, annotations)
                .map(Validator::Integer),
            JsonType::Number => self
                .build_number_validator(logger, annotations)
                .map(Validator::Number),
            JsonType::Boolean => Some(Validator::Boolean(BooleanValidator { annotations })),
            JsonType::Null => Some(Validator::Null(NullValidator { annotations })),
            JsonType::Undefined => Some(Validator::Wildcard(WildcardValidator { annotations })),
        }
    }

    fn take_annotations(&mut self) -> ValidatorAnnotations {
        ValidatorAnnotations {
            id: self.id.take(),
            schema: self.schema.take(),
            title: self.title.take(),
            description: self.description.take(),
            default: self.default_value.take(),
        }
    }

    fn is_populated(&self, keyword: SchemaKeyword) -> bool {
        use SchemaKeyword as K;

        match keyword {
            K::MultipleOf => self.multiple_of.is_set(),
            K::Maximum => self.maximum.is_set(),
            K::ExclusiveMaximum => self.exclusive_maximum.is_set(),
            K::Minimum => self.minimum.is_set(),
            K::ExclusiveMinimum => self.exclusive_minimum.is_set(),
            K::MaxLength => self.max_length.is_set(),
            K::MinLength => self.min_length.is_set(),
            K::Pattern => self.pattern.is_set(),
            K::AdditionalItems => {
                self.additional_items.is_set() || self.additional_items_context.is_some()
            }
            K::Items => self.items_single_context.is_some() || self.items_context_array.is_some(),
            K::MaxItems => self.max_items.is_set(),
            K::MinItems => self.min_items.is_set(),
            K::UniqueItems => self.unique_items.is_set(),
            K::MaxProperties => self.max_properties.is_set(),
            K::MinProperties => self.min_properties.is_set(),
            K::Required => self.required_items.is_some(),
            K::AdditionalProperties => {
                self.additional_properties.is_set() || self.additional_properties_context.is_some()
            }
            K::Properties => self.properties_context.is_some(),
            _ => false,
        }
    }

    /// Forget whatever value `keyword` holds.
    fn reset_keyword(&mut self, keyword: SchemaKeyword) {
        use SchemaKeyword as K;

        match keyword {
            K::Id => self.id.reset(),
            K::Schema => self.schema.reset(),
            K::Ref => self.ref_schema.reset(),
            K::Title => self.title.reset(),
            K::Description => self.description.reset(),
            K::Default => self.default_value.reset(),
            K::Format => self.format.reset(),
            K::MultipleOf => self.multiple_of.reset(),
            K::Maximum => self.maximum.reset(),
            K::ExclusiveMaximum => self.exclusive_maximum.reset(),
            K::Minimum => self.minimum.reset(),
            K::ExclusiveMinimum => self.exclusive_minimum.reset(),
            K::MaxLength => self.max_length.reset(),
            K::MinLength => self.min_length.reset(),
            K::Pattern => self.pattern.reset(),
            K::AdditionalItems => {
                self.additional_items.reset();
                self.additional_items_context = None;
            }
            K::Items => {
                self.items_single_context = None;
                self.items_context_array = None;
            }
            K::MaxItems => self.max_items.reset(),
            K::MinItems => self.min_items.reset(),
            K::UniqueItems => self.unique_items.reset(),
            K::MaxProperties => self.max_properties.reset(),
            K::MinProperties => self.min_properties.reset(),
            K::Required => self.required_items = None,
            K::AdditionalProperties => {
                self.additional_properties.reset();
                self.additional_properties_context = None;
            }
            K::Properties => self.properties_context = None,
            K::Type => self.type_ = JsonType::Undefined,
            _ => {}
        }
    }

    /// Check that `keyword` takes a value of type `found`. On a mismatch the
    /// keyword is reported and reset.
    fn check_value_type(
        &mut self,
        logger: &mut SchemaErrorLogger,
        keyword: SchemaKeyword,
        found: JsonType,
    ) -> bool {
        let rule = keyword.value_rule();
        if rule.accepts(found) {
            return true;
        }

        let expected = rule.describe();
        let error = if found.is_container() {
            SchemaParseError::StructuralMismatch {
                keyword,
                expected,
                found,
            }
        } else {
            SchemaParseError::TypeMismatch {
                keyword,
                expected,
                found,
            }
        };
        logger.error(error);
        self.reset_keyword(keyword);
        false
    }

    fn size_slot(&mut self, keyword: SchemaKeyword) -> Option<&mut OptionalItem<u64>> {
        match keyword {
            SchemaKeyword::MaxLength => Some(&mut self.max_length),
            SchemaKeyword::MinLength => Some(&mut self.min_length),
            SchemaKeyword::MaxItems => Some(&mut self.max_items),
            SchemaKeyword::MinItems => Some(&mut self.min_items),
            SchemaKeyword::MaxProperties => Some(&mut self.max_properties),
            SchemaKeyword::MinProperties => Some(&mut self.min_properties),
            _ => None,
        }
    }

    /// Store a size keyword, which must be a non-negative integer.
    fn process_size(
        &mut self,
        logger: &mut SchemaErrorLogger,
        keyword: SchemaKeyword,
        value: JsonNumber,
    ) {
        match value.as_u64() {
            Some(size) => {
                if let Some(slot) = self.size_slot(keyword) {
                    slot.set(size);
                }
            }
            None => {
                logger.error(SchemaParseError::InvalidValue {
                    keyword,
                    reason: format!("must be a non-negative integer, not {}", value),
                });
                self.reset_keyword(keyword);
            }
        }
    }

    /// Resolve the instance type from the constraint keywords present.
    fn infer_type(&self, logger: &mut SchemaErrorLogger) -> Option<JsonType> {
        let populated: Vec<SchemaKeyword> = CONSTRAINT_KEYWORDS
            .into_iter()
            .filter(|keyword| self.is_populated(*keyword))
            .collect();
        let families: BTreeSet<InstanceFamily> = populated
            .iter()
            .filter_map(|keyword| keyword.instance_family())
            .collect();

        let mut families = families.into_iter();
        match (families.next(), families.next()) {
            (None, _) => Some(JsonType::Undefined),
            (Some(family), None) => {
                trace!(
                    location = %self.location,
                    inferred = %family.inferred_type(),
                    "inferred type"
                );
                Some(family.inferred_type())
            }
            (Some(_), Some(_)) => {
                let names: Vec<String> = populated.iter().map(|k| format!("`{}`", k)).collect();
                logger.error_at(
                    self.location.clone(),
                    SchemaParseError::BuildFailure {
                        reason: format!(
                            "without `type`, {} constrain more than one instance type",
                            names.join(", ")
                        ),
                    },
                );
                None
            }
        }
    }

    /// Report and forget each constraint keyword that doesn't apply to the
    /// declared type.
    fn drop_incompatible_keywords(&mut self, logger: &mut SchemaErrorLogger, declared: JsonType) {
        for keyword in CONSTRAINT_KEYWORDS {
            let compatible = keyword
                .instance_family()
                .is_none_or(|family| family.admits(declared));
            if compatible || !self.is_populated(keyword) {
                continue;
            }
            logger.error_at(
                self.location.child(keyword.as_str()),
                SchemaParseError::IncompatibleKeyword { keyword, declared },
            );
            self.reset_keyword(keyword);
        }
    }

    /// Report `min > max` for a pair of size keywords.
    fn check_size_bounds(
        &self,
        logger: &mut SchemaErrorLogger,
        min_keyword: SchemaKeyword,
        min: u64,
        max_keyword: SchemaKeyword,
        max: Option<u64>,
    ) -> bool {
        match max {
            Some(max) if min > max => {
                logger.error_at(
                    self.location.clone(),
                    SchemaParseError::BuildFailure {
                        reason: format!(
                            "`{}` ({}) is greater than `{}` ({})",
                            min_keyword, min, max_keyword, max
                        ),
                    },
                );
                false
            }
            _ => true,
        }
    }

    fn build_additional(
        &mut self,
        logger: &mut SchemaErrorLogger,
        keyword: SchemaKeyword,
    ) -> Additional {
        let (flag, context) = match keyword {
            SchemaKeyword::AdditionalItems => (
                self.additional_items.take(),
                self.additional_items_context.take(),
            ),
            _ => (
                self.additional_properties.take(),
                self.additional_properties_context.take(),
            ),
        };

        match context {
            Some(schema) => match schema.into_validator(logger) {
                Some(validator) => Additional::Schema(Box::new(validator)),
                None => Additional::default(),
            },
            None => Additional::Allowed(flag.unwrap_or(true)),
        }
    }

    fn build_array_validator(
        &mut self,
        logger: &mut SchemaErrorLogger,
        annotations: ValidatorAnnotations,
    ) -> Option<ArrayValidator> {
        let min_items = self.min_items.take().unwrap_or(0);
        let max_items = self.max_items.take();
        if !self.check_size_bounds(
            logger,
            SchemaKeyword::MinItems,
            min_items,
            SchemaKeyword::MaxItems,
            max_items,
        ) {
            return None;
        }

        let items = if let Some(single) = self.items_single_context.take() {
            match single.into_validator(logger) {
                Some(validator) => ArrayItems::Single(Box::new(validator)),
                None => ArrayItems::Unspecified,
            }
        } else if let Some(array) = self.items_context_array.take() {
            ArrayItems::Positional(array.build_validators(logger))
        } else {
            ArrayItems::Unspecified
        };

        Some(ArrayValidator {
            annotations,
            items,
            additional_items: self.build_additional(logger, SchemaKeyword::AdditionalItems),
            min_items,
            max_items,
            unique_items: self.unique_items.take().unwrap_or(false),
        })
    }

    fn build_object_validator(
        &mut self,
        logger: &mut SchemaErrorLogger,
        annotations: ValidatorAnnotations,
    ) -> Option<ObjectValidator> {
        let min_properties = self.min_properties.take().unwrap_or(0);
        let max_properties = self.max_properties.take();
        if !self.check_size_bounds(
            logger,
            SchemaKeyword::MinProperties,
            min_properties,
            SchemaKeyword::MaxProperties,
            max_properties,
        ) {
            return None;
        }

        let mut validator = ObjectValidator {
            annotations,
            min_properties,
            max_properties,
            ..ObjectValidator::default()
        };

        if let Some(properties) = self.properties_context.take() {
            properties.add_property_validators(&mut validator, logger);
        }
        if let Some(required) = self.required_items.take() {
            validator.required = required.collect_required_items();
        }
        validator.additional_properties =
            self.build_additional(logger, SchemaKeyword::AdditionalProperties);

        Some(validator)
    }

    fn build_string_validator(
        &mut self,
        logger: &mut SchemaErrorLogger,
        annotations: ValidatorAnnotations,
    ) -> Option<StringValidator> {
        let min_length = self.min_length.take().unwrap_or(0);
        let max_length = self.max_length.take();
        if !self.check_size_bounds(
            logger,
            SchemaKeyword::MinLength,
            min_length,
            SchemaKeyword::MaxLength,
            max_length,
        ) {
            return None;
        }

        Some(StringValidator {
            annotations,
            min_length,
            max_length,
            pattern: self.pattern.take(),
            format: self.format.take(),
        })
    }

    fn build_number_validator(
        &mut self,
        logger: &mut SchemaErrorLogger,
        annotations: ValidatorAnnotations,
    ) -> Option<NumberValidator> {
        let exclusive_minimum = self.exclusive_minimum.take().unwrap_or(false);
        let exclusive_maximum = self.exclusive_maximum.take().unwrap_or(false);
        let minimum = self.minimum.take().map(|value| NumberBound {
            value,
            exclusive: exclusive_minimum,
        });
        let maximum = self.maximum.take().map(|value| NumberBound {
            value,
            exclusive: exclusive_maximum,
        });

        if let (Some(min), Some(max)) = (minimum, maximum) {
            let empty = min.value > max.value
                || (min.value == max.value && (min.exclusive || max.exclusive));
            if empty {
                logger.error_at(
                    self.location.clone(),
                    SchemaParseError::BuildFailure {
                        reason: format!(
                            "no number satisfies `minimum` {} and `maximum` {}",
                            min.value, max.value
                        ),
                    },
                );
                return None;
            }
        }

        Some(NumberValidator {
            annotations,
            minimum,
            maximum,
            multiple_of: self.multiple_of.take(),
        })
    }

    fn new_child_schema(&self, logger: &SchemaErrorLogger) -> ParseContext {
        let schema =
            SchemaParseContext::new(self.definitions.clone(), self.options, logger.pointer());
        ParseContext::Schema(Box::new(schema))
    }
}

impl ContextEvents for SchemaParseContext {
    fn object_key(&mut self, logger: &mut SchemaErrorLogger, key: &str) {
        let keyword = SchemaKeyword::lookup(key);
        let repeated = keyword != SchemaKeyword::Unknown && !self.seen.insert(keyword);

        if repeated && self.options.reject_duplicate_keywords {
            logger.error(SchemaParseError::DuplicateKeyword { keyword });
            // The repeated value is read but not used
            self.keyword.on_object_key(SchemaKeyword::Unknown);
            return;
        }
        self.keyword.on_object_key(keyword);
    }

    fn string(&mut self, logger: &mut SchemaErrorLogger, value: &str) {
        let Some(keyword) = self.keyword.take_pending() else {
            return;
        };
        if !self.check_value_type(logger, keyword, JsonType::String) {
            return;
        }

        match keyword {
            SchemaKeyword::Id => self.id.set(value.to_string()),
            SchemaKeyword::Schema => self.schema.set(value.to_string()),
            SchemaKeyword::Ref => self.ref_schema.set(value.to_string()),
            SchemaKeyword::Title => self.title.set(value.to_string()),
            SchemaKeyword::Description => self.description.set(value.to_string()),
            SchemaKeyword::Pattern => self.pattern.set(value.to_string()),
            SchemaKeyword::Format => self.format.set(value.to_string()),
            SchemaKeyword::Default => self.default_value.set(serde_json::Value::from(value)),
            SchemaKeyword::Type => match JsonType::from_name(value) {
                Some(declared) => self.type_ = declared,
                None => {
                    logger.error(SchemaParseError::UnknownTypeName {
                        name: value.to_string(),
                    });
                    self.type_ = JsonType::Undefined;
                }
            },
            _ => {}
        }
    }

    fn number(&mut self, logger: &mut SchemaErrorLogger, value: JsonNumber) {
        let Some(keyword) = self.keyword.take_pending() else {
            return;
        };
        if !self.check_value_type(logger, keyword, JsonType::of_number(&value)) {
            return;
        }

        match keyword {
            SchemaKeyword::MultipleOf => {
                if value.is_positive() {
                    self.multiple_of.set(value);
                } else {
                    logger.error(SchemaParseError::InvalidValue {
                        keyword,
                        reason: format!("must be greater than 0, not {}", value),
                    });
                    self.multiple_of.reset();
                }
            }
            SchemaKeyword::Maximum => self.maximum.set(value),
            SchemaKeyword::Minimum => self.minimum.set(value),
            SchemaKeyword::MaxLength
            | SchemaKeyword::MinLength
            | SchemaKeyword::MaxItems
            | SchemaKeyword::MinItems
            | SchemaKeyword::MaxProperties
            | SchemaKeyword::MinProperties => self.process_size(logger, keyword, value),
            SchemaKeyword::Default => self.default_value.set(serde_json::Value::from(value)),
            _ => {}
        }
    }

    fn bool(&mut self, logger: &mut SchemaErrorLogger, value: bool) {
        let Some(keyword) = self.keyword.take_pending() else {
            return;
        };
        if !self.check_value_type(logger, keyword, JsonType::Boolean) {
            return;
        }

        match keyword {
            SchemaKeyword::ExclusiveMaximum => self.exclusive_maximum.set(value),
            SchemaKeyword::ExclusiveMinimum => self.exclusive_minimum.set(value),
            SchemaKeyword::UniqueItems => self.unique_items.set(value),
            SchemaKeyword::AdditionalItems => {
                self.additional_items.set(value);
                self.additional_items_context = None;
            }
            SchemaKeyword::AdditionalProperties => {
                self.additional_properties.set(value);
                self.additional_properties_context = None;
            }
            SchemaKeyword::Default => self.default_value.set(serde_json::Value::Bool(value)),
            _ => {}
        }
    }

    fn null(&mut self, logger: &mut SchemaErrorLogger) {
        let Some(keyword) = self.keyword.take_pending() else {
            return;
        };
        if !self.check_value_type(logger, keyword, JsonType::Null) {
            return;
        }

        if keyword == SchemaKeyword::Default {
            self.default_value.set(serde_json::Value::Null);
        }
    }

    fn open_array(&mut self, logger: &mut SchemaErrorLogger) -> Option<ParseContext> {
        let keyword = *self.keyword.peek_pending()?;
        if !self.check_value_type(logger, keyword, JsonType::Array) {
            self.keyword.take_pending();
            return None;
        }

        match keyword {
            SchemaKeyword::Required => Some(ParseContext::RequiredProperties(
                RequiredPropertiesParseContext::new(),
            )),
            SchemaKeyword::Items => Some(ParseContext::ArrayItems(ArrayItemsParseContext::new(
                self.definitions.clone(),
                self.options,
            ))),
            _ => {
                // enum, allOf, anyOf, oneOf, the array form of type, and
                // container defaults are accepted but not interpreted
                trace!(keyword = %keyword, location = %logger.pointer(), "skipping array value");
                if matches!(keyword, SchemaKeyword::Type | SchemaKeyword::Default) {
                    self.reset_keyword(keyword);
                }
                self.keyword.take_pending();
                None
            }
        }
    }

    fn open_object(&mut self, logger: &mut SchemaErrorLogger) -> Option<ParseContext> {
        let keyword = *self.keyword.peek_pending()?;
        if !self.check_value_type(logger, keyword, JsonType::Object) {
            self.keyword.take_pending();
            return None;
        }

        match keyword {
            SchemaKeyword::Properties => Some(ParseContext::Properties(PropertiesParseContext::new(
                self.definitions.clone(),
                self.options,
            ))),
            SchemaKeyword::Definitions => Some(ParseContext::Definitions(
                DefinitionsParseContext::new(self.definitions.clone(), self.options),
            )),
            SchemaKeyword::Items
            | SchemaKeyword::AdditionalItems
            | SchemaKeyword::AdditionalProperties => {
                Some(self.new_child_schema(logger))
            }
            _ => {
                // not, dependencies, patternProperties, object defaults and
                // unknown keywords
                trace!(keyword = %keyword, location = %logger.pointer(), "skipping object value");
                if keyword == SchemaKeyword::Default {
                    self.reset_keyword(keyword);
                }
                self.keyword.take_pending();
                None
            }
        }
    }

    fn close_child(&mut self, _logger: &mut SchemaErrorLogger, child: ParseContext) {
        let Some(keyword) = self.keyword.take_pending() else {
            return;
        };

        match (keyword, child) {
            (SchemaKeyword::Items, ParseContext::Schema(schema)) => {
                self.items_single_context = Some(schema);
                self.items_context_array = None;
            }
            (SchemaKeyword::Items, ParseContext::ArrayItems(items)) => {
                self.items_context_array = Some(items);
                self.items_single_context = None;
            }
            (SchemaKeyword::AdditionalItems, ParseContext::Schema(schema)) => {
                self.additional_items_context = Some(schema);
                self.additional_items.reset();
            }
            (SchemaKeyword::AdditionalProperties, ParseContext::Schema(schema)) => {
                self.additional_properties_context = Some(schema);
                self.additional_properties.reset();
            }
            (SchemaKeyword::Required, ParseContext::RequiredProperties(required)) => {
                self.required_items = Some(required);
            }
            (SchemaKeyword::Properties, ParseContext::Properties(properties)) => {
                self.properties_context = Some(properties);
            }
            // Entries were registered as each one closed
            (SchemaKeyword::Definitions, ParseContext::Definitions(_)) => {}
            (keyword, child) => {
                trace!(keyword = %keyword, child = child.kind_name(), "unexpected child context");
            }
        }
    }
}
