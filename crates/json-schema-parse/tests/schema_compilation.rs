use json_schema_events::{JsonNumber, walk};
use json_schema_parse::{
    Additional, ArrayItems, CompiledSchema, ErrorKind, JsonPointer, SchemaDefinitions,
    SchemaKeyword, SchemaParseError, SchemaParseOptions, SchemaParser, compile_str, compile_value,
};
use serde_json::{Value, json};

fn compile(schema: Value) -> CompiledSchema {
    compile_value(&schema, SchemaParseOptions::default())
}

fn locations(compiled: &CompiledSchema) -> Vec<&str> {
    compiled
        .diagnostics
        .iter()
        .map(|d| d.location.as_str())
        .collect()
}

#[test]
fn test_keyword_type_mismatch_reports_once_and_drops_keyword() {
    let cases = [
        (json!({"type": "string", "minLength": "5"}), "/minLength", SchemaKeyword::MinLength),
        (json!({"type": "number", "maximum": true}), "/maximum", SchemaKeyword::Maximum),
        (
            json!({"type": "array", "uniqueItems": "yes"}),
            "/uniqueItems",
            SchemaKeyword::UniqueItems,
        ),
        (json!({"title": 3}), "/title", SchemaKeyword::Title),
        (json!({"type": "object", "required": {"a": 1}}), "/required", SchemaKeyword::Required),
        (json!({"type": "object", "properties": [1]}), "/properties", SchemaKeyword::Properties),
        (json!({"type": "array", "items": 5}), "/items", SchemaKeyword::Items),
        (
            json!({"type": "object", "additionalProperties": "no"}),
            "/additionalProperties",
            SchemaKeyword::AdditionalProperties,
        ),
    ];

    for (schema, location, keyword) in cases {
        let compiled = compile(schema.clone());
        assert_eq!(compiled.diagnostics.len(), 1, "{}", schema);
        assert_eq!(compiled.diagnostics[0].location.as_str(), location);
        assert_eq!(compiled.diagnostics[0].error.keyword(), Some(keyword));
        assert!(compiled.validator.is_some(), "{}", schema);
    }
}

#[test]
fn test_mismatched_keywords_stay_unset() {
    let compiled = compile(json!({"type": "string", "minLength": "5"}));
    let string = compiled.validator.as_ref().and_then(|v| v.as_string()).unwrap();
    assert_eq!(string.min_length, 0);

    let compiled = compile(json!({"type": "object", "required": {"a": 1}}));
    assert_eq!(
        compiled.diagnostics[0].error.kind(),
        ErrorKind::StructuralMismatch
    );
    let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
    assert!(object.required.is_empty());

    let compiled = compile(json!({"type": "array", "items": 5}));
    let array = compiled.validator.as_ref().and_then(|v| v.as_array()).unwrap();
    assert_eq!(array.items, ArrayItems::Unspecified);

    let compiled = compile(json!({"title": 3}));
    let validator = compiled.validator.unwrap();
    assert_eq!(validator.type_name(), "any");
    assert!(validator.annotations().title.is_none());
}

#[test]
fn test_object_with_properties_and_required() {
    let orders = [
        json!({"type": "object", "properties": {"a": {"type": "string"}}, "required": ["a"]}),
        json!({"required": ["a"], "properties": {"a": {"type": "string"}}, "type": "object"}),
        json!({"properties": {"a": {"type": "string"}}, "type": "object", "required": ["a"]}),
    ];

    for schema in orders {
        let compiled = compile(schema);
        assert!(!compiled.has_errors());

        let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
        assert_eq!(object.properties.len(), 1);
        assert_eq!(object.property("a").map(|v| v.type_name()), Some("string"));
        assert!(object.is_required("a"));
    }
}

#[test]
fn test_definition_registered_twice_keeps_second() {
    let compiled = compile_str(
        r#"{"definitions": {"item": {"type": "string"}, "item": {"type": "integer"}}}"#,
        SchemaParseOptions::default(),
    )
    .unwrap();

    assert!(!compiled.has_errors());
    let definitions = compiled.definitions.borrow();
    assert_eq!(definitions.len(), 1);
    assert_eq!(
        definitions.lookup("item").map(|v| v.type_name()),
        Some("integer")
    );
}

#[test]
fn test_second_definitions_keyword_adds_and_replaces() {
    let compiled = compile_str(
        r#"{
            "definitions": {"a": {"type": "string"}},
            "definitions": {"a": {"type": "null"}, "b": {}}
        }"#,
        SchemaParseOptions::default(),
    )
    .unwrap();

    let definitions = compiled.definitions.borrow();
    assert_eq!(definitions.names(), vec!["a", "b"]);
    assert_eq!(definitions.lookup("a").map(|v| v.type_name()), Some("null"));
    assert_eq!(definitions.lookup("b").map(|v| v.type_name()), Some("any"));
}

#[test]
fn test_positional_items_keep_order() {
    let compiled = compile(json!({"items": [{"type": "number"}, {"type": "string"}]}));
    assert!(!compiled.has_errors());

    let array = compiled.validator.as_ref().and_then(|v| v.as_array()).unwrap();
    let ArrayItems::Positional(items) = &array.items else {
        panic!("expected positional items, got {:?}", array.items);
    };
    let types: Vec<&str> = items.iter().map(|item| item.validator.type_name()).collect();
    assert_eq!(types, vec!["number", "string"]);
    let indexes: Vec<usize> = items.iter().map(|item| item.index).collect();
    assert_eq!(indexes, vec![0, 1]);
}

#[test]
fn test_positional_items_survive_unknown_type() {
    let compiled = compile(json!({"items": [{"type": "number"}, {"type": "bogus"}]}));

    assert_eq!(compiled.diagnostics.len(), 1);
    assert_eq!(compiled.diagnostics[0].location.as_str(), "/items/1/type");
    assert_eq!(
        compiled.diagnostics[0].error.kind(),
        ErrorKind::UnknownTypeName
    );

    let array = compiled.validator.as_ref().and_then(|v| v.as_array()).unwrap();
    let ArrayItems::Positional(items) = &array.items else {
        panic!("expected positional items, got {:?}", array.items);
    };
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].validator.type_name(), "number");
}

#[test]
fn test_positional_item_that_fails_to_build_is_left_out() {
    let compiled = compile(json!({
        "items": [{"type": "string", "minLength": 3, "maxLength": 1}, {"type": "string"}]
    }));

    assert_eq!(locations(&compiled), vec!["/items/0"]);
    let array = compiled.validator.as_ref().and_then(|v| v.as_array()).unwrap();
    let ArrayItems::Positional(items) = &array.items else {
        panic!("expected positional items, got {:?}", array.items);
    };
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].index, 1);
    assert_eq!(items[0].validator.type_name(), "string");
}

#[test]
fn test_positional_items_keep_source_index_past_scalars() {
    let compiled = compile(json!({"items": [3, {"type": "null"}, [], {"type": "boolean"}]}));

    assert_eq!(locations(&compiled), vec!["/items/0", "/items/2"]);
    let array = compiled.validator.as_ref().and_then(|v| v.as_array()).unwrap();
    let ArrayItems::Positional(items) = &array.items else {
        panic!("expected positional items, got {:?}", array.items);
    };
    let got: Vec<(usize, &str)> = items
        .iter()
        .map(|item| (item.index, item.validator.type_name()))
        .collect();
    assert_eq!(got, vec![(1, "null"), (3, "boolean")]);
}

#[test]
fn test_required_names_collapse() {
    let compiled = compile(json!({"required": ["a", "a", "b"]}));
    assert!(!compiled.has_errors());

    let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
    let required: Vec<&str> = object.required.iter().map(String::as_str).collect();
    assert_eq!(required, vec!["a", "b"]);
}

#[test]
fn test_forward_reference_resolves_after_parsing() {
    let compiled = compile(json!({
        "type": "object",
        "properties": {"count": {"$ref": "#/definitions/positive"}},
        "definitions": {"positive": {"type": "integer", "minimum": 1}}
    }));
    assert!(!compiled.has_errors());
    assert!(compiled.unresolved_references().is_empty());

    let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
    let reference = object.property("count").and_then(|v| v.as_reference()).unwrap();
    assert_eq!(reference.name(), "positive");

    let target = reference.resolve().unwrap();
    assert_eq!(target.type_name(), "integer");
    let minimum = target.as_number().and_then(|n| n.minimum).unwrap();
    assert_eq!(minimum.value, JsonNumber::Int(1));
    assert!(!minimum.exclusive);
}

#[test]
fn test_reference_ignores_sibling_keywords() {
    let compiled = compile(json!({
        "$ref": "#/definitions/missing",
        "title": "Wrapped",
        "type": "string",
        "minItems": 3
    }));

    assert!(!compiled.has_errors());
    let validator = compiled.validator.as_ref().unwrap();
    let reference = validator.as_reference().unwrap();
    assert_eq!(reference.annotations.title.as_deref(), Some("Wrapped"));
    assert!(reference.resolve().is_none());
    assert_eq!(compiled.unresolved_references(), vec!["#/definitions/missing"]);
}

#[test]
fn test_reference_names() {
    let compiled = compile(json!({
        "properties": {
            "escaped": {"$ref": "#/definitions/a~1b"},
            "external": {"$ref": "other.json#/thing"}
        }
    }));

    let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
    let name = |property: &str| {
        object
            .property(property)
            .and_then(|v| v.as_reference())
            .map(|r| r.name().to_string())
    };
    assert_eq!(name("escaped").as_deref(), Some("a/b"));
    assert_eq!(name("external").as_deref(), Some("other.json#/thing"));
}

#[test]
fn test_reference_outliving_its_cache_does_not_resolve() {
    let compiled = compile(json!({
        "$ref": "#/definitions/x",
        "definitions": {"x": {"type": "null"}}
    }));
    let validator = compiled.validator.clone().unwrap();
    assert!(validator.as_reference().unwrap().resolve().is_some());

    drop(compiled);
    assert!(validator.as_reference().unwrap().resolve().is_none());
}

#[test]
fn test_definitions_shared_between_documents() {
    let definitions = SchemaDefinitions::shared();

    let mut first =
        SchemaParser::with_definitions(SchemaParseOptions::default(), definitions.clone());
    walk(&json!({"definitions": {"name": {"type": "string"}}}), &mut first);
    assert!(!first.finish().has_errors());

    let mut second =
        SchemaParser::with_definitions(SchemaParseOptions::default(), definitions.clone());
    walk(&json!({"$ref": "#/definitions/name"}), &mut second);
    let compiled = second.finish();

    let reference = compiled.validator.as_ref().and_then(|v| v.as_reference()).unwrap();
    assert_eq!(reference.resolve().map(|v| v.type_name()), Some("string"));
}

#[test]
fn test_keyword_incompatible_with_declared_type() {
    let compiled = compile(json!({"type": "string", "minLength": 5, "minItems": 2}));

    assert_eq!(compiled.diagnostics.len(), 1);
    assert_eq!(compiled.diagnostics[0].location.as_str(), "/minItems");
    assert_eq!(compiled.diagnostics[0].error.kind(), ErrorKind::TypeMismatch);
    assert_eq!(
        compiled.diagnostics[0].error,
        SchemaParseError::IncompatibleKeyword {
            keyword: SchemaKeyword::MinItems,
            declared: json_schema_parse::JsonType::String,
        }
    );

    let string = compiled.validator.as_ref().and_then(|v| v.as_string()).unwrap();
    assert_eq!(string.min_length, 5);
}

#[test]
fn test_type_declared_last() {
    let compiled = compile(json!({"minLength": 5, "pattern": "^a", "type": "string"}));
    assert!(!compiled.has_errors());
    let string = compiled.validator.as_ref().and_then(|v| v.as_string()).unwrap();
    assert_eq!(string.min_length, 5);
    assert_eq!(string.pattern.as_deref(), Some("^a"));

    let compiled = compile(json!({"maxItems": 1, "properties": {"a": {}}, "type": "object"}));
    assert_eq!(locations(&compiled), vec!["/maxItems"]);
    let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
    assert!(object.property("a").is_some());
}

#[test]
fn test_type_inferred_from_keywords() {
    let cases = [
        (json!({"minimum": 1}), "number"),
        (json!({"maxLength": 3}), "string"),
        (json!({"uniqueItems": true}), "array"),
        (json!({"additionalProperties": false}), "object"),
        (json!({"title": "anything"}), "any"),
        (json!({}), "any"),
    ];

    for (schema, expected) in cases {
        let compiled = compile(schema.clone());
        assert!(!compiled.has_errors(), "{}", schema);
        assert_eq!(compiled.validator.map(|v| v.type_name()), Some(expected), "{}", schema);
    }

    let compiled = compile(json!({"additionalProperties": false}));
    let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
    assert_eq!(object.additional_properties, Additional::Allowed(false));
}

#[test]
fn test_inference_across_families_fails() {
    let compiled = compile(json!({"minLength": 1, "minItems": 1}));
    assert!(compiled.validator.is_none());
    assert_eq!(locations(&compiled), vec![""]);
    assert_eq!(compiled.diagnostics[0].error.kind(), ErrorKind::BuildFailure);

    let compiled = compile(json!({
        "properties": {"bad": {"minimum": 1, "pattern": "x"}, "good": {"minimum": 1}}
    }));
    assert_eq!(locations(&compiled), vec!["/properties/bad"]);
    let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
    assert!(object.property("bad").is_none());
    assert!(object.property("good").is_some());
}

#[test]
fn test_conflicting_bounds() {
    let failing = [
        json!({"type": "array", "minItems": 3, "maxItems": 1}),
        json!({"type": "string", "minLength": 2, "maxLength": 1}),
        json!({"type": "object", "minProperties": 2, "maxProperties": 1}),
        json!({"type": "number", "minimum": 2.5, "maximum": 1}),
        json!({"type": "integer", "minimum": 5, "maximum": 5, "exclusiveMinimum": true}),
    ];
    for schema in failing {
        let compiled = compile(schema.clone());
        assert!(compiled.validator.is_none(), "{}", schema);
        assert_eq!(compiled.diagnostics.len(), 1, "{}", schema);
        assert_eq!(compiled.diagnostics[0].error.kind(), ErrorKind::BuildFailure);
    }

    let compiled = compile(json!({"type": "integer", "minimum": 5, "maximum": 5}));
    assert!(!compiled.has_errors());
    let number = compiled.validator.as_ref().and_then(|v| v.as_number()).unwrap();
    assert!(number.minimum.is_some() && number.maximum.is_some());
}

#[test]
fn test_out_of_range_values() {
    let compiled = compile(json!({"type": "string", "maxLength": -1}));
    assert_eq!(locations(&compiled), vec!["/maxLength"]);
    assert_eq!(compiled.diagnostics[0].error.kind(), ErrorKind::InvalidValue);
    let string = compiled.validator.as_ref().and_then(|v| v.as_string()).unwrap();
    assert_eq!(string.max_length, None);

    let compiled = compile(json!({"type": "number", "multipleOf": 0}));
    assert_eq!(locations(&compiled), vec!["/multipleOf"]);
    assert_eq!(compiled.diagnostics[0].error.kind(), ErrorKind::InvalidValue);

    let compiled = compile(json!({"minItems": 1.5}));
    assert_eq!(compiled.diagnostics[0].error.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_skipped_subtrees_keep_locations() {
    let compiled = compile(json!({
        "enum": [{"minLength": "x"}],
        "not": {"type": {"nested": [1, 2]}},
        "allOf": [{}, {}],
        "patternProperties": {"^x": {"minLength": "y"}},
        "dependencies": {"a": ["b"]},
        "x-extension": {"minLength": "z"},
        "minLength": "bad",
        "type": "string"
    }));

    assert_eq!(locations(&compiled), vec!["/minLength"]);
    assert_eq!(compiled.validator.map(|v| v.type_name()), Some("string"));

    let compiled = compile(json!({"items": [{"enum": [1, 2, 3]}, {"minLength": "x"}]}));
    assert_eq!(locations(&compiled), vec!["/items/1/minLength"]);
}

#[test]
fn test_type_array_and_container_default_are_skipped() {
    let compiled = compile(json!({
        "type": ["string", "null"],
        "default": {"a": [1]},
        "minLength": 1
    }));

    assert!(!compiled.has_errors());
    let validator = compiled.validator.unwrap();
    assert_eq!(validator.type_name(), "string");
    assert!(validator.annotations().default.is_none());

    let compiled = compile(json!({"type": "boolean", "default": true, "description": "Flag"}));
    let annotations = compiled.validator.as_ref().unwrap().annotations().clone();
    assert_eq!(annotations.default, Some(json!(true)));
    assert_eq!(annotations.description.as_deref(), Some("Flag"));
}

#[test]
fn test_locations_escape_property_names() {
    let compiled = compile(json!({"properties": {"a~b/c": {"type": "bogus"}}}));
    assert_eq!(locations(&compiled), vec!["/properties/a~0b~1c/type"]);
    assert_eq!(
        compiled.diagnostics[0].location,
        JsonPointer::root().child("properties").child("a~b/c").child("type")
    );
}

#[test]
fn test_single_schema_items_and_additional() {
    let compiled = compile(json!({
        "type": "array",
        "items": {"type": "integer"},
        "additionalItems": false,
        "maxItems": 4
    }));
    assert!(!compiled.has_errors());

    let array = compiled.validator.as_ref().and_then(|v| v.as_array()).unwrap();
    assert!(matches!(&array.items, ArrayItems::Single(item) if item.type_name() == "integer"));
    assert_eq!(array.additional_items, Additional::Allowed(false));
    assert_eq!(array.max_items, Some(4));

    let compiled = compile(json!({"additionalProperties": {"type": "string"}}));
    let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
    assert!(matches!(
        &object.additional_properties,
        Additional::Schema(schema) if schema.type_name() == "string"
    ));
}

#[test]
fn test_strict_mode_reports_duplicate_keywords() {
    let text = r#"{"type": "string", "type": "integer", "minLength": 1}"#;

    let compiled = compile_str(text, SchemaParseOptions::strict()).unwrap();
    assert_eq!(locations(&compiled), vec!["/type"]);
    assert_eq!(
        compiled.diagnostics[0].error.kind(),
        ErrorKind::DuplicateKeyword
    );
    let string = compiled.validator.as_ref().and_then(|v| v.as_string()).unwrap();
    assert_eq!(string.min_length, 1);

    // Without strict mode the last `type` wins
    let compiled = compile_str(text, SchemaParseOptions::default()).unwrap();
    assert_eq!(locations(&compiled), vec!["/minLength"]);
    assert_eq!(compiled.validator.map(|v| v.type_name()), Some("integer"));
}

#[test]
fn test_strict_mode_keeps_first_properties() {
    let text = r#"{"properties": {"a": {}}, "properties": {"b": {}}}"#;

    let compiled = compile_str(text, SchemaParseOptions::strict()).unwrap();
    assert_eq!(compiled.diagnostics.len(), 1);
    let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
    assert!(object.property("a").is_some());
    assert!(object.property("b").is_none());

    let compiled = compile_str(text, SchemaParseOptions::default()).unwrap();
    assert!(!compiled.has_errors());
    let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
    assert!(object.property("a").is_none());
    assert!(object.property("b").is_some());
}

#[test]
fn test_depth_limit() {
    let schema = json!({"properties": {"a": {"properties": {"b": {}}}}});

    let compiled = compile_value(&schema, SchemaParseOptions::default().with_max_depth(3));
    assert_eq!(locations(&compiled), vec!["/properties/a/properties"]);
    assert_eq!(
        compiled.diagnostics[0].error,
        SchemaParseError::NestingTooDeep { limit: 3 }
    );
    let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
    assert_eq!(object.property("a").map(|v| v.type_name()), Some("any"));

    let compiled = compile(schema);
    assert!(!compiled.has_errors());
}

#[test]
fn test_json_text_source() {
    let compiled = compile_str(
        r#"{
            "type": "number",
            "minimum": -1.5,
            "maximum": 1e3,
            "exclusiveMaximum": true,
            "multipleOf": 0.5
        }"#,
        SchemaParseOptions::default(),
    )
    .unwrap();
    assert!(!compiled.has_errors());

    let number = compiled.validator.as_ref().and_then(|v| v.as_number()).unwrap();
    assert_eq!(number.minimum.map(|b| b.value), Some(JsonNumber::Float(-1.5)));
    let maximum = number.maximum.unwrap();
    assert_eq!(maximum.value, JsonNumber::Int(1000));
    assert!(maximum.exclusive);
    assert_eq!(number.multiple_of, Some(JsonNumber::Float(0.5)));
}

#[test]
fn test_malformed_text_is_an_error() {
    assert!(compile_str(r#"{"type": "string""#, SchemaParseOptions::default()).is_err());

    let compiled = compile_str("[1, 2]", SchemaParseOptions::default()).unwrap();
    assert!(compiled.validator.is_none());
    assert_eq!(compiled.diagnostics.len(), 1);
}

#[test]
fn test_text_source_decodes_surrogate_pairs() {
    let compiled = compile_str(
        r#"{"title": "\ud83d\ude00", "type": "string"}"#,
        SchemaParseOptions::default(),
    )
    .unwrap();
    assert!(!compiled.has_errors());

    let validator = compiled.validator.as_ref().unwrap();
    assert_eq!(validator.type_name(), "string");
    assert_eq!(validator.annotations().title.as_deref(), Some("\u{1F600}"));
}

#[test]
fn test_text_source_rejects_non_json() {
    let options = SchemaParseOptions::default;
    assert!(compile_str("{type: string, minLength: 2}", options()).is_err());
    assert!(compile_str("{'type': 'string'}", options()).is_err());
    assert!(compile_str(r#"{"minimum": -inf, "type": "number"}"#, options()).is_err());
    assert!(compile_str(r#"{"maximum": NaN}"#, options()).is_err());
}
