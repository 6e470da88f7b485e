//! # json-schema-parse
//!
//! Compiles JSON Schema (draft-04) documents into validator trees without
//! first building a JSON tree.
//!
//! ## Design
//!
//! The document arrives as a stream of events (see `json-schema-events`).
//! [`SchemaParser`] keeps a stack of parse contexts, one per nesting level,
//! and hands each event to the innermost one:
//!
//! - a [`SchemaParseContext`] for every schema object, which stores each
//!   keyword it recognises and builds a [`Validator`] when the object closes;
//! - aggregators for the values of `properties`, `items` (array form),
//!   `required` and `definitions`.
//!
//! Child contexts are owned by the stack while open and moved into their
//! parent when they close. A value no context wants is skipped as a whole.
//!
//! Problems never stop compilation. Each one is reported to the
//! [`SchemaErrorLogger`] with the JSON Pointer of the offending value, the
//! keyword is dropped, and the rest of the document is compiled.
//!
//! `$ref` is not followed while parsing. The validator keeps the name and a
//! handle to the shared [`SchemaDefinitions`], so a reference may name a
//! definition that appears later in the document.
//!
//! ## Example
//!
//! ```rust
//! use json_schema_parse::{SchemaParseOptions, compile_str};
//!
//! let schema = r#"{
//!     "type": "object",
//!     "properties": { "name": { "type": "string", "minLength": 1 } },
//!     "required": ["name"]
//! }"#;
//!
//! let compiled = compile_str(schema, SchemaParseOptions::default()).unwrap();
//! let object = compiled.validator.as_ref().and_then(|v| v.as_object()).unwrap();
//! assert!(object.is_required("name"));
//! assert_eq!(object.property("name").unwrap().type_name(), "string");
//! ```

pub mod context;
pub mod definitions;
pub mod error;
pub mod json_type;
pub mod keywords;
pub mod optional;
pub mod options;
pub mod parser;
pub mod pointer;
pub mod validator;

pub use context::{ContextEvents, ParseContext, SchemaParseContext};
pub use definitions::{SchemaDefinitions, SharedDefinitions, definition_name};
pub use error::{ErrorKind, SchemaDiagnostic, SchemaErrorLogger, SchemaParseError};
pub use json_type::JsonType;
pub use keywords::SchemaKeyword;
pub use optional::OptionalItem;
pub use options::SchemaParseOptions;
pub use parser::{CompiledSchema, SchemaParser, compile_str, compile_value};
pub use pointer::JsonPointer;
pub use validator::{
    Additional, ArrayItems, ArrayValidator, NumberBound, NumberValidator, ObjectValidator,
    PositionalItem, ReferenceValidator, StringValidator, Validator, ValidatorAnnotations,
};
