//! The event driver.
//!
//! [`SchemaParser`] receives JSON events, keeps the stack of active parse
//! contexts and routes each event to the innermost one. It also keeps the
//! pointer tracker current (through the logger) for every event, including
//! events inside subtrees that no context wanted.

use crate::context::{ContextEvents, ParseContext, SchemaParseContext};
use crate::definitions::{SchemaDefinitions, SharedDefinitions};
use crate::error::{SchemaDiagnostic, SchemaErrorLogger, SchemaParseError};
use crate::json_type::JsonType;
use crate::options::SchemaParseOptions;
use crate::pointer::JsonPointer;
use crate::validator::Validator;
use json_schema_error_reporting::{DiagnosticKind, DiagnosticMessage, DiagnosticMessageBuilder};
use json_schema_events::{JsonEventHandler, JsonNumber};
use std::rc::Rc;
use tracing::{debug, trace};

/// Builds a validator from a stream of JSON events.
///
/// # Example
///
/// ```
/// use json_schema_parse::SchemaParser;
///
/// let mut parser = SchemaParser::new();
/// json_schema_events::parse(r#"{"type": "string", "minLength": 2}"#, &mut parser).unwrap();
/// let compiled = parser.finish();
///
/// assert!(!compiled.has_errors());
/// assert_eq!(compiled.validator.unwrap().type_name(), "string");
/// ```
#[derive(Debug)]
pub struct SchemaParser {
    options: SchemaParseOptions,
    definitions: SharedDefinitions,
    logger: SchemaErrorLogger,
    stack: Vec<ParseContext>,
    /// Open containers inside a subtree being skipped
    skip_depth: usize,
    validator: Option<Validator>,
    /// Whether the root value has started
    started: bool,
}

impl Default for SchemaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaParser {
    pub fn new() -> Self {
        Self::with_options(SchemaParseOptions::default())
    }

    pub fn with_options(options: SchemaParseOptions) -> Self {
        Self::with_definitions(options, SchemaDefinitions::shared())
    }

    /// Use a caller supplied definitions cache. Entries already in it can
    /// be referenced, and entries of this document are added to it.
    pub fn with_definitions(options: SchemaParseOptions, definitions: SharedDefinitions) -> Self {
        Self {
            options,
            definitions,
            logger: SchemaErrorLogger::new(),
            stack: Vec::new(),
            skip_depth: 0,
            validator: None,
            started: false,
        }
    }

    pub fn options(&self) -> &SchemaParseOptions {
        &self.options
    }

    pub fn definitions(&self) -> &SharedDefinitions {
        &self.definitions
    }

    /// Problems reported so far.
    pub fn diagnostics(&self) -> &[SchemaDiagnostic] {
        self.logger.diagnostics()
    }

    /// End of input. Returns the compiled validator, if one could be built,
    /// along with everything reported.
    pub fn finish(mut self) -> CompiledSchema {
        if !self.started || !self.stack.is_empty() {
            self.logger
                .error_at(JsonPointer::root(), SchemaParseError::IncompleteDocument);
        }

        CompiledSchema {
            validator: self.validator,
            definitions: self.definitions,
            diagnostics: self.logger.into_diagnostics(),
        }
    }

    /// A non-object value at the very top of the document.
    fn reject_root(&mut self, found: JsonType) {
        if self.started {
            return;
        }
        self.started = true;
        self.logger
            .error_at(JsonPointer::root(), SchemaParseError::RootNotObject { found });
    }

    fn skip_subtree(&mut self) {
        self.skip_depth += 1;
        trace!(location = %self.logger.pointer(), "skipping subtree");
    }

    /// Push the child an open produced, or skip its subtree if there was
    /// none or the stack is already at the depth limit.
    fn enter(&mut self, child: Option<ParseContext>) {
        let Some(child) = child else {
            self.skip_subtree();
            return;
        };

        if self.stack.len() >= self.options.max_depth {
            self.logger.error(SchemaParseError::NestingTooDeep {
                limit: self.options.max_depth,
            });
            self.skip_subtree();
            return;
        }

        trace!(kind = child.kind_name(), location = %self.logger.pointer(), "push context");
        self.stack.push(child);
    }

    fn leave(&mut self) {
        self.logger.tracker_mut().pop();

        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return;
        }

        let Some(child) = self.stack.pop() else {
            return;
        };
        trace!(kind = child.kind_name(), "pop context");

        match self.stack.last_mut() {
            Some(parent) => parent.close_child(&mut self.logger, child),
            None => {
                if let ParseContext::Schema(schema) = child {
                    self.validator = schema.into_validator(&mut self.logger);
                    debug!(
                        validator = self.validator.as_ref().map_or("none", Validator::type_name),
                        errors = self.logger.diagnostics().len(),
                        "schema compiled"
                    );
                }
            }
        }
    }

    /// Route a scalar to the active context, unless it is being skipped.
    fn scalar(
        &mut self,
        found: JsonType,
        deliver: impl FnOnce(&mut ParseContext, &mut SchemaErrorLogger),
    ) {
        self.logger.tracker_mut().begin_value();
        if self.skip_depth > 0 {
            return;
        }
        match self.stack.last_mut() {
            Some(context) => deliver(context, &mut self.logger),
            None => self.reject_root(found),
        }
    }
}

impl JsonEventHandler for SchemaParser {
    fn string(&mut self, value: &str) {
        self.scalar(JsonType::String, |ctx, logger| ctx.string(logger, value));
    }

    fn number(&mut self, value: JsonNumber) {
        self.scalar(JsonType::of_number(&value), |ctx, logger| ctx.number(logger, value));
    }

    fn bool(&mut self, value: bool) {
        self.scalar(JsonType::Boolean, |ctx, logger| ctx.bool(logger, value));
    }

    fn null(&mut self) {
        self.scalar(JsonType::Null, |ctx, logger| ctx.null(logger));
    }

    fn open_array(&mut self) {
        self.logger.tracker_mut().begin_value();

        if self.skip_depth > 0 {
            self.skip_depth += 1;
        } else if let Some(context) = self.stack.last_mut() {
            let child = context.open_array(&mut self.logger);
            self.enter(child);
        } else {
            self.reject_root(JsonType::Array);
            self.skip_depth = 1;
        }

        self.logger.tracker_mut().push_array();
    }

    fn close_array(&mut self) {
        self.leave();
    }

    fn open_object(&mut self) {
        self.logger.tracker_mut().begin_value();

        if self.skip_depth > 0 {
            self.skip_depth += 1;
        } else if let Some(context) = self.stack.last_mut() {
            let child = context.open_object(&mut self.logger);
            self.enter(child);
        } else if self.started {
            // A second top-level value
            self.skip_depth = 1;
        } else {
            self.started = true;
            let root = SchemaParseContext::new(
                self.definitions.clone(),
                self.options,
                JsonPointer::root(),
            );
            trace!("push root schema");
            self.stack.push(ParseContext::Schema(Box::new(root)));
        }

        self.logger.tracker_mut().push_object();
    }

    fn object_key(&mut self, key: &str) {
        self.logger.tracker_mut().set_property(key);
        if self.skip_depth > 0 {
            return;
        }
        if let Some(context) = self.stack.last_mut() {
            context.object_key(&mut self.logger, key);
        }
    }

    fn close_object(&mut self) {
        self.leave();
    }
}

/// The result of compiling one schema document.
#[derive(Debug)]
pub struct CompiledSchema {
    /// `None` if the root schema couldn't be built
    pub validator: Option<Validator>,
    pub definitions: SharedDefinitions,
    pub diagnostics: Vec<SchemaDiagnostic>,
}

impl CompiledSchema {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Look up a definition by `$ref` value or bare name.
    pub fn resolve(&self, reference: &str) -> Option<Rc<Validator>> {
        let name = crate::definitions::definition_name(reference);
        self.definitions.borrow().lookup(&name)
    }

    /// `$ref` values, in the root validator or any definition, that name
    /// nothing in the definitions cache. Sorted, without repeats.
    pub fn unresolved_references(&self) -> Vec<String> {
        let definitions = self.definitions.borrow();
        let trees: Vec<Rc<Validator>> = definitions
            .names()
            .into_iter()
            .filter_map(|name| definitions.lookup(name))
            .collect();

        let mut unresolved: Vec<String> = self
            .validator
            .iter()
            .chain(trees.iter().map(|tree| &**tree))
            .flat_map(Validator::references)
            .filter(|reference| reference.resolve().is_none())
            .map(|reference| reference.reference().to_string())
            .collect();

        unresolved.sort();
        unresolved.dedup();
        unresolved
    }

    /// Every report as a [`DiagnosticMessage`], followed by a warning for
    /// each unresolved reference.
    pub fn diagnostic_messages(&self) -> Vec<DiagnosticMessage> {
        let mut messages: Vec<DiagnosticMessage> = self
            .diagnostics
            .iter()
            .map(SchemaDiagnostic::to_diagnostic_message)
            .collect();

        for reference in self.unresolved_references() {
            messages.push(
                DiagnosticMessageBuilder::from_code(DiagnosticKind::Warning, "JS-2-1")
                    .problem(format!("`$ref` `{}` names no registered definition", reference))
                    .add_info("Add it under `definitions`, or register it before compiling")
                    .build(),
            );
        }

        messages
    }
}

/// Compile a schema written as JSON text.
///
/// Fails only if the text is not well-formed; problems with the schema
/// itself are in the returned diagnostics.
pub fn compile_str(
    text: &str,
    options: SchemaParseOptions,
) -> json_schema_events::Result<CompiledSchema> {
    let mut parser = SchemaParser::with_options(options);
    json_schema_events::parse(text, &mut parser)?;
    Ok(parser.finish())
}

/// Compile a schema held as a `serde_json::Value`.
pub fn compile_value(value: &serde_json::Value, options: SchemaParseOptions) -> CompiledSchema {
    let mut parser = SchemaParser::with_options(options);
    json_schema_events::walk(value, &mut parser);
    parser.finish()
}
