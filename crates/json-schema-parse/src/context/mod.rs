//! Parse contexts.
//!
//! One context is active per nesting level of the schema document. The
//! driver routes every event to the innermost context; opening an array or
//! object asks that context for a child, which the driver pushes. When the
//! child's container closes the driver pops it and hands it back to its
//! parent through [`ContextEvents::close_child`], moving ownership with it.
//!
//! Returning `None` from an open declines the child; the driver then skips
//! the whole subtree without delivering its events to anyone.

mod definitions;
mod items;
mod keyword_tracker;
mod properties;
mod required;
mod schema;

pub use definitions::DefinitionsParseContext;
pub use items::ArrayItemsParseContext;
pub use keyword_tracker::KeywordTracker;
pub use properties::PropertiesParseContext;
pub use required::RequiredPropertiesParseContext;
pub use schema::SchemaParseContext;

use crate::error::SchemaErrorLogger;
use json_schema_events::JsonNumber;

/// Events delivered to a context. Every method takes the error sink so
/// problems are reported at the current document location.
pub trait ContextEvents {
    fn string(&mut self, logger: &mut SchemaErrorLogger, value: &str);
    fn number(&mut self, logger: &mut SchemaErrorLogger, value: JsonNumber);
    fn bool(&mut self, logger: &mut SchemaErrorLogger, value: bool);
    fn null(&mut self, logger: &mut SchemaErrorLogger);

    /// An array starts here. Returns the context that reads it, if any.
    fn open_array(&mut self, logger: &mut SchemaErrorLogger) -> Option<ParseContext>;

    /// An object starts here. Returns the context that reads it, if any.
    fn open_object(&mut self, logger: &mut SchemaErrorLogger) -> Option<ParseContext>;

    fn object_key(&mut self, logger: &mut SchemaErrorLogger, key: &str);

    /// A child returned by an open has been fully read.
    fn close_child(&mut self, logger: &mut SchemaErrorLogger, child: ParseContext);
}

/// The closed set of context kinds.
#[derive(Debug)]
pub enum ParseContext {
    Schema(Box<SchemaParseContext>),
    Properties(PropertiesParseContext),
    ArrayItems(ArrayItemsParseContext),
    RequiredProperties(RequiredPropertiesParseContext),
    Definitions(DefinitionsParseContext),
}

impl ParseContext {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParseContext::Schema(_) => "schema",
            ParseContext::Properties(_) => "properties",
            ParseContext::ArrayItems(_) => "items",
            ParseContext::RequiredProperties(_) => "required",
            ParseContext::Definitions(_) => "definitions",
        }
    }

    fn events(&mut self) -> &mut dyn ContextEvents {
        match self {
            ParseContext::Schema(ctx) => ctx.as_mut(),
            ParseContext::Properties(ctx) => ctx,
            ParseContext::ArrayItems(ctx) => ctx,
            ParseContext::RequiredProperties(ctx) => ctx,
            ParseContext::Definitions(ctx) => ctx,
        }
    }
}

impl ContextEvents for ParseContext {
    fn string(&mut self, logger: &mut SchemaErrorLogger, value: &str) {
        self.events().string(logger, value);
    }

    fn number(&mut self, logger: &mut SchemaErrorLogger, value: JsonNumber) {
        self.events().number(logger, value);
    }

    fn bool(&mut self, logger: &mut SchemaErrorLogger, value: bool) {
        self.events().bool(logger, value);
    }

    fn null(&mut self, logger: &mut SchemaErrorLogger) {
        self.events().null(logger);
    }

    fn open_array(&mut self, logger: &mut SchemaErrorLogger) -> Option<ParseContext> {
        self.events().open_array(logger)
    }

    fn open_object(&mut self, logger: &mut SchemaErrorLogger) -> Option<ParseContext> {
        self.events().open_object(logger)
    }

    fn object_key(&mut self, logger: &mut SchemaErrorLogger, key: &str) {
        self.events().object_key(logger, key);
    }

    fn close_child(&mut self, logger: &mut SchemaErrorLogger, child: ParseContext) {
        self.events().close_child(logger, child);
    }
}
