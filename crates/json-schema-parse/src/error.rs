// Errors reported while compiling a schema, and the logger that collects them

use crate::json_type::JsonType;
use crate::keywords::SchemaKeyword;
use crate::pointer::{JsonPointer, PointerTracker};
use json_schema_error_reporting::{DiagnosticKind, DiagnosticMessage, DiagnosticMessageBuilder};
use thiserror::Error;
use tracing::debug;

/// One problem found in a schema document.
///
/// None of these stop compilation: the offending keyword (or sub-schema) is
/// dropped and the rest of the document is still compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaParseError {
    /// A keyword received a scalar of the wrong JSON type
    #[error("`{keyword}` must be {expected}, not {}", .found.with_article())]
    TypeMismatch {
        keyword: SchemaKeyword,
        expected: String,
        found: JsonType,
    },

    /// A keyword received an array or object where it does not take one
    #[error("`{keyword}` must be {expected}, not {}", .found.with_article())]
    StructuralMismatch {
        keyword: SchemaKeyword,
        expected: String,
        found: JsonType,
    },

    /// `type` named something outside the seven instance types
    #[error("`type` names unknown type `{name}`")]
    UnknownTypeName { name: String },

    /// A constraint keyword that does not apply to the declared type
    #[error("`{keyword}` can't be used with type `{declared}`")]
    IncompatibleKeyword {
        keyword: SchemaKeyword,
        declared: JsonType,
    },

    /// The value has the right type but is out of range
    #[error("`{keyword}` {reason}")]
    InvalidValue {
        keyword: SchemaKeyword,
        reason: String,
    },

    /// The collected constraints can't form a validator
    #[error("Can't build a validator: {reason}")]
    BuildFailure { reason: String },

    /// A keyword appeared twice in one schema object (strict mode only)
    #[error("`{keyword}` appears more than once in the same schema")]
    DuplicateKeyword { keyword: SchemaKeyword },

    /// Sub-schemas nested deeper than the configured limit
    #[error("Schema is nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    /// The document root must be a schema object
    #[error("The schema document must be an object, not {}", .found.with_article())]
    RootNotObject { found: JsonType },

    /// The event stream ended before the root object was closed
    #[error("The schema document ended before the root object was closed")]
    IncompleteDocument,
}

/// Coarse classification of a [`SchemaParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    UnknownTypeName,
    StructuralMismatch,
    InvalidValue,
    BuildFailure,
    DuplicateKeyword,
}

impl SchemaParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchemaParseError::TypeMismatch { .. }
            | SchemaParseError::IncompatibleKeyword { .. } => ErrorKind::TypeMismatch,
            SchemaParseError::UnknownTypeName { .. } => ErrorKind::UnknownTypeName,
            SchemaParseError::StructuralMismatch { .. }
            | SchemaParseError::NestingTooDeep { .. }
            | SchemaParseError::RootNotObject { .. }
            | SchemaParseError::IncompleteDocument => ErrorKind::StructuralMismatch,
            SchemaParseError::InvalidValue { .. } => ErrorKind::InvalidValue,
            SchemaParseError::BuildFailure { .. } => ErrorKind::BuildFailure,
            SchemaParseError::DuplicateKeyword { .. } => ErrorKind::DuplicateKeyword,
        }
    }

    /// The keyword the problem is attributed to, if any.
    pub fn keyword(&self) -> Option<SchemaKeyword> {
        match self {
            SchemaParseError::TypeMismatch { keyword, .. }
            | SchemaParseError::StructuralMismatch { keyword, .. }
            | SchemaParseError::IncompatibleKeyword { keyword, .. }
            | SchemaParseError::InvalidValue { keyword, .. }
            | SchemaParseError::DuplicateKeyword { keyword } => Some(*keyword),
            SchemaParseError::UnknownTypeName { .. } => Some(SchemaKeyword::Type),
            _ => None,
        }
    }

    /// Error code in the `json-schema-error-reporting` catalog.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaParseError::TypeMismatch { .. } => "JS-1-1",
            SchemaParseError::StructuralMismatch { .. } => "JS-1-2",
            SchemaParseError::UnknownTypeName { .. } => "JS-1-3",
            SchemaParseError::IncompatibleKeyword { .. } => "JS-1-4",
            SchemaParseError::InvalidValue { .. } => "JS-1-5",
            SchemaParseError::BuildFailure { .. } => "JS-1-6",
            SchemaParseError::DuplicateKeyword { .. } => "JS-1-7",
            SchemaParseError::NestingTooDeep { .. } => "JS-1-8",
            SchemaParseError::RootNotObject { .. } => "JS-1-9",
            SchemaParseError::IncompleteDocument => "JS-1-10",
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            SchemaParseError::UnknownTypeName { .. } => Some(
                "Use one of `array`, `boolean`, `integer`, `null`, `number`, `object` or `string`?"
                    .to_string(),
            ),
            SchemaParseError::IncompatibleKeyword { keyword, .. } => {
                Some(format!("Remove `{}` or change `type`?", keyword))
            }
            SchemaParseError::DuplicateKeyword { .. } => {
                Some("Remove all but one occurrence?".to_string())
            }
            SchemaParseError::NestingTooDeep { .. } => {
                Some("Move deeply nested schemas under `definitions` and use `$ref`?".to_string())
            }
            _ => None,
        }
    }
}

/// A [`SchemaParseError`] and where it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDiagnostic {
    pub location: JsonPointer,
    pub error: SchemaParseError,
}

impl SchemaDiagnostic {
    /// Convert to a tidyverse-style [`DiagnosticMessage`].
    pub fn to_diagnostic_message(&self) -> DiagnosticMessage {
        let mut builder =
            DiagnosticMessageBuilder::from_code(DiagnosticKind::Error, self.error.code())
                .problem(self.error.to_string())
                .with_location(self.location.as_str());

        if self.location.is_root() {
            builder = builder.add_detail("At the document root");
        } else {
            builder = builder.add_detail(format!("At `{}`", self.location));
        }

        if let Some(hint) = self.error.hint() {
            builder = builder.add_hint(hint);
        }

        builder.build()
    }
}

/// The error sink handed to every context event.
///
/// Owns the pointer tracker, so each report is stamped with the location of
/// the value being read when it was raised. Reports raised later (when a
/// schema object closes) pass their location explicitly.
#[derive(Debug, Default)]
pub struct SchemaErrorLogger {
    tracker: PointerTracker,
    diagnostics: Vec<SchemaDiagnostic>,
}

impl SchemaErrorLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a problem at the current location.
    pub fn error(&mut self, error: SchemaParseError) {
        let location = self.tracker.pointer();
        self.error_at(location, error);
    }

    /// Report a problem at `location`.
    pub fn error_at(&mut self, location: JsonPointer, error: SchemaParseError) {
        debug!(location = %location, code = error.code(), "{}", error);
        self.diagnostics.push(SchemaDiagnostic { location, error });
    }

    /// The pointer of the value currently being read.
    pub fn pointer(&self) -> JsonPointer {
        self.tracker.pointer()
    }

    pub(crate) fn tracker_mut(&mut self) -> &mut PointerTracker {
        &mut self.tracker
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[SchemaDiagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<SchemaDiagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SchemaParseError::TypeMismatch {
            keyword: SchemaKeyword::MinLength,
            expected: "an integer".to_string(),
            found: JsonType::String,
        };
        assert_eq!(err.to_string(), "`minLength` must be an integer, not a string");
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.keyword(), Some(SchemaKeyword::MinLength));
    }

    #[test]
    fn test_incompatible_keyword_is_a_type_mismatch() {
        let err = SchemaParseError::IncompatibleKeyword {
            keyword: SchemaKeyword::MinItems,
            declared: JsonType::String,
        };
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.code(), "JS-1-4");
    }

    #[test]
    fn test_every_code_is_in_the_catalog() {
        let errors = [
            SchemaParseError::UnknownTypeName { name: "x".into() },
            SchemaParseError::BuildFailure { reason: "x".into() },
            SchemaParseError::NestingTooDeep { limit: 1 },
            SchemaParseError::RootNotObject {
                found: JsonType::Array,
            },
            SchemaParseError::IncompleteDocument,
        ];
        for err in errors {
            assert!(
                json_schema_error_reporting::get_error_info(err.code()).is_some(),
                "{}",
                err.code()
            );
        }
    }

    #[test]
    fn test_logger_stamps_current_pointer() {
        let mut logger = SchemaErrorLogger::new();
        logger.tracker_mut().push_object();
        logger.tracker_mut().set_property("type");
        logger.error(SchemaParseError::UnknownTypeName {
            name: "bogus".into(),
        });

        assert!(logger.has_errors());
        assert_eq!(logger.diagnostics()[0].location.as_str(), "/type");
    }

    #[test]
    fn test_diagnostic_message_conversion() {
        let diagnostic = SchemaDiagnostic {
            location: JsonPointer::root().child("minItems"),
            error: SchemaParseError::IncompatibleKeyword {
                keyword: SchemaKeyword::MinItems,
                declared: JsonType::String,
            },
        };
        let msg = diagnostic.to_diagnostic_message();

        assert_eq!(msg.title, "Keyword Incompatible With Type");
        assert_eq!(msg.code.as_deref(), Some("JS-1-4"));
        assert_eq!(msg.location.as_deref(), Some("/minItems"));
        assert_eq!(msg.hints.len(), 1);
        assert!(msg.to_text().starts_with("Error [JS-1-4] at /minItems: "));
    }
}
