//! Builder API for diagnostic messages.
//!
//! The builder follows the tidyverse message layout: a title, one problem
//! statement, a handful of bulleted details, and optional hints.

use crate::catalog::get_error_info;
use crate::diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};

/// Builder for creating diagnostic messages.
///
/// # Example
///
/// ```
/// use json_schema_error_reporting::DiagnosticMessageBuilder;
///
/// let error = DiagnosticMessageBuilder::error("Invalid Keyword Value")
///     .with_code("JS-1-5")
///     .problem("`minItems` must be a non-negative integer")
///     .add_detail("Found `-1`")
///     .add_hint("Remove the keyword to allow any length?")
///     .with_location("/minItems")
///     .build();
///
/// assert_eq!(error.code, Some("JS-1-5".to_string()));
/// assert_eq!(error.location.as_deref(), Some("/minItems"));
/// assert_eq!(error.details.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticMessageBuilder {
    kind: DiagnosticKind,
    title: String,
    code: Option<String>,
    problem: Option<MessageContent>,
    details: Vec<DetailItem>,
    hints: Vec<MessageContent>,
    location: Option<String>,
}

impl DiagnosticMessageBuilder {
    /// Create a new builder with the specified kind and title.
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            code: None,
            problem: None,
            details: Vec::new(),
            hints: Vec::new(),
            location: None,
        }
    }

    /// Create a builder whose title comes from the error catalog.
    ///
    /// Falls back to the code itself when the catalog has no entry.
    ///
    /// ```
    /// use json_schema_error_reporting::{DiagnosticKind, DiagnosticMessageBuilder};
    ///
    /// let msg = DiagnosticMessageBuilder::from_code(DiagnosticKind::Error, "JS-1-7").build();
    /// assert_eq!(msg.title, "Duplicate Keyword");
    /// ```
    pub fn from_code(kind: DiagnosticKind, code: &str) -> Self {
        let title = get_error_info(code)
            .map(|info| info.title.clone())
            .unwrap_or_else(|| code.to_string());
        Self::new(kind, title).with_code(code)
    }

    /// Create an error diagnostic builder.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    /// Create a warning diagnostic builder.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    /// Create an info diagnostic builder.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Info, title)
    }

    /// Set the error code (`JS-<subsystem>-<number>`).
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the JSON Pointer the message refers to.
    ///
    /// The empty string points at the document root.
    pub fn with_location(mut self, pointer: impl Into<String>) -> Self {
        self.location = Some(pointer.into());
        self
    }

    /// Set the problem statement.
    ///
    /// Use "must" for requirements or "can't" for impossibilities, and be
    /// specific about the expected type.
    pub fn problem(mut self, stmt: impl Into<MessageContent>) -> Self {
        self.problem = Some(stmt.into());
        self
    }

    /// Add an error detail (✖ bullet).
    pub fn add_detail(mut self, detail: impl Into<MessageContent>) -> Self {
        self.details.push(DetailItem {
            kind: DetailKind::Error,
            content: detail.into(),
        });
        self
    }

    /// Add an info detail (ℹ bullet).
    pub fn add_info(mut self, info: impl Into<MessageContent>) -> Self {
        self.details.push(DetailItem {
            kind: DetailKind::Info,
            content: info.into(),
        });
        self
    }

    /// Add a note detail (plain bullet).
    pub fn add_note(mut self, note: impl Into<MessageContent>) -> Self {
        self.details.push(DetailItem {
            kind: DetailKind::Note,
            content: note.into(),
        });
        self
    }

    /// Add a hint for fixing the problem. Hints suggesting an action end
    /// with a question mark.
    pub fn add_hint(mut self, hint: impl Into<MessageContent>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Consume the builder and return the message.
    pub fn build(self) -> DiagnosticMessage {
        DiagnosticMessage {
            code: self.code,
            title: self.title,
            kind: self.kind,
            problem: self.problem,
            details: self.details,
            hints: self.hints,
            location: self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_kinds() {
        assert_eq!(
            DiagnosticMessageBuilder::error("e").build().kind,
            DiagnosticKind::Error
        );
        assert_eq!(
            DiagnosticMessageBuilder::warning("w").build().kind,
            DiagnosticKind::Warning
        );
        assert_eq!(
            DiagnosticMessageBuilder::info("i").build().kind,
            DiagnosticKind::Info
        );
    }

    #[test]
    fn test_builder_details_keep_order() {
        let msg = DiagnosticMessageBuilder::error("Test")
            .add_detail("Detail 1")
            .add_info("Info 1")
            .add_note("Note 1")
            .build();

        assert_eq!(msg.details.len(), 3);
        assert_eq!(msg.details[0].kind, DetailKind::Error);
        assert_eq!(msg.details[1].kind, DetailKind::Info);
        assert_eq!(msg.details[2].kind, DetailKind::Note);
    }

    #[test]
    fn test_builder_problem_is_markdown() {
        let msg = DiagnosticMessageBuilder::error("Test")
            .problem("`type` names an unknown type")
            .build();
        assert!(matches!(msg.problem, Some(MessageContent::Markdown(_))));
    }

    #[test]
    fn test_from_code_uses_catalog_title() {
        let msg = DiagnosticMessageBuilder::from_code(DiagnosticKind::Warning, "JS-2-1").build();
        assert_eq!(msg.title, "Unresolved Reference");
        assert_eq!(msg.code.as_deref(), Some("JS-2-1"));
    }

    #[test]
    fn test_from_code_unknown() {
        let msg = DiagnosticMessageBuilder::from_code(DiagnosticKind::Error, "JS-9-9").build();
        assert_eq!(msg.title, "JS-9-9");
    }

    #[test]
    fn test_location_defaults_to_none() {
        let msg = DiagnosticMessageBuilder::error("Test").build();
        assert!(msg.location.is_none());
    }
}
