//! Diagnostic messages for the JSON schema parser.
//!
//! Schema compilation never stops at the first problem: every keyword that
//! cannot be used is reported and dropped, and compilation carries on. This
//! crate holds the presentation side of those reports:
//!
//! - [`DiagnosticMessage`]: a tidyverse-style message (title, problem,
//!   details, hints) with an optional error code and schema location
//! - [`DiagnosticMessageBuilder`]: the builder API for constructing one
//! - the error-code catalog ([`get_error_info`]), embedded at compile time
//!
//! Locations are JSON Pointers (RFC 6901) into the schema document, such as
//! `/properties/name/minLength`; the empty pointer is the document root.
//!
//! # Example
//!
//! ```
//! use json_schema_error_reporting::DiagnosticMessageBuilder;
//!
//! let error = DiagnosticMessageBuilder::error("Keyword Type Mismatch")
//!     .with_code("JS-1-1")
//!     .problem("`minLength` must be an integer, not a string")
//!     .with_location("/minLength")
//!     .build();
//!
//! assert!(error.to_text().contains("/minLength"));
//! ```

pub mod builder;
pub mod catalog;
pub mod diagnostic;

pub use builder::DiagnosticMessageBuilder;
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_error_info};
pub use diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};
