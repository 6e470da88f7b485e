//! Error code catalog and lookup.
//!
//! Maps error codes (like "JS-1-1") to their metadata. Codes are grouped by
//! subsystem: `JS-0-*` internal, `JS-1-*` schema keywords and structure,
//! `JS-2-*` references.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for an error code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    /// Subsystem name (e.g., "schema", "reference")
    pub subsystem: String,

    /// Short title for the error
    pub title: String,

    /// Default message
    pub message_template: String,

    /// When this error was introduced (version)
    pub since_version: String,
}

/// Global error catalog, embedded with `include_str!()` and parsed on first use.
///
/// # Panics
///
/// Panics if the embedded JSON is invalid. This can only happen if
/// `error_catalog.json` was edited incorrectly.
pub static ERROR_CATALOG: Lazy<HashMap<String, ErrorCodeInfo>> = Lazy::new(|| {
    let json_data = include_str!("../error_catalog.json");
    serde_json::from_str(json_data).expect("Invalid error catalog JSON")
});

/// Look up error code information.
///
/// # Example
///
/// ```
/// use json_schema_error_reporting::catalog::get_error_info;
///
/// let info = get_error_info("JS-1-3").unwrap();
/// assert_eq!(info.title, "Unknown Type Name");
/// ```
pub fn get_error_info(code: &str) -> Option<&ErrorCodeInfo> {
    ERROR_CATALOG.get(code)
}
