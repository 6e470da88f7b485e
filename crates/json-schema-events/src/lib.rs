//! # json-schema-events
//!
//! Push-style JSON event sources.
//!
//! A schema document is never materialized as a tree before it is compiled.
//! Instead, a source walks the document and pushes structural events
//! (scalars, array/object open and close, object keys) into a
//! [`JsonEventHandler`]. Two sources are provided:
//!
//! - [`parse`]: JSON text, streamed through a `serde_json` deserializer.
//!   Duplicate keys and key order are preserved exactly as written.
//! - [`walk`]: an in-memory `serde_json::Value`.
//!
//! ## Example
//!
//! ```rust
//! use json_schema_events::{JsonEvent, parse};
//!
//! let mut events: Vec<JsonEvent> = Vec::new();
//! parse(r#"{"type": "string"}"#, &mut events).unwrap();
//! assert_eq!(events.len(), 4);
//! ```

mod error;
mod event;
mod handler;
mod number;
mod parser;
mod value;

pub use error::{Error, Result};
pub use event::{JsonEvent, replay};
pub use handler::JsonEventHandler;
pub use number::JsonNumber;
pub use parser::parse;
pub use value::walk;
