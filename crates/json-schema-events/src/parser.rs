//! JSON text source built on a streaming `serde_json` deserializer.
//!
//! The text is never collected into a `serde_json::Value`. A visitor is
//! handed to `deserialize_any` and forwards every value it is shown, so
//! repeated object keys survive in the order written.

use crate::{Error, JsonEventHandler, JsonNumber, Result};
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Parse JSON text and push its events into `handler`.
///
/// Object keys are delivered in the order written, repeated keys included.
/// Nesting deeper than `serde_json`'s recursion limit (128) is a syntax
/// error.
///
/// # Example
///
/// ```rust
/// use json_schema_events::{JsonEvent, JsonNumber, parse};
///
/// let mut events: Vec<JsonEvent> = Vec::new();
/// parse(r#"{"minLength": 3}"#, &mut events).unwrap();
/// assert_eq!(events[2], JsonEvent::Number(JsonNumber::Int(3)));
/// ```
///
/// # Errors
///
/// Returns an error if the text is not a single well-formed JSON value, or
/// holds no value at all. Events already delivered before the error are not
/// retracted.
pub fn parse<H: JsonEventHandler + ?Sized>(content: &str, handler: &mut H) -> Result<()> {
    if content
        .trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
        .is_empty()
    {
        return Err(Error::Empty);
    }

    let mut deserializer = serde_json::Deserializer::from_str(content);
    EventSeed { handler }.deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(())
}

/// Forwards one JSON value, and everything inside it, to the handler.
struct EventSeed<'h, H: ?Sized> {
    handler: &'h mut H,
}

impl<'de, H: JsonEventHandler + ?Sized> DeserializeSeed<'de> for EventSeed<'_, H> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de, H: JsonEventHandler + ?Sized> Visitor<'de> for EventSeed<'_, H> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<(), E> {
        self.handler.null();
        Ok(())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<(), E> {
        self.handler.bool(v);
        Ok(())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<(), E> {
        self.handler.number(JsonNumber::Int(v));
        Ok(())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<(), E> {
        self.handler.number(JsonNumber::from(v));
        Ok(())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<(), E> {
        self.handler.number(JsonNumber::Float(v));
        Ok(())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<(), E> {
        self.handler.string(v);
        Ok(())
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        let handler = self.handler;
        handler.open_array();
        while seq
            .next_element_seed(EventSeed {
                handler: &mut *handler,
            })?
            .is_some()
        {}
        handler.close_array();
        Ok(())
    }

    fn visit_map<M>(self, mut map: M) -> std::result::Result<(), M::Error>
    where
        M: MapAccess<'de>,
    {
        let handler = self.handler;
        handler.open_object();
        while map
            .next_key_seed(KeySeed {
                handler: &mut *handler,
            })?
            .is_some()
        {
            map.next_value_seed(EventSeed {
                handler: &mut *handler,
            })?;
        }
        handler.close_object();
        Ok(())
    }
}

/// Forwards an object key.
struct KeySeed<'h, H: ?Sized> {
    handler: &'h mut H,
}

impl<'de, H: JsonEventHandler + ?Sized> DeserializeSeed<'de> for KeySeed<'_, H> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }
}

impl<'de, H: JsonEventHandler + ?Sized> Visitor<'de> for KeySeed<'_, H> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object key")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<(), E> {
        self.handler.object_key(v);
        Ok(())
    }
}
