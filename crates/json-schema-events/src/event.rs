//! Recorded events.
//!
//! `Vec<JsonEvent>` is itself a [`JsonEventHandler`], so any source can be
//! recorded and later replayed into another handler. This is also the way to
//! build event streams that a `serde_json::Value` cannot express, such as
//! objects with repeated keys.

use crate::{JsonEventHandler, JsonNumber};

/// One structural JSON event.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonEvent {
    String(String),
    Number(JsonNumber),
    Bool(bool),
    Null,
    OpenArray,
    CloseArray,
    OpenObject,
    ObjectKey(String),
    CloseObject,
}

impl JsonEvent {
    /// Deliver this event to a handler.
    pub fn dispatch<H: JsonEventHandler + ?Sized>(&self, handler: &mut H) {
        match self {
            JsonEvent::String(s) => handler.string(s),
            JsonEvent::Number(n) => handler.number(*n),
            JsonEvent::Bool(b) => handler.bool(*b),
            JsonEvent::Null => handler.null(),
            JsonEvent::OpenArray => handler.open_array(),
            JsonEvent::CloseArray => handler.close_array(),
            JsonEvent::OpenObject => handler.open_object(),
            JsonEvent::ObjectKey(k) => handler.object_key(k),
            JsonEvent::CloseObject => handler.close_object(),
        }
    }
}

/// Deliver a recorded event stream to a handler, in order.
pub fn replay<H: JsonEventHandler + ?Sized>(events: &[JsonEvent], handler: &mut H) {
    for event in events {
        event.dispatch(handler);
    }
}

impl JsonEventHandler for Vec<JsonEvent> {
    fn string(&mut self, value: &str) {
        self.push(JsonEvent::String(value.to_string()));
    }

    fn number(&mut self, value: JsonNumber) {
        self.push(JsonEvent::Number(value));
    }

    fn bool(&mut self, value: bool) {
        self.push(JsonEvent::Bool(value));
    }

    fn null(&mut self) {
        self.push(JsonEvent::Null);
    }

    fn open_array(&mut self) {
        self.push(JsonEvent::OpenArray);
    }

    fn close_array(&mut self) {
        self.push(JsonEvent::CloseArray);
    }

    fn open_object(&mut self) {
        self.push(JsonEvent::OpenObject);
    }

    fn object_key(&mut self, key: &str) {
        self.push(JsonEvent::ObjectKey(key.to_string()));
    }

    fn close_object(&mut self) {
        self.push(JsonEvent::CloseObject);
    }
}
