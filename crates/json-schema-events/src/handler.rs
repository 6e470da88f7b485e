use crate::JsonNumber;

/// Receiver of structural JSON events.
///
/// Sources call exactly one method per event, strictly in document order.
/// Every `open_array` is matched by a `close_array` and every `open_object`
/// by a `close_object`; inside an object each value is preceded by one
/// `object_key`.
pub trait JsonEventHandler {
    fn string(&mut self, value: &str);
    fn number(&mut self, value: JsonNumber);
    fn bool(&mut self, value: bool);
    fn null(&mut self);
    fn open_array(&mut self);
    fn close_array(&mut self);
    fn open_object(&mut self);
    fn object_key(&mut self, key: &str);
    fn close_object(&mut self);
}
