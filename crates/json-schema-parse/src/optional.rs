//! A value that may or may not have been set.

/// Holds the value of one schema keyword, distinguishing "absent" from
/// "present with a zero or false value".
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalItem<T> {
    value: Option<T>,
}

impl<T> Default for OptionalItem<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> OptionalItem<T> {
    /// Create an unset item
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, replacing any previous one
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Mark the item as unset
    pub fn reset(&mut self) {
        self.value = None;
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the value if set
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Remove and return the value, leaving the item unset
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Borrow the value.
    ///
    /// # Panics
    ///
    /// Panics if the item is unset. Callers check [`OptionalItem::is_set`]
    /// first; use [`OptionalItem::get`] when absence is expected.
    pub fn value(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => panic!("OptionalItem::value called on an unset item"),
        }
    }
}

impl<T> From<Option<T>> for OptionalItem<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}
