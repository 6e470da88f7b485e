use crate::optional::OptionalItem;

/// Remembers the last object key whose value has not arrived yet.
///
/// Contexts that read JSON objects consult the pending key to decide what a
/// value means. A key stays pending while a child context opened for its
/// value is still being read, and is taken when the child closes.
#[derive(Debug, Clone)]
pub struct KeywordTracker<K> {
    pending: OptionalItem<K>,
}

impl<K> Default for KeywordTracker<K> {
    fn default() -> Self {
        Self {
            pending: OptionalItem::new(),
        }
    }
}

impl<K> KeywordTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` as pending, replacing any previous one.
    pub fn on_object_key(&mut self, key: K) {
        self.pending.set(key);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_set()
    }

    /// Return the pending key and clear it.
    pub fn take_pending(&mut self) -> Option<K> {
        self.pending.take()
    }

    pub fn peek_pending(&self) -> Option<&K> {
        self.pending.get()
    }
}
