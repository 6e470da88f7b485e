//! JSON Pointer (RFC 6901) locations inside the schema document.

use std::fmt;

/// A JSON Pointer such as `/properties/name/minLength`.
///
/// The empty pointer refers to the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JsonPointer(String);

impl JsonPointer {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append an object key, escaping `~` and `/`.
    pub fn child(&self, key: &str) -> JsonPointer {
        JsonPointer(format!("{}/{}", self.0, escape_token(key)))
    }

    /// Append an array index.
    pub fn index(&self, index: usize) -> JsonPointer {
        JsonPointer(format!("{}/{}", self.0, index))
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape one reference token: `~` becomes `~0`, `/` becomes `~1`.
pub fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Reverse [`escape_token`]. `~1` is replaced before `~0` so that `~01`
/// decodes to `~1`.
pub fn unescape_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

#[derive(Debug, Clone)]
enum Frame {
    /// Key of the member currently being read, once announced
    Object { key: Option<String> },
    /// Index of the element currently being read, once one has started
    Array { index: Option<usize> },
}

/// Follows the event stream and knows the pointer of the value being read.
///
/// The driver reports every event, including those inside skipped subtrees,
/// so the pointer stays correct after a declined open.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    frames: Vec<Frame>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called before any value (scalar or container) starts. Inside an
    /// array this advances to the next index.
    pub fn begin_value(&mut self) {
        if let Some(Frame::Array { index }) = self.frames.last_mut() {
            *index = Some(index.map_or(0, |i| i + 1));
        }
    }

    /// A member key was read in the innermost object.
    pub fn set_property(&mut self, key: &str) {
        if let Some(Frame::Object { key: current }) = self.frames.last_mut() {
            *current = Some(key.to_string());
        }
    }

    pub fn push_object(&mut self) {
        self.frames.push(Frame::Object { key: None });
    }

    pub fn push_array(&mut self) {
        self.frames.push(Frame::Array { index: None });
    }

    /// Leave the innermost object or array.
    pub fn pop(&mut self) {
        self.frames.pop();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The pointer of the value currently being read.
    pub fn pointer(&self) -> JsonPointer {
        let mut pointer = JsonPointer::root();
        for frame in &self.frames {
            match frame {
                Frame::Object { key: Some(key) } => pointer = pointer.child(key),
                Frame::Array { index: Some(index) } => pointer = pointer.index(*index),
                _ => {}
            }
        }
        pointer
    }
}
