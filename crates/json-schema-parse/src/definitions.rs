// Shared cache of named sub-schemas used to resolve `$ref`

use crate::pointer::unescape_token;
use crate::validator::Validator;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Prefix of references into the document's own `definitions`.
const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Named validators registered by `definitions` keywords.
///
/// Registering a name again replaces the earlier entry.
#[derive(Debug, Default)]
pub struct SchemaDefinitions {
    entries: HashMap<String, Rc<Validator>>,
}

/// The cache as shared between the parser, its contexts and any references
/// in the compiled tree. Parsing is single threaded.
pub type SharedDefinitions = Rc<RefCell<SchemaDefinitions>>;

impl SchemaDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new, empty cache ready to be shared.
    pub fn shared() -> SharedDefinitions {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Register `validator` under `name`, returning the entry it replaces.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        validator: Validator,
    ) -> Option<Rc<Validator>> {
        let name = name.into();
        let previous = self.entries.insert(name.clone(), Rc::new(validator));
        if previous.is_some() {
            debug!(name = %name, "replaced definition");
        } else {
            debug!(name = %name, "registered definition");
        }
        previous
    }

    pub fn lookup(&self, name: &str) -> Option<Rc<Validator>> {
        self.entries.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// The cache entry a `$ref` names.
///
/// `#/definitions/<name>` names `<name>` (JSON Pointer escapes undone);
/// anything else is used verbatim.
pub fn definition_name(reference: &str) -> String {
    match reference.strip_prefix(DEFINITIONS_PREFIX) {
        Some(name) if !name.contains('/') => unescape_token(name),
        _ => reference.to_string(),
    }
}
