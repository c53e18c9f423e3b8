use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Key of a record inside its collection.
///
/// Generated by the collection actor on create, or chosen by the caller on
/// put (profiles are stored under their identity id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Id generator for one collection: `<prefix>_1`, `<prefix>_2`, ...
pub fn id_sequence(prefix: &'static str) -> impl FnMut() -> DocumentId + Send + 'static {
    let mut next = 0u64;
    move || {
        next += 1;
        DocumentId(format!("{prefix}_{next}"))
    }
}
