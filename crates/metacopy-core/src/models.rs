//! Shared models crossing the host/core boundary.

use serde::{Deserialize, Serialize};

/// A key/value pair as presented by (and selected from) the host's picker.
///
/// The value is already in display form. One synthetic entry per pick list
/// may carry the host's localized "copy as link" label as its key; selecting
/// it routes the pick through the link resolver instead of the raw-value
/// formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub key: String,
    pub value: String,
}

impl MetaEntry {
    /// Create a new entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
