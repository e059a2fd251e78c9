//! Neutral address book contact.

use serde::{Deserialize, Serialize};

/// A contact from a Kolab address book folder.
///
/// Only identity and display name are carried across.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub uid: String,
    /// Formatted display name
    pub name: String,
}

impl Contact {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Contact {
            uid: uid.into(),
            name: name.into(),
        }
    }
}
