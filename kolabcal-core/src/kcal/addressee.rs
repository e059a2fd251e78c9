use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Native address book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Addressee {
    pub uid: String,
    pub formatted_name: String,
}

impl Default for Addressee {
    fn default() -> Self {
        Addressee {
            uid: Uuid::new_v4().to_string(),
            formatted_name: String::new(),
        }
    }
}

impl Addressee {
    /// Empty addressee with a freshly generated uid.
    pub fn new() -> Self {
        Self::default()
    }
}
