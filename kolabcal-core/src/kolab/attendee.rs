use serde::{Deserialize, Serialize};

/// Reference to a person by email, optionally linked to an addressbook entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactReference {
    pub email: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Uid of the contact in an external directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

impl ContactReference {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        ContactReference {
            email: email.into(),
            name: (!name.is_empty()).then_some(name),
            uid: None,
        }
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartStatus {
    #[default]
    NeedsAction,
    Accepted,
    Declined,
    Tentative,
    Delegated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Required,
    Chair,
    Optional,
    NonParticipant,
}

/// Calendar user type (CUTYPE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cutype {
    Unknown,
    Group,
    #[default]
    Individual,
    Resource,
    Room,
}

impl Cutype {
    /// Stable numeric code used when the value travels as a string property.
    pub fn code(self) -> u8 {
        match self {
            Cutype::Unknown => 0,
            Cutype::Group => 1,
            Cutype::Individual => 2,
            Cutype::Resource => 3,
            Cutype::Room => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cutype::Unknown),
            1 => Some(Cutype::Group),
            2 => Some(Cutype::Individual),
            3 => Some(Cutype::Resource),
            4 => Some(Cutype::Room),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attendee {
    pub contact: ContactReference,
    pub rsvp: bool,
    pub part_stat: PartStatus,
    pub role: Role,
    pub cutype: Cutype,
    /// Only the first entry survives conversion to native form.
    pub delegated_to: Vec<ContactReference>,
    /// Only the first entry survives conversion to native form.
    pub delegated_from: Vec<ContactReference>,
}

impl Attendee {
    pub fn new(contact: ContactReference) -> Self {
        Attendee {
            contact,
            ..Default::default()
        }
    }
}
