use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::custom_properties::CustomProperties;

/// A name/email pair, as used for organizers and email alarm recipients.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: String,
}

impl Person {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartStat {
    #[default]
    NeedsAction,
    Accepted,
    Declined,
    Tentative,
    Delegated,
    Completed,
    InProcess,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    ReqParticipant,
    OptParticipant,
    NonParticipant,
    Chair,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Opaque per-instance id, assigned on construction
    pub uid: String,
    pub name: String,
    pub email: String,
    pub rsvp: bool,
    pub status: PartStat,
    pub role: Role,
    /// `mailto:` URI of the attendee this one delegated to
    #[serde(default)]
    pub delegate: String,
    /// `mailto:` URI of the attendee that delegated to this one
    #[serde(default)]
    pub delegator: String,
    #[serde(default)]
    pub custom_properties: CustomProperties,
}

impl Attendee {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        rsvp: bool,
        status: PartStat,
        role: Role,
    ) -> Self {
        Attendee {
            uid: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            rsvp,
            status,
            role,
            delegate: String::new(),
            delegator: String::new(),
            custom_properties: CustomProperties::new(),
        }
    }

    /// Field-wise equality that ignores the generated uid.
    pub fn eq_ignoring_uid(&self, other: &Attendee) -> bool {
        self.name == other.name
            && self.email == other.email
            && self.rsvp == other.rsvp
            && self.status == other.status
            && self.role == other.role
            && self.delegate == other.delegate
            && self.delegator == other.delegator
            && self.custom_properties == other.custom_properties
    }
}
