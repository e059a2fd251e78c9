//! Native incidences.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::alarm::Alarm;
use super::attendee::{Attendee, Person};
use super::custom_properties::CustomProperties;
use super::datetime::{Duration, KDateTime};
use super::recurrence::Recurrence;
use crate::serde_helpers::base64_bytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Secrecy {
    #[default]
    Public,
    Private,
    Confidential,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    None,
    Tentative,
    Confirmed,
    Completed,
    NeedsAction,
    Canceled,
    InProcess,
    Draft,
    Final,
    /// Non-standard status string (`X-` value)
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentData {
    Uri(String),
    Binary(#[serde(with = "base64_bytes")] Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub data: AttachmentData,
    pub mime_type: String,
    #[serde(default)]
    pub label: String,
}

impl Attachment {
    pub fn from_uri(uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Attachment {
            data: AttachmentData::Uri(uri.into()),
            mime_type: mime_type.into(),
            label: String::new(),
        }
    }

    pub fn from_binary(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Attachment {
            data: AttachmentData::Binary(data),
            mime_type: mime_type.into(),
            label: String::new(),
        }
    }

    pub fn is_uri(&self) -> bool {
        matches!(self.data, AttachmentData::Uri(_))
    }
}

/// Fields shared by every native incidence kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Incidence {
    pub uid: String,
    pub created: Option<KDateTime>,
    pub last_modified: Option<KDateTime>,
    pub revision: i32,
    pub secrecy: Secrecy,
    pub categories: Vec<String>,
    pub dt_start: Option<KDateTime>,
    pub summary: String,
    pub description: String,
    pub status: Status,
    pub priority: i32,
    pub location: String,
    pub organizer: Person,
    pub recurrence_id: Option<KDateTime>,
    pub this_and_future: bool,
    pub recurrence: Recurrence,
    pub attendees: Vec<Attendee>,
    pub attachments: Vec<Attachment>,
    pub alarms: Vec<Alarm>,
    /// Uid of the parent incidence
    pub related_to: String,
    pub custom_properties: CustomProperties,
}

impl Default for Incidence {
    fn default() -> Self {
        Incidence {
            uid: Uuid::new_v4().to_string(),
            created: None,
            last_modified: None,
            revision: 0,
            secrecy: Secrecy::default(),
            categories: Vec::new(),
            dt_start: None,
            summary: String::new(),
            description: String::new(),
            status: Status::default(),
            priority: 0,
            location: String::new(),
            organizer: Person::default(),
            recurrence_id: None,
            this_and_future: false,
            recurrence: Recurrence::default(),
            attendees: Vec::new(),
            attachments: Vec::new(),
            alarms: Vec::new(),
            related_to: String::new(),
            custom_properties: CustomProperties::new(),
        }
    }
}

impl Incidence {
    /// Empty incidence with a freshly generated uid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recurs(&self) -> bool {
        self.recurrence.recurs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transparency {
    #[default]
    Opaque,
    Transparent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(flatten)]
    pub incidence: Incidence,
    dt_end: Option<KDateTime>,
    duration: Option<Duration>,
    pub transparency: Transparency,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dt_end(&self) -> Option<&KDateTime> {
        self.dt_end.as_ref()
    }

    /// Set the end; drops any duration.
    pub fn set_dt_end(&mut self, end: KDateTime) {
        self.dt_end = Some(end);
        self.duration = None;
    }

    pub fn has_end_date(&self) -> bool {
        self.dt_end.is_some()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Set the duration; drops any end.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = Some(duration);
        self.dt_end = None;
    }

    pub fn has_duration(&self) -> bool {
        self.duration.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    #[serde(flatten)]
    pub incidence: Incidence,
    pub dt_due: Option<KDateTime>,
    pub percent_complete: i32,
}

impl Todo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self) -> bool {
        self.percent_complete >= 100 || self.incidence.status == Status::Completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Journal {
    #[serde(flatten)]
    pub incidence: Incidence,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shared access to the incidence block of any native kind.
pub trait IncidenceBase {
    /// Lowercase kind name, as used in logs.
    const KIND: &'static str;

    fn incidence(&self) -> &Incidence;
    fn incidence_mut(&mut self) -> &mut Incidence;

    fn uid(&self) -> &str {
        &self.incidence().uid
    }
}

macro_rules! impl_incidence_base {
    ($($ty:ty => $kind:literal),*) => {
        $(
            impl IncidenceBase for $ty {
                const KIND: &'static str = $kind;

                fn incidence(&self) -> &Incidence {
                    &self.incidence
                }

                fn incidence_mut(&mut self) -> &mut Incidence {
                    &mut self.incidence
                }
            }
        )*
    };
}

impl_incidence_base!(Event => "event", Todo => "todo", Journal => "journal");
