//! Neutral incidences: events, to-dos and journals.
//!
//! The three kinds share a block of common fields ([`Incidence`]); events and
//! to-dos additionally share scheduling fields ([`Schedule`]). Code that only
//! needs one of these blocks is written against [`HasIncidence`] or
//! [`HasSchedule`] instead of a concrete kind.

use serde::{Deserialize, Serialize};

use super::alarm::Alarm;
use super::attendee::{Attendee, ContactReference};
use super::recurrence::RecurrenceRule;
use super::time::{DateTimeValue, Duration};
use crate::serde_helpers::base64_bytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    #[default]
    Public,
    Private,
    Confidential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Undefined,
    NeedsAction,
    Completed,
    InProcess,
    Cancelled,
    Tentative,
    Confirmed,
    Draft,
    Final,
}

/// Free-form identifier/value pair for data without a first-class field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomProperty {
    pub identifier: String,
    pub value: String,
}

impl CustomProperty {
    pub fn new(identifier: impl Into<String>, value: impl Into<String>) -> Self {
        CustomProperty {
            identifier: identifier.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentContent {
    Uri(String),
    Data(#[serde(with = "base64_bytes")] Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub content: AttachmentContent,
    pub mimetype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Attachment {
    pub fn uri(uri: impl Into<String>, mimetype: impl Into<String>) -> Self {
        Attachment {
            content: AttachmentContent::Uri(uri.into()),
            mimetype: mimetype.into(),
            label: None,
        }
    }

    pub fn data(data: impl Into<Vec<u8>>, mimetype: impl Into<String>) -> Self {
        Attachment {
            content: AttachmentContent::Data(data.into()),
            mimetype: mimetype.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Fields common to every incidence kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Incidence {
    pub uid: String,
    pub created: Option<DateTimeValue>,
    pub last_modified: Option<DateTimeValue>,
    /// Revision counter (SEQUENCE)
    pub sequence: i32,
    pub classification: Classification,
    pub categories: Vec<String>,
    pub start: Option<DateTimeValue>,
    pub summary: String,
    pub description: String,
    pub status: Status,
    pub custom_properties: Vec<CustomProperty>,
    pub attachments: Vec<Attachment>,
    pub attendees: Vec<Attendee>,
}

/// Scheduling fields shared by events and to-dos.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// 0 (undefined) to 9 (lowest)
    pub priority: i32,
    pub location: String,
    pub organizer: Option<ContactReference>,
    /// Identifies the occurrence this incidence overrides
    pub recurrence_id: Option<DateTimeValue>,
    /// The override also applies to all later occurrences
    pub this_and_future: bool,
    pub recurrence_rule: Option<RecurrenceRule>,
    pub recurrence_dates: Vec<DateTimeValue>,
    pub exception_dates: Vec<DateTimeValue>,
    pub alarms: Vec<Alarm>,
}

/// An event either ends at a point in time or lasts for a duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventEnd {
    At(DateTimeValue),
    Duration(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(flatten)]
    pub incidence: Incidence,
    #[serde(flatten)]
    pub schedule: Schedule,
    pub end: Option<EventEnd>,
    /// Transparent events do not block time in free/busy lookups
    pub transparent: bool,
}

impl Event {
    pub fn end_time(&self) -> Option<&DateTimeValue> {
        match &self.end {
            Some(EventEnd::At(end)) => Some(end),
            _ => None,
        }
    }

    pub fn duration(&self) -> Option<&Duration> {
        match &self.end {
            Some(EventEnd::Duration(d)) => Some(d),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    #[serde(flatten)]
    pub incidence: Incidence,
    #[serde(flatten)]
    pub schedule: Schedule,
    pub due: Option<DateTimeValue>,
    /// 0 to 100
    pub percent_complete: u8,
    /// Uids of related to-dos; the first one is the parent
    pub related_to: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Journal {
    #[serde(flatten)]
    pub incidence: Incidence,
}

/// Access to the common incidence fields of any kind.
pub trait HasIncidence {
    fn incidence(&self) -> &Incidence;
    fn incidence_mut(&mut self) -> &mut Incidence;
}

/// Access to the scheduling fields of events and to-dos.
pub trait HasSchedule: HasIncidence {
    fn schedule(&self) -> &Schedule;
    fn schedule_mut(&mut self) -> &mut Schedule;
}

macro_rules! impl_has_incidence {
    ($($ty:ty),*) => {
        $(
            impl HasIncidence for $ty {
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

macro_rules! impl_has_schedule {
    ($($ty:ty),*) => {
        $(
            impl HasSchedule for $ty {
                fn schedule(&self) -> &Schedule {
                    &self.schedule
                }

                fn schedule_mut(&mut self) -> &mut Schedule {
                    &mut self.schedule
                }
            }
        )*
    };
}

impl_has_incidence!(Event, Todo, Journal);
impl_has_schedule!(Event, Todo);
