//! Native calendar object model.
//!
//! Shaped after the incidence types of the KDE calendar library: one
//! [`Incidence`] block shared by [`Event`], [`Todo`] and [`Journal`], with
//! recurrence, attendees, alarms and `X-` properties hanging off it. Address
//! book entries are [`Addressee`]s.

mod addressee;
mod alarm;
mod attendee;
mod custom_properties;
mod datetime;
mod incidence;
mod recurrence;

pub use addressee::Addressee;
pub use alarm::{Alarm, AlarmAction, AlarmTime};
pub use attendee::{Attendee, PartStat, Person, Role};
pub use custom_properties::CustomProperties;
pub use datetime::{Duration, DurationType, KDateTime, TimeSpec};
pub use incidence::{
    Attachment, AttachmentData, Event, Incidence, IncidenceBase, Journal, Secrecy, Status, Todo,
    Transparency,
};
pub use recurrence::{PeriodType, RECURS_FOREVER, Recurrence, RecurrenceRule, WDayPos};
