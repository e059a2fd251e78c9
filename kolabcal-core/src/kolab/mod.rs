//! Neutral Kolab object model.
//!
//! These are the types a Kolab XML parser hands out and consumes: incidences
//! and address book contacts. They carry no behaviour beyond small
//! accessors; conversion lives in [`crate::convert`].

mod alarm;
mod attendee;
mod contact;
mod incidence;
mod recurrence;
mod time;

pub use alarm::{Alarm, AlarmKind, AlarmTrigger, Related};
pub use attendee::{Attendee, ContactReference, Cutype, PartStatus, Role};
pub use contact::Contact;
pub use incidence::{
    Attachment, AttachmentContent, Classification, CustomProperty, Event, EventEnd, HasIncidence,
    HasSchedule, Incidence, Journal, Schedule, Status, Todo,
};
pub use recurrence::{DayPos, Frequency, RecurrenceRule, Termination, Weekday};
pub use time::{DateTimeValue, Duration};
