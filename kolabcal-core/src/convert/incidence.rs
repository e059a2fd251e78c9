//! Event, to-do and journal assemblers.

use super::alarm::{alarm_from_native, alarm_to_native};
use super::attachment::{attachment_from_native, attachment_to_native};
use super::attendee::{attendee_from_native, attendee_to_native};
use super::custom_properties::{custom_properties_from_native, custom_properties_to_native};
use super::datetime::{datetime_from_native, datetime_to_native, opt_datetime_from_native, opt_datetime_to_native};
use super::duration::{duration_from_native, duration_to_native};
use super::enums::{
    priority_from_native, priority_to_native, secrecy_from_native, secrecy_to_native,
    status_from_native, status_to_native,
};
use super::recurrence::{recurrence_from_native, recurrence_to_native};
use super::{Converter, FromNative, ToNative};
use crate::kcal::{self, IncidenceBase};
use crate::kolab::{self, ContactReference, EventEnd, HasIncidence, HasSchedule};

/// Fresh native incidence of kind `N` carrying the common fields of `src`.
fn new_native<N: IncidenceBase + Default>(src: &impl HasIncidence, converter: &Converter) -> N {
    let mut native = N::default();
    set_incidence(native.incidence_mut(), src.incidence(), converter);
    tracing::debug!(kind = N::KIND, uid = native.uid(), "converted to native");
    native
}

fn set_incidence(i: &mut kcal::Incidence, e: &kolab::Incidence, converter: &Converter) {
    let log = converter.log();

    // Keep the generated uid when the neutral one is empty
    if !e.uid.is_empty() {
        i.uid = e.uid.clone();
    }
    i.created = opt_datetime_to_native(e.created.as_ref(), log);
    i.last_modified = opt_datetime_to_native(e.last_modified.as_ref(), log);
    i.revision = e.sequence;
    i.secrecy = secrecy_to_native(e.classification);
    i.categories = e.categories.clone();
    i.dt_start = opt_datetime_to_native(e.start.as_ref(), log);
    i.summary = e.summary.clone();
    i.description = e.description.clone();
    i.status = status_to_native(e.status);

    i.attendees = e
        .attendees
        .iter()
        .map(|a| attendee_to_native(a, log))
        .collect();
    i.attachments = e.attachments.iter().map(attachment_to_native).collect();
    i.custom_properties = custom_properties_to_native(&e.custom_properties, converter.config());
}

fn get_incidence(i: &mut kolab::Incidence, e: &kcal::Incidence, converter: &Converter) {
    let log = converter.log();

    i.uid = e.uid.clone();
    i.created = opt_datetime_from_native(e.created.as_ref());
    i.last_modified = opt_datetime_from_native(e.last_modified.as_ref());
    i.sequence = e.revision;
    i.classification = secrecy_from_native(e.secrecy);
    i.categories = e.categories.clone();
    i.start = opt_datetime_from_native(e.dt_start.as_ref());
    i.summary = e.summary.clone();
    i.description = e.description.clone();
    i.status = status_from_native(&e.status, log);

    i.attendees = e
        .attendees
        .iter()
        .map(|a| attendee_from_native(a, log))
        .collect();
    i.attachments = e.attachments.iter().map(attachment_from_native).collect();
    i.custom_properties = custom_properties_from_native(&e.custom_properties, converter.config());
}

fn set_schedule(i: &mut kcal::Incidence, e: &kolab::Schedule, converter: &Converter) {
    let log = converter.log();

    i.priority = priority_to_native(e.priority, log);
    i.location = e.location.clone();
    if let Some(organizer) = &e.organizer {
        i.organizer = kcal::Person::new(organizer.name_or_empty(), organizer.email.as_str());
    }
    i.recurrence_id = opt_datetime_to_native(e.recurrence_id.as_ref(), log);
    i.this_and_future = e.this_and_future;
    recurrence_to_native(e, &mut i.recurrence, log);
    i.alarms = e.alarms.iter().map(|a| alarm_to_native(a, log)).collect();
}

fn get_schedule(i: &mut kolab::Schedule, e: &kcal::Incidence, converter: &Converter) {
    let log = converter.log();

    i.priority = priority_from_native(e.priority, log);
    i.location = e.location.clone();
    if !e.organizer.email.is_empty() {
        i.organizer = Some(ContactReference::new(
            e.organizer.email.as_str(),
            e.organizer.name.as_str(),
        ));
    }
    i.recurrence_id = opt_datetime_from_native(e.recurrence_id.as_ref());
    i.this_and_future = e.this_and_future;
    recurrence_from_native(&e.recurrence, i, log);
    i.alarms = e
        .alarms
        .iter()
        .filter_map(|a| alarm_from_native(a, log))
        .collect();
}

impl ToNative for kolab::Event {
    type Native = kcal::Event;

    fn to_native(&self, converter: &Converter) -> kcal::Event {
        let mut event: kcal::Event = new_native(self, converter);
        set_schedule(event.incidence_mut(), self.schedule(), converter);

        match &self.end {
            Some(EventEnd::At(end)) => event.set_dt_end(datetime_to_native(end, converter.log())),
            Some(EventEnd::Duration(d)) => event.set_duration(duration_to_native(d)),
            None => {}
        }
        event.transparency = if self.transparent {
            kcal::Transparency::Transparent
        } else {
            kcal::Transparency::Opaque
        };
        event
    }
}

impl FromNative for kolab::Event {
    type Native = kcal::Event;

    fn from_native(native: &kcal::Event, converter: &Converter) -> Self {
        let mut event = kolab::Event::default();
        get_incidence(event.incidence_mut(), native.incidence(), converter);
        get_schedule(event.schedule_mut(), native.incidence(), converter);

        event.end = if let Some(end) = native.dt_end() {
            Some(EventEnd::At(datetime_from_native(end)))
        } else {
            native
                .duration()
                .map(|d| EventEnd::Duration(duration_from_native(d, converter.log())))
        };
        event.transparent = native.transparency == kcal::Transparency::Transparent;
        event
    }
}

impl ToNative for kolab::Todo {
    type Native = kcal::Todo;

    fn to_native(&self, converter: &Converter) -> kcal::Todo {
        let log = converter.log();
        let mut todo: kcal::Todo = new_native(self, converter);
        set_schedule(todo.incidence_mut(), self.schedule(), converter);

        todo.dt_due = opt_datetime_to_native(self.due.as_ref(), log);
        if let Some(parent) = self.related_to.first() {
            todo.incidence.related_to = parent.clone();
            if self.related_to.len() > 1 {
                log.error("only one relation supported but got multiple");
            }
        }
        todo.percent_complete = i32::from(self.percent_complete.min(100));
        if self.percent_complete > 100 {
            log.warning(format!(
                "percent complete {} out of range, clamping to 100",
                self.percent_complete
            ));
        }
        todo
    }
}

impl FromNative for kolab::Todo {
    type Native = kcal::Todo;

    fn from_native(native: &kcal::Todo, converter: &Converter) -> Self {
        let log = converter.log();
        let mut todo = kolab::Todo::default();
        get_incidence(todo.incidence_mut(), native.incidence(), converter);
        get_schedule(todo.schedule_mut(), native.incidence(), converter);

        todo.due = opt_datetime_from_native(native.dt_due.as_ref());
        let percent = native.percent_complete.clamp(0, 100);
        if percent != native.percent_complete {
            log.warning(format!(
                "percent complete {} out of range, clamping to {percent}",
                native.percent_complete
            ));
        }
        todo.percent_complete = u8::try_from(percent).unwrap_or(100);
        if !native.incidence.related_to.is_empty() {
            todo.related_to = vec![native.incidence.related_to.clone()];
        }
        todo
    }
}

impl ToNative for kolab::Journal {
    type Native = kcal::Journal;

    fn to_native(&self, converter: &Converter) -> kcal::Journal {
        new_native(self, converter)
    }
}

impl FromNative for kolab::Journal {
    type Native = kcal::Journal;

    fn from_native(native: &kcal::Journal, converter: &Converter) -> Self {
        let mut journal = kolab::Journal::default();
        get_incidence(journal.incidence_mut(), native.incidence(), converter);
        journal
    }
}
