//! Alarm mapping.
//!
//! Native alarms carry an enabled flag the neutral model has no field for.
//! Neutral alarms always become enabled native alarms; disabled native alarms
//! are dropped on the way back.

use super::datetime::{datetime_from_native, datetime_to_native};
use super::duration::{duration_from_native, duration_to_native};
use crate::diagnostics::ErrorHandler;
use crate::kcal::{self, AlarmAction, AlarmTime};
use crate::kolab::{
    Alarm, AlarmKind, AlarmTrigger, Attachment, AttachmentContent, ContactReference, Related,
};

pub fn alarm_to_native(a: &Alarm, log: &ErrorHandler) -> kcal::Alarm {
    let mut native = kcal::Alarm::new();

    match &a.kind {
        AlarmKind::Display { text } => native.set_display_alarm(text.as_str()),
        AlarmKind::Email {
            summary,
            description,
            recipients,
        } => {
            let addresses = recipients
                .iter()
                .map(|c| kcal::Person::new(c.name_or_empty(), c.email.as_str()))
                .collect();
            native.set_email_alarm(summary.as_str(), description.as_str(), addresses);
        }
        AlarmKind::Audio { file } => match &file.content {
            AttachmentContent::Uri(uri) => native.set_audio_alarm(uri.as_str()),
            _ => {
                log.warning("inline audio alarm data is not supported, dropping the sound file");
                native.set_audio_alarm("");
            }
        },
    }

    match &a.trigger {
        AlarmTrigger::Absolute(at) => native.set_time(datetime_to_native(at, log)),
        AlarmTrigger::Relative {
            offset,
            related: Related::Start,
        } => native.set_start_offset(duration_to_native(offset)),
        AlarmTrigger::Relative {
            offset,
            related: Related::End,
        } => native.set_end_offset(duration_to_native(offset)),
    }

    native.snooze_time = duration_to_native(&a.snooze);
    native.repeat_count = a.repeat;
    native.enabled = true;
    native
}

/// `None` when the alarm cannot be represented; the reason is logged.
pub fn alarm_from_native(native: &kcal::Alarm, log: &ErrorHandler) -> Option<Alarm> {
    if !native.enabled {
        log.warning("skipping disabled alarm");
        return None;
    }

    let kind = match &native.action {
        AlarmAction::Display { text } => AlarmKind::Display { text: text.clone() },
        AlarmAction::Email {
            subject,
            text,
            addresses,
        } => AlarmKind::Email {
            summary: subject.clone(),
            description: text.clone(),
            recipients: addresses
                .iter()
                .map(|p| ContactReference::new(p.email.as_str(), p.name.as_str()))
                .collect(),
        },
        AlarmAction::Audio { file } => AlarmKind::Audio {
            file: Attachment::uri(file.as_str(), ""),
        },
        AlarmAction::Procedure { .. } | AlarmAction::Invalid => {
            log.error(format!("unhandled alarm action {:?}", native.action));
            return None;
        }
    };

    let trigger = match native.time() {
        Some(AlarmTime::At(at)) => AlarmTrigger::Absolute(datetime_from_native(at)),
        Some(AlarmTime::StartOffset(offset)) => AlarmTrigger::Relative {
            offset: duration_from_native(*offset, log),
            related: Related::Start,
        },
        Some(AlarmTime::EndOffset(offset)) => AlarmTrigger::Relative {
            offset: duration_from_native(*offset, log),
            related: Related::End,
        },
        None => {
            log.error("alarm trigger is missing");
            return None;
        }
    };

    Some(Alarm {
        kind,
        trigger,
        snooze: duration_from_native(native.snooze_time, log),
        repeat: native.repeat_count,
    })
}
