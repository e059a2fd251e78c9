use serde::{Deserialize, Serialize};

use super::attendee::ContactReference;
use super::incidence::Attachment;
use super::time::{DateTimeValue, Duration};

/// What the alarm does when it fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum AlarmKind {
    Display {
        text: String,
    },
    Email {
        summary: String,
        description: String,
        recipients: Vec<ContactReference>,
    },
    Audio {
        file: Attachment,
    },
}

/// Which end of the incidence a relative trigger is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Related {
    #[default]
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmTrigger {
    Absolute(DateTimeValue),
    Relative { offset: Duration, related: Related },
}

impl AlarmTrigger {
    /// Fire `offset` ahead of the incidence start.
    pub fn before_start(offset: Duration) -> Self {
        AlarmTrigger::Relative {
            offset: Duration {
                negative: true,
                ..offset
            },
            related: Related::Start,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub kind: AlarmKind,
    pub trigger: AlarmTrigger,
    /// Delay between repetitions
    #[serde(default)]
    pub snooze: Duration,
    /// Number of additional repetitions after the first trigger
    #[serde(default)]
    pub repeat: i32,
}

impl Alarm {
    pub fn display(text: impl Into<String>, trigger: AlarmTrigger) -> Self {
        Alarm {
            kind: AlarmKind::Display { text: text.into() },
            trigger,
            snooze: Duration::default(),
            repeat: 0,
        }
    }

    pub fn email(
        summary: impl Into<String>,
        description: impl Into<String>,
        recipients: Vec<ContactReference>,
        trigger: AlarmTrigger,
    ) -> Self {
        Alarm {
            kind: AlarmKind::Email {
                summary: summary.into(),
                description: description.into(),
                recipients,
            },
            trigger,
            snooze: Duration::default(),
            repeat: 0,
        }
    }

    pub fn audio(file: Attachment, trigger: AlarmTrigger) -> Self {
        Alarm {
            kind: AlarmKind::Audio { file },
            trigger,
            snooze: Duration::default(),
            repeat: 0,
        }
    }
}
