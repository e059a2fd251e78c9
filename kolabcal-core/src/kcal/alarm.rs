use serde::{Deserialize, Serialize};

use super::attendee::Person;
use super::datetime::{Duration, KDateTime};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum AlarmAction {
    #[default]
    Invalid,
    Display {
        text: String,
    },
    Procedure {
        program_file: String,
        arguments: String,
    },
    Email {
        subject: String,
        text: String,
        addresses: Vec<Person>,
    },
    Audio {
        /// Location of the sound file
        file: String,
    },
}

/// When an alarm fires: at a fixed time or relative to the start or end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmTime {
    At(KDateTime),
    StartOffset(Duration),
    EndOffset(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub action: AlarmAction,
    time: Option<AlarmTime>,
    pub snooze_time: Duration,
    pub repeat_count: i32,
    pub enabled: bool,
}

impl Default for Alarm {
    fn default() -> Self {
        Alarm {
            action: AlarmAction::Invalid,
            time: None,
            snooze_time: Duration::seconds(5),
            repeat_count: 0,
            enabled: false,
        }
    }
}

impl Alarm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_display_alarm(&mut self, text: impl Into<String>) {
        self.action = AlarmAction::Display { text: text.into() };
    }

    pub fn set_email_alarm(
        &mut self,
        subject: impl Into<String>,
        text: impl Into<String>,
        addresses: Vec<Person>,
    ) {
        self.action = AlarmAction::Email {
            subject: subject.into(),
            text: text.into(),
            addresses,
        };
    }

    pub fn set_audio_alarm(&mut self, file: impl Into<String>) {
        self.action = AlarmAction::Audio { file: file.into() };
    }

    pub fn set_procedure_alarm(&mut self, program_file: impl Into<String>, arguments: impl Into<String>) {
        self.action = AlarmAction::Procedure {
            program_file: program_file.into(),
            arguments: arguments.into(),
        };
    }

    pub fn time(&self) -> Option<&AlarmTime> {
        self.time.as_ref()
    }

    pub fn set_time(&mut self, at: KDateTime) {
        self.time = Some(AlarmTime::At(at));
    }

    pub fn set_start_offset(&mut self, offset: Duration) {
        self.time = Some(AlarmTime::StartOffset(offset));
    }

    pub fn set_end_offset(&mut self, offset: Duration) {
        self.time = Some(AlarmTime::EndOffset(offset));
    }

    pub fn has_time(&self) -> bool {
        matches!(self.time, Some(AlarmTime::At(_)))
    }

    pub fn has_start_offset(&self) -> bool {
        matches!(self.time, Some(AlarmTime::StartOffset(_)))
    }

    pub fn has_end_offset(&self) -> bool {
        matches!(self.time, Some(AlarmTime::EndOffset(_)))
    }
}
