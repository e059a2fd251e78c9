//! Neutral date/time and duration values.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A date or date-time as found in a Kolab document.
///
/// A date-time is either UTC, bound to a named timezone, or floating (read in
/// whatever zone the consumer uses). The variants make "UTC and zoned at the
/// same time" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTimeValue {
    Date(NaiveDate),
    Utc(DateTime<Utc>),
    Zoned { datetime: NaiveDateTime, tzid: String },
    Floating(NaiveDateTime),
}

impl DateTimeValue {
    pub fn is_date_only(&self) -> bool {
        matches!(self, DateTimeValue::Date(_))
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            DateTimeValue::Date(d) => *d,
            DateTimeValue::Utc(dt) => dt.date_naive(),
            DateTimeValue::Zoned { datetime, .. } | DateTimeValue::Floating(datetime) => {
                datetime.date()
            }
        }
    }

    pub fn tzid(&self) -> Option<&str> {
        match self {
            DateTimeValue::Zoned { tzid, .. } => Some(tzid),
            _ => None,
        }
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DateTimeValue::Utc(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%SZ")),
            DateTimeValue::Zoned { datetime, tzid } => {
                write!(f, "{} ({})", datetime.format("%Y-%m-%dT%H:%M:%S"), tzid)
            }
            DateTimeValue::Floating(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

/// An RFC 5545 style duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Duration {
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub negative: bool,
}

impl Duration {
    pub const fn from_weeks(weeks: u32) -> Self {
        Duration {
            weeks,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            negative: false,
        }
    }

    /// Day/time based duration; weeks stay zero.
    pub const fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Duration {
            weeks: 0,
            days,
            hours,
            minutes,
            seconds,
            negative: false,
        }
    }

    pub const fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    /// True when any component finer than a day is set.
    pub fn has_time_part(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.weeks != 0 {
            write!(f, "{}W", self.weeks)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.has_time_part() {
            f.write_str("T")?;
            if self.hours != 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes != 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0 {
                write!(f, "{}S", self.seconds)?;
            }
        } else if self.weeks == 0 && self.days == 0 {
            f.write_str("T0S")?;
        }
        Ok(())
    }
}
