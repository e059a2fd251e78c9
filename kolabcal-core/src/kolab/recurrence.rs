//! Neutral recurrence rule.

use serde::{Deserialize, Serialize};

use super::time::DateTimeValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    None,
    Yearly,
    Monthly,
    Weekly,
    Daily,
    Hourly,
    Minutely,
    Secondly,
}

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A BYDAY entry: weekday with an optional ordinal (`0` = every occurrence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayPos {
    pub occurrence: i32,
    pub weekday: Weekday,
}

impl DayPos {
    pub fn new(occurrence: i32, weekday: Weekday) -> Self {
        DayPos {
            occurrence,
            weekday,
        }
    }
}

/// How a rule ends. Count and end date are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Neither a count nor an end date was given.
    #[default]
    Unspecified,
    Count(u32),
    Until(DateTimeValue),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    pub interval: u32,
    pub week_start: Weekday,
    pub termination: Termination,
    pub by_second: Vec<i32>,
    pub by_minute: Vec<i32>,
    pub by_hour: Vec<i32>,
    pub by_day: Vec<DayPos>,
    pub by_month_day: Vec<i32>,
    pub by_year_day: Vec<i32>,
    pub by_week_no: Vec<i32>,
    pub by_month: Vec<i32>,
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        RecurrenceRule {
            frequency: Frequency::None,
            interval: 1,
            week_start: Weekday::Monday,
            termination: Termination::Unspecified,
            by_second: Vec::new(),
            by_minute: Vec::new(),
            by_hour: Vec::new(),
            by_day: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_month: Vec::new(),
        }
    }
}

impl RecurrenceRule {
    pub fn new(frequency: Frequency, interval: u32) -> Self {
        RecurrenceRule {
            frequency,
            interval,
            ..Default::default()
        }
    }

    pub fn count(&self) -> Option<u32> {
        match self.termination {
            Termination::Count(n) => Some(n),
            _ => None,
        }
    }

    pub fn end(&self) -> Option<&DateTimeValue> {
        match &self.termination {
            Termination::Until(end) => Some(end),
            _ => None,
        }
    }
}
