//! Native date/time and duration values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// How the local reading of a [`KDateTime`] relates to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSpec {
    Utc,
    Zone(Tz),
    /// Floating: read in whatever zone the consumer uses
    ClockTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KDateTime {
    Date(NaiveDate),
    DateTime { local: NaiveDateTime, spec: TimeSpec },
}

impl KDateTime {
    pub fn utc(dt: DateTime<Utc>) -> Self {
        KDateTime::DateTime {
            local: dt.naive_utc(),
            spec: TimeSpec::Utc,
        }
    }

    pub fn zoned(local: NaiveDateTime, tz: Tz) -> Self {
        KDateTime::DateTime {
            local,
            spec: TimeSpec::Zone(tz),
        }
    }

    pub fn clock_time(local: NaiveDateTime) -> Self {
        KDateTime::DateTime {
            local,
            spec: TimeSpec::ClockTime,
        }
    }

    pub fn is_date_only(&self) -> bool {
        matches!(self, KDateTime::Date(_))
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            KDateTime::Date(d) => *d,
            KDateTime::DateTime { local, .. } => local.date(),
        }
    }

    /// The instant this value denotes.
    ///
    /// Dates and clock times are read as UTC. A local time that is skipped by
    /// a DST transition is also read as UTC; an ambiguous one takes the
    /// earlier instant.
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            KDateTime::Date(d) => d.and_time(chrono::NaiveTime::MIN).and_utc(),
            KDateTime::DateTime { local, spec } => match spec {
                TimeSpec::Utc | TimeSpec::ClockTime => local.and_utc(),
                TimeSpec::Zone(tz) => tz
                    .from_local_datetime(local)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or_else(|| local.and_utc()),
            },
        }
    }
}

impl From<NaiveDate> for KDateTime {
    fn from(d: NaiveDate) -> Self {
        KDateTime::Date(d)
    }
}

impl From<DateTime<Utc>> for KDateTime {
    fn from(dt: DateTime<Utc>) -> Self {
        KDateTime::utc(dt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationType {
    #[default]
    Seconds,
    Days,
}

/// A scalar duration counted either in days or in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Duration {
    value: i64,
    #[serde(rename = "type")]
    kind: DurationType,
}

impl Duration {
    pub const fn seconds(value: i64) -> Self {
        Duration {
            value,
            kind: DurationType::Seconds,
        }
    }

    pub const fn days(value: i64) -> Self {
        Duration {
            value,
            kind: DurationType::Days,
        }
    }

    /// Duration from `start` to `end`: whole days between two dates,
    /// seconds otherwise.
    pub fn between(start: &KDateTime, end: &KDateTime) -> Self {
        if start.is_date_only() && end.is_date_only() {
            Duration::days((end.date() - start.date()).num_days())
        } else {
            Duration::seconds((end.to_utc() - start.to_utc()).num_seconds())
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn duration_type(&self) -> DurationType {
        self.kind
    }

    pub fn is_daily(&self) -> bool {
        self.kind == DurationType::Days
    }

    pub fn as_seconds(&self) -> i64 {
        match self.kind {
            DurationType::Seconds => self.value,
            DurationType::Days => self.value * 86_400,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }
}
