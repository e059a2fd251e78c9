//! Native recurrence: rules, extra dates and occurrence expansion.

use chrono::{DateTime, NaiveDate, Utc};
use rrule::RRuleSet;
use serde::{Deserialize, Serialize};

use super::datetime::{KDateTime, TimeSpec};
use crate::error::{KolabCalError, KolabCalResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    #[default]
    None,
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl PeriodType {
    fn as_rrule_freq(self) -> Option<&'static str> {
        match self {
            PeriodType::None => None,
            PeriodType::Secondly => Some("SECONDLY"),
            PeriodType::Minutely => Some("MINUTELY"),
            PeriodType::Hourly => Some("HOURLY"),
            PeriodType::Daily => Some("DAILY"),
            PeriodType::Weekly => Some("WEEKLY"),
            PeriodType::Monthly => Some("MONTHLY"),
            PeriodType::Yearly => Some("YEARLY"),
        }
    }
}

/// Weekday with position; `day` is ISO numbered (1 = Monday .. 7 = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WDayPos {
    pub pos: i32,
    pub day: u8,
}

impl WDayPos {
    pub fn new(pos: i32, day: u8) -> Self {
        WDayPos { pos, day }
    }
}

/// Value of [`RecurrenceRule::duration`] for a rule that recurs forever.
pub const RECURS_FOREVER: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub period: PeriodType,
    /// Interval between periods
    pub frequency: u32,
    /// ISO weekday the week starts on
    pub week_start: u8,
    /// Occurrence count if positive, 0 when an end date is set, -1 for no end
    duration: i32,
    end_dt: Option<KDateTime>,
    pub by_seconds: Vec<i32>,
    pub by_minutes: Vec<i32>,
    pub by_hours: Vec<i32>,
    pub by_days: Vec<WDayPos>,
    pub by_month_days: Vec<i32>,
    pub by_year_days: Vec<i32>,
    pub by_week_numbers: Vec<i32>,
    pub by_months: Vec<i32>,
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        RecurrenceRule {
            period: PeriodType::None,
            frequency: 1,
            week_start: 1,
            duration: RECURS_FOREVER,
            end_dt: None,
            by_seconds: Vec::new(),
            by_minutes: Vec::new(),
            by_hours: Vec::new(),
            by_days: Vec::new(),
            by_month_days: Vec::new(),
            by_year_days: Vec::new(),
            by_week_numbers: Vec::new(),
            by_months: Vec::new(),
        }
    }
}

impl RecurrenceRule {
    pub fn new(period: PeriodType, frequency: u32) -> Self {
        RecurrenceRule {
            period,
            frequency,
            ..Default::default()
        }
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn end_dt(&self) -> Option<&KDateTime> {
        self.end_dt.as_ref()
    }

    /// Set the occurrence count (or [`RECURS_FOREVER`]); clears any end date.
    pub fn set_duration(&mut self, duration: i32) {
        self.duration = duration;
        self.end_dt = None;
    }

    /// End the rule at `end`; the duration becomes 0.
    pub fn set_end_dt(&mut self, end: KDateTime) {
        self.duration = 0;
        self.end_dt = Some(end);
    }

    /// RFC 5545 RRULE value for this rule, without the `RRULE:` name.
    pub fn to_rrule_string(&self) -> KolabCalResult<String> {
        let freq = self
            .period
            .as_rrule_freq()
            .ok_or_else(|| KolabCalError::Recurrence("rule has no frequency".into()))?;

        let mut parts = vec![format!("FREQ={freq}")];
        if self.frequency > 1 {
            parts.push(format!("INTERVAL={}", self.frequency));
        }
        if self.duration > 0 {
            parts.push(format!("COUNT={}", self.duration));
        } else if let Some(end) = &self.end_dt {
            parts.push(format!("UNTIL={}", end.to_utc().format("%Y%m%dT%H%M%SZ")));
        }
        if self.week_start != 1 {
            parts.push(format!("WKST={}", weekday_code(self.week_start)?));
        }

        let list = |name: &str, values: &[i32], parts: &mut Vec<String>| {
            if !values.is_empty() {
                let joined: Vec<String> = values.iter().map(i32::to_string).collect();
                parts.push(format!("{}={}", name, joined.join(",")));
            }
        };
        list("BYSECOND", &self.by_seconds, &mut parts);
        list("BYMINUTE", &self.by_minutes, &mut parts);
        list("BYHOUR", &self.by_hours, &mut parts);
        if !self.by_days.is_empty() {
            let days = self
                .by_days
                .iter()
                .map(|wd| {
                    let code = weekday_code(wd.day)?;
                    Ok(if wd.pos == 0 {
                        code.to_string()
                    } else {
                        format!("{}{}", wd.pos, code)
                    })
                })
                .collect::<KolabCalResult<Vec<_>>>()?;
            parts.push(format!("BYDAY={}", days.join(",")));
        }
        list("BYMONTHDAY", &self.by_month_days, &mut parts);
        list("BYYEARDAY", &self.by_year_days, &mut parts);
        list("BYWEEKNO", &self.by_week_numbers, &mut parts);
        list("BYMONTH", &self.by_months, &mut parts);

        Ok(parts.join(";"))
    }
}

fn weekday_code(day: u8) -> KolabCalResult<&'static str> {
    match day {
        1 => Ok("MO"),
        2 => Ok("TU"),
        3 => Ok("WE"),
        4 => Ok("TH"),
        5 => Ok("FR"),
        6 => Ok("SA"),
        7 => Ok("SU"),
        other => Err(KolabCalError::Recurrence(format!(
            "invalid weekday number {other}"
        ))),
    }
}

/// Recurrence information of an incidence.
///
/// The first rule is the default rule; most calendars only ever use that one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recurrence {
    rrules: Vec<RecurrenceRule>,
    ex_rules: Vec<RecurrenceRule>,
    r_date_times: Vec<KDateTime>,
    r_dates: Vec<NaiveDate>,
    ex_date_times: Vec<KDateTime>,
    ex_dates: Vec<NaiveDate>,
}

impl Recurrence {
    pub fn recurs(&self) -> bool {
        !self.rrules.is_empty() || !self.r_date_times.is_empty() || !self.r_dates.is_empty()
    }

    pub fn default_rrule(&self) -> Option<&RecurrenceRule> {
        self.rrules.first()
    }

    /// Default rule, created when missing.
    pub fn default_rrule_mut(&mut self) -> &mut RecurrenceRule {
        if self.rrules.is_empty() {
            self.rrules.push(RecurrenceRule::default());
        }
        &mut self.rrules[0]
    }

    /// Replace the default rule with a plain `period` rule every `frequency` periods.
    pub fn set_rule(&mut self, period: PeriodType, frequency: u32) {
        *self.default_rrule_mut() = RecurrenceRule::new(period, frequency);
    }

    pub fn set_daily(&mut self, frequency: u32) {
        self.set_rule(PeriodType::Daily, frequency);
    }

    pub fn set_weekly(&mut self, frequency: u32) {
        self.set_rule(PeriodType::Weekly, frequency);
    }

    pub fn set_duration(&mut self, duration: i32) {
        self.default_rrule_mut().set_duration(duration);
    }

    pub fn set_end_date_time(&mut self, end: KDateTime) {
        self.default_rrule_mut().set_end_dt(end);
    }

    pub fn rrules(&self) -> &[RecurrenceRule] {
        &self.rrules
    }

    pub fn add_rrule(&mut self, rule: RecurrenceRule) {
        self.rrules.push(rule);
    }

    pub fn ex_rules(&self) -> &[RecurrenceRule] {
        &self.ex_rules
    }

    pub fn add_ex_rule(&mut self, rule: RecurrenceRule) {
        self.ex_rules.push(rule);
    }

    pub fn r_date_times(&self) -> &[KDateTime] {
        &self.r_date_times
    }

    pub fn add_r_date_time(&mut self, dt: KDateTime) {
        self.r_date_times.push(dt);
    }

    pub fn r_dates(&self) -> &[NaiveDate] {
        &self.r_dates
    }

    pub fn add_r_date(&mut self, date: NaiveDate) {
        self.r_dates.push(date);
    }

    pub fn ex_date_times(&self) -> &[KDateTime] {
        &self.ex_date_times
    }

    pub fn add_ex_date_time(&mut self, dt: KDateTime) {
        self.ex_date_times.push(dt);
    }

    pub fn ex_dates(&self) -> &[NaiveDate] {
        &self.ex_dates
    }

    pub fn add_ex_date(&mut self, date: NaiveDate) {
        self.ex_dates.push(date);
    }

    pub fn clear(&mut self) {
        *self = Recurrence::default();
    }

    /// Expand the recurrence anchored at `start` into at most `limit` instants.
    ///
    /// Only the default rule is expanded. Extra recurrence dates are merged
    /// in, exception dates removed. Date-only values are read as midnight UTC.
    pub fn occurrences(&self, start: &KDateTime, limit: u16) -> KolabCalResult<Vec<DateTime<Utc>>> {
        let mut dates = match self.default_rrule() {
            Some(rule) => {
                let rrule_set: RRuleSet = self.build_rrule_string(start, rule)?.parse().map_err(
                    |e| KolabCalError::Recurrence(format!("Failed to parse recurrence: {e}")),
                )?;
                rrule_set
                    .all(limit)
                    .dates
                    .iter()
                    .map(|dt| dt.with_timezone(&Utc))
                    .collect()
            }
            None => vec![start.to_utc()],
        };

        dates.extend(self.r_date_times.iter().map(KDateTime::to_utc));
        dates.extend(self.r_dates.iter().map(|d| KDateTime::Date(*d).to_utc()));

        let excluded: Vec<DateTime<Utc>> = self
            .ex_date_times
            .iter()
            .map(KDateTime::to_utc)
            .chain(self.ex_dates.iter().map(|d| KDateTime::Date(*d).to_utc()))
            .collect();
        dates.retain(|dt| !excluded.contains(dt));

        dates.sort();
        dates.dedup();
        dates.truncate(usize::from(limit));
        Ok(dates)
    }

    fn build_rrule_string(&self, start: &KDateTime, rule: &RecurrenceRule) -> KolabCalResult<String> {
        let mut lines = Vec::new();

        // The rrule crate needs a datetime, so dates and clock times become UTC
        let dtstart = match start {
            KDateTime::Date(d) => format!("DTSTART:{}T000000Z", d.format("%Y%m%d")),
            KDateTime::DateTime { local, spec } => match spec {
                TimeSpec::Utc | TimeSpec::ClockTime => {
                    format!("DTSTART:{}Z", local.format("%Y%m%dT%H%M%S"))
                }
                TimeSpec::Zone(tz) => format!(
                    "DTSTART;TZID={}:{}",
                    tz.name(),
                    local.format("%Y%m%dT%H%M%S")
                ),
            },
        };
        lines.push(dtstart);
        lines.push(format!("RRULE:{}", rule.to_rrule_string()?));

        Ok(lines.join("\n"))
    }
}
