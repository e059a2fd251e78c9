//! Recurrence rule and recurrence/exception date mapping.

use super::datetime::{datetime_from_native, datetime_to_native};
use super::enums::{frequency_from_native, frequency_to_native, weekday_from_native, weekday_to_native};
use crate::diagnostics::ErrorHandler;
use crate::kcal::{self, KDateTime};
use crate::kolab::{self, DayPos, Frequency, Schedule, Termination};

const NO_FREQUENCY: &str = "recurrence rule without frequency, skipping it";

/// Write the schedule's rule and extra dates into `rec`.
///
/// Recurrence and exception dates are copied even without a rule.
pub fn recurrence_to_native(schedule: &Schedule, rec: &mut kcal::Recurrence, log: &ErrorHandler) {
    match &schedule.recurrence_rule {
        Some(rule) if rule.frequency == Frequency::None => log.warning(NO_FREQUENCY),
        Some(rule) => *rec.default_rrule_mut() = rule_to_native(rule, log),
        None => {}
    }

    for dt in &schedule.recurrence_dates {
        match datetime_to_native(dt, log) {
            KDateTime::Date(d) => rec.add_r_date(d),
            native => rec.add_r_date_time(native),
        }
    }
    for dt in &schedule.exception_dates {
        match datetime_to_native(dt, log) {
            KDateTime::Date(d) => rec.add_ex_date(d),
            native => rec.add_ex_date_time(native),
        }
    }
}

fn rule_to_native(rule: &kolab::RecurrenceRule, log: &ErrorHandler) -> kcal::RecurrenceRule {
    let mut native = kcal::RecurrenceRule::new(frequency_to_native(rule.frequency, log), rule.interval);
    native.week_start = weekday_to_native(rule.week_start);

    match &rule.termination {
        Termination::Until(end) => native.set_end_dt(datetime_to_native(end, log)),
        Termination::Count(0) => {
            log.error("recurrence count 0 is invalid, recurring forever");
            native.set_duration(kcal::RECURS_FOREVER);
        }
        Termination::Count(n) => native.set_duration(i32::try_from(*n).unwrap_or_else(|_| {
            log.error(format!("recurrence count {n} does not fit, saturating"));
            i32::MAX
        })),
        Termination::Unspecified => native.set_duration(kcal::RECURS_FOREVER),
    }

    native.by_seconds = rule.by_second.clone();
    native.by_minutes = rule.by_minute.clone();
    native.by_hours = rule.by_hour.clone();
    native.by_days = rule
        .by_day
        .iter()
        .map(|dp| kcal::WDayPos::new(dp.occurrence, weekday_to_native(dp.weekday)))
        .collect();
    native.by_month_days = rule.by_month_day.clone();
    native.by_year_days = rule.by_year_day.clone();
    native.by_week_numbers = rule.by_week_no.clone();
    native.by_months = rule.by_month.clone();
    native
}

/// Read the default rule and extra dates of `rec` into `schedule`.
///
/// Only the default rule is representable; exclusion rules are dropped with
/// a warning.
pub fn recurrence_from_native(rec: &kcal::Recurrence, schedule: &mut Schedule, log: &ErrorHandler) {
    if !rec.recurs() {
        return;
    }
    match rec.default_rrule() {
        None => {
            log.warning("no recurrence rule");
            return;
        }
        Some(native) if native.period == kcal::PeriodType::None => log.warning(NO_FREQUENCY),
        Some(native) => schedule.recurrence_rule = Some(rule_from_native(native, log)),
    }

    schedule.recurrence_dates = rec
        .r_date_times()
        .iter()
        .map(datetime_from_native)
        .chain(rec.r_dates().iter().map(|d| kolab::DateTimeValue::Date(*d)))
        .collect();
    schedule.exception_dates = rec
        .ex_date_times()
        .iter()
        .map(datetime_from_native)
        .chain(rec.ex_dates().iter().map(|d| kolab::DateTimeValue::Date(*d)))
        .collect();

    if !rec.ex_rules().is_empty() {
        log.warning("exception rules are not supported");
    }
}

fn rule_from_native(native: &kcal::RecurrenceRule, log: &ErrorHandler) -> kolab::RecurrenceRule {
    let mut rule = kolab::RecurrenceRule::new(frequency_from_native(native.period, log), native.frequency);
    rule.week_start = weekday_from_native(native.week_start, log);

    // duration: > 0 count, 0 end date, < 0 forever
    rule.termination = match native.duration() {
        n if n > 0 => Termination::Count(n.unsigned_abs()),
        0 => match native.end_dt() {
            Some(end) => Termination::Until(datetime_from_native(end)),
            None => Termination::Unspecified,
        },
        _ => Termination::Unspecified,
    };

    rule.by_second = native.by_seconds.clone();
    rule.by_minute = native.by_minutes.clone();
    rule.by_hour = native.by_hours.clone();
    rule.by_day = native
        .by_days
        .iter()
        .map(|wd| DayPos::new(wd.pos, weekday_from_native(wd.day, log)))
        .collect();
    rule.by_month_day = native.by_month_days.clone();
    rule.by_year_day = native.by_year_days.clone();
    rule.by_week_no = native.by_week_numbers.clone();
    rule.by_month = native.by_months.clone();
    rule
}
