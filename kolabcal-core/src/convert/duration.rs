use crate::diagnostics::ErrorHandler;
use crate::kcal;
use crate::kolab;

const SECONDS_PER_DAY: i64 = 86_400;

/// Durations with a time part become signed seconds; otherwise signed days.
pub fn duration_to_native(d: &kolab::Duration) -> kcal::Duration {
    let days = i64::from(d.weeks) * 7 + i64::from(d.days);
    let sign = if d.negative { -1 } else { 1 };

    if d.has_time_part() {
        let seconds = days * SECONDS_PER_DAY
            + i64::from(d.hours) * 3600
            + i64::from(d.minutes) * 60
            + i64::from(d.seconds);
        kcal::Duration::seconds(sign * seconds)
    } else {
        kcal::Duration::days(sign * days)
    }
}

/// Rebuild a pure-days or pure-seconds duration; the original split into
/// weeks/hours/minutes is not recoverable.
pub fn duration_from_native(d: kcal::Duration, log: &ErrorHandler) -> kolab::Duration {
    let negative = d.value() < 0;
    let magnitude = u32::try_from(d.value().unsigned_abs()).unwrap_or_else(|_| {
        log.error(format!("duration {} does not fit, saturating", d.value()));
        u32::MAX
    });

    let duration = if d.is_daily() {
        kolab::Duration::new(magnitude, 0, 0, 0)
    } else {
        kolab::Duration::new(0, 0, 0, magnitude)
    };
    kolab::Duration {
        negative,
        ..duration
    }
}
