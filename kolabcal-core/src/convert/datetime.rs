use chrono_tz::Tz;

use crate::diagnostics::ErrorHandler;
use crate::kcal::{KDateTime, TimeSpec};
use crate::kolab::DateTimeValue;

/// Zone names are resolved against the IANA database. An unknown zone is an
/// error; the value keeps its wall-clock reading as a floating time.
pub fn datetime_to_native(value: &DateTimeValue, log: &ErrorHandler) -> KDateTime {
    match value {
        DateTimeValue::Date(d) => KDateTime::Date(*d),
        DateTimeValue::Utc(dt) => KDateTime::utc(*dt),
        DateTimeValue::Zoned { datetime, tzid } => match tzid.parse::<Tz>() {
            Ok(tz) => KDateTime::zoned(*datetime, tz),
            Err(_) => {
                log.error(format!("unknown timezone {tzid:?}, treating {datetime} as floating"));
                KDateTime::clock_time(*datetime)
            }
        },
        DateTimeValue::Floating(dt) => KDateTime::clock_time(*dt),
    }
}

pub fn datetime_from_native(value: &KDateTime) -> DateTimeValue {
    match value {
        KDateTime::Date(d) => DateTimeValue::Date(*d),
        KDateTime::DateTime { local, spec } => match spec {
            TimeSpec::Utc => DateTimeValue::Utc(local.and_utc()),
            TimeSpec::Zone(tz) => DateTimeValue::Zoned {
                datetime: *local,
                tzid: tz.name().to_string(),
            },
            TimeSpec::ClockTime => DateTimeValue::Floating(*local),
        },
    }
}

pub(crate) fn opt_datetime_to_native(
    value: Option<&DateTimeValue>,
    log: &ErrorHandler,
) -> Option<KDateTime> {
    value.map(|v| datetime_to_native(v, log))
}

pub(crate) fn opt_datetime_from_native(value: Option<&KDateTime>) -> Option<DateTimeValue> {
    value.map(datetime_from_native)
}
