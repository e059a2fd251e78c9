//! Scalar and enumeration mappers.
//!
//! Values that only exist on the native side are reported as errors and
//! replaced by the documented default.

use crate::diagnostics::ErrorHandler;
use crate::kcal;
use crate::kolab;

pub fn secrecy_to_native(c: kolab::Classification) -> kcal::Secrecy {
    match c {
        kolab::Classification::Public => kcal::Secrecy::Public,
        kolab::Classification::Private => kcal::Secrecy::Private,
        kolab::Classification::Confidential => kcal::Secrecy::Confidential,
    }
}

pub fn secrecy_from_native(s: kcal::Secrecy) -> kolab::Classification {
    match s {
        kcal::Secrecy::Public => kolab::Classification::Public,
        kcal::Secrecy::Private => kolab::Classification::Private,
        kcal::Secrecy::Confidential => kolab::Classification::Confidential,
    }
}

pub fn status_to_native(s: kolab::Status) -> kcal::Status {
    match s {
        kolab::Status::Undefined => kcal::Status::None,
        kolab::Status::NeedsAction => kcal::Status::NeedsAction,
        kolab::Status::Completed => kcal::Status::Completed,
        kolab::Status::InProcess => kcal::Status::InProcess,
        kolab::Status::Cancelled => kcal::Status::Canceled,
        kolab::Status::Tentative => kcal::Status::Tentative,
        kolab::Status::Confirmed => kcal::Status::Confirmed,
        kolab::Status::Draft => kcal::Status::Draft,
        kolab::Status::Final => kcal::Status::Final,
    }
}

pub fn status_from_native(s: &kcal::Status, log: &ErrorHandler) -> kolab::Status {
    match s {
        kcal::Status::None => kolab::Status::Undefined,
        kcal::Status::NeedsAction => kolab::Status::NeedsAction,
        kcal::Status::Completed => kolab::Status::Completed,
        kcal::Status::InProcess => kolab::Status::InProcess,
        kcal::Status::Canceled => kolab::Status::Cancelled,
        kcal::Status::Tentative => kolab::Status::Tentative,
        kcal::Status::Confirmed => kolab::Status::Confirmed,
        kcal::Status::Draft => kolab::Status::Draft,
        kcal::Status::Final => kolab::Status::Final,
        kcal::Status::Custom(name) => {
            log.error(format!("unhandled status {name:?}"));
            kolab::Status::Undefined
        }
    }
}

pub fn part_stat_to_native(p: kolab::PartStatus) -> kcal::PartStat {
    match p {
        kolab::PartStatus::NeedsAction => kcal::PartStat::NeedsAction,
        kolab::PartStatus::Accepted => kcal::PartStat::Accepted,
        kolab::PartStatus::Declined => kcal::PartStat::Declined,
        kolab::PartStatus::Tentative => kcal::PartStat::Tentative,
        kolab::PartStatus::Delegated => kcal::PartStat::Delegated,
    }
}

pub fn part_stat_from_native(p: kcal::PartStat, log: &ErrorHandler) -> kolab::PartStatus {
    match p {
        kcal::PartStat::NeedsAction => kolab::PartStatus::NeedsAction,
        kcal::PartStat::Accepted => kolab::PartStatus::Accepted,
        kcal::PartStat::Declined => kolab::PartStatus::Declined,
        kcal::PartStat::Tentative => kolab::PartStatus::Tentative,
        kcal::PartStat::Delegated => kolab::PartStatus::Delegated,
        kcal::PartStat::Completed | kcal::PartStat::InProcess | kcal::PartStat::None => {
            log.error(format!("unhandled participation status {p:?}"));
            kolab::PartStatus::NeedsAction
        }
    }
}

pub fn role_to_native(r: kolab::Role) -> kcal::Role {
    match r {
        kolab::Role::Required => kcal::Role::ReqParticipant,
        kolab::Role::Chair => kcal::Role::Chair,
        kolab::Role::Optional => kcal::Role::OptParticipant,
        kolab::Role::NonParticipant => kcal::Role::NonParticipant,
    }
}

pub fn role_from_native(r: kcal::Role) -> kolab::Role {
    match r {
        kcal::Role::ReqParticipant => kolab::Role::Required,
        kcal::Role::Chair => kolab::Role::Chair,
        kcal::Role::OptParticipant => kolab::Role::Optional,
        kcal::Role::NonParticipant => kolab::Role::NonParticipant,
    }
}

/// Both sides use 0 (undefined) and 1 (highest) to 9 (lowest).
pub fn priority_to_native(priority: i32, log: &ErrorHandler) -> i32 {
    checked_priority(priority, log)
}

pub fn priority_from_native(priority: i32, log: &ErrorHandler) -> i32 {
    checked_priority(priority, log)
}

#[track_caller]
fn checked_priority(priority: i32, log: &ErrorHandler) -> i32 {
    if (0..=9).contains(&priority) {
        priority
    } else {
        log.error(format!("priority {priority} out of range"));
        0
    }
}

pub fn weekday_to_native(day: kolab::Weekday) -> u8 {
    match day {
        kolab::Weekday::Monday => 1,
        kolab::Weekday::Tuesday => 2,
        kolab::Weekday::Wednesday => 3,
        kolab::Weekday::Thursday => 4,
        kolab::Weekday::Friday => 5,
        kolab::Weekday::Saturday => 6,
        kolab::Weekday::Sunday => 7,
    }
}

pub fn weekday_from_native(day: u8, log: &ErrorHandler) -> kolab::Weekday {
    match day {
        1 => kolab::Weekday::Monday,
        2 => kolab::Weekday::Tuesday,
        3 => kolab::Weekday::Wednesday,
        4 => kolab::Weekday::Thursday,
        5 => kolab::Weekday::Friday,
        6 => kolab::Weekday::Saturday,
        7 => kolab::Weekday::Sunday,
        other => {
            log.error(format!("unhandled weekday {other}"));
            kolab::Weekday::Monday
        }
    }
}

pub fn frequency_to_native(f: kolab::Frequency, log: &ErrorHandler) -> kcal::PeriodType {
    match f {
        kolab::Frequency::None => {
            log.warning("no recurrence?");
            kcal::PeriodType::None
        }
        kolab::Frequency::Yearly => kcal::PeriodType::Yearly,
        kolab::Frequency::Monthly => kcal::PeriodType::Monthly,
        kolab::Frequency::Weekly => kcal::PeriodType::Weekly,
        kolab::Frequency::Daily => kcal::PeriodType::Daily,
        kolab::Frequency::Hourly => kcal::PeriodType::Hourly,
        kolab::Frequency::Minutely => kcal::PeriodType::Minutely,
        kolab::Frequency::Secondly => kcal::PeriodType::Secondly,
    }
}

pub fn frequency_from_native(p: kcal::PeriodType, log: &ErrorHandler) -> kolab::Frequency {
    match p {
        kcal::PeriodType::None => {
            log.warning("no recurrence?");
            kolab::Frequency::None
        }
        kcal::PeriodType::Yearly => kolab::Frequency::Yearly,
        kcal::PeriodType::Monthly => kolab::Frequency::Monthly,
        kcal::PeriodType::Weekly => kolab::Frequency::Weekly,
        kcal::PeriodType::Daily => kolab::Frequency::Daily,
        kcal::PeriodType::Hourly => kolab::Frequency::Hourly,
        kcal::PeriodType::Minutely => kolab::Frequency::Minutely,
        kcal::PeriodType::Secondly => kolab::Frequency::Secondly,
    }
}

pub fn cutype_to_code(cutype: kolab::Cutype) -> String {
    cutype.code().to_string()
}

/// Parse a cutype property value; garbage is an error and reads as individual.
pub fn cutype_from_code(code: &str, log: &ErrorHandler) -> kolab::Cutype {
    match code.trim().parse::<u8>().ok().and_then(kolab::Cutype::from_code) {
        Some(cutype) => cutype,
        None => {
            log.error(format!("unhandled cutype {code:?}"));
            kolab::Cutype::Individual
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    #[test]
    fn test_status_round_trip() {
        let log = ErrorHandler::new();
        let all = [
            kolab::Status::Undefined,
            kolab::Status::NeedsAction,
            kolab::Status::Completed,
            kolab::Status::InProcess,
            kolab::Status::Cancelled,
            kolab::Status::Tentative,
            kolab::Status::Confirmed,
            kolab::Status::Draft,
            kolab::Status::Final,
        ];
        for status in all {
            assert_eq!(status_from_native(&status_to_native(status), &log), status);
        }
        assert!(log.is_empty());
    }

    #[test]
    fn test_native_only_part_stat_is_an_error() {
        let log = ErrorHandler::new();

        assert_eq!(
            part_stat_from_native(kcal::PartStat::InProcess, &log),
            kolab::PartStatus::NeedsAction
        );
        assert_eq!(log.count(Severity::Error), 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_custom_status_is_an_error() {
        let log = ErrorHandler::new();

        let status = status_from_native(&kcal::Status::Custom("X-WAITING".into()), &log);
        assert_eq!(status, kolab::Status::Undefined);
        assert_eq!(log.worst_severity(), Severity::Error);
    }

    #[test]
    fn test_weekdays_are_iso_numbered() {
        let log = ErrorHandler::new();
        assert_eq!(weekday_to_native(kolab::Weekday::Monday), 1);
        assert_eq!(weekday_to_native(kolab::Weekday::Sunday), 7);
        assert_eq!(weekday_from_native(4, &log), kolab::Weekday::Thursday);
        assert!(log.is_empty());

        assert_eq!(weekday_from_native(0, &log), kolab::Weekday::Monday);
        assert_eq!(log.count(Severity::Error), 1);
    }

    #[test]
    fn test_role_and_secrecy_round_trip() {
        for role in [
            kolab::Role::Required,
            kolab::Role::Chair,
            kolab::Role::Optional,
            kolab::Role::NonParticipant,
        ] {
            assert_eq!(role_from_native(role_to_native(role)), role);
        }
        for class in [
            kolab::Classification::Public,
            kolab::Classification::Private,
            kolab::Classification::Confidential,
        ] {
            assert_eq!(secrecy_from_native(secrecy_to_native(class)), class);
        }
    }

    #[test]
    fn test_priority_is_identity_in_range() {
        let log = ErrorHandler::new();
        for p in 0..=9 {
            assert_eq!(priority_from_native(priority_to_native(p, &log), &log), p);
        }
        assert!(log.is_empty());

        assert_eq!(priority_to_native(12, &log), 0);
        assert_eq!(log.count(Severity::Error), 1);
    }

    #[test]
    fn test_frequency_none_warns() {
        let log = ErrorHandler::new();
        assert_eq!(
            frequency_to_native(kolab::Frequency::None, &log),
            kcal::PeriodType::None
        );
        assert_eq!(log.worst_severity(), Severity::Warning);
        assert_eq!(log.worst_message(), "no recurrence?");
    }

    #[test]
    fn test_cutype_codes() {
        let log = ErrorHandler::new();
        assert_eq!(cutype_to_code(kolab::Cutype::Resource), "3");
        assert_eq!(cutype_from_code("3", &log), kolab::Cutype::Resource);
        assert!(log.is_empty());

        assert_eq!(cutype_from_code("17", &log), kolab::Cutype::Individual);
        assert_eq!(log.count(Severity::Error), 1);
    }
}
