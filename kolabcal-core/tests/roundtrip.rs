//! End-to-end conversions of complete incidences and contacts in both directions.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use kolabcal_core::kcal::{self, KDateTime};
use kolabcal_core::kolab::{
    self, Attachment, Attendee, Classification, ContactReference, CustomProperty, DateTimeValue,
    DayPos, Duration, EventEnd, Frequency, RecurrenceRule, Status, Termination, Weekday,
};
use kolabcal_core::{Converter, ErrorHandler, FromNative, MapperConfig, Severity, ToNative};

fn converter() -> Converter {
    Converter::new(Arc::new(ErrorHandler::new()), MapperConfig::default())
}

fn date() -> DateTimeValue {
    DateTimeValue::Utc(Utc.with_ymd_and_hms(2011, 2, 2, 12, 11, 10).unwrap())
}

fn date2() -> DateTimeValue {
    DateTimeValue::Utc(Utc.with_ymd_and_hms(2011, 2, 2, 12, 12, 10).unwrap())
}

fn date3() -> DateTimeValue {
    DateTimeValue::Utc(Utc.with_ymd_and_hms(2012, 2, 2, 12, 12, 10).unwrap())
}

fn native(value: &DateTimeValue) -> KDateTime {
    match value {
        DateTimeValue::Utc(dt) => KDateTime::utc(*dt),
        DateTimeValue::Date(d) => KDateTime::Date(*d),
        other => panic!("unexpected fixture value {other:?}"),
    }
}

fn categories() -> Vec<String> {
    vec!["cat1".to_string(), "cat2".to_string(), "parent/child".to_string()]
}

fn native_event() -> kcal::Event {
    let mut kcal = kcal::Event::new();
    let i = &mut kcal.incidence;
    i.uid = "uid".to_string();
    i.created = Some(native(&date()));
    i.last_modified = Some(native(&date()));
    i.revision = 3;
    i.secrecy = kcal::Secrecy::Confidential;
    i.categories = categories();
    i.dt_start = Some(native(&date()));
    i.recurrence_id = Some(native(&date2()));
    i.this_and_future = true;

    i.recurrence.set_daily(3);
    i.recurrence.set_duration(5);
    i.recurrence.add_r_date_time(native(&date2()));
    i.recurrence.add_r_date(date2().date());
    i.recurrence.add_ex_date_time(native(&date3()));
    i.recurrence.add_ex_date(date3().date());
    let rr = i.recurrence.default_rrule_mut();
    rr.by_seconds = vec![1, -3, 2];
    rr.by_minutes = vec![1, -3, 2];
    rr.by_hours = vec![1, -3, 2];
    rr.by_days = vec![kcal::WDayPos::new(3, 1), kcal::WDayPos::new(5, 4)];
    rr.by_month_days = vec![1, -3, 2];
    rr.by_year_days = vec![1, -3, 2];
    rr.by_months = vec![1, -3, 2];
    rr.by_week_numbers = vec![1, -3, 2];

    i.summary = "summary".to_string();
    i.description = "description".to_string();
    i.priority = 3;
    i.status = kcal::Status::Confirmed;
    i.location = "location".to_string();
    i.organizer = kcal::Person::new("organizer", "organizer@email");

    let mut att = kcal::Attendee::new(
        "attendee",
        "attendee@email",
        false,
        kcal::PartStat::NeedsAction,
        kcal::Role::ReqParticipant,
    );
    att.delegate = "mailto:delegatee<delegatee@email>".to_string();
    att.delegator = "mailto:delegator<delegator@email>".to_string();
    i.attendees.push(att);
    i.attachments
        .push(kcal::Attachment::from_uri("uri", "mimetype/mime"));

    i.custom_properties
        .set_non_kde_custom_property("X-KOLAB-key1", "value1");
    i.custom_properties
        .set_non_kde_custom_property("X-KOLAB-key2", "value2");
    i.custom_properties
        .set_custom_property("SOMEOTHERAPP", "key2", "value2");

    kcal.set_dt_end(native(&date2()));
    kcal.transparency = kcal::Transparency::Transparent;
    kcal
}

fn kolab_event() -> kolab::Event {
    let mut kolab = kolab::Event::default();
    let i = &mut kolab.incidence;
    i.uid = "uid".to_string();
    i.created = Some(date());
    i.last_modified = Some(date());
    i.sequence = 3;
    i.classification = Classification::Confidential;
    i.categories = categories();
    i.start = Some(date());
    i.summary = "summary".to_string();
    i.description = "description".to_string();
    i.status = Status::Confirmed;

    let mut a = Attendee::new(ContactReference::new("attendee@email", "attendee"));
    a.delegated_to = vec![ContactReference::new("delegatee@email", "delegatee")];
    a.delegated_from = vec![ContactReference::new("delegator@email", "delegator")];
    i.attendees = vec![a];
    i.attachments = vec![Attachment::uri("uri", "mimetype/mime")];
    // native properties come back sorted by key
    i.custom_properties = vec![
        CustomProperty::new("X-KDE-SOMEOTHERAPP-key2", "value2"),
        CustomProperty::new("key1", "value1"),
        CustomProperty::new("key2", "value2"),
    ];

    let mut rrule = RecurrenceRule::new(Frequency::Daily, 3);
    rrule.termination = Termination::Count(5);
    rrule.by_second = vec![1, -3, 2];
    rrule.by_minute = vec![1, -3, 2];
    rrule.by_hour = vec![1, -3, 2];
    rrule.by_day = vec![DayPos::new(3, Weekday::Monday), DayPos::new(5, Weekday::Thursday)];
    rrule.by_month_day = vec![1, -3, 2];
    rrule.by_year_day = vec![1, -3, 2];
    rrule.by_week_no = vec![1, -3, 2];
    rrule.by_month = vec![1, -3, 2];

    let s = &mut kolab.schedule;
    s.recurrence_rule = Some(rrule);
    s.recurrence_id = Some(date2());
    s.this_and_future = true;
    s.recurrence_dates = vec![date2(), DateTimeValue::Date(date2().date())];
    s.exception_dates = vec![date3(), DateTimeValue::Date(date3().date())];
    s.priority = 3;
    s.location = "location".to_string();
    s.organizer = Some(ContactReference::new("organizer@email", "organizer"));

    kolab.end = Some(EventEnd::At(date2()));
    kolab.transparent = true;
    kolab
}

/// Native incidences compare equal apart from the generated attendee uids.
fn assert_native_eq(actual: &kcal::Incidence, expected: &kcal::Incidence) {
    assert_eq!(actual.attendees.len(), expected.attendees.len());
    for (a, e) in actual.attendees.iter().zip(&expected.attendees) {
        assert!(a.eq_ignoring_uid(e), "attendee mismatch: {a:?} != {e:?}");
    }

    let strip = |i: &kcal::Incidence| kcal::Incidence {
        attendees: Vec::new(),
        ..i.clone()
    };
    assert_eq!(strip(actual), strip(expected));
}

#[test]
fn event_to_native() {
    let conv = converter();
    let converted = kolab_event().to_native(&conv);
    let expected = native_event();

    assert_native_eq(&converted.incidence, &expected.incidence);
    assert_eq!(converted.dt_end(), expected.dt_end());
    assert_eq!(converted.transparency, expected.transparency);
    assert!(conv.log().is_empty(), "{:?}", conv.log().messages());
}

#[test]
fn event_from_native() {
    let conv = converter();
    let converted = kolab::Event::from_native(&native_event(), &conv);

    assert_eq!(converted, kolab_event());
    assert!(conv.log().is_empty(), "{:?}", conv.log().messages());
}

#[test]
fn disabled_native_alarm_is_dropped() {
    let conv = converter();
    let mut kcal = native_event();
    let mut alarm = kcal::Alarm::new();
    alarm.set_email_alarm("subject", "text", vec![kcal::Person::new("name", "email@email")]);
    kcal.incidence.alarms.push(alarm);

    let warnings_before = conv.log().count(Severity::Warning);
    let converted = kolab::Event::from_native(&kcal, &conv);

    assert!(converted.schedule.alarms.is_empty());
    assert_eq!(conv.log().count(Severity::Warning), warnings_before + 1);
    assert_eq!(converted, kolab_event());
    assert_eq!(conv.log().worst_severity(), Severity::Warning);
    assert_eq!(conv.log().worst_message(), "skipping disabled alarm");
}

#[test]
fn event_with_duration_and_recurrence_end_date() {
    let conv = converter();

    let mut kcal = kcal::Event::new();
    kcal.incidence.uid = "uid".to_string();
    kcal.incidence.created = Some(native(&date()));
    kcal.incidence.last_modified = Some(native(&date()));
    kcal.incidence.revision = 3;
    kcal.incidence.dt_start = Some(native(&date()));
    kcal.set_duration(kcal::Duration::between(&native(&date()), &native(&date2())));
    kcal.incidence.recurrence.set_daily(3);
    kcal.incidence.recurrence.set_end_date_time(native(&date3()));

    let mut kolab = kolab::Event::default();
    kolab.incidence.uid = "uid".to_string();
    kolab.incidence.created = Some(date());
    kolab.incidence.last_modified = Some(date());
    kolab.incidence.sequence = 3;
    kolab.incidence.start = Some(date());
    kolab.end = Some(EventEnd::Duration(Duration::new(0, 0, 1, 0)));
    let mut rrule = RecurrenceRule::new(Frequency::Daily, 3);
    rrule.termination = Termination::Until(date3());
    kolab.schedule.recurrence_rule = Some(rrule);

    let to_native = kolab.to_native(&conv);
    assert_eq!(to_native.duration(), Some(kcal::Duration::seconds(60)));
    assert_native_eq(&to_native.incidence, &kcal.incidence);

    // the minute comes back as plain seconds
    let from_native = kolab::Event::from_native(&kcal, &conv);
    assert_eq!(
        from_native.end,
        Some(EventEnd::Duration(Duration::new(0, 0, 0, 60)))
    );
    assert_eq!(
        from_native.schedule.recurrence_rule,
        kolab.schedule.recurrence_rule
    );
    assert!(conv.log().is_empty());
}

#[test]
fn date_only_event() {
    let conv = converter();
    let start = DateTimeValue::Date(NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
    let end = DateTimeValue::Date(NaiveDate::from_ymd_opt(2011, 1, 3).unwrap());

    let mut kolab = kolab::Event::default();
    kolab.incidence.uid = "uid".to_string();
    kolab.incidence.created = Some(date());
    kolab.incidence.last_modified = Some(date());
    kolab.incidence.start = Some(start.clone());
    kolab.end = Some(EventEnd::At(end.clone()));
    let mut rrule = RecurrenceRule::new(Frequency::Daily, 3);
    rrule.termination = Termination::Until(end.clone());
    kolab.schedule.recurrence_rule = Some(rrule);

    let kcal = kolab.to_native(&conv);
    assert!(kcal.incidence.dt_start.as_ref().unwrap().is_date_only());
    assert!(kcal.dt_end().unwrap().is_date_only());
    let rule = kcal.incidence.recurrence.default_rrule().unwrap();
    assert_eq!(rule.duration(), 0);
    assert!(rule.end_dt().unwrap().is_date_only());

    assert_eq!(kolab::Event::from_native(&kcal, &conv), kolab);
    assert!(conv.log().is_empty());
}

#[test]
fn unicode_summary_survives() {
    let conv = converter();
    let mut kolab = kolab::Event::default();
    kolab.incidence.uid = "uid".to_string();
    kolab.incidence.summary = "äöü%@$£é¤¼²°€Š�".to_string();

    let kcal = kolab.to_native(&conv);
    assert_eq!(kcal.incidence.summary, "äöü%@$£é¤¼²°€Š�");
    assert_eq!(kolab::Event::from_native(&kcal, &conv), kolab);
}

#[test]
fn todo_round_trip() {
    let conv = converter();
    let mut kolab = kolab::Todo::default();
    kolab.incidence.uid = "uid".to_string();
    kolab.incidence.start = Some(date());
    kolab.incidence.summary = "summary".to_string();
    kolab.incidence.status = Status::InProcess;
    kolab.schedule.priority = 1;
    kolab.schedule.location = "location".to_string();
    kolab.schedule.recurrence_rule = Some(RecurrenceRule::new(Frequency::Weekly, 1));
    kolab.due = Some(date3());
    kolab.percent_complete = 40;
    kolab.related_to = vec!["parent-uid".to_string()];

    let kcal = kolab.to_native(&conv);
    assert_eq!(kcal.incidence.status, kcal::Status::InProcess);
    assert_eq!(kcal.dt_due, Some(native(&date3())));
    assert_eq!(kcal.incidence.related_to, "parent-uid");
    assert_eq!(
        kcal.incidence.recurrence.default_rrule().unwrap().duration(),
        kcal::RECURS_FOREVER
    );

    assert_eq!(kolab::Todo::from_native(&kcal, &conv), kolab);
    assert!(conv.log().is_empty());
}

#[test]
fn journal_round_trip() {
    let conv = converter();
    let mut kolab = kolab::Journal::default();
    kolab.incidence.uid = "uid".to_string();
    kolab.incidence.created = Some(date());
    kolab.incidence.start = Some(DateTimeValue::Zoned {
        datetime: NaiveDate::from_ymd_opt(2011, 2, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        tzid: "Europe/Zurich".to_string(),
    });
    kolab.incidence.summary = "summary".to_string();
    kolab.incidence.classification = Classification::Private;
    kolab.incidence.status = Status::Final;
    kolab.incidence.attachments = vec![Attachment::data(b"inline".to_vec(), "text/plain")];

    let kcal = kolab.to_native(&conv);
    assert_eq!(kcal.incidence.secrecy, kcal::Secrecy::Private);

    assert_eq!(kolab::Journal::from_native(&kcal, &conv), kolab);
    assert!(conv.log().is_empty());
}

#[test]
fn recurrence_expands_on_native_side() {
    let conv = converter();
    let kcal = kolab_event().to_native(&conv);

    // plain daily rule without the by-lists of the fixture
    let mut recurrence = kcal::Recurrence::default();
    recurrence.set_daily(3);
    recurrence.set_duration(5);
    let start = kcal.incidence.dt_start.unwrap();

    let instants = recurrence.occurrences(&start, 50).unwrap();
    assert_eq!(instants.len(), 5);
    assert_eq!(instants[0], start.to_utc());
    assert_eq!(instants[4] - instants[3], chrono::Duration::days(3));
}

#[test]
fn neutral_json_document_round_trip() {
    let conv = converter();
    let json = serde_json::to_string(&kolab_event()).unwrap();
    let parsed: kolab::Event = serde_json::from_str(&json).unwrap();

    let native_json = serde_json::to_string(&parsed.to_native(&conv)).unwrap();
    let native: kcal::Event = serde_json::from_str(&native_json).unwrap();

    assert_eq!(kolab::Event::from_native(&native, &conv), kolab_event());
}

#[test]
fn contact_round_trip() {
    let conv = converter();

    let mut addressee = kcal::Addressee::new();
    addressee.uid = "uid".to_string();
    addressee.formatted_name = "name".to_string();
    let contact = kolab::Contact::new("uid", "name");

    let native = contact.to_native(&conv);
    assert_eq!(native.uid, addressee.uid);
    assert_eq!(native.formatted_name, addressee.formatted_name);

    let back = kolab::Contact::from_native(&addressee, &conv);
    assert_eq!(back.uid, contact.uid);
    assert_eq!(back.name, contact.name);
    assert!(conv.log().is_empty());
}
