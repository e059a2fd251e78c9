//! Attendee mapping, including delegation and directory linkage.
//!
//! The native attendee has no room for a directory uid or a calendar user
//! type, so both travel as attendee custom properties. Delegation is a single
//! `mailto:` URI per direction on the native side.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use super::custom_properties::{CONTACT_CUTYPE_PROPERTY, CONTACT_UUID_PROPERTY};
use super::enums::{
    cutype_from_code, cutype_to_code, part_stat_from_native, part_stat_to_native, role_from_native,
    role_to_native,
};
use crate::diagnostics::ErrorHandler;
use crate::kcal;
use crate::kolab::{Attendee, ContactReference, Cutype};

// Quotes and spaces are escaped too so that unescaped ones can only be quoting.
const MAILTO_ESCAPE: &AsciiSet = &CONTROLS
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b' ');

/// `mailto:Name<email>`, or `mailto:email` without a name.
pub fn format_mailto(email: &str, name: &str) -> String {
    if name.is_empty() {
        format!("mailto:{}", utf8_percent_encode(email, MAILTO_ESCAPE))
    } else {
        format!(
            "mailto:{}<{}>",
            utf8_percent_encode(name, MAILTO_ESCAPE),
            utf8_percent_encode(email, MAILTO_ESCAPE)
        )
    }
}

/// Split a `mailto:` URI into `(email, name)`.
///
/// Accepts `"Name" <email>` quoting and percent-escapes; the scheme is optional.
/// Escaped quotes and spaces belong to the name.
pub fn parse_mailto(uri: &str) -> (String, String) {
    let trimmed = uri.trim();
    let rest = match trimmed.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("mailto:") => &trimmed[7..],
        _ => trimmed,
    };

    if let Some((name, email)) = split_name_addr(rest) {
        let name = name.trim();
        let name = name
            .strip_prefix('"')
            .and_then(|n| n.strip_suffix('"'))
            .unwrap_or(name);
        return (decode(email.trim()), decode(name));
    }

    // Fully escaped `Name<email>`
    let decoded = decode(rest);
    let decoded = decoded.trim();
    if let Some((name, email)) = split_name_addr(decoded) {
        let name = name.trim().trim_matches('"').trim();
        return (email.trim().to_string(), name.to_string());
    }

    (decoded.to_string(), String::new())
}

/// `Name<email>` split on the last `<`.
fn split_name_addr(s: &str) -> Option<(&str, &str)> {
    let inner = s.strip_suffix('>')?;
    let open = inner.rfind('<')?;
    Some((&inner[..open], &inner[open + 1..]))
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

pub fn attendee_to_native(a: &Attendee, log: &ErrorHandler) -> kcal::Attendee {
    let mut native = kcal::Attendee::new(
        a.contact.name_or_empty(),
        a.contact.email.as_str(),
        a.rsvp,
        part_stat_to_native(a.part_stat),
        role_to_native(a.role),
    );

    if let Some(uid) = a.contact.uid.as_deref().filter(|uid| !uid.is_empty()) {
        native
            .custom_properties
            .set_non_kde_custom_property(CONTACT_UUID_PROPERTY, uid);
    }

    if let Some(first) = a.delegated_to.first() {
        if a.delegated_to.len() > 1 {
            log.warning("multiple delegatees are not supported");
        }
        native.delegate = format_mailto(&first.email, first.name_or_empty());
    }
    if let Some(first) = a.delegated_from.first() {
        if a.delegated_from.len() > 1 {
            log.warning("multiple delegators are not supported");
        }
        native.delegator = format_mailto(&first.email, first.name_or_empty());
    }

    if a.cutype != Cutype::Individual {
        native
            .custom_properties
            .set_non_kde_custom_property(CONTACT_CUTYPE_PROPERTY, cutype_to_code(a.cutype));
    }

    native
}

pub fn attendee_from_native(native: &kcal::Attendee, log: &ErrorHandler) -> Attendee {
    let mut contact = ContactReference::new(native.email.as_str(), native.name.as_str());
    if let Some(uid) = native
        .custom_properties
        .non_kde_custom_property(CONTACT_UUID_PROPERTY)
        .filter(|uid| !uid.is_empty())
    {
        contact = contact.with_uid(uid);
    }

    let mut attendee = Attendee::new(contact);
    attendee.rsvp = native.rsvp;
    attendee.part_stat = part_stat_from_native(native.status, log);
    attendee.role = role_from_native(native.role);

    if !native.delegate.is_empty() {
        let (email, name) = parse_mailto(&native.delegate);
        attendee.delegated_to = vec![ContactReference::new(email, name)];
    }
    if !native.delegator.is_empty() {
        let (email, name) = parse_mailto(&native.delegator);
        attendee.delegated_from = vec![ContactReference::new(email, name)];
    }

    attendee.cutype = match native
        .custom_properties
        .non_kde_custom_property(CONTACT_CUTYPE_PROPERTY)
    {
        Some(code) if !code.is_empty() => cutype_from_code(code, log),
        _ => Cutype::Individual,
    };

    attendee
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::kolab::{PartStatus, Role};

    fn attendee() -> Attendee {
        let mut a = Attendee::new(
            ContactReference::new("email@example.org", "name").with_uid("uid"),
        );
        a.rsvp = true;
        a.part_stat = PartStatus::Delegated;
        a.role = Role::Chair;
        a.cutype = Cutype::Resource;
        a.delegated_to = vec![ContactReference::new("delegatee@example.org", "delegatee")];
        a.delegated_from = vec![ContactReference::new("delegator@example.org", "")];
        a
    }

    #[test]
    fn test_round_trip() {
        let log = ErrorHandler::new();
        let a = attendee();

        let native = attendee_to_native(&a, &log);
        assert_eq!(attendee_from_native(&native, &log), a);
        assert!(log.is_empty());
    }

    #[test]
    fn test_native_form() {
        let log = ErrorHandler::new();
        let native = attendee_to_native(&attendee(), &log);

        assert_eq!(native.name, "name");
        assert_eq!(native.email, "email@example.org");
        assert!(native.rsvp);
        assert_eq!(native.status, kcal::PartStat::Delegated);
        assert_eq!(native.role, kcal::Role::Chair);
        assert_eq!(native.delegate, "mailto:delegatee<delegatee@example.org>");
        assert_eq!(native.delegator, "mailto:delegator@example.org");
        assert_eq!(
            native.custom_properties.non_kde_custom_property(CONTACT_UUID_PROPERTY),
            Some("uid")
        );
        assert_eq!(
            native.custom_properties.non_kde_custom_property(CONTACT_CUTYPE_PROPERTY),
            Some("3")
        );
    }

    #[test]
    fn test_individual_has_no_cutype_property() {
        let log = ErrorHandler::new();
        let a = Attendee::new(ContactReference::new("email@example.org", ""));

        let native = attendee_to_native(&a, &log);
        assert!(native.custom_properties.is_empty());
        assert_eq!(attendee_from_native(&native, &log).cutype, Cutype::Individual);
    }

    #[test]
    fn test_native_round_trip_ignoring_uid() {
        let log = ErrorHandler::new();
        let mut native = kcal::Attendee::new(
            "name",
            "email@example.org",
            false,
            kcal::PartStat::Tentative,
            kcal::Role::OptParticipant,
        );
        native.delegate = "mailto:delegatee<delegatee@example.org>".to_string();

        let back = attendee_to_native(&attendee_from_native(&native, &log), &log);
        assert_ne!(back.uid, native.uid);
        assert!(back.eq_ignoring_uid(&native));
    }

    #[test]
    fn test_extra_delegates_warn() {
        let log = ErrorHandler::new();
        let mut a = attendee();
        a.delegated_to.push(ContactReference::new("second@example.org", ""));

        let native = attendee_to_native(&a, &log);
        assert_eq!(native.delegate, "mailto:delegatee<delegatee@example.org>");
        assert_eq!(log.count(Severity::Warning), 1);
    }

    #[test]
    fn test_parse_mailto_variants() {
        assert_eq!(
            parse_mailto("mailto:Doe<doe@example.org>"),
            ("doe@example.org".to_string(), "Doe".to_string())
        );
        assert_eq!(
            parse_mailto("MAILTO:\"Doe, John\" <doe@example.org>"),
            ("doe@example.org".to_string(), "Doe, John".to_string())
        );
        assert_eq!(
            parse_mailto("mailto:John%20Doe%3Cdoe@example.org%3E"),
            ("doe@example.org".to_string(), "John Doe".to_string())
        );
        assert_eq!(
            parse_mailto("mailto:doe@example.org"),
            ("doe@example.org".to_string(), String::new())
        );
    }

    #[test]
    fn test_mailto_escapes_reserved_characters() {
        let uri = format_mailto("doe@example.org", "100% <Doe>");
        assert_eq!(
            parse_mailto(&uri),
            ("doe@example.org".to_string(), "100% <Doe>".to_string())
        );
    }

    #[test]
    fn test_mailto_keeps_quotes_and_padding_in_names() {
        for name in ["\"Doe\"", " Padded ", "Doe, John"] {
            let uri = format_mailto("doe@example.org", name);
            assert_eq!(
                parse_mailto(&uri),
                ("doe@example.org".to_string(), name.to_string()),
                "Name should survive {uri}"
            );
        }
        assert_eq!(
            format_mailto("doe@example.org", "John Doe"),
            "mailto:John%20Doe<doe@example.org>"
        );
    }
}
