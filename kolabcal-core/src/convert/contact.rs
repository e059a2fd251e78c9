//! Contact mapping.

use super::{Converter, FromNative, ToNative};
use crate::kcal;
use crate::kolab;

impl ToNative for kolab::Contact {
    type Native = kcal::Addressee;

    fn to_native(&self, _converter: &Converter) -> kcal::Addressee {
        let mut addressee = kcal::Addressee::new();
        // Keep the generated uid when the neutral one is empty
        if !self.uid.is_empty() {
            addressee.uid = self.uid.clone();
        }
        addressee.formatted_name = self.name.clone();
        tracing::debug!(kind = "contact", uid = addressee.uid.as_str(), "converted to native");
        addressee
    }
}

impl FromNative for kolab::Contact {
    type Native = kcal::Addressee;

    fn from_native(native: &kcal::Addressee, _converter: &Converter) -> Self {
        kolab::Contact::new(native.uid.as_str(), native.formatted_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::test_support::converter;

    #[test]
    fn test_contact_round_trip() {
        let conv = converter();
        let contact = kolab::Contact::new("uid", "name");

        let native = contact.to_native(&conv);
        assert_eq!(native.uid, "uid");
        assert_eq!(native.formatted_name, "name");

        assert_eq!(kolab::Contact::from_native(&native, &conv), contact);
        assert!(conv.log().is_empty());
    }

    #[test]
    fn test_missing_uid_keeps_generated_uid() {
        let conv = converter();
        let native = kolab::Contact::new("", "name").to_native(&conv);

        assert!(!native.uid.is_empty());
        assert_eq!(native.formatted_name, "name");
        assert!(conv.log().is_empty());
    }
}
