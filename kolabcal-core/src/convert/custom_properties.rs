use crate::config::MapperConfig;
use crate::kcal::CustomProperties;
use crate::kolab::CustomProperty;

/// Attendee property holding the uid of the contact in an external directory.
pub const CONTACT_UUID_PROPERTY: &str = "X_KOLAB_CONTACT_UUID";

/// Attendee property holding the numeric calendar user type.
pub const CONTACT_CUTYPE_PROPERTY: &str = "X_KOLAB_CONTACT_CUTYPE";

/// Namespace neutral properties so they cannot collide with native ones.
///
/// Identifiers already under the passthrough prefix keep their name.
pub fn custom_properties_to_native(
    properties: &[CustomProperty],
    config: &MapperConfig,
) -> CustomProperties {
    properties
        .iter()
        .map(|prop| {
            let key = if prop.identifier.starts_with(&config.passthrough_prefix) {
                prop.identifier.clone()
            } else {
                format!("{}{}", config.namespace_prefix, prop.identifier)
            };
            (key, prop.value.clone())
        })
        .collect()
}

/// Inverse of [`custom_properties_to_native`]; results come out sorted by key.
pub fn custom_properties_from_native(
    properties: &CustomProperties,
    config: &MapperConfig,
) -> Vec<CustomProperty> {
    properties
        .iter()
        .map(|(key, value)| {
            let identifier = key.strip_prefix(config.namespace_prefix.as_str()).unwrap_or(key);
            CustomProperty::new(identifier, value)
        })
        .collect()
}
