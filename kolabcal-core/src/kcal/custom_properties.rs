use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sorted `X-` property map attached to incidences and attendees.
///
/// Application properties live under `X-KDE-<app>-<key>`; anything else is a
/// non-KDE property stored under its full name. Keys are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomProperties(BTreeMap<String, String>);

impl CustomProperties {
    pub fn new() -> Self {
        Self::default()
    }

    fn app_key(app: &str, key: &str) -> String {
        format!("X-KDE-{app}-{key}")
    }

    pub fn set_custom_property(&mut self, app: &str, key: &str, value: impl Into<String>) {
        self.0.insert(Self::app_key(app, key), value.into());
    }

    pub fn custom_property(&self, app: &str, key: &str) -> Option<&str> {
        self.0.get(&Self::app_key(app, key)).map(String::as_str)
    }

    pub fn set_non_kde_custom_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn non_kde_custom_property(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn remove_non_kde_custom_property(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for CustomProperties {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        CustomProperties(iter.into_iter().collect())
    }
}
