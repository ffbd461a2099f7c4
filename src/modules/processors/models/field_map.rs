use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Destination URL of the redirect form; consumed by the renderer, never posted
pub const ACTION_KEY: &str = "payee_action";

/// Identifier of the transaction whose subscription is being changed
pub const PURCHASE_ID_KEY: &str = "payee_purchaseid";

/// Anti-forgery token posted back by our own checkout forms
pub const CSRF_TOKEN_KEY: &str = "csrf_token";

/// Key/value payload forwarded to a payment processor.
///
/// Keys are kept sorted so the rendered form is stable across runs. Values of any
/// `ToString` type are stored in their string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<String, String>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove a field if present
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Remove a field that must be present
    pub fn take_required(&mut self, key: &str) -> Result<String> {
        self.0
            .remove(key)
            .ok_or_else(|| AppError::missing_field(key))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<HashMap<String, String>> for FieldMap {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
