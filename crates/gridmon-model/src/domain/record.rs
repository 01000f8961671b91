use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Flat, insertion-ordered string-to-string mapping extracted from one
/// reply element.
///
/// Values are always owned strings; absent or empty element content is
/// normalized to `""` before it gets here, so `get` never has to answer
/// "present but null". Inserting an existing key overwrites the value and
/// keeps the key's original position.
///
/// A record carries no schema; its key set is whatever the reply
/// document (and the active [`super::FieldFilter`]) produced.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub IndexMap<String, String>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no fields are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite a field.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Get the value for a field, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Returns `true` if the field is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate through all fields as `(&str, &str)` pairs, in insertion
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
