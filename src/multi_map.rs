use crate::compat::{String, ToString, Vec};

/// Ordered multi-map backing a query string: each key owns the ordered
/// sequence of its values.
///
/// Key order is insertion order, and a repeated key grows its existing
/// value sequence instead of creating a second entry. A key with no values
/// cannot be represented: removal always drops the whole entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMultiMap {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryMultiMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Check for a specific key-value pair.
    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.get(key)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Get all values for a key, in insertion order.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Append a value under a key. A new key goes to the end of the map;
    /// an existing key keeps its position and grows its value sequence.
    pub fn append(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value.to_string()),
            None => self
                .entries
                .push((key.to_string(), Vec::from([value.to_string()]))),
        }
    }

    /// Delete a key and all of its values.
    /// Returns true if the key existed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        before != self.entries.len()
    }

    /// Iterate over distinct keys in map order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over (key, values) entries in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl core::fmt::Display for QueryMultiMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&crate::codec::encode_query(self))
    }
}

impl From<&str> for QueryMultiMap {
    fn from(s: &str) -> Self {
        crate::codec::decode_query(s)
    }
}

impl From<String> for QueryMultiMap {
    fn from(s: String) -> Self {
        crate::codec::decode_query(&s)
    }
}
