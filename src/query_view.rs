use crate::codec;
use crate::compat::{String, ToString, Vec};
use crate::error::{QueryError, Result};
use crate::multi_map::QueryMultiMap;
use crate::query_store::QueryStore;

/// Mutating view over the query text owned by a [`QueryStore`].
///
/// Every operation is a full decode, mutate, encode, store cycle, so the
/// owning object's query text is consistent after each call. The view
/// holds no state of its own beyond the borrow.
#[derive(Debug)]
pub struct QueryView<'a, S: QueryStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: QueryStore + ?Sized> QueryView<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    fn read(&self) -> QueryMultiMap {
        codec::decode_query(self.store.query())
    }

    fn write(&mut self, map: &QueryMultiMap) {
        self.store.set_query(&codec::encode_query(map));
    }

    /// Check for the existence of a query parameter with the given key
    pub fn has(&self, key: &str) -> Result<bool> {
        ensure_key(key)?;
        Ok(self.read().contains_key(key))
    }

    /// Check that the key exists and carries every one of the given values.
    /// An empty `values` slice degenerates to an existence check.
    pub fn has_all(&self, key: &str, values: &[&str]) -> Result<bool> {
        ensure_key(key)?;
        let map = self.read();
        match map.get(key) {
            Some(present) => Ok(values.iter().all(|v| present.iter().any(|p| p == v))),
            None => Ok(false),
        }
    }

    /// Append values under the key, skipping values already present
    pub fn add(&mut self, key: &str, values: &[&str]) -> Result<&mut Self> {
        ensure_key(key)?;
        let mut map = self.read();
        for value in values {
            if !map.contains(key, value) {
                map.append(key, value);
            }
        }
        self.write(&map);
        Ok(self)
    }

    /// Replace the entire value set for the key with the given values
    pub fn set(&mut self, key: &str, values: &[&str]) -> Result<&mut Self> {
        self.remove(key)?.add(key, values)
    }

    /// Delete the key and all of its values. No-op if the key is absent.
    pub fn remove(&mut self, key: &str) -> Result<&mut Self> {
        ensure_key(key)?;
        let mut map = self.read();
        map.remove(key);
        self.write(&map);
        Ok(self)
    }

    /// All distinct keys, in query order
    pub fn keys(&self) -> Vec<String> {
        self.read().keys().map(ToString::to_string).collect()
    }

    /// Distinct values for the key in first-seen order, empty if absent
    pub fn values(&self, key: &str) -> Result<Vec<String>> {
        ensure_key(key)?;
        let map = self.read();
        let mut result: Vec<String> = Vec::new();
        if let Some(values) = map.get(key) {
            for value in values {
                if !result.iter().any(|v| v == value) {
                    result.push(value.clone());
                }
            }
        }
        Ok(result)
    }
}

/// An empty key is a programmer error, rejected at the API boundary
fn ensure_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(QueryError::EmptyKey);
    }
    Ok(())
}
