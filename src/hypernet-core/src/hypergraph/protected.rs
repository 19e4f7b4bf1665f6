//! Insertion-ordered map with identifier checks.
//!
//! `ProtectedMap` backs the node, edge, and attribute tables. Reads and
//! deletes of a missing key fail with `NotFound` instead of returning `None`,
//! and null keys are rejected on insert.

use indexmap::IndexMap;
use indexmap::map::{Iter, IterMut, Keys, Values};

use common_error::{HypernetError, HypernetResult};

use super::HyperKey;

/// Insertion-ordered key/value table that rejects null keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtectedMap<K: HyperKey, V> {
    inner: IndexMap<K, V>,
}

impl<K: HyperKey, V> ProtectedMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Get the value for `key`.
    pub fn get(&self, key: &K) -> HypernetResult<&V> {
        self.inner.get(key).ok_or_else(|| missing(key))
    }

    /// Get the value for `key` mutably.
    pub fn get_mut(&mut self, key: &K) -> HypernetResult<&mut V> {
        self.inner.get_mut(key).ok_or_else(|| missing(key))
    }

    /// Insert or replace the value for `key`, returning the previous value.
    ///
    /// Replacing keeps the key's original position.
    pub fn set(&mut self, key: K, value: V) -> HypernetResult<Option<V>> {
        check_key(&key)?;
        Ok(self.inner.insert(key, value))
    }

    /// Remove `key`, returning its value. Remaining keys keep their order.
    pub fn delete(&mut self, key: &K) -> HypernetResult<V> {
        self.inner.shift_remove(key).ok_or_else(|| missing(key))
    }

    /// Get the value for `key`, inserting `default()` first if absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> HypernetResult<&mut V>
    where
        F: FnOnce() -> V,
    {
        check_key(&key)?;
        Ok(self.inner.entry(key).or_insert_with(default))
    }

    /// Check if `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.inner.iter()
    }

    /// Iterate mutably over entries in insertion order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.inner.iter_mut()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.inner.keys()
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        self.inner.values()
    }
}

impl<K: HyperKey, V> Default for ProtectedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K: HyperKey, V> IntoIterator for &'a ProtectedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Reject the null identifier.
pub(crate) fn check_key<K: HyperKey>(key: &K) -> HypernetResult<()> {
    if key.is_null() {
        return Err(HypernetError::invalid_key(format!(
            "{key:?} cannot be a node or edge"
        )));
    }
    Ok(())
}

fn missing<K: HyperKey>(key: &K) -> HypernetError {
    HypernetError::not_found(format!("ID {key:?} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_not_found() {
        let map: ProtectedMap<u64, &str> = ProtectedMap::new();
        let err = map.get(&3).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "NotFound: ID 3 not found");
    }

    #[test]
    fn test_set_upserts() {
        let mut map = ProtectedMap::new();
        assert_eq!(map.set(1u64, "a").unwrap(), None);
        assert_eq!(map.set(1u64, "b").unwrap(), Some("a"));
        assert_eq!(map.get(&1).unwrap(), &"b");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_null_key_rejected() {
        let mut map: ProtectedMap<Option<u64>, i32> = ProtectedMap::new();
        assert!(matches!(
            map.set(None, 1),
            Err(HypernetError::InvalidKey(_))
        ));
        assert!(matches!(
            map.get_or_insert_with(None, || 1),
            Err(HypernetError::InvalidKey(_))
        ));
        assert!(map.is_empty());
        map.set(Some(0), 1).unwrap();
        assert!(map.contains(&Some(0)));
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut map = ProtectedMap::new();
        for key in [5u64, 3, 9, 1] {
            map.set(key, key * 10).unwrap();
        }
        assert_eq!(map.delete(&3).unwrap(), 30);
        assert!(map.delete(&3).unwrap_err().is_not_found());

        let keys: Vec<u64> = map.keys().copied().collect();
        assert_eq!(keys, vec![5, 9, 1]);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut map: ProtectedMap<String, Vec<u32>> = ProtectedMap::new();
        map.get_or_insert_with("a".to_string(), Vec::new)
            .unwrap()
            .push(1);
        map.get_or_insert_with("a".to_string(), Vec::new)
            .unwrap()
            .push(2);
        assert_eq!(map.get(&"a".to_string()).unwrap(), &vec![1, 2]);
    }
}
