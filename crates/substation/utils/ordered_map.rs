//! Insertion-ordered string-keyed map
//!
//! Backs the document's info entries, styles and extension sections. Entries
//! keep their first insertion position; re-inserting a key replaces the value
//! in place. An ahash index gives constant-time key lookup for documents with
//! many styles.

use ahash::RandomState;
use std::collections::HashMap;

/// Ordered map from `String` keys to values
///
/// # Example
///
/// ```rust
/// use substation::utils::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert("b", 1);
/// map.insert("a", 2);
/// map.insert("b", 3);
///
/// let keys: Vec<&str> = map.keys().collect();
/// assert_eq!(keys, ["b", "a"]);
/// assert_eq!(map.get("b"), Some(&3));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "Vec<(String, V)>",
        into = "Vec<(String, V)>",
        bound(
            serialize = "V: Clone + serde::Serialize",
            deserialize = "V: serde::Deserialize<'de>"
        )
    )
)]
pub struct OrderedMap<V> {
    /// Entries in insertion order
    entries: Vec<(String, V)>,
    /// Key to position in `entries`
    index: HashMap<String, usize, RandomState>,
}

impl<V> OrderedMap<V> {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Insert or replace a value, returning the previous one
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            return Some(core::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up a value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Look up a value by key for modification
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let pos = *self.index.get(key)?;
        Some(&mut self.entries[pos].1)
    }

    /// Check whether a key is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Remove an entry, shifting later entries up
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(value)
    }

    /// Change an entry's key without moving it
    ///
    /// Returns `false` if `from` is absent or `to` is already taken by
    /// another entry.
    pub fn rename(&mut self, from: &str, to: impl Into<String>) -> bool {
        let to = to.into();
        if from == to {
            return self.contains_key(from);
        }
        if self.index.contains_key(&to) {
            return false;
        }
        let Some(pos) = self.index.remove(from) else {
            return false;
        };
        self.entries[pos].0.clone_from(&to);
        self.index.insert(to, pos);
        true
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Order-sensitive equality; the hash index is derived data
impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V> From<Vec<(String, V)>> for OrderedMap<V> {
    fn from(entries: Vec<(String, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<V> From<OrderedMap<V>> for Vec<(String, V)> {
    fn from(map: OrderedMap<V>) -> Self {
        map.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("WrapStyle", "0");
        map.insert("Title", "x");
        assert_eq!(map.insert("WrapStyle", "2"), Some("0"));
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, [("WrapStyle", &"2"), ("Title", &"x")]);
    }

    #[test]
    fn remove_reindexes() {
        let mut map: OrderedMap<i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(map.remove("a"), Some(1));
        assert_eq!(map.get("c"), Some(&3));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.len(), 2);
        assert_eq!(map.remove("a"), None);
    }

    #[test]
    fn rename_in_place() {
        let mut map: OrderedMap<i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert!(map.rename("a", "z"));
        assert!(!map.rename("b", "z"));
        assert!(!map.rename("missing", "q"));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["z", "b"]);
        assert_eq!(map.get("z"), Some(&1));
        assert!(!map.contains_key("a"));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab: OrderedMap<i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let ba: OrderedMap<i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn get_mut_updates() {
        let mut map: OrderedMap<i32> = [("a", 1)].into_iter().collect();
        if let Some(v) = map.get_mut("a") {
            *v = 5;
        }
        assert_eq!(map.get("a"), Some(&5));
        assert!(map.get_mut("b").is_none());
    }
}
