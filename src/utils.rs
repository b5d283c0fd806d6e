//! Convenience accessors for [`LogbookMap`], kept out of the core API.

use crate::LogbookMap;
use std::hash::Hash;

/// Extension trait providing utility methods on top of the map's core
/// operations.
pub trait MapExtensions<K, V> {
    /// Returns true if an active record exists for the key.
    fn contains_key(&self, key: &K) -> bool;

    /// Collects the active entries into owned pairs, in insertion order.
    fn to_pairs(&self) -> Vec<(K, V)>;
}

impl<K, V> MapExtensions<K, V> for LogbookMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }

    fn to_pairs(&self) -> Vec<(K, V)> {
        self.iter().map(|(key, value)| (key.clone(), value.clone())).collect()
    }
}
