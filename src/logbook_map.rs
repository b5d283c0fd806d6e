use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use thiserror::Error;

use crate::entry_log::{EntryLog, EntryRecord};
use crate::locator::{LocatorDirectory, ProbeResult};

/// Error returned when a probe fails to locate an active record for a key.
///
/// This is the only failure mode of the map: the key is absent, or the only
/// record ever stored for it has been tombstoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key not found: {key:?}")]
pub struct KeyNotFound<K> {
    /// The key that could not be located.
    pub key: K,
}

/// A hash map that preserves insertion order.
///
/// Two components compose into the container: a locator directory (a
/// power-of-two array of slots resolved by linear probing) and an entry log
/// (append-only storage of records). Lookups hash the key, probe the
/// directory for a slot, then read the referenced log row. Iteration walks
/// the log, so entries come back in the order they were first inserted,
/// independent of their hash values.
///
/// The directory doubles whenever the active-entry count reaches half its
/// length, re-probing every active row against the new length so no key
/// becomes unreachable after growth. Deletion tombstones both the log row
/// and the locator slot: probes skip slot tombstones, keeping colliding
/// keys placed further along a chain reachable, while log rows are never
/// reused.
///
/// Note: this implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct LogbookMap<K, V> {
    /// Locator directory resolving key hashes to log rows.
    directory: LocatorDirectory,
    /// Append-only record storage, in insertion order.
    log: EntryLog<K, V>,
}

impl<K, V> Default for LogbookMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for LogbookMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.update_from_pairs(iter);
    }
}

impl<K, V> FromIterator<(K, V)> for LogbookMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.update_from_pairs(iter);
        map
    }
}

impl<K, V> LogbookMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty map with the initial directory size of 8 slots.
    #[must_use]
    pub fn new() -> Self {
        Self { directory: LocatorDirectory::new(), log: EntryLog::new() }
    }

    /// Creates a map from an ordered sequence of key-value pairs.
    ///
    /// Each pair is inserted via [`set`](Self::set), so later duplicates
    /// overwrite earlier ones without disturbing their insertion-order
    /// position.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Computes the hash for a key.
    fn hash_of(key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    /// Probes the directory for a key with a precomputed hash.
    fn locate(&self, hash: u64, key: &K) -> ProbeResult {
        self.directory
            .probe(hash, |row| self.log.read(row).is_some_and(|record| record.key == *key))
    }

    /// Returns a reference to the value stored for a key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if no active record exists for the key.
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound<K>> {
        let found = self.locate(Self::hash_of(key), key);
        found
            .row
            .and_then(|row| self.log.read(row))
            .map(|record| &record.value)
            .ok_or_else(|| KeyNotFound { key: key.clone() })
    }

    /// Returns a mutable reference to the value stored for a key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if no active record exists for the key.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound<K>> {
        let found = self.locate(Self::hash_of(key), key);
        match found.row {
            Some(row) => self
                .log
                .read_mut(row)
                .map(|record| &mut record.value)
                .ok_or_else(|| KeyNotFound { key: key.clone() }),
            None => Err(KeyNotFound { key: key.clone() }),
        }
    }

    /// Inserts a key-value pair, overwriting the value in place if the key
    /// is already present.
    ///
    /// The growth check runs before the probe, so the probe always operates
    /// against the possibly just-doubled directory. An overwrite keeps both
    /// the row index and the key's insertion-order position.
    pub fn set(&mut self, key: K, value: V) {
        if self.directory.occupied().saturating_mul(2) >= self.directory.slot_count() {
            self.directory.grow(self.log.active_rows());
        }

        let hash = Self::hash_of(&key);
        let found = self.locate(hash, &key);
        match found.row {
            Some(row) => {
                self.log.overwrite(row, Some(EntryRecord::new(hash, key, value)));
            }
            None => {
                let row = self.log.append(EntryRecord::new(hash, key, value));
                self.directory.occupy(found.slot, row);
            }
        }
    }

    /// Removes a key, returning its value.
    ///
    /// The locator slot becomes a tombstone that later probes skip, and
    /// the log row is tombstoned in place; the row index is never reused.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if no active record exists for the key.
    pub fn delete(&mut self, key: &K) -> Result<V, KeyNotFound<K>> {
        let found = self.locate(Self::hash_of(key), key);
        match found.row {
            Some(row) => {
                self.directory.vacate(found.slot);
                self.log
                    .overwrite(row, None)
                    .map(|record| record.value)
                    .ok_or_else(|| KeyNotFound { key: key.clone() })
            }
            None => Err(KeyNotFound { key: key.clone() }),
        }
    }

    /// Returns the number of active keys.
    ///
    /// This is the count of occupied locator slots, not the physical row
    /// count of the entry log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directory.occupied()
    }

    /// Returns true if the map holds no active keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of locator slots in the directory.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.directory.slot_count()
    }

    /// Returns the ratio of active keys to locator slots.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    ///
    /// Tombstoned entries are excluded.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { rows: self.log.rows(), index: 0 }
    }

    /// Returns an iterator over keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over values in insertion order of their keys.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Merges an iterable of key-value pairs into the map.
    ///
    /// Each pair is applied via [`set`](Self::set), so later pairs win on
    /// key conflict.
    pub fn update_from_pairs<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in pairs {
            self.set(key, value);
        }
    }

    /// Merges another map into this one, in the other map's insertion
    /// order.
    ///
    /// Entries from `source` win on key conflict.
    pub fn update_from_map(&mut self, source: &Self)
    where
        V: Clone,
    {
        for (key, value) in source {
            self.set(key.clone(), value.clone());
        }
    }

    /// Removes all entries, resetting the directory to its initial size.
    pub fn clear(&mut self) {
        self.directory = LocatorDirectory::new();
        self.log.clear();
    }
}

impl<'a, K, V> IntoIterator for &'a LogbookMap<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a map's key-value pairs in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The entry log rows, tombstones included.
    rows: &'a [Option<EntryRecord<K, V>>],
    /// Current position in the row slice.
    index: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(row) = self.rows.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Some(record) = row {
                return Some((&record.key, &record.value));
            }
        }
        None
    }
}

/// Iterator over a map's keys in insertion order.
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    /// Underlying pair iterator.
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// Iterator over a map's values in insertion order of their keys.
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    /// Underlying pair iterator.
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}
