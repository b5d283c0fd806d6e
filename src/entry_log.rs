//! The entry log: append-only, order-preserving, randomly addressable
//! storage of records.

use std::mem;

/// An active record in the entry log.
#[derive(Debug, Clone)]
pub(crate) struct EntryRecord<K, V> {
    /// The key's hash, retained so growth can re-probe without rehashing.
    pub(crate) hash: u64,
    /// The key in the key-value pair.
    pub(crate) key: K,
    /// The value associated with the key.
    pub(crate) value: V,
}

impl<K, V> EntryRecord<K, V> {
    /// Creates a record from a hash and a key-value pair.
    pub(crate) fn new(hash: u64, key: K, value: V) -> Self {
        Self { hash, key, value }
    }
}

/// Append-only storage of records in insertion order.
///
/// A row is `None` once its record has been tombstoned; the row itself is
/// never removed, so row indices stay stable for the lifetime of the log.
#[derive(Debug, Clone)]
pub(crate) struct EntryLog<K, V> {
    /// The rows in append order, including tombstones.
    rows: Vec<Option<EntryRecord<K, V>>>,
}

impl<K, V> Default for EntryLog<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> EntryLog<K, V> {
    /// Creates an empty log.
    pub(crate) fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Appends a record and returns its permanent row index.
    pub(crate) fn append(&mut self, record: EntryRecord<K, V>) -> usize {
        let row = self.rows.len();
        self.rows.push(Some(record));
        row
    }

    /// Replaces a row's contents in place, returning the previous contents.
    ///
    /// `Some` overwrites the record (a value update), `None` tombstones it.
    /// The row keeps its index either way.
    pub(crate) fn overwrite(
        &mut self,
        row: usize,
        record: Option<EntryRecord<K, V>>,
    ) -> Option<EntryRecord<K, V>> {
        self.rows.get_mut(row).and_then(|slot| mem::replace(slot, record))
    }

    /// Returns the active record at a row, or `None` for a tombstone or an
    /// out-of-range index.
    pub(crate) fn read(&self, row: usize) -> Option<&EntryRecord<K, V>> {
        self.rows.get(row).and_then(Option::as_ref)
    }

    /// Mutable counterpart of [`read`](Self::read).
    pub(crate) fn read_mut(&mut self, row: usize) -> Option<&mut EntryRecord<K, V>> {
        self.rows.get_mut(row).and_then(Option::as_mut)
    }

    /// Returns the raw rows in append order, tombstones included.
    pub(crate) fn rows(&self) -> &[Option<EntryRecord<K, V>>] {
        &self.rows
    }

    /// Enumerates `(row_index, hash)` for every active row in append order.
    pub(crate) fn active_rows(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(row, record)| record.as_ref().map(|active| (row, active.hash)))
    }

    /// Discards every row, active and tombstoned alike.
    pub(crate) fn clear(&mut self) {
        self.rows.clear();
    }
}
