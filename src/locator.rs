//! The locator directory: a power-of-two array of slots referencing log
//! rows, resolved by linear probing.

/// Initial number of locator slots in a freshly created directory.
const INITIAL_SLOTS: usize = 8;

/// State of a single locator slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Never held a row reference since the last allocation or growth.
    Empty,
    /// Held a row reference that was since deleted. Probes skip over
    /// tombstones so colliding keys placed further along the chain stay
    /// reachable; inserts may reuse them.
    Tombstone,
    /// References a row in the entry log.
    Occupied(usize),
}

/// Outcome of a probe over the directory.
///
/// `slot` is always meaningful: it is either the slot holding the matching
/// row reference, or the slot where a new reference should be written (the
/// first tombstone seen on the scan, or the terminating empty slot).
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProbeResult {
    /// The directory slot where the probe stopped.
    pub(crate) slot: usize,
    /// Row index of the matching active record, if the probe found one.
    pub(crate) row: Option<usize>,
}

/// A fixed-capacity directory of locator slots, each empty, tombstoned, or
/// referencing a row in the entry log.
///
/// The directory knows nothing about keys or values; callers supply a
/// closure that decides whether a referenced row matches the probed key.
#[derive(Debug, Clone)]
pub(crate) struct LocatorDirectory {
    /// The locator slots.
    slots: Vec<Slot>,
    /// Number of occupied slots, which equals the number of active keys.
    occupied: usize,
}

impl Default for LocatorDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl LocatorDirectory {
    /// Creates a directory with the initial slot count, all slots empty.
    pub(crate) fn new() -> Self {
        Self { slots: vec![Slot::Empty; INITIAL_SLOTS], occupied: 0 }
    }

    /// Returns the total number of slots.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    /// Probes for the slot belonging to a key with the given hash.
    ///
    /// Starting at `hash mod slot_count`, each slot is examined in
    /// increasing index order, wrapping at the end of the directory. An
    /// empty slot terminates the scan as a miss; an occupied slot whose
    /// row satisfies `is_match` terminates it as a match. Tombstones are
    /// skipped, and the first one seen is preferred as the insertion
    /// point on a miss. The scan is a bounded loop: it visits at most
    /// `slot_count` slots, and because live entries fill at most half the
    /// directory, a miss always has a tombstone or an empty slot to
    /// report.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn probe<F>(&self, hash: u64, mut is_match: F) -> ProbeResult
    where
        F: FnMut(usize) -> bool,
    {
        debug_assert!(self.slots.len().is_power_of_two());

        let mask = self.slots.len().saturating_sub(1);
        let mut slot = (hash as usize) & mask;
        let mut first_tombstone = None;

        for _ in 0..self.slots.len() {
            match self.slots.get(slot).copied() {
                None | Some(Slot::Empty) => {
                    return ProbeResult { slot: first_tombstone.unwrap_or(slot), row: None };
                }
                Some(Slot::Tombstone) => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(slot);
                    }
                }
                Some(Slot::Occupied(row)) => {
                    if is_match(row) {
                        return ProbeResult { slot, row: Some(row) };
                    }
                }
            }

            slot = (slot.saturating_add(1)) & mask;
        }

        // No empty slot left, so at least one slot on the scan was a
        // tombstone; it becomes the insertion point.
        debug_assert!(first_tombstone.is_some());
        ProbeResult { slot: first_tombstone.unwrap_or(slot), row: None }
    }

    /// Writes a row reference into a slot.
    pub(crate) fn occupy(&mut self, slot: usize, row: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            if !matches!(*entry, Slot::Occupied(_)) {
                self.occupied = self.occupied.saturating_add(1);
            }
            *entry = Slot::Occupied(row);
        }
    }

    /// Tombstones an occupied slot.
    ///
    /// The slot is not returned to empty: a later probe for a colliding
    /// key placed further along the chain must still scan past it.
    pub(crate) fn vacate(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            if matches!(*entry, Slot::Occupied(_)) {
                self.occupied = self.occupied.saturating_sub(1);
                *entry = Slot::Tombstone;
            }
        }
    }

    /// Doubles the directory and re-probes every active row into it.
    ///
    /// `active_rows` yields `(row_index, hash)` for every active record in
    /// the entry log. Each row's canonical slot is recomputed against the
    /// new length, so every key stays reachable from its new starting
    /// point after growth. Tombstoned slots are not carried over.
    pub(crate) fn grow(&mut self, active_rows: impl Iterator<Item = (usize, u64)>) {
        let doubled = self.slots.len().saturating_mul(2);
        self.slots = vec![Slot::Empty; doubled];
        self.occupied = 0;

        for (row, hash) in active_rows {
            // Active keys are distinct, so the probe can only stop at an
            // empty slot.
            let found = self.probe(hash, |_| false);
            self.occupy(found.slot, row);
        }
    }
}
