//! Fixed-capacity record table.
//!
//! # Responsibility
//! - Store up to `CAPACITY` records addressed by slot index.
//! - Count validated deliveries and expose loading progress.
//!
//! # Invariants
//! - Out-of-range writes never mutate state.
//! - Every successful write increments `received_count`, duplicates included.
//! - `is_loaded()` flips only through `mark_loaded()`, never from the count.

use crate::model::record::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of slots in one batch.
pub const CAPACITY: usize = 10;

/// Slot index outside `[0, CAPACITY)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub index: i64,
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "record index {} is outside [0, {CAPACITY})", self.index)
    }
}

impl Error for OutOfRange {}

/// Fixed-capacity record table plus arrival bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    slots: [Option<Record>; CAPACITY],
    received_count: usize,
    loaded: bool,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot count, identical for every store.
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Overwrites one slot.
    ///
    /// # Contract
    /// - Rejects `index` outside `[0, CAPACITY)` with no state change.
    /// - Increments `received_count` on every success, even when the slot was
    ///   already written.
    pub fn write(&mut self, index: i64, record: Record) -> Result<(), OutOfRange> {
        let slot = slot_index(index).ok_or(OutOfRange { index })?;
        self.slots[slot] = Some(record);
        self.received_count += 1;
        Ok(())
    }

    /// Reads one slot; `None` when out of range or never written.
    pub fn read(&self, index: i64) -> Option<&Record> {
        slot_index(index).and_then(|slot| self.slots[slot].as_ref())
    }

    /// Marks the batch as complete.
    ///
    /// Returns `true` only for the call that flipped the flag.
    pub fn mark_loaded(&mut self) -> bool {
        let first = !self.loaded;
        self.loaded = true;
        first
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of validated deliveries so far (duplicates included).
    pub fn received_count(&self) -> usize {
        self.received_count
    }

    /// Loading progress: `floor(received_count * 100 / CAPACITY)`, capped at 100.
    pub fn progress_percent(&self) -> u8 {
        let percent = (self.received_count * 100 / CAPACITY).min(100);
        u8::try_from(percent).unwrap_or(100)
    }

    /// Iterates written records in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, record)| record.as_ref().map(|record| (slot, record)))
    }
}

fn slot_index(index: i64) -> Option<usize> {
    usize::try_from(index).ok().filter(|slot| *slot < CAPACITY)
}
