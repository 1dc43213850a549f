//! The shift ledger: an ordered collection of shift records.
//!
//! The ledger owns row lifecycle (add, edit, remove, clear) and nothing
//! else. It never recomputes totals itself; callers re-invoke the
//! calculator after every mutation.

use uuid::Uuid;

use super::ShiftRecord;

/// Opaque handle to a record in a [`ShiftLedger`].
///
/// Returned by [`ShiftLedger::add_record`] and usable for later edits and
/// removal. Records have no identity beyond their insertion order; the
/// handle is ledger-internal bookkeeping, not a stable external id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordHandle(Uuid);

/// An ordered collection of [`ShiftRecord`]s.
///
/// Insertion order is preserved and is the only defined order; records are
/// never sorted by date. Every record belongs to exactly one ledger.
///
/// # Example
///
/// ```
/// use invoice_engine::models::{ShiftLedger, ShiftRecord};
///
/// let mut ledger = ShiftLedger::new();
/// let handle = ledger.add_record(ShiftRecord::default());
/// assert_eq!(ledger.len(), 1);
///
/// ledger.remove_record(handle);
/// ledger.remove_record(handle); // already removed: silent no-op
/// assert!(ledger.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftLedger {
    entries: Vec<(RecordHandle, ShiftRecord)>,
}

impl ShiftLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its handle.
    ///
    /// No validation is performed: all fields accept arbitrary text, and
    /// numeric fields coerce to zero downstream rather than here.
    pub fn add_record(&mut self, record: ShiftRecord) -> RecordHandle {
        let handle = RecordHandle(Uuid::new_v4());
        self.entries.push((handle, record));
        handle
    }

    /// Returns the record for a handle, if it is still in the ledger.
    pub fn record(&self, handle: RecordHandle) -> Option<&ShiftRecord> {
        self.entries
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, record)| record)
    }

    /// Returns mutable access to the record for a handle, for edits.
    pub fn record_mut(&mut self, handle: RecordHandle) -> Option<&mut ShiftRecord> {
        self.entries
            .iter_mut()
            .find(|(h, _)| *h == handle)
            .map(|(_, record)| record)
    }

    /// Removes the record for a handle.
    ///
    /// Removing a record that is not present (already removed) is a silent
    /// no-op.
    pub fn remove_record(&mut self, handle: RecordHandle) {
        self.entries.retain(|(h, _)| *h != handle);
    }

    /// Removes all records.
    ///
    /// Any confirmation prompt before bulk clearing is a UI concern, not
    /// part of the ledger contract.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates the records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ShiftRecord> {
        self.entries.iter().map(|(_, record)| record)
    }

    /// Returns the number of records in the ledger.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
