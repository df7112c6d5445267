use crate::storage_engine::error::Result;
use packed_log_slot::SlotWords;

mod memory_slot_store;
pub use memory_slot_store::MemorySlotStore;

mod mmap_slot_store;
pub use mmap_slot_store::MmapSlotStore;

/// Word-level persistence behind a [`crate::PackedLog`].
///
/// A store holds `capacity()` slots of two words each, plus the ring cursor.
/// The log serializes every mutating call behind its write lock, so
/// implementations need no locking of their own.
///
/// Stores are trusted: the log performs no retry or recovery when a store
/// call fails, it only propagates the error.
pub trait SlotStore: Send + Sync {
    /// Number of slots the store was created with.
    fn capacity(&self) -> usize;

    /// Loads both words of a slot. A never-written slot is all zeros.
    fn load_slot(&self, index: usize) -> Result<SlotWords>;

    /// Replaces both words of a slot.
    fn store_slot(&mut self, index: usize, words: &SlotWords) -> Result<()>;

    /// Loads the persisted ring cursor.
    fn load_cursor(&self) -> Result<usize>;

    /// Persists the ring cursor.
    fn store_cursor(&mut self, cursor: usize) -> Result<()>;

    /// Pushes all outstanding writes to durable storage.
    fn flush(&mut self) -> Result<()>;

    /// Pushes one slot and the cursor to durable storage.
    ///
    /// Defaults to a full [`SlotStore::flush`].
    fn sync_slot(&mut self, index: usize) -> Result<()> {
        let _ = index;
        self.flush()
    }
}
