use crate::storage_engine::error::{PackedLogError, Result};
use crate::storage_engine::slot_store::SlotStore;
use packed_log_slot::SlotWords;

/// Volatile slot store. Nothing survives the process.
#[derive(Debug, Clone)]
pub struct MemorySlotStore {
    slots: Vec<SlotWords>,
    cursor: usize,
}

impl MemorySlotStore {
    /// Allocates `capacity` zeroed slots.
    ///
    /// Returns `InvalidCapacity` when the slot table cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| PackedLogError::InvalidCapacity(capacity))?;
        slots.resize(capacity, SlotWords::ZEROED);

        Ok(Self { slots, cursor: 0 })
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut SlotWords> {
        let capacity = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or_else(|| PackedLogError::index_out_of_range(index, capacity))
    }
}

impl SlotStore for MemorySlotStore {
    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn load_slot(&self, index: usize) -> Result<SlotWords> {
        self.slots
            .get(index)
            .copied()
            .ok_or_else(|| PackedLogError::index_out_of_range(index, self.slots.len()))
    }

    fn store_slot(&mut self, index: usize, words: &SlotWords) -> Result<()> {
        *self.slot_mut(index)? = *words;
        Ok(())
    }

    #[inline]
    fn load_cursor(&self) -> Result<usize> {
        Ok(self.cursor)
    }

    #[inline]
    fn store_cursor(&mut self, cursor: usize) -> Result<()> {
        self.cursor = cursor;
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
