use crate::storage_engine::error::Result;
use packed_log_slot::Record;

pub trait PackedLogReader {
    /// Number of slots in the ring, fixed at construction.
    fn capacity(&self) -> usize;

    /// Decodes the record stored in one slot.
    ///
    /// # Parameters:
    /// - `index`: Slot index in `[0, capacity)`.
    ///
    /// # Returns:
    /// - `Ok(Record)`: The payload and timestamp in the slot.
    /// - `Err(PackedLogError::IndexOutOfRange)`: If `index >= capacity`.
    ///
    /// # Notes:
    /// - A slot that was never written returns [`Record::EMPTY`]. No
    ///   occupied flag is kept, so this cannot be told apart from an all-zero
    ///   payload appended at time `0`.
    fn read(&self, index: usize) -> Result<Record>;

    /// Decodes every slot, in **index order** (`0..capacity`).
    ///
    /// Index order is not append order once the ring has wrapped. Use
    /// [`Self::read_chronological`] or combine with [`Self::current_cursor`].
    fn read_all(&self) -> Result<Vec<Record>>;

    /// Decodes every slot, oldest first.
    ///
    /// The slot under the cursor (the next to be overwritten) comes first and
    /// the most recent append comes last. Taken under a single read lock.
    fn read_chronological(&self) -> Result<Vec<Record>>;

    /// Index the **next** append will write.
    ///
    /// Once the ring has wrapped, this is also the least-recently written slot.
    fn current_cursor(&self) -> Result<usize>;
}
