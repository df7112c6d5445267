use crate::storage_engine::error::Result;

pub trait PackedLogWriter {
    /// Appends one record, overwriting the oldest slot once the ring is full.
    ///
    /// # Parameters:
    /// - `payload`: Exactly `PAYLOAD_SIZE` bytes. The log neither pads nor
    ///   truncates; callers fit messages upstream.
    ///
    /// # Returns:
    /// - `Ok(slot_index)`: The slot that was written (the cursor before it
    ///   advanced).
    /// - `Err(PackedLogError::InvalidLength)`: If `payload` has the wrong
    ///   length. Nothing is written and the cursor does not move.
    ///
    /// # Notes:
    /// - The timestamp is taken from the log's clock, truncated to 32 bits.
    /// - Capacity never causes a rejection.
    /// - Observers are notified with `(slot_index, timestamp)` after the write
    ///   lock is released.
    fn append(&self, payload: &[u8]) -> Result<usize>;

    /// Pushes outstanding writes to the backing store's durable medium.
    fn flush(&self) -> Result<()>;
}
