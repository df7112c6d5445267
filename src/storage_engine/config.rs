use crate::storage_engine::constants::DEFAULT_CAPACITY;
use crate::storage_engine::error::{PackedLogError, Result};

/// Construction-time settings for a [`crate::PackedLog`].
///
/// Both values are fixed once the log is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Number of slots in the ring.
    pub capacity: usize,

    /// Flush the touched slot and the cursor to the backing store after
    /// every append. Only meaningful for file-backed stores.
    pub sync_on_append: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            sync_on_append: false,
        }
    }
}

impl LogConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn with_sync_on_append(mut self, sync_on_append: bool) -> Self {
        self.sync_on_append = sync_on_append;
        self
    }

    /// Rejects a capacity of zero, or one the file header cannot record.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || u32::try_from(self.capacity).is_err() {
            return Err(PackedLogError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}
