use thiserror::Error;

/// Errors surfaced by [`crate::PackedLog`] and its backing stores.
///
/// `InvalidLength` and `IndexOutOfRange` are caller validation failures and
/// are raised before any state is touched. The remaining variants come from
/// configuration or the slot store.
#[derive(Debug, Error)]
pub enum PackedLogError {
    #[error("payload must be exactly {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("slot index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange { index: i64, capacity: usize },

    #[error("invalid capacity {0}: must be between 1 and {max}", max = u32::MAX)]
    InvalidCapacity(usize),

    #[error("capacity mismatch: configured {expected}, storage holds {found}")]
    CapacityMismatch { expected: usize, found: usize },

    #[error("corrupt slot store: {0}")]
    CorruptStore(String),

    #[error("packed log lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PackedLogError {
    pub(crate) fn index_out_of_range(index: usize, capacity: usize) -> Self {
        Self::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            capacity,
        }
    }
}

impl From<PackedLogError> for std::io::Error {
    fn from(err: PackedLogError) -> Self {
        use std::io::ErrorKind;

        match err {
            PackedLogError::Io(inner) => inner,
            PackedLogError::InvalidLength { .. }
            | PackedLogError::IndexOutOfRange { .. }
            | PackedLogError::InvalidCapacity(_)
            | PackedLogError::CapacityMismatch { .. } => {
                std::io::Error::new(ErrorKind::InvalidInput, err.to_string())
            }
            PackedLogError::CorruptStore(_) => {
                std::io::Error::new(ErrorKind::InvalidData, err.to_string())
            }
            PackedLogError::LockPoisoned => std::io::Error::other(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PackedLogError>;
