use crate::constants::*;

/// Logical content of one slot: a fixed-length payload and the second at
/// which it was appended.
///
/// A slot that has never been written decodes to [`Record::EMPTY`], which is
/// indistinguishable from a record of zero bytes appended at time `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record {
    pub payload: [u8; PAYLOAD_SIZE],
    pub timestamp: u32,
}

impl Record {
    /// All-zero payload, timestamp `0`.
    pub const EMPTY: Self = Self {
        payload: [0u8; PAYLOAD_SIZE],
        timestamp: 0,
    };

    #[inline]
    pub fn new(payload: [u8; PAYLOAD_SIZE], timestamp: u32) -> Self {
        Self { payload, timestamp }
    }

    /// Builds a record from a borrowed payload.
    ///
    /// Returns `None` unless `payload` is exactly `PAYLOAD_SIZE` bytes.
    #[inline]
    pub fn from_slice(payload: &[u8], timestamp: u32) -> Option<Self> {
        let payload: [u8; PAYLOAD_SIZE] = payload.try_into().ok()?;
        Some(Self { payload, timestamp })
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.payload
    }

    #[inline]
    pub fn is_zeroed(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<Record> for ([u8; PAYLOAD_SIZE], u32) {
    fn from(record: Record) -> Self {
        (record.payload, record.timestamp)
    }
}
