use crate::constants::*;
use crate::record::Record;

/// One storage word.
pub type Word = [u8; WORD_SIZE];

/// The two storage words a [`Record`] is packed into.
///
/// ## Slot Layout
///
/// Each word is read as a **big-endian 256-bit integer**, so byte `0` of the
/// array is the most significant byte.
///
/// - **Word A**: payload bytes `0..32`, verbatim.
/// - **Word B, bytes `0..4`** (high-order): timestamp, big-endian `u32`.
/// - **Word B, bytes `4..32`** (low-order): payload bytes `32..60`, verbatim.
///
/// **Total Size**: `64` bytes. The payload tail and the timestamp tile Word B
/// exactly, so no byte of the slot is padding.
///
/// ## Notes
/// - A zeroed slot decodes to [`Record::EMPTY`].
/// - Encoding is a pure byte copy; no byte of the payload is interpreted.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotWords {
    pub word_a: Word,
    pub word_b: Word,
}

impl SlotWords {
    /// A never-written slot.
    pub const ZEROED: Self = Self {
        word_a: [0u8; WORD_SIZE],
        word_b: [0u8; WORD_SIZE],
    };

    /// Packs a record into its two storage words.
    #[inline]
    pub fn encode(record: &Record) -> Self {
        let mut word_a = [0u8; WORD_SIZE];
        let mut word_b = [0u8; WORD_SIZE];

        word_a.copy_from_slice(&record.payload[PAYLOAD_HEAD_RANGE]);
        word_b[WORD_B_TIMESTAMP_RANGE].copy_from_slice(&record.timestamp.to_be_bytes());
        word_b[WORD_B_TAIL_RANGE].copy_from_slice(&record.payload[PAYLOAD_TAIL_RANGE]);

        Self { word_a, word_b }
    }

    /// Unpacks the two storage words back into a record.
    #[inline]
    pub fn decode(&self) -> Record {
        let mut payload = [0u8; PAYLOAD_SIZE];
        payload[PAYLOAD_HEAD_RANGE].copy_from_slice(&self.word_a);
        payload[PAYLOAD_TAIL_RANGE].copy_from_slice(&self.word_b[WORD_B_TAIL_RANGE]);

        let mut timestamp = [0u8; TIMESTAMP_SIZE];
        timestamp.copy_from_slice(&self.word_b[WORD_B_TIMESTAMP_RANGE]);

        Record {
            payload,
            timestamp: u32::from_be_bytes(timestamp),
        }
    }

    /// Serializes the slot into its on-disk form (Word A, then Word B).
    #[inline]
    pub fn serialize(&self) -> [u8; SLOT_SIZE] {
        let mut buf = [0u8; SLOT_SIZE];
        buf[..WORD_SIZE].copy_from_slice(&self.word_a);
        buf[WORD_SIZE..].copy_from_slice(&self.word_b);
        buf
    }

    /// Reconstructs a slot from its on-disk form.
    ///
    /// # Panics:
    /// - If `data` is shorter than `SLOT_SIZE`.
    #[inline]
    pub fn deserialize(data: &[u8]) -> Self {
        let mut word_a = [0u8; WORD_SIZE];
        let mut word_b = [0u8; WORD_SIZE];
        word_a.copy_from_slice(&data[..WORD_SIZE]);
        word_b.copy_from_slice(&data[WORD_SIZE..SLOT_SIZE]);
        Self { word_a, word_b }
    }
}

impl Default for SlotWords {
    fn default() -> Self {
        Self::ZEROED
    }
}

impl From<&Record> for SlotWords {
    fn from(record: &Record) -> Self {
        Self::encode(record)
    }
}

impl From<SlotWords> for Record {
    fn from(words: SlotWords) -> Self {
        words.decode()
    }
}
