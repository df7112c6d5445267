use std::ops::Range;

/// Width of one storage word in bytes.
pub const WORD_SIZE: usize = 32;

/// Bytes of the timestamp carried in the second word of every slot.
pub const TIMESTAMP_SIZE: usize = 4;

/// Fixed payload length of every record.
pub const PAYLOAD_SIZE: usize = 2 * WORD_SIZE - TIMESTAMP_SIZE;

/// Storage words occupied by one slot.
pub const WORDS_PER_SLOT: usize = 2;

/// Serialized size of one slot (Word A followed by Word B).
pub const SLOT_SIZE: usize = WORDS_PER_SLOT * WORD_SIZE;

/// Bytes of payload that spill past Word A into Word B.
pub const PAYLOAD_TAIL_SIZE: usize = PAYLOAD_SIZE - WORD_SIZE;

// Payload ranges, relative to the record payload
pub const PAYLOAD_HEAD_RANGE: Range<usize> = 0..WORD_SIZE;
pub const PAYLOAD_TAIL_RANGE: Range<usize> = WORD_SIZE..PAYLOAD_SIZE;

// Word B ranges. Words are big-endian 256-bit values, so the high-order
// bytes come first in memory.
pub const WORD_B_TIMESTAMP_RANGE: Range<usize> = 0..TIMESTAMP_SIZE;
pub const WORD_B_TAIL_RANGE: Range<usize> = TIMESTAMP_SIZE..WORD_SIZE;

// The two fields of Word B must tile it exactly.
const _: () = assert!(PAYLOAD_SIZE == 2 * WORD_SIZE - TIMESTAMP_SIZE);
const _: () = assert!(PAYLOAD_TAIL_SIZE + TIMESTAMP_SIZE == WORD_SIZE);
