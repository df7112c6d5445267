pub use packed_log_slot::constants::*;

/// Slot count used when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 16;

/// Identifies a file-backed slot store.
pub const STORE_MAGIC: [u8; 4] = *b"PKLG";

/// On-disk format revision.
pub const STORE_VERSION: u32 = 1;

// File header, one word wide so slot words stay word-aligned.
pub const HEADER_SIZE: usize = WORD_SIZE;
pub const MAGIC_RANGE: std::ops::Range<usize> = 0..4;
pub const VERSION_RANGE: std::ops::Range<usize> = 4..8;
pub const CAPACITY_RANGE: std::ops::Range<usize> = 8..12;
pub const CURSOR_RANGE: std::ops::Range<usize> = 12..16;
pub const HEADER_CHECKSUM_RANGE: std::ops::Range<usize> = 16..20;

/// Header bytes covered by the checksum.
pub const HEADER_CHECKED_LEN: usize = HEADER_CHECKSUM_RANGE.start;
