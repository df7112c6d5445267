//! # Packed Log
//!
//! A fixed-capacity, append-only message log for storage that is billed per
//! word written. Each record (a 60-byte payload and a 32-bit timestamp) is
//! packed into exactly two 32-byte words, and once the ring is full every
//! append overwrites the oldest slot.
//!
//! ```
//! use packed_log::{PackedLog, traits::{PackedLogReader, PackedLogWriter}};
//! use packed_log::constants::PAYLOAD_SIZE;
//!
//! let log = PackedLog::new(10).unwrap();
//! let slot = log.append(&[b'x'; PAYLOAD_SIZE]).unwrap();
//! assert_eq!(slot, 0);
//! assert_eq!(log.read(slot).unwrap().payload, [b'x'; PAYLOAD_SIZE]);
//! assert_eq!(log.current_cursor().unwrap(), 1);
//! ```

pub mod storage_engine;
pub use storage_engine::*;

pub mod cli;

pub mod utils;
