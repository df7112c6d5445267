pub mod constants;

mod clock;
pub use clock::{Clock, ManualClock, SystemClock};

mod config;
pub use config::LogConfig;

mod error;
pub use error::{PackedLogError, Result};

mod observer;
pub use observer::{AppendEvent, AppendObserver};

mod packed_log;
pub use packed_log::{LogStats, PackedLog};

pub mod slot_store;
pub use slot_store::{MemorySlotStore, MmapSlotStore, SlotStore};

pub mod traits;

pub use packed_log_slot::{Record, SlotWords, Word};
