use crate::storage_engine::clock::{Clock, SystemClock};
use crate::storage_engine::config::LogConfig;
use crate::storage_engine::constants::*;
use crate::storage_engine::error::{PackedLogError, Result};
use crate::storage_engine::observer::{AppendEvent, AppendObserver};
use crate::storage_engine::slot_store::{MemorySlotStore, MmapSlotStore, SlotStore};
use crate::storage_engine::traits::{PackedLogReader, PackedLogWriter};
use packed_log_slot::{Record, SlotWords};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// Slot table and cursor, always mutated together.
struct LogState<S> {
    store: S,
    cursor: usize,
}

/// Point-in-time counters for a [`PackedLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogStats {
    pub capacity: usize,
    pub cursor: usize,
    /// Appends committed since this instance was opened.
    pub appends: u64,
    /// Slot words written since this instance was opened.
    pub words_written: u64,
}

/// Fixed-capacity, overwrite-oldest message log.
///
/// Every record is a `PAYLOAD_SIZE`-byte payload plus a `u32` timestamp,
/// packed into exactly two storage words (see [`SlotWords`]). Appends go to
/// the slot under the cursor, which then advances modulo the capacity, so
/// once the ring is full each append silently replaces the oldest record.
///
/// ## Concurrency
/// - The cursor and slot table sit behind one `RwLock`. An append holds the
///   write side for the whole encode, store and cursor advance.
/// - Reads share the read side and never see a half-written slot.
/// - Observers run after the write lock is released.
pub struct PackedLog<S: SlotStore = MemorySlotStore> {
    state: RwLock<LogState<S>>,
    config: LogConfig,
    clock: Box<dyn Clock>,
    observers: RwLock<Vec<Arc<dyn AppendObserver>>>,
    appends: AtomicU64,
}

impl PackedLog<MemorySlotStore> {
    /// Creates an in-memory log with `capacity` zeroed slots.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(LogConfig::new(capacity))
    }

    /// Creates an in-memory log from a full configuration.
    pub fn with_config(config: LogConfig) -> Result<Self> {
        config.validate()?;
        Self::from_store(MemorySlotStore::new(config.capacity)?, config)
    }
}

impl PackedLog<MmapSlotStore> {
    /// Opens a file-backed log, creating the file if it does not exist.
    ///
    /// # Parameters:
    /// - `path`: The store file.
    /// - `config`: Capacity must match an existing file.
    ///
    /// # Returns:
    /// - `Ok(PackedLog)`: With the cursor and slots restored from the file.
    /// - `Err(PackedLogError)`: On capacity mismatch, corruption or I/O failure.
    pub fn open(path: &Path, config: LogConfig) -> Result<Self> {
        config.validate()?;
        let store = MmapSlotStore::open(path, config.capacity)?;
        Self::from_store(store, config)
    }

    /// Opens an **existing** file-backed log, taking the capacity from the
    /// file header.
    pub fn open_existing(path: &Path) -> Result<Self> {
        let store = MmapSlotStore::open_existing(path)?;
        let config = LogConfig::new(store.capacity());
        Self::from_store(store, config)
    }

    /// Returns the backing file path.
    pub fn path(&self) -> Result<std::path::PathBuf> {
        Ok(self.read_state()?.store.path().to_path_buf())
    }
}

impl<S: SlotStore> PackedLog<S> {
    /// Wraps an already-initialized slot store.
    ///
    /// The store's capacity must equal `config.capacity` and its persisted
    /// cursor must lie inside the ring.
    pub fn from_store(store: S, config: LogConfig) -> Result<Self> {
        config.validate()?;

        if store.capacity() != config.capacity {
            return Err(PackedLogError::CapacityMismatch {
                expected: config.capacity,
                found: store.capacity(),
            });
        }

        let cursor = store.load_cursor()?;
        if cursor >= config.capacity {
            return Err(PackedLogError::CorruptStore(format!(
                "cursor {} outside capacity {}",
                cursor, config.capacity
            )));
        }

        info!(
            "Packed log ready: {} slots, cursor at {}.",
            config.capacity, cursor
        );

        Ok(Self {
            state: RwLock::new(LogState { store, cursor }),
            config,
            clock: Box::new(SystemClock),
            observers: RwLock::new(Vec::new()),
            appends: AtomicU64::new(0),
        })
    }

    /// Replaces the timestamp source.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Returns the construction-time configuration.
    #[inline]
    pub fn config(&self) -> LogConfig {
        self.config
    }

    /// Registers an observer notified after every committed append.
    ///
    /// Closures of type `Fn(&AppendEvent) + Send + Sync` are observers too:
    /// `log.subscribe(Arc::new(|event: &AppendEvent| ...))`.
    pub fn subscribe(&self, observer: Arc<dyn AppendObserver>) -> Result<()> {
        self.observers
            .write()
            .map_err(|_| PackedLogError::LockPoisoned)?
            .push(observer);
        Ok(())
    }

    /// Returns the current counters.
    pub fn stats(&self) -> Result<LogStats> {
        // Appends are counted under the write lock, so both reads agree
        let state = self.read_state()?;
        let cursor = state.cursor;
        let appends = self.appends.load(Ordering::Acquire);
        drop(state);

        Ok(LogStats {
            capacity: self.config.capacity,
            cursor,
            appends,
            words_written: appends * WORDS_PER_SLOT as u64,
        })
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, LogState<S>>> {
        self.state.read().map_err(|_| PackedLogError::LockPoisoned)
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, LogState<S>>> {
        self.state.write().map_err(|_| PackedLogError::LockPoisoned)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.config.capacity {
            return Err(PackedLogError::index_out_of_range(
                index,
                self.config.capacity,
            ));
        }
        Ok(())
    }

    /// Stamps the payload, writes it into the slot under the cursor and
    /// advances the cursor.
    ///
    /// The timestamp is taken under the write guard, so slot order and
    /// timestamp order agree for any monotonic clock. If any store call
    /// fails, the previous slot words and cursor are written back and the
    /// append is reported as failed with nothing counted or notified.
    /// Returns the slot written.
    fn commit(&self, payload: [u8; PAYLOAD_SIZE]) -> Result<usize> {
        let capacity = self.config.capacity;

        let (target, timestamp) = {
            let mut state = self.write_state()?;
            let timestamp = self.clock.now();
            let words = SlotWords::encode(&Record::new(payload, timestamp));
            let target = state.cursor;
            let next = (target + 1) % capacity;
            let previous = state.store.load_slot(target)?;

            if let Err(err) = self.write_slot(&mut state.store, target, next, &words) {
                let restored = state
                    .store
                    .store_slot(target, &previous)
                    .and_then(|_| state.store.store_cursor(target));

                if let Err(restore_err) = restored {
                    warn!(
                        "Failed to restore slot {} after a failed append: {}",
                        target, restore_err
                    );
                }
                return Err(err);
            }

            state.cursor = next;
            self.appends.fetch_add(1, Ordering::AcqRel);

            if next == 0 {
                debug!("Cursor wrapped; slot 0 is now the oldest record.");
            }
            (target, timestamp)
        };

        self.notify(&AppendEvent {
            slot_index: target,
            timestamp,
        })?;

        Ok(target)
    }

    /// Slot words first, then the cursor, then the optional sync.
    fn write_slot(
        &self,
        store: &mut S,
        target: usize,
        next: usize,
        words: &SlotWords,
    ) -> Result<()> {
        store.store_slot(target, words)?;
        store.store_cursor(next)?;
        if self.config.sync_on_append {
            store.sync_slot(target)?;
        }
        Ok(())
    }

    fn notify(&self, event: &AppendEvent) -> Result<()> {
        // Snapshot so observers may subscribe or read without deadlocking
        let observers: Vec<Arc<dyn AppendObserver>> = self
            .observers
            .read()
            .map_err(|_| PackedLogError::LockPoisoned)?
            .clone();

        for observer in observers {
            observer.on_append(event);
        }
        Ok(())
    }
}

impl<S: SlotStore> PackedLogWriter for PackedLog<S> {
    fn append(&self, payload: &[u8]) -> Result<usize> {
        let payload: [u8; PAYLOAD_SIZE] =
            payload.try_into().map_err(|_| PackedLogError::InvalidLength {
                expected: PAYLOAD_SIZE,
                actual: payload.len(),
            })?;

        self.commit(payload)
    }

    fn flush(&self) -> Result<()> {
        self.write_state()?.store.flush()
    }
}

impl<S: SlotStore> PackedLogReader for PackedLog<S> {
    #[inline]
    fn capacity(&self) -> usize {
        self.config.capacity
    }

    fn read(&self, index: usize) -> Result<Record> {
        self.check_index(index)?;
        let state = self.read_state()?;
        Ok(state.store.load_slot(index)?.decode())
    }

    fn read_all(&self) -> Result<Vec<Record>> {
        let state = self.read_state()?;
        (0..self.config.capacity)
            .map(|index| state.store.load_slot(index).map(|words| words.decode()))
            .collect()
    }

    fn read_chronological(&self) -> Result<Vec<Record>> {
        let state = self.read_state()?;
        let mut records = (0..self.config.capacity)
            .map(|index| state.store.load_slot(index).map(|words| words.decode()))
            .collect::<Result<Vec<_>>>()?;
        records.rotate_left(state.cursor);
        Ok(records)
    }

    fn current_cursor(&self) -> Result<usize> {
        Ok(self.read_state()?.cursor)
    }
}
