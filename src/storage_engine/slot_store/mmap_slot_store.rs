use crate::storage_engine::constants::*;
use crate::storage_engine::error::{PackedLogError, Result};
use crate::storage_engine::slot_store::SlotStore;
use crate::utils::verify_file_existence;
use crc32fast::Hasher as Crc32FastHasher;
use memmap2::{MmapMut, MmapOptions};
use packed_log_slot::SlotWords;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File-backed slot store, memory-mapped read/write.
///
/// ## File Layout
///
/// - **Offset `0` → `32`**: header word
///   - `0..4`: magic `b"PKLG"`
///   - `4..8`: format version (`u32`, little-endian)
///   - `8..12`: capacity (`u32`, little-endian)
///   - `12..16`: cursor (`u32`, little-endian)
///   - `16..20`: CRC32 of header bytes `0..16`
///   - `20..32`: reserved, zero
/// - **Offset `32 + i * 64`**: slot `i`, Word A followed by Word B.
///
/// **Total Size**: `32 + capacity * 64` bytes, fixed at creation. The file is
/// never resized afterwards, so the mapping stays valid for the store's
/// lifetime.
pub struct MmapSlotStore {
    mmap: MmapMut,
    capacity: usize,
    path: PathBuf,
}

impl MmapSlotStore {
    /// Opens an existing store file, or creates a zeroed one if `path` does
    /// not exist (or is empty).
    ///
    /// # Errors:
    /// - `CapacityMismatch` if an existing file holds a different capacity.
    /// - `CorruptStore` if an existing file fails header validation.
    pub fn open(path: &Path, capacity: usize) -> Result<Self> {
        let is_new = match std::fs::metadata(path) {
            Ok(meta) => meta.len() == 0,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => true,
            Err(err) => return Err(err.into()),
        };

        if is_new {
            return Self::create(path, capacity);
        }

        let store = Self::open_existing(path)?;
        if store.capacity != capacity {
            return Err(PackedLogError::CapacityMismatch {
                expected: capacity,
                found: store.capacity,
            });
        }
        Ok(store)
    }

    /// Opens a store file that must already exist, taking the capacity from
    /// its header.
    pub fn open_existing(path: &Path) -> Result<Self> {
        verify_file_existence(path)?;

        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let file_len = file.metadata()?.len();

        if file_len < HEADER_SIZE as u64 {
            return Err(PackedLogError::CorruptStore(format!(
                "{} is {} bytes, shorter than the {} byte header",
                path.display(),
                file_len,
                HEADER_SIZE
            )));
        }

        let mmap = Self::init_mmap(&file)?;
        let (capacity, cursor) = Self::parse_header(&mmap[..HEADER_SIZE])?;

        let expected_len = Self::file_len_for(capacity);
        if file_len != expected_len {
            return Err(PackedLogError::CorruptStore(format!(
                "{} is {} bytes, expected {} for {} slots",
                path.display(),
                file_len,
                expected_len,
                capacity
            )));
        }

        debug!(
            "Opened slot store {} ({} slots, cursor at {}).",
            path.display(),
            capacity,
            cursor
        );

        Ok(Self {
            mmap,
            capacity,
            path: path.to_path_buf(),
        })
    }

    fn create(path: &Path, capacity: usize) -> Result<Self> {
        let capacity_u32 =
            u32::try_from(capacity).map_err(|_| PackedLogError::InvalidCapacity(capacity))?;
        if capacity_u32 == 0 {
            return Err(PackedLogError::InvalidCapacity(capacity));
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.set_len(Self::file_len_for(capacity))?;

        let mut mmap = Self::init_mmap(&file)?;
        Self::write_header(&mut mmap, capacity_u32, 0);
        mmap.flush()?;

        info!(
            "Created slot store {} with {} slots ({} bytes).",
            path.display(),
            capacity,
            Self::file_len_for(capacity)
        );

        Ok(Self {
            mmap,
            capacity,
            path: path.to_path_buf(),
        })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Maps the whole file read/write.
    ///
    /// # Safety:
    /// - The mapping is only sound while no other process truncates the file.
    ///   The store itself never resizes it after creation.
    fn init_mmap(file: &File) -> Result<MmapMut> {
        let mmap = unsafe { MmapOptions::new().map_mut(file)? };
        Ok(mmap)
    }

    #[inline]
    fn file_len_for(capacity: usize) -> u64 {
        (HEADER_SIZE + capacity * SLOT_SIZE) as u64
    }

    #[inline]
    fn slot_offset(index: usize) -> usize {
        HEADER_SIZE + index * SLOT_SIZE
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.capacity {
            return Err(PackedLogError::index_out_of_range(index, self.capacity));
        }
        Ok(())
    }

    fn header_checksum(header: &[u8]) -> [u8; 4] {
        let mut hasher = Crc32FastHasher::new();
        hasher.update(&header[..HEADER_CHECKED_LEN]);
        hasher.finalize().to_le_bytes()
    }

    fn write_header(mmap: &mut MmapMut, capacity: u32, cursor: u32) {
        let header = &mut mmap[..HEADER_SIZE];
        header.fill(0);
        header[MAGIC_RANGE].copy_from_slice(&STORE_MAGIC);
        header[VERSION_RANGE].copy_from_slice(&STORE_VERSION.to_le_bytes());
        header[CAPACITY_RANGE].copy_from_slice(&capacity.to_le_bytes());
        header[CURSOR_RANGE].copy_from_slice(&cursor.to_le_bytes());

        let checksum = Self::header_checksum(header);
        header[HEADER_CHECKSUM_RANGE].copy_from_slice(&checksum);
    }

    /// Validates the header word and returns `(capacity, cursor)`.
    fn parse_header(header: &[u8]) -> Result<(usize, usize)> {
        let read_u32 = |range: std::ops::Range<usize>| {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(&header[range]);
            u32::from_le_bytes(buf)
        };

        if header[MAGIC_RANGE] != STORE_MAGIC {
            return Err(PackedLogError::CorruptStore("bad magic".into()));
        }

        if header[HEADER_CHECKSUM_RANGE] != Self::header_checksum(header) {
            return Err(PackedLogError::CorruptStore(
                "header checksum mismatch".into(),
            ));
        }

        let version = read_u32(VERSION_RANGE);
        if version != STORE_VERSION {
            return Err(PackedLogError::CorruptStore(format!(
                "unsupported format version {version}"
            )));
        }

        let capacity = read_u32(CAPACITY_RANGE) as usize;
        let cursor = read_u32(CURSOR_RANGE) as usize;

        if capacity == 0 {
            return Err(PackedLogError::CorruptStore("zero capacity".into()));
        }
        if cursor >= capacity {
            return Err(PackedLogError::CorruptStore(format!(
                "cursor {cursor} outside capacity {capacity}"
            )));
        }

        Ok((capacity, cursor))
    }
}

impl SlotStore for MmapSlotStore {
    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn load_slot(&self, index: usize) -> Result<SlotWords> {
        self.check_index(index)?;
        let offset = Self::slot_offset(index);
        Ok(SlotWords::deserialize(
            &self.mmap[offset..offset + SLOT_SIZE],
        ))
    }

    fn store_slot(&mut self, index: usize, words: &SlotWords) -> Result<()> {
        self.check_index(index)?;
        let offset = Self::slot_offset(index);
        self.mmap[offset..offset + SLOT_SIZE].copy_from_slice(&words.serialize());
        Ok(())
    }

    fn load_cursor(&self) -> Result<usize> {
        let (_, cursor) = Self::parse_header(&self.mmap[..HEADER_SIZE])?;
        Ok(cursor)
    }

    fn store_cursor(&mut self, cursor: usize) -> Result<()> {
        self.check_index(cursor)?;
        // capacity fits in u32 (checked at creation), so cursor does too
        Self::write_header(&mut self.mmap, self.capacity as u32, cursor as u32);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.mmap.flush()?;
        Ok(())
    }

    fn sync_slot(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.mmap.flush_range(Self::slot_offset(index), SLOT_SIZE)?;
        self.mmap.flush_range(0, HEADER_SIZE)?;
        Ok(())
    }
}

impl Drop for MmapSlotStore {
    fn drop(&mut self) {
        if let Err(err) = self.mmap.flush() {
            warn!(
                "Failed to flush slot store {} on close: {}",
                self.path.display(),
                err
            );
        }
    }
}
