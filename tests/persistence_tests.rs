#[cfg(test)]
mod tests {

    use packed_log::{
        LogConfig, ManualClock, MmapSlotStore, PackedLog, PackedLogError, SlotStore,
        constants::{HEADER_SIZE, PAYLOAD_SIZE, SLOT_SIZE},
        traits::{PackedLogReader, PackedLogWriter},
    };
    use std::fs::{OpenOptions, metadata};
    use std::io::{Seek, SeekFrom, Write};
    use std::sync::Arc;
    use tempfile::tempdir;

    fn message(n: usize) -> [u8; PAYLOAD_SIZE] {
        let label = format!("persisted message #{n}");
        let mut buf = [0u8; PAYLOAD_SIZE];
        buf[..label.len()].copy_from_slice(label.as_bytes());
        buf
    }

    #[test]
    fn test_new_file_has_fixed_size_and_zeroed_slots() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("fresh.bin");

        let log = PackedLog::open(&path, LogConfig::new(10)).expect("Failed to open log");

        assert_eq!(
            metadata(&path).unwrap().len(),
            (HEADER_SIZE + 10 * SLOT_SIZE) as u64
        );
        assert_eq!(log.current_cursor().unwrap(), 0);
        assert!(log.read_all().unwrap().iter().all(|r| r.is_zeroed()));
    }

    #[test]
    fn test_persistence_across_reopen() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("persistent.bin");

        // Step 1: wrap the ring once and close
        {
            let clock = Arc::new(ManualClock::new(100));
            let log = PackedLog::open(&path, LogConfig::new(4))
                .expect("Failed to open log")
                .with_clock(clock.clone());

            for n in 1..=6 {
                clock.set(100 + n as u32);
                log.append(&message(n)).expect("Failed to append");
            }
            log.flush().expect("Failed to flush");
        }

        // Step 2: reopen and verify slots, timestamps and cursor
        {
            let log = PackedLog::open(&path, LogConfig::new(4)).expect("Failed to reopen log");

            assert_eq!(log.current_cursor().unwrap(), 2);
            for (index, n) in [(0, 5), (1, 6), (2, 3), (3, 4)] {
                let record = log.read(index).unwrap();
                assert_eq!(record.payload, message(n), "slot {index}");
                assert_eq!(record.timestamp, 100 + n as u32);
            }

            // Appending continues from the restored cursor
            assert_eq!(log.append(&message(7)).unwrap(), 2);
        }
    }

    #[test]
    fn test_open_existing_reads_capacity_from_header() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("existing.bin");

        {
            let log = PackedLog::open(&path, LogConfig::new(7)).unwrap();
            log.append(&message(1)).unwrap();
        }

        let log = PackedLog::open_existing(&path).expect("Failed to open existing log");
        assert_eq!(log.capacity(), 7);
        assert_eq!(log.current_cursor().unwrap(), 1);
        assert_eq!(log.path().unwrap(), path);
    }

    #[test]
    fn test_open_existing_requires_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing.bin");

        match PackedLog::open_existing(&path) {
            Err(PackedLogError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
            Err(other) => panic!("Unexpected error: {other:?}"),
            Ok(_) => panic!("Opening a missing file should fail"),
        }
    }

    #[test]
    fn test_capacity_mismatch_is_rejected() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("mismatch.bin");

        drop(PackedLog::open(&path, LogConfig::new(10)).unwrap());

        match PackedLog::open(&path, LogConfig::new(16)) {
            Err(PackedLogError::CapacityMismatch { expected, found }) => {
                assert_eq!((expected, found), (16, 10));
            }
            Err(other) => panic!("Unexpected error: {other:?}"),
            Ok(_) => panic!("Capacity mismatch should be rejected"),
        }
    }

    #[test]
    fn test_corrupt_header_is_rejected() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("corrupt.bin");

        drop(PackedLog::open(&path, LogConfig::new(3)).unwrap());

        // Flip a cursor byte without fixing the checksum
        {
            let mut file = OpenOptions::new().write(true).open(&path).unwrap();
            file.seek(SeekFrom::Start(12)).unwrap();
            file.write_all(&[0x02]).unwrap();
            file.sync_all().unwrap();
        }

        assert!(matches!(
            PackedLog::open_existing(&path),
            Err(PackedLogError::CorruptStore(_))
        ));
    }

    #[test]
    fn test_truncated_file_is_rejected() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("short.bin");

        drop(PackedLog::open(&path, LogConfig::new(3)).unwrap());
        {
            let file = OpenOptions::new().write(true).open(&path).unwrap();
            file.set_len((HEADER_SIZE + SLOT_SIZE) as u64).unwrap();
        }

        assert!(matches!(
            PackedLog::open_existing(&path),
            Err(PackedLogError::CorruptStore(_))
        ));
    }

    #[test]
    fn test_slot_words_land_at_word_aligned_offsets() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("layout.bin");

        {
            let log = PackedLog::open(&path, LogConfig::new(2)).unwrap();
            log.append(&[0xAA; PAYLOAD_SIZE]).unwrap();
            log.append(&[0xBB; PAYLOAD_SIZE]).unwrap();
        }

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], b"PKLG");

        let slot_1 = &bytes[HEADER_SIZE + SLOT_SIZE..HEADER_SIZE + 2 * SLOT_SIZE];
        assert!(slot_1[..32].iter().all(|&b| b == 0xBB), "Word A");
        assert!(slot_1[36..].iter().all(|&b| b == 0xBB), "Word B payload tail");
    }

    #[test]
    fn test_sync_on_append_store() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("synced.bin");

        let config = LogConfig::new(2).with_sync_on_append(true);
        let log = PackedLog::open(&path, config).unwrap();
        log.append(&message(1)).unwrap();

        // A second, independent mapping sees the synced slot
        let store = MmapSlotStore::open_existing(&path).unwrap();
        assert_eq!(store.load_cursor().unwrap(), 1);
        assert_eq!(store.load_slot(0).unwrap().decode().payload, message(1));
    }
}
