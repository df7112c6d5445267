//! Single-process micro-benchmarks for the packed log. Fills a file-backed
//! ring many times over, then exercises sequential, random and full-table
//! reads.

use packed_log::{
    LogConfig, PackedLog,
    constants::PAYLOAD_SIZE,
    traits::{PackedLogReader, PackedLogWriter},
};
use rand::{Rng, rng};
use std::path::Path;
use std::time::Instant;
use tempfile::tempdir;

// ---------------------------------------------------------------------------
// Tunables
// ---------------------------------------------------------------------------

const CAPACITY: usize = 4_096;
const NUM_APPENDS: usize = 1_000_000;
const NUM_RANDOM_READS: usize = 1_000_000;
const NUM_FULL_SCANS: usize = 100;

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bench.bin");

    println!("Running storage benchmark…");
    benchmark_appends(&path);
    benchmark_sequential_reads(&path);
    benchmark_random_reads(&path);
    benchmark_full_scans(&path);
    println!("✅ Benchmarks completed.");
}

fn open(path: &Path) -> PackedLog<packed_log::MmapSlotStore> {
    PackedLog::open(path, LogConfig::new(CAPACITY)).expect("Failed to open log")
}

// ---------------------------------------------------------------------------
// 1 ─ Append 1 M records (wraps the ring ~244 times)
// ---------------------------------------------------------------------------

fn benchmark_appends(path: &Path) {
    let log = open(path);
    let mut payload = [0u8; PAYLOAD_SIZE];

    let start_time = Instant::now();
    for i in 0..NUM_APPENDS {
        payload[..8].copy_from_slice(&(i as u64).to_le_bytes());
        log.append(&payload).expect("Failed to append");
    }
    log.flush().expect("Failed to flush");

    let dt = start_time.elapsed();
    let stats = log.stats().expect("Failed to read stats");
    println!(
        "Appended {NUM_APPENDS} records in {:#.3}s ({:#.3} appends/s, {} words written)",
        dt.as_secs_f64(),
        NUM_APPENDS as f64 / dt.as_secs_f64(),
        stats.words_written
    );
}

// ---------------------------------------------------------------------------
// 2 ─ Read every slot in index order
// ---------------------------------------------------------------------------

fn benchmark_sequential_reads(path: &Path) {
    let log = open(path);

    let start_time = Instant::now();
    for index in 0..CAPACITY {
        let record = log.read(index).expect("Failed to read");
        debug_assert_eq!(record.payload.len(), PAYLOAD_SIZE);
    }

    let dt = start_time.elapsed();
    println!(
        "Sequentially read {CAPACITY} slots in {:#.3}s ({:#.3} reads/s)",
        dt.as_secs_f64(),
        CAPACITY as f64 / dt.as_secs_f64()
    );
}

// ---------------------------------------------------------------------------
// 3 ─ Random slot reads
// ---------------------------------------------------------------------------

fn benchmark_random_reads(path: &Path) {
    let log = open(path);
    let mut rng = rng();

    let start_time = Instant::now();
    for _ in 0..NUM_RANDOM_READS {
        let index = rng.random_range(0..CAPACITY);
        log.read(index).expect("Failed to read");
    }

    let dt = start_time.elapsed();
    println!(
        "Randomly read {NUM_RANDOM_READS} slots in {:#.3}s ({:#.3} reads/s)",
        dt.as_secs_f64(),
        NUM_RANDOM_READS as f64 / dt.as_secs_f64()
    );
}

// ---------------------------------------------------------------------------
// 4 ─ Whole-table reads, oldest first
// ---------------------------------------------------------------------------

fn benchmark_full_scans(path: &Path) {
    let log = open(path);

    let start_time = Instant::now();
    for _ in 0..NUM_FULL_SCANS {
        let records = log.read_chronological().expect("Failed to scan");
        assert_eq!(records.len(), CAPACITY);
    }

    let dt = start_time.elapsed();
    println!(
        "Scanned {NUM_FULL_SCANS} × {CAPACITY} slots in {:#.3}s ({:#.3} slots/s)",
        dt.as_secs_f64(),
        (NUM_FULL_SCANS * CAPACITY) as f64 / dt.as_secs_f64()
    );
}
