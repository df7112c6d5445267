//! Measure lock-contention throughput with many concurrent appenders and
//! readers sharing one log.
//!
//!   $ cargo bench --bench contention_benchmark

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main, measurement::WallTime};
use futures::future::join_all;
use packed_log::{
    PackedLog,
    constants::PAYLOAD_SIZE,
    traits::{PackedLogReader, PackedLogWriter},
};
use rand::{Rng, rng};
use std::sync::Arc;
use tokio::runtime::Runtime;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

const CAPACITIES: [usize; 3] = [10, 16, 1_024];
const THREADS: usize = 8;
const OPS_PER_THREAD: usize = 1_000;

// ---------------------------------------------------------------------------
// Benchmark
// ---------------------------------------------------------------------------

fn contention_bench(c: &mut Criterion<WallTime>) {
    let mut group = c.benchmark_group("appenders_vs_readers");
    group.sample_size(10);

    // One Tokio runtime that we reuse for every sample
    let rt = Runtime::new().unwrap();

    for &capacity in &CAPACITIES {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{capacity}_slots")),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    rt.block_on(async move {
                        let log = Arc::new(PackedLog::new(capacity).unwrap());

                        // half the tasks append, half read random slots
                        let mut handles = Vec::with_capacity(THREADS);
                        for t in 0..THREADS {
                            let log = log.clone();
                            handles.push(tokio::spawn(async move {
                                let mut rng = rng();
                                for _ in 0..OPS_PER_THREAD {
                                    if t % 2 == 0 {
                                        let mut payload = [0u8; PAYLOAD_SIZE];
                                        rng.fill(&mut payload[..]);
                                        log.append(&payload).unwrap();
                                    } else {
                                        let index = rng.random_range(0..capacity);
                                        log.read(index).unwrap();
                                    }
                                }
                            }));
                        }

                        join_all(handles).await;
                    });
                });
            },
        );
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(benches, contention_bench);
criterion_main!(benches);
