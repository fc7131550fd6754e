//! Turn data file benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;
use turndata_bench::utils::{random_store, SIZES};
use turndata_core::{files, LoadConfig};
use turndata_storage::{FileBackend, InMemoryBackend, MappedRegion};

/// Benchmark writing a turn data file.
fn bench_write_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_file");
    group.sample_size(20);

    for size in SIZES {
        let store = random_store(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("memory", size), &store, |b, store| {
            let mut backend = InMemoryBackend::new();
            b.iter(|| {
                files::write_turn_data(&mut backend, black_box(store), 0).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("file", size), &store, |b, store| {
            let temp_dir = TempDir::new().unwrap();
            let mut backend = FileBackend::open(&temp_dir.path().join("bench.turns")).unwrap();
            b.iter(|| {
                files::write_turn_data(&mut backend, black_box(store), 0).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark loading a file by reading it versus mapping it.
fn bench_load_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_file");
    let config = LoadConfig::new().expected_checksum(7);

    for size in SIZES {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bench.turns");
        let mut backend = FileBackend::open(&path).unwrap();
        files::write_turn_data(&mut backend, &random_store(*size), 7).unwrap();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("read", size), &path, |b, path| {
            b.iter(|| {
                let backend = FileBackend::open_read_only(path).unwrap();
                black_box(files::read_turn_data(&backend, &config).unwrap());
            });
        });

        group.bench_with_input(BenchmarkId::new("mmap", size), &path, |b, path| {
            b.iter(|| {
                let region = MappedRegion::open(path).unwrap();
                let (view, _) = files::view_turn_data(region.as_bytes(), &config).unwrap();
                black_box(view.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write_file, bench_load_file);
criterion_main!(benches);
