//! Section codec benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use turndata_bench::utils::{random_store, SIZES};
use turndata_codec::{StreamReader, StreamWriter};
use turndata_core::{serialization, TurnDataLayout};

/// Benchmark encoding owned stores and re-encoding views.
fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    for size in SIZES {
        let store = random_store(*size);
        let bytes = TurnDataLayout::new(*size as u32).unwrap().total_size();
        group.throughput(Throughput::Bytes(bytes as u64));

        group.bench_with_input(BenchmarkId::new("owned", size), &store, |b, store| {
            b.iter(|| {
                let mut writer = StreamWriter::with_capacity(bytes);
                serialization::write(&mut writer, black_box(store), 0).unwrap();
                black_box(writer.into_bytes());
            });
        });

        let mut writer = StreamWriter::new();
        serialization::write(&mut writer, &store, 0).unwrap();
        let encoded = writer.into_bytes();
        let (view, _) = serialization::read_view(&mut StreamReader::new(&encoded)).unwrap();

        group.bench_with_input(BenchmarkId::new("view", size), &view, |b, view| {
            b.iter(|| {
                let mut writer = StreamWriter::with_capacity(bytes);
                serialization::write(&mut writer, black_box(view), 0).unwrap();
                black_box(writer.into_bytes());
            });
        });
    }

    group.finish();
}

/// Benchmark decoding into an owned store versus borrowing a view.
fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");

    for size in SIZES {
        let mut writer = StreamWriter::new();
        serialization::write(&mut writer, &random_store(*size), 0).unwrap();
        let encoded = writer.into_bytes();
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::new("owned", size), &encoded, |b, encoded| {
            b.iter(|| {
                let decoded = serialization::read(&mut StreamReader::new(encoded)).unwrap();
                black_box(decoded);
            });
        });

        group.bench_with_input(BenchmarkId::new("view", size), &encoded, |b, encoded| {
            b.iter(|| {
                let view = serialization::read_view(&mut StreamReader::new(encoded)).unwrap();
                black_box(view);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write, bench_read);
criterion_main!(benches);
