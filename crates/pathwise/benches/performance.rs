//! Performance benchmarks for pathwise operations.
//!
//! Run with: cargo bench --package pathwise

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pathwise::{apply_patch, get, path, set, Map, Op, Patch, Path, Value};

// ============================================================================
// Helper functions to generate test data
// ============================================================================

/// Flat object with N numeric fields.
fn generate_flat_doc(num_fields: usize) -> Value {
    (0..num_fields)
        .map(|i| (format!("field_{i}"), Value::from(i as u64)))
        .collect()
}

/// Object nested `depth` levels deep, with a wide sibling at every level.
fn generate_nested_doc(depth: usize) -> (Value, Path) {
    let mut current = Value::from(42);
    let mut path = Path::root();
    for i in (0..depth).rev() {
        let mut obj = Map::new();
        obj.insert(format!("level_{i}"), current);
        obj.insert("sibling".to_owned(), generate_flat_doc(100));
        current = Value::object(obj);
    }
    for i in 0..depth {
        path.push(format!("level_{i}").into());
    }
    (current, path)
}

fn generate_set_patch(num_ops: usize) -> Patch {
    (0..num_ops)
        .map(|i| Op::set(path!(format!("field_{i}")), (i * 2) as u64))
        .collect()
}

fn generate_mixed_patch(num_ops: usize) -> Patch {
    let mut patch = Patch::new();
    for i in 0..num_ops {
        let a = path!(format!("field_{i}"));
        let b = path!(format!("field_{}", i + 1));
        patch.push(match i % 4 {
            0 => Op::copy(a, path!("copies", format!("c{i}"))),
            1 => Op::swap(a, b),
            2 => Op::move_value(a, path!("moved", format!("m{i}"))),
            _ => Op::remove(a),
        });
    }
    patch
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_set_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_patch_flat_doc");

    for num_fields in [10, 100, 1000, 10000] {
        group.throughput(Throughput::Elements(num_fields as u64));

        let doc = generate_flat_doc(num_fields);
        let patch = generate_set_patch(num_fields / 10);

        group.bench_with_input(BenchmarkId::from_parameter(num_fields), &num_fields, |b, _| {
            b.iter(|| black_box(apply_patch(black_box(&doc), black_box(&patch))));
        });
    }

    group.finish();
}

fn bench_set_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_nested_doc");

    for depth in [1, 5, 10, 20] {
        let (doc, path) = generate_nested_doc(depth);

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(set(black_box(&doc), black_box(&path), Value::from(7))));
        });
    }

    group.finish();
}

fn bench_get_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_nested_doc");

    for depth in [1, 5, 10, 20] {
        let (doc, path) = generate_nested_doc(depth);

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(get(black_box(&doc), black_box(&path))));
        });
    }

    group.finish();
}

fn bench_mixed_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_patch_mixed_ops");

    for num_ops in [10, 100, 1000] {
        group.throughput(Throughput::Elements(num_ops as u64));

        let doc = generate_flat_doc(num_ops + 1);
        let patch = generate_mixed_patch(num_ops);

        group.bench_with_input(BenchmarkId::from_parameter(num_ops), &num_ops, |b, _| {
            b.iter(|| black_box(apply_patch(black_box(&doc), black_box(&patch))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_set_flat,
    bench_set_nested,
    bench_get_nested,
    bench_mixed_ops
);
criterion_main!(benches);
