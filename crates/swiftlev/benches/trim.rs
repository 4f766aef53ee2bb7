#![allow(missing_docs)]

use std::hint::black_box;

use criterion::*;
use strgen::random_data;

use swiftlev::strings::trim::{trim, trim_grouped};

fn trim_identical(c: &mut Criterion) {
    let mut group = c.benchmark_group("Trim");

    for d in 2..=5 {
        let len = 10_usize.pow(d);
        let x = random_data::random_string(1, len, len, "ATCGN", 42).swap_remove(0);

        // one substitution in the middle
        let mut y = x.clone().into_bytes();
        y[len / 2] = b'X';
        let (x, y) = (x.as_bytes(), y.as_slice());

        let id = BenchmarkId::new("Scalar", len);
        group.bench_with_input(id, &len, |b, _| b.iter(|| black_box(trim(x, y))));

        let id = BenchmarkId::new("Grouped-16", len);
        group.bench_with_input(id, &len, |b, _| b.iter(|| black_box(trim_grouped::<u8, 16>(x, y))));

        let id = BenchmarkId::new("Grouped-64", len);
        group.bench_with_input(id, &len, |b, _| b.iter(|| black_box(trim_grouped::<u8, 64>(x, y))));
    }
    group.finish();
}

criterion_group!(benches, trim_identical);
criterion_main!(benches);
