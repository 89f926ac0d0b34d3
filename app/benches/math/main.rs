/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use moxlog::{f_log, f_log1p, f_log2, log, log1p, log2};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::log1p", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::log1p(i as f64 / 1000. - 0.5));
            }
        })
    });

    c.bench_function("system: log1p", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f64::ln_1p(i as f64 / 1000. - 0.5));
            }
        })
    });

    c.bench_function("moxlog: log1p", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(log1p(i as f64 / 1000. - 0.5));
            }
        })
    });

    c.bench_function("moxlog: FMA log1p", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_log1p(i as f64 / 1000. - 0.5));
            }
        })
    });

    c.bench_function("libm::log2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::log2(i as f64));
            }
        })
    });

    c.bench_function("system: log2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f64::log2(i as f64));
            }
        })
    });

    c.bench_function("moxlog: log2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(log2(i as f64));
            }
        })
    });

    c.bench_function("moxlog: FMA log2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_log2(i as f64));
            }
        })
    });

    c.bench_function("libm::log", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::log(i as f64));
            }
        })
    });

    c.bench_function("moxlog: log", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(log(i as f64));
            }
        })
    });

    c.bench_function("moxlog: FMA log", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_log(i as f64));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
