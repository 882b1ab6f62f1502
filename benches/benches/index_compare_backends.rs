// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use orbit_index::{Aabb2D, Backend, FlatVec, Grid, Index};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Item-sized boxes scattered over a ring, like a busy dial.
fn gen_ring_boxes(count: usize, radius: f64) -> Vec<Aabb2D> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let a = rng.next_f64() * std::f64::consts::TAU;
        let d = rng.next_f64() * radius;
        out.push(Aabb2D::from_center(d * a.cos(), d * a.sin(), 150.0, 80.0));
    }
    out
}

/// Probe boxes, inflated by the default margin.
fn gen_probes(count: usize, radius: f64) -> Vec<Aabb2D> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            let a = rng.next_f64() * std::f64::consts::TAU;
            let d = rng.next_f64() * radius;
            Aabb2D::from_center(d * a.cos(), d * a.sin(), 150.0, 80.0).inflate(8.0)
        })
        .collect()
}

fn flat() -> Index<u32> {
    Index::new()
}

fn grid() -> Index<u32, Grid> {
    Index::with_uniform_grid(166.0, 96.0, 0.0, 0.0)
}

fn build<B: Backend>(mut idx: Index<u32, B>, boxes: &[Aabb2D]) -> Index<u32, B> {
    idx.reserve(boxes.len());
    for (i, r) in boxes.iter().copied().enumerate() {
        let _ = idx.insert(r, i as u32);
    }
    idx
}

fn bench_build<B: Backend>(c: &mut Criterion, name: &str, make: fn() -> Index<u32, B>) {
    let mut group = c.benchmark_group(name);
    for &n in &[16usize, 64, 256, 1024] {
        let boxes = gen_ring_boxes(n, 40.0 * (n as f64).sqrt());
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build_n{n}"), |b| {
            b.iter_batched(
                make,
                |idx| black_box(build(idx, &boxes).len()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_probe<B: Backend>(c: &mut Criterion, name: &str, make: fn() -> Index<u32, B>) {
    let mut group = c.benchmark_group(name);
    for &n in &[16usize, 64, 256, 1024] {
        let radius = 40.0 * (n as f64).sqrt();
        let idx = build(make(), &gen_ring_boxes(n, radius));
        let probes = gen_probes(256, radius);
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("any_overlapping_n{n}"), |b| {
            b.iter(|| {
                let free = probes.iter().filter(|p| !idx.any_overlapping(**p)).count();
                black_box(free)
            });
        });
        group.bench_function(format!("query_rect_n{n}"), |b| {
            b.iter(|| {
                let hits: usize = probes.iter().map(|p| idx.query_rect(*p).count()).sum();
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn bench_flatvec(c: &mut Criterion) {
    bench_build::<FlatVec>(c, "flatvec_build", flat);
    bench_probe::<FlatVec>(c, "flatvec_probe", flat);
}

fn bench_grid(c: &mut Criterion) {
    bench_build::<Grid>(c, "grid_build", grid);
    bench_probe::<Grid>(c, "grid_probe", grid);
}

criterion_group!(benches, bench_flatvec, bench_grid);
criterion_main!(benches);
