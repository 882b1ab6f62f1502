// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use orbit_placement::{
    Canvas, DropEvent, ItemKind, Occupancy, PlacedItem, PlacementConfig, Placer, PolarPosition,
    SequentialIds, search,
};

const CENTER: Point = Point::new(600.0, 600.0);

/// Fill a large dial by repeatedly dropping on the same spot.
fn crowded(placer: &Placer, drops: usize) -> Vec<PlacedItem> {
    let mut ids = SequentialIds::default();
    let event = DropEvent::palette(ItemKind::Note, Point::new(900.0, 600.0));
    let mut items = Vec::new();
    for _ in 0..drops {
        items = placer.commit(&event, items, &mut ids).items;
    }
    items
}

fn bench_search(c: &mut Criterion) {
    let config = PlacementConfig::default();
    let placer = Placer::new(Canvas::new(CENTER, 0.0, 600.0), config.clone()).unwrap();
    let mut group = c.benchmark_group("crowded_search");
    for &drops in &[8usize, 32, 96] {
        let items = crowded(&placer, drops);
        let target = PolarPosition::new(0.0, 300.0);

        group.bench_function(format!("flat_snapshot_and_search_{drops}"), |b| {
            b.iter(|| {
                let occ = Occupancy::new(&items, None, CENTER, &config);
                black_box(search(&occ, target, &config))
            });
        });
        group.bench_function(format!("grid_snapshot_and_search_{drops}"), |b| {
            b.iter(|| {
                let occ = Occupancy::with_grid(&items, None, CENTER, &config);
                black_box(search(&occ, target, &config))
            });
        });
        group.bench_function(format!("commit_{drops}"), |b| {
            let event = DropEvent::palette(ItemKind::Task, Point::new(900.0, 600.0));
            b.iter_batched(
                || (items.clone(), SequentialIds::starting_at(1_u128 << 64)),
                |(items, mut ids)| black_box(placer.commit(&event, items, &mut ids)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
