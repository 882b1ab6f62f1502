// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill a dial until drops start failing.
//!
//! Keeps dropping notes on the same spot and reports which search stage found
//! each slot, then shows which items block the original spot.
//!
//! Run:
//! - `cargo run -p orbit_demos --example crowded_dial`

use kurbo::Point;
use orbit_placement::{
    Canvas, DropEvent, ItemKind, Occupancy, Outcome, PlacementConfig, Placer, SequentialIds,
    search,
};

fn main() {
    let canvas = Canvas::new(Point::new(400.0, 300.0), 0.0, 300.0);
    let config = PlacementConfig::default();
    let placer = Placer::new(canvas, config.clone()).expect("default config");
    let mut ids = SequentialIds::default();
    let drop_point = Point::new(580.0, 300.0);
    let target = placer.to_polar(drop_point);

    let mut items = Vec::new();
    for attempt in 1..=40 {
        // Look at how the slot would be found before committing.
        let occupancy = Occupancy::with_grid(&items, None, canvas.center, &config);
        let stage = search(&occupancy, target, &config).map(|found| found.stage);

        let done = placer.commit(
            &DropEvent::palette(ItemKind::Note, drop_point),
            items,
            &mut ids,
        );
        items = done.items;
        match done.outcome {
            Outcome::Created(id) => {
                let item = items.last().expect("item was appended");
                println!(
                    "#{attempt:<2} {id} at ({:>6.2}°, {:>5.1}) via {stage:?}",
                    item.angle, item.distance
                );
            }
            Outcome::Rejected(reason) => {
                println!("#{attempt:<2} rejected: {reason:?}");
                break;
            }
            Outcome::Moved(_) => unreachable!("palette drops never move items"),
        }
    }

    let occupancy = Occupancy::new(&items, None, canvas.center, &config);
    let blockers: Vec<_> = occupancy.colliding(target).collect();
    println!(
        "{} items placed; {} block ({:.1}°, {:.1})",
        items.len(),
        blockers.len(),
        target.angle,
        target.distance
    );
}
