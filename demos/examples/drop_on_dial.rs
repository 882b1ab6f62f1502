// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop items onto a rotating dial.
//!
//! Creates a few items from the palette, rotates the dial, drags one item, and
//! prints where everything landed.
//!
//! Run:
//! - `cargo run -p orbit_demos --example drop_on_dial`

use kurbo::{Point, Rect};
use orbit_placement::{
    Canvas, DropEvent, ItemKind, Outcome, PlacementConfig, Placer, RandomIds,
};

fn main() {
    // An 800x600 container gives a dial of radius 300 centered at (400, 300).
    let canvas = Canvas::from_bounds(Rect::new(0.0, 0.0, 800.0, 600.0), 0.0);
    let mut placer = Placer::new(canvas, PlacementConfig::default()).expect("default config");
    let mut ids = RandomIds;

    let mut items = Vec::new();
    for (kind, screen) in [
        (ItemKind::Note, Point::new(500.0, 300.0)),
        (ItemKind::Task, Point::new(500.0, 300.0)),
        (ItemKind::Event, Point::new(400.0, 120.0)),
        (ItemKind::File, Point::new(2000.0, 300.0)),
    ] {
        let done = placer.commit(&DropEvent::palette(kind, screen), items, &mut ids);
        println!("{kind} dropped at {screen:?}: {:?}", done.outcome);
        items = done.items;
    }

    // Rotate the dial a quarter turn; stored angles stay canvas-local.
    placer.set_canvas(placer.canvas().with_rotation(90.0));
    let first = items[0].id;
    let done = placer.commit(
        &DropEvent::existing(first, Point::new(300.0, 300.0)),
        items,
        &mut ids,
    );
    assert_eq!(done.outcome, Outcome::Moved(first));
    items = done.items;

    println!();
    for item in &items {
        let screen = placer.to_screen(item.position());
        println!(
            "{:<5} {} angle={:>7.2} distance={:>6.1} screen=({:.1}, {:.1})",
            item.kind, item.id, item.angle, item.distance, screen.x, screen.y
        );
    }

    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&items).expect("items serialize")
    );
}
