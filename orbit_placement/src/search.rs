// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy free-slot search around a drop position.
//!
//! ## Order
//!
//! 1. The initial slot, returned untouched if free.
//! 2. Angular pass: for `i` in `1..=max_angle_attempts`, try `angle + i·step` and then
//!    `angle − i·step` at the initial distance. The increasing direction wins ties.
//! 3. Radial pass: try `distance − k·radius_step` for `k` in `1..=max_radius_attempts` at the
//!    initial angle while the distance stays at or above `min_radius`.
//!
//! The first free slot in this order is returned. This is not the globally closest free slot.

use kurbo::Point;
use orbit_index::Backend;
use tracing::trace;

use crate::config::{PlacementConfig, SearchPasses};
use crate::occupancy::Occupancy;
use crate::polar::normalize_degrees;
use crate::types::{ItemId, PlacedItem, PolarPosition};

/// Direction of an angular step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sweep {
    /// Toward larger angles.
    Increasing,
    /// Toward smaller angles.
    Decreasing,
}

/// Stage of the search that produced a slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// The requested slot was already free.
    Initial,
    /// Found by the angular pass at step `step` (1-based) in direction `sweep`.
    Angular {
        /// Number of angular steps away from the initial angle.
        step: u32,
        /// Which way the step went.
        sweep: Sweep,
    },
    /// Found by the radial pass at step `step` (1-based).
    Radial {
        /// Number of radial steps inward from the initial distance.
        step: u32,
    },
}

/// A free slot and how it was found.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotSearch {
    /// The free slot.
    pub slot: PolarPosition,
    /// Stage that produced it.
    pub stage: Stage,
}

/// Run the search against an occupancy snapshot.
///
/// Returns `None` when both passes are exhausted.
pub fn search<B: Backend>(
    occupancy: &Occupancy<B>,
    initial: PolarPosition,
    config: &PlacementConfig,
) -> Option<SlotSearch> {
    if occupancy.is_free(initial) {
        return Some(SlotSearch {
            slot: initial,
            stage: Stage::Initial,
        });
    }

    if config.passes.contains(SearchPasses::ANGULAR) {
        for i in 1..=config.max_angle_attempts {
            let offset = f64::from(i) * config.angle_step;
            for (sweep, angle) in [
                (Sweep::Increasing, initial.angle + offset),
                (Sweep::Decreasing, initial.angle - offset),
            ] {
                let slot = PolarPosition::new(normalize_degrees(angle), initial.distance);
                if occupancy.is_free(slot) {
                    trace!(step = i, ?sweep, angle = slot.angle, "angular pass found slot");
                    return Some(SlotSearch {
                        slot,
                        stage: Stage::Angular { step: i, sweep },
                    });
                }
            }
        }
    }

    // A non-positive step would never reach the floor.
    if config.passes.contains(SearchPasses::RADIAL) && config.radius_step > 0.0 {
        let angle = normalize_degrees(initial.angle);
        for k in 1..=config.max_radius_attempts {
            let distance = initial.distance - f64::from(k) * config.radius_step;
            if distance.is_nan() || distance < config.min_radius {
                break;
            }
            let slot = PolarPosition::new(angle, distance);
            if occupancy.is_free(slot) {
                trace!(step = k, distance, "radial pass found slot");
                return Some(SlotSearch {
                    slot,
                    stage: Stage::Radial { step: k },
                });
            }
        }
    }

    None
}

/// Find the first free slot near `initial`, ignoring the item `exclude`.
///
/// Builds a linear-scan snapshot of `items` around `center` and runs [`search`].
pub fn find_free_slot(
    initial: PolarPosition,
    items: &[PlacedItem],
    exclude: Option<ItemId>,
    center: Point,
    config: &PlacementConfig,
) -> Option<PolarPosition> {
    let occupancy = Occupancy::new(items, exclude, center, config);
    search(&occupancy, initial, config).map(|found| found.slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKind;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Size;

    fn item(n: u128, angle: f64, distance: f64) -> PlacedItem {
        PlacedItem::new(
            ItemId::from_u128(n),
            ItemKind::Note,
            PolarPosition::new(angle, distance),
            None,
        )
    }

    /// 4x4 boxes with a 2px margin: a 5 degree step at radius 100 clears them.
    fn small() -> PlacementConfig {
        let mut cfg = PlacementConfig {
            collision_margin: 2.0,
            probe_size: Size::new(4.0, 4.0),
            ..Default::default()
        };
        cfg.sizes = crate::SizeTable::uniform(Size::new(4.0, 4.0));
        cfg
    }

    #[test]
    fn free_initial_is_returned_verbatim() {
        let cfg = PlacementConfig::default();
        let occ = Occupancy::new(&[], None, Point::ORIGIN, &cfg);
        let at = PolarPosition::new(123.25, 77.5);
        assert_eq!(
            search(&occ, at, &cfg),
            Some(SlotSearch {
                slot: at,
                stage: Stage::Initial
            })
        );
    }

    #[test]
    fn increasing_direction_wins_ties() {
        let cfg = small();
        let items = vec![item(1, 0.0, 100.0)];
        let occ = Occupancy::new(&items, None, Point::ORIGIN, &cfg);
        let found = search(&occ, PolarPosition::new(0.0, 100.0), &cfg).unwrap();
        assert_eq!(found.slot, PolarPosition::new(5.0, 100.0));
        assert_eq!(
            found.stage,
            Stage::Angular {
                step: 1,
                sweep: Sweep::Increasing
            }
        );
    }

    #[test]
    fn decreasing_direction_used_when_increasing_blocked() {
        let cfg = small();
        let items = vec![item(1, 0.0, 100.0), item(2, 5.0, 100.0)];
        let found = find_free_slot(
            PolarPosition::new(0.0, 100.0),
            &items,
            None,
            Point::ORIGIN,
            &cfg,
        );
        assert_eq!(found, Some(PolarPosition::new(355.0, 100.0)));
    }

    #[test]
    fn default_boxes_need_a_wide_sweep() {
        // Two 150x80 boxes at radius 100 only separate once the vertical offset
        // reaches 88px, which first happens at 65 degrees.
        let cfg = PlacementConfig::default();
        let items = vec![item(1, 0.0, 100.0)];
        let occ = Occupancy::new(&items, None, Point::ORIGIN, &cfg);
        let found = search(&occ, PolarPosition::new(0.0, 100.0), &cfg).unwrap();
        assert_eq!(found.slot, PolarPosition::new(65.0, 100.0));
        assert_eq!(
            found.stage,
            Stage::Angular {
                step: 13,
                sweep: Sweep::Increasing
            }
        );
    }

    #[test]
    fn radial_pass_after_full_ring() {
        let cfg = small();
        let ring: Vec<_> = (0..72_u32)
            .map(|i| item(u128::from(i), f64::from(i) * 5.0, 100.0))
            .collect();
        let occ = Occupancy::new(&ring, None, Point::ORIGIN, &cfg);
        let found = search(&occ, PolarPosition::new(0.0, 100.0), &cfg).unwrap();
        assert_eq!(found.slot, PolarPosition::new(0.0, 90.0));
        assert_eq!(found.stage, Stage::Radial { step: 1 });
    }

    #[test]
    fn radial_floor_is_inclusive() {
        let mut cfg = small();
        cfg.passes = SearchPasses::RADIAL;
        // Block 100 down to 30; 20 is the floor and must still be tried.
        let items: Vec<_> = (3..=10_u32)
            .map(|r| item(u128::from(r), 0.0, f64::from(r) * 10.0))
            .collect();
        let found = find_free_slot(
            PolarPosition::new(0.0, 100.0),
            &items,
            None,
            Point::ORIGIN,
            &cfg,
        );
        assert_eq!(found, Some(PolarPosition::new(0.0, 20.0)));

        let mut below_floor = items;
        below_floor.push(item(2, 0.0, 20.0));
        let found = find_free_slot(
            PolarPosition::new(0.0, 100.0),
            &below_floor,
            None,
            Point::ORIGIN,
            &cfg,
        );
        assert_eq!(found, None);
    }

    #[test]
    fn radial_pass_stops_at_attempt_budget() {
        let mut cfg = small();
        cfg.passes = SearchPasses::RADIAL;
        // Blocks 100 down to 70; 60 is the first free slot, four steps in.
        let items: Vec<_> = (7..=10_u32)
            .map(|r| item(u128::from(r), 0.0, f64::from(r) * 10.0))
            .collect();
        let at = PolarPosition::new(0.0, 100.0);
        cfg.max_radius_attempts = 3;
        assert_eq!(find_free_slot(at, &items, None, Point::ORIGIN, &cfg), None);
        cfg.max_radius_attempts = 4;
        assert_eq!(
            find_free_slot(at, &items, None, Point::ORIGIN, &cfg),
            Some(PolarPosition::new(0.0, 60.0))
        );
    }

    #[test]
    fn tiny_radius_step_is_bounded() {
        let cfg = PlacementConfig {
            radius_step: 1e-9,
            passes: SearchPasses::RADIAL,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
        let items = vec![item(1, 0.0, 100.0)];
        let at = PolarPosition::new(0.0, 100.0);
        assert_eq!(find_free_slot(at, &items, None, Point::ORIGIN, &cfg), None);

        // A far-out start covered by one huge box gives up after the budget too.
        let mut wall = item(2, 0.0, 1.0e12);
        wall.size = Some(Size::new(1.0e5, 1.0e5));
        let cfg = PlacementConfig {
            passes: SearchPasses::RADIAL,
            ..Default::default()
        };
        let occ = Occupancy::new(&[wall], None, Point::ORIGIN, &cfg);
        assert_eq!(search(&occ, PolarPosition::new(0.0, 1.0e12), &cfg), None);
    }

    #[test]
    fn radial_slot_angle_is_normalized() {
        let mut cfg = small();
        cfg.passes = SearchPasses::RADIAL;
        let items = vec![item(1, 40.0, 100.0)];
        let found = find_free_slot(
            PolarPosition::new(400.0, 100.0),
            &items,
            None,
            Point::ORIGIN,
            &cfg,
        )
        .unwrap();
        assert_eq!(found.distance, 90.0);
        assert!((found.angle - 40.0) < 1e-9 && (40.0 - found.angle) < 1e-9);
    }

    #[test]
    fn disabled_passes_only_try_initial() {
        let mut cfg = small();
        cfg.passes = SearchPasses::empty();
        let items = vec![item(1, 0.0, 100.0)];
        let found = find_free_slot(
            PolarPosition::new(0.0, 100.0),
            &items,
            None,
            Point::ORIGIN,
            &cfg,
        );
        assert_eq!(found, None);
    }

    #[test]
    fn angular_candidates_wrap_around_zero() {
        let cfg = small();
        let items = vec![item(1, 358.0, 100.0), item(2, 3.0, 100.0)];
        // 358 is blocked; 358 + 5 wraps to 3, also blocked; 358 - 5 = 353 is free.
        let found = find_free_slot(
            PolarPosition::new(358.0, 100.0),
            &items,
            None,
            Point::ORIGIN,
            &cfg,
        )
        .unwrap();
        assert_eq!(found.distance, 100.0);
        assert!((found.angle - 353.0) < 1e-9 && (353.0 - found.angle) < 1e-9);
    }
}
