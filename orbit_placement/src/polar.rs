// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between screen space and canvas-local polar positions.

use kurbo::{Point, Vec2};

use crate::types::{Canvas, PolarPosition};

/// Map an angle in degrees into `[0, 360)`. Non-finite input maps to `0`.
pub fn normalize_degrees(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let mut r = angle % 360.0;
    if r < 0.0 {
        r += 360.0;
    }
    // `-tiny + 360.0` rounds up to exactly 360.0.
    if r >= 360.0 { 0.0 } else { r + 0.0 }
}

/// Map a screen point to a canvas-local polar position.
///
/// The angle is measured from the canvas center with the canvas rotation removed.
/// The distance is clamped to [`Canvas::distance_ceiling`] so an item dropped
/// past the rim still lands inside it. A NaN distance becomes `0`.
pub fn to_polar(screen: Point, canvas: &Canvas, edge_margin: f64) -> PolarPosition {
    let v = screen - canvas.center;
    let raw = normalize_degrees(v.atan2().to_degrees());
    let angle = normalize_degrees(raw - canvas.rotation_offset_degrees);
    let ceiling = canvas.distance_ceiling(edge_margin);
    let distance = v.hypot();
    let distance = if distance.is_nan() {
        0.0
    } else {
        distance.min(ceiling)
    };
    PolarPosition { angle, distance }
}

/// Project a polar position back to Cartesian space around `center`.
///
/// No rotation is applied; use this to compare positions within the canvas frame.
pub fn to_cartesian(position: PolarPosition, center: Point) -> Point {
    center + Vec2::from_angle(position.angle.to_radians()) * position.distance
}

/// Project a canvas-local polar position to screen space, re-applying the canvas rotation.
pub fn to_screen(position: PolarPosition, canvas: &Canvas) -> Point {
    let rotated = PolarPosition {
        angle: position.angle + canvas.rotation_offset_degrees,
        ..position
    };
    to_cartesian(rotated, canvas.center)
}
