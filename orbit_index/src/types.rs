// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

/// Axis-aligned bounding box in 2D.
///
/// Overlap is tested on open intervals: two boxes that share only an edge
/// do not overlap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2D {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y (top)
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y (bottom)
    pub max_y: f64,
}

impl Aabb2D {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create an AABB centered on `(cx, cy)` with the given full width and height.
    pub fn from_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        let hw = 0.5 * width;
        let hh = 0.5 * height;
        Self::new(cx - hw, cy - hh, cx + hw, cy + hh)
    }

    /// Grow the box by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> Self {
        Self::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }

    /// Whether the open interiors of the two boxes intersect on both axes.
    ///
    /// Returns `false` if either box contains a NaN coordinate.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Return true if the AABB is inverted on either axis. Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    /// Width of the box (zero if inverted).
    pub fn width(&self) -> f64 {
        (self.max_x - self.min_x).max(0.0)
    }

    /// Height of the box (zero if inverted).
    pub fn height(&self) -> f64 {
        (self.max_y - self.min_y).max(0.0)
    }
}
