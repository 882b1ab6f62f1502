// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the placement engine: identifiers, item kinds, placed items, and the canvas.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect, Size};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier for a placed item.
///
/// Opaque and stable for the item's lifetime. New identifiers come from an
/// [`IdSource`](crate::IdSource).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ItemId(Uuid);

impl ItemId {
    /// Wrap an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Build an identifier from a raw 128-bit value. Handy for fixtures.
    pub const fn from_u128(v: u128) -> Self {
        Self(Uuid::from_u128(v))
    }

    /// The underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Category of a placed item.
///
/// Only used by placement to pick a default size from the
/// [`SizeTable`](crate::SizeTable).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ItemKind {
    /// Free-form note.
    Note,
    /// Checklist task.
    Task,
    /// Calendar event.
    Event,
    /// Attached file.
    File,
}

impl ItemKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [Self::Note, Self::Task, Self::Event, Self::File];

    /// Lowercase name, as used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Task => "task",
            Self::Event => "event",
            Self::File => "file",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A canvas-local polar coordinate.
///
/// `angle` is in degrees, counter-clockwise from the positive x-axis in
/// canvas space, with the canvas rotation already removed.
/// `distance` is in pixels from the canvas center.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolarPosition {
    /// Degrees in `[0, 360)`.
    pub angle: f64,
    /// Pixels from the canvas center.
    pub distance: f64,
}

impl PolarPosition {
    /// Create a polar position. The values are stored as given.
    pub const fn new(angle: f64, distance: f64) -> Self {
        Self { angle, distance }
    }
}

/// An item positioned on the circular canvas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    /// Stable identifier.
    pub id: ItemId,
    /// Item category.
    pub kind: ItemKind,
    /// Canvas-local angle in degrees, in `[0, 360)`.
    pub angle: f64,
    /// Distance from the canvas center in pixels.
    pub distance: f64,
    /// Bounding-box size. `None` means the kind's default from the size table.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub size: Option<Size>,
    /// Free text carried for the caller. Placement never reads it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: String,
}

impl PlacedItem {
    /// Create an item with empty content.
    pub fn new(id: ItemId, kind: ItemKind, position: PolarPosition, size: Option<Size>) -> Self {
        Self {
            id,
            kind,
            angle: position.angle,
            distance: position.distance,
            size,
            content: String::new(),
        }
    }

    /// The item's stored polar position.
    pub fn position(&self) -> PolarPosition {
        PolarPosition::new(self.angle, self.distance)
    }

    /// Move the item, leaving every other field untouched.
    pub fn set_position(&mut self, position: PolarPosition) {
        self.angle = position.angle;
        self.distance = position.distance;
    }
}

/// The circular drop surface, as measured by the caller at drop time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Canvas {
    /// Canvas center in screen space.
    pub center: Point,
    /// Current visual rotation of the dial, in degrees.
    pub rotation_offset_degrees: f64,
    /// Radius of the dial in pixels.
    pub max_radius: f64,
}

impl Canvas {
    /// Create a canvas from its center, rotation, and radius.
    pub const fn new(center: Point, rotation_offset_degrees: f64, max_radius: f64) -> Self {
        Self {
            center,
            rotation_offset_degrees,
            max_radius,
        }
    }

    /// Derive the canvas from the container's bounding box.
    ///
    /// The center is the middle of `bounds`; the radius is half the shorter side.
    pub fn from_bounds(bounds: Rect, rotation_offset_degrees: f64) -> Self {
        let bounds = bounds.abs();
        let radius = 0.5 * bounds.width().min(bounds.height());
        Self::new(bounds.center(), rotation_offset_degrees, radius)
    }

    /// Same canvas, rotated to a new offset.
    pub fn with_rotation(self, rotation_offset_degrees: f64) -> Self {
        Self {
            rotation_offset_degrees,
            ..self
        }
    }

    /// Largest distance an item may sit from the center. Never negative.
    pub fn distance_ceiling(&self, edge_margin: f64) -> f64 {
        let ceiling = self.max_radius - edge_margin;
        if ceiling > 0.0 { ceiling } else { 0.0 }
    }
}
