// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying drops to the item collection.
//!
//! The [`Placer`] owns the canvas and configuration. Each call to [`Placer::commit`]
//! takes the collection by value and hands it back, either updated or untouched.
//! A drop that finds no free slot is a normal outcome, not an error.

use alloc::vec::Vec;

use kurbo::Point;
use tracing::debug;

use crate::config::{ConfigError, PlacementConfig};
use crate::occupancy::{self, Occupancy};
use crate::polar;
use crate::search::{self, SlotSearch};
use crate::types::{Canvas, ItemId, ItemKind, PlacedItem, PolarPosition};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a dropped item came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "source", rename_all = "lowercase")
)]
pub enum DropSource {
    /// A new item of `kind` dragged in from the palette.
    Palette {
        /// Kind of the new item.
        kind: ItemKind,
    },
    /// An already-placed item being relocated.
    Existing {
        /// The dragged item.
        #[cfg_attr(feature = "serde", serde(rename = "itemId"))]
        id: ItemId,
    },
}

/// A drop (or drag-end) event in screen space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DropEvent {
    /// Origin of the dropped item.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub source: DropSource,
    /// Drop x in screen space.
    #[cfg_attr(feature = "serde", serde(rename = "screenX"))]
    pub screen_x: f64,
    /// Drop y in screen space.
    #[cfg_attr(feature = "serde", serde(rename = "screenY"))]
    pub screen_y: f64,
}

impl DropEvent {
    /// A new item of `kind` dropped at `screen`.
    pub fn palette(kind: ItemKind, screen: Point) -> Self {
        Self {
            source: DropSource::Palette { kind },
            screen_x: screen.x,
            screen_y: screen.y,
        }
    }

    /// Item `id` dragged to `screen`.
    pub fn existing(id: ItemId, screen: Point) -> Self {
        Self {
            source: DropSource::Existing { id },
            screen_x: screen.x,
            screen_y: screen.y,
        }
    }

    /// The drop point.
    pub fn screen(&self) -> Point {
        Point::new(self.screen_x, self.screen_y)
    }
}

/// Why a drop left the collection unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Both search passes were exhausted.
    NoFreeSlot,
    /// The dragged item is not in the collection.
    UnknownItem,
}

/// What a commit did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A new item was appended.
    Created(ItemId),
    /// An existing item was moved.
    Moved(ItemId),
    /// Nothing changed.
    Rejected(Rejection),
}

/// Result of [`Placer::commit`]: the collection and what happened to it.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Committed {
    /// The item collection after the drop.
    pub items: Vec<PlacedItem>,
    /// What the drop did.
    pub outcome: Outcome,
}

impl Committed {
    fn rejected(items: Vec<PlacedItem>, reason: Rejection) -> Self {
        debug!(?reason, "drop rejected");
        Self {
            items,
            outcome: Outcome::Rejected(reason),
        }
    }

    /// True if the drop changed the collection.
    pub fn is_applied(&self) -> bool {
        !matches!(self.outcome, Outcome::Rejected(_))
    }
}

/// Source of identifiers for newly created items.
pub trait IdSource {
    /// Produce a fresh identifier.
    fn next_id(&mut self) -> ItemId;
}

/// Deterministic identifiers: UUIDs counting up from a starting value.
#[derive(Clone, Debug)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    /// Start counting at `first`.
    pub const fn starting_at(first: u128) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId::from_u128(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Random version 4 UUIDs.
#[cfg(feature = "v4")]
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomIds;

#[cfg(feature = "v4")]
impl IdSource for RandomIds {
    fn next_id(&mut self) -> ItemId {
        ItemId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// The placement engine for one canvas.
#[derive(Clone, Debug)]
pub struct Placer {
    canvas: Canvas,
    config: PlacementConfig,
}

impl Placer {
    /// Create a placer after validating `config`.
    pub fn new(canvas: Canvas, config: PlacementConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { canvas, config })
    }

    /// Create a placer without validating `config`.
    pub fn with_unchecked_config(canvas: Canvas, config: PlacementConfig) -> Self {
        Self { canvas, config }
    }

    /// The current canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Replace the canvas, e.g. after the dial rotates or the container resizes.
    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }

    /// The configuration in use.
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Map a screen point to a canvas-local polar position.
    pub fn to_polar(&self, screen: Point) -> PolarPosition {
        polar::to_polar(screen, &self.canvas, self.config.edge_margin)
    }

    /// Map a canvas-local polar position to screen space under the current rotation.
    pub fn to_screen(&self, position: PolarPosition) -> Point {
        polar::to_screen(position, &self.canvas)
    }

    /// Whether a probe at `position` collides with no item other than `exclude`.
    pub fn is_free(
        &self,
        position: PolarPosition,
        items: &[PlacedItem],
        exclude: Option<ItemId>,
    ) -> bool {
        occupancy::is_free(position, items, exclude, self.canvas.center, &self.config)
    }

    /// First free slot near `initial`, ignoring `exclude`.
    pub fn find_free_slot(
        &self,
        initial: PolarPosition,
        items: &[PlacedItem],
        exclude: Option<ItemId>,
    ) -> Option<PolarPosition> {
        search::find_free_slot(initial, items, exclude, self.canvas.center, &self.config)
    }

    fn locate(
        &self,
        initial: PolarPosition,
        items: &[PlacedItem],
        exclude: Option<ItemId>,
    ) -> Option<SlotSearch> {
        let occupancy = Occupancy::new(items, exclude, self.canvas.center, &self.config);
        search::search(&occupancy, initial, &self.config)
    }

    /// Apply `event` to `items`.
    ///
    /// - Palette drops append a new item with a fresh id from `ids`, the kind's
    ///   default size, and empty content.
    /// - Existing drops move the dragged item, leaving its other fields alone.
    ///
    /// If no slot is found, or the dragged item is unknown, `items` is handed back untouched.
    pub fn commit<I: IdSource + ?Sized>(
        &self,
        event: &DropEvent,
        mut items: Vec<PlacedItem>,
        ids: &mut I,
    ) -> Committed {
        let initial = self.to_polar(event.screen());
        match event.source {
            DropSource::Palette { kind } => {
                let Some(found) = self.locate(initial, &items, None) else {
                    return Committed::rejected(items, Rejection::NoFreeSlot);
                };
                let id = ids.next_id();
                let size = self.config.sizes.get(kind);
                items.push(PlacedItem::new(id, kind, found.slot, Some(size)));
                debug!(
                    %id,
                    %kind,
                    angle = found.slot.angle,
                    distance = found.slot.distance,
                    stage = ?found.stage,
                    "created item"
                );
                Committed {
                    items,
                    outcome: Outcome::Created(id),
                }
            }
            DropSource::Existing { id } => {
                let Some(pos) = items.iter().position(|item| item.id == id) else {
                    return Committed::rejected(items, Rejection::UnknownItem);
                };
                let Some(found) = self.locate(initial, &items, Some(id)) else {
                    return Committed::rejected(items, Rejection::NoFreeSlot);
                };
                items[pos].set_position(found.slot);
                debug!(
                    %id,
                    angle = found.slot.angle,
                    distance = found.slot.distance,
                    stage = ?found.stage,
                    "moved item"
                );
                Committed {
                    items,
                    outcome: Outcome::Moved(id),
                }
            }
        }
    }
}
