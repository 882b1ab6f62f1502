// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement configuration: search budgets, margins, and default sizes per item kind.

use kurbo::Size;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::ItemKind;

/// Size every kind gets unless configured otherwise.
pub const DEFAULT_ITEM_SIZE: Size = Size::new(150.0, 80.0);

bitflags::bitflags! {
    /// Which stages of the free-slot search run after the initial slot is found occupied.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
    pub struct SearchPasses: u8 {
        /// Step the angle outward in both directions at the original distance.
        const ANGULAR = 0b0000_0001;
        /// Step the distance inward at the original angle.
        const RADIAL  = 0b0000_0010;
    }
}

impl Default for SearchPasses {
    fn default() -> Self {
        Self::ANGULAR | Self::RADIAL
    }
}

/// Default bounding-box size for each [`ItemKind`].
///
/// This is the single place default dimensions live; items without an explicit
/// size are measured with it during occupancy checks.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SizeTable {
    /// Default size of notes.
    pub note: Size,
    /// Default size of tasks.
    pub task: Size,
    /// Default size of events.
    pub event: Size,
    /// Default size of files.
    pub file: Size,
}

impl SizeTable {
    /// A table where every kind has the same size.
    pub const fn uniform(size: Size) -> Self {
        Self {
            note: size,
            task: size,
            event: size,
            file: size,
        }
    }

    /// Default size for `kind`.
    pub const fn get(&self, kind: ItemKind) -> Size {
        match kind {
            ItemKind::Note => self.note,
            ItemKind::Task => self.task,
            ItemKind::Event => self.event,
            ItemKind::File => self.file,
        }
    }

    /// Replace the default size for `kind`.
    pub fn set(&mut self, kind: ItemKind, size: Size) {
        match kind {
            ItemKind::Note => self.note = size,
            ItemKind::Task => self.task = size,
            ItemKind::Event => self.event = size,
            ItemKind::File => self.file = size,
        }
    }
}

impl Default for SizeTable {
    fn default() -> Self {
        Self::uniform(DEFAULT_ITEM_SIZE)
    }
}

/// Tunables for mapping, occupancy, and the free-slot search.
///
/// All lengths are in pixels and all angles in degrees.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PlacementConfig {
    /// Distance kept between an item's position and the canvas rim.
    pub edge_margin: f64,
    /// Minimum gap required between two boxes for a slot to count as free.
    pub collision_margin: f64,
    /// Angular step of the angular pass.
    pub angle_step: f64,
    /// Number of steps tried in each direction by the angular pass.
    pub max_angle_attempts: u32,
    /// Radial step of the radial pass.
    pub radius_step: f64,
    /// Most steps the radial pass takes before giving up, even above `min_radius`.
    pub max_radius_attempts: u32,
    /// Smallest distance the radial pass tries (inclusive).
    pub min_radius: f64,
    /// Box used for the incoming item during occupancy checks.
    pub probe_size: Size,
    /// Search stages enabled after the initial slot.
    pub passes: SearchPasses,
    /// Default sizes for items that carry none.
    pub sizes: SizeTable,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            edge_margin: 50.0,
            collision_margin: 8.0,
            angle_step: 5.0,
            max_angle_attempts: 36,
            radius_step: 10.0,
            max_radius_attempts: 1024,
            min_radius: 20.0,
            probe_size: DEFAULT_ITEM_SIZE,
            passes: SearchPasses::default(),
            sizes: SizeTable::default(),
        }
    }
}

/// Reasons a [`PlacementConfig`] is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A step or size that must be strictly positive is not.
    #[error("`{field}` must be finite and greater than zero, got {value}")]
    NotPositive {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A margin or floor that must not be negative is.
    #[error("`{field}` must be finite and not negative, got {value}")]
    Negative {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The angular pass is enabled with no attempts.
    #[error("`max_angle_attempts` must be at least 1 when the angular pass is enabled")]
    NoAngleAttempts,
    /// The radial pass is enabled with no attempts.
    #[error("`max_radius_attempts` must be at least 1 when the radial pass is enabled")]
    NoRadiusAttempts,
    /// A default size in the size table is unusable.
    #[error("default size for {kind} must be finite and positive, got {width}x{height}")]
    InvalidKindSize {
        /// Kind whose default is broken.
        kind: ItemKind,
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl PlacementConfig {
    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("edge_margin", self.edge_margin)?;
        non_negative("collision_margin", self.collision_margin)?;
        positive("angle_step", self.angle_step)?;
        positive("radius_step", self.radius_step)?;
        non_negative("min_radius", self.min_radius)?;
        positive("probe_size.width", self.probe_size.width)?;
        positive("probe_size.height", self.probe_size.height)?;
        if self.passes.contains(SearchPasses::ANGULAR) && self.max_angle_attempts == 0 {
            return Err(ConfigError::NoAngleAttempts);
        }
        if self.passes.contains(SearchPasses::RADIAL) && self.max_radius_attempts == 0 {
            return Err(ConfigError::NoRadiusAttempts);
        }
        for kind in ItemKind::ALL {
            let Size { width, height } = self.sizes.get(kind);
            let ok = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
            if !ok {
                return Err(ConfigError::InvalidKindSize {
                    kind,
                    width,
                    height,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn defaults_are_valid() {
        let cfg = PlacementConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.sizes.get(ItemKind::File), Size::new(150.0, 80.0));
        assert!(cfg.passes.contains(SearchPasses::ANGULAR | SearchPasses::RADIAL));
    }

    #[test]
    fn rejects_zero_step() {
        let cfg = PlacementConfig {
            angle_step: 0.0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                field: "angle_step",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_negative_margin() {
        let cfg = PlacementConfig {
            collision_margin: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Negative {
                field: "collision_margin",
                ..
            })
        ));
    }

    #[test]
    fn zero_attempts_only_matter_with_angular_pass() {
        let mut cfg = PlacementConfig {
            max_angle_attempts: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoAngleAttempts));
        cfg.passes = SearchPasses::RADIAL;
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn zero_radius_attempts_only_matter_with_radial_pass() {
        let mut cfg = PlacementConfig {
            max_radius_attempts: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoRadiusAttempts));
        cfg.passes = SearchPasses::ANGULAR;
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_broken_kind_size() {
        let mut cfg = PlacementConfig::default();
        cfg.sizes.set(ItemKind::Event, Size::new(f64::NAN, 10.0));
        let err = cfg.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidKindSize {
                kind: ItemKind::Event,
                ..
            }
        ));
        assert!(err.to_string().starts_with("default size for event"));
    }

    #[test]
    fn size_table_set_and_get() {
        let mut table = SizeTable::default();
        table.set(ItemKind::Task, Size::new(200.0, 40.0));
        assert_eq!(table.get(ItemKind::Task), Size::new(200.0, 40.0));
        assert_eq!(table.get(ItemKind::Note), DEFAULT_ITEM_SIZE);
    }
}
