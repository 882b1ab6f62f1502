// Copyright 2026 the Orbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `flatvec`: flat vector with linear scans (small, simple).
//! - `grid`: uniform grid with an explicit origin, great locality for many similar-sized boxes.
//!
//! Both backends report the same slots in the same (ascending) order for any query.

pub mod flatvec;
pub mod grid;

pub use flatvec::FlatVec;
pub use grid::Grid;
