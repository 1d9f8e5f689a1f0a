// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Homeplan Core
//!
//! Plan model and layout heuristics for home floor plans.
//!
//! ## Overview
//!
//! - [`model`]: rooms, furniture and the persisted [`Layout`] blob
//! - [`geometry`]: rectangles, grid snapping and pixel-to-world conversion
//! - [`score`]: five heuristic quality scores plus an overall average
//! - [`variants`]: candidate room arrangements for a bedroom count and area
//! - [`export`]: JSON export documents and plain-text reports
//!
//! ## Quick Start
//!
//! ```rust
//! use homeplan_core::{generate_variants, score};
//!
//! let variants = generate_variants(2, 1200.0, "modern")?;
//! let result = score(&variants[0].rooms, &[], 1200.0)?;
//! assert!(result.overall <= 100);
//! # Ok::<(), homeplan_core::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod geometry;
pub mod model;
pub mod score;
pub mod variants;

pub use error::{Error, Result};
pub use export::{ExportDocument, RoomSummary};
pub use geometry::{snap, snap_point, snap_to_grid, to_world, Rect, GRID_SIZE, PIXELS_PER_WORLD_UNIT};
pub use model::{Furniture, FurnitureId, Layout, NewFurniture, NewRoom, Room, RoomId, RoomType};
pub use score::{score, score_breakdown, score_layout, Score, ScoreBreakdown};
pub use variants::{generate_variants, Variant, VARIANT_COUNT};
