// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for scene store mutations.

use homeplan_core::{FurnitureId, RoomId};

/// Result type alias for scene operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the scene store boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Furniture was placed in, or moved to, a room that is not in the scene.
    #[error("room not found: {0}")]
    UnknownRoom(RoomId),

    /// A loaded layout contains furniture whose room does not exist.
    #[error("furniture {furniture} references missing room {room}")]
    DanglingFurniture { furniture: FurnitureId, room: RoomId },

    /// A loaded layout uses the same identifier twice.
    #[error("duplicate identifier in layout: {0}")]
    DuplicateId(String),
}
