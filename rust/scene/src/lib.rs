// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Homeplan Scene
//!
//! The editable floor-plan scene shared by the 2D canvas, the sidebar and the
//! 3D view.
//!
//! [`LayoutStore`] owns rooms, furniture, selection and viewport state. Views
//! hold a reference to the store (never a copy of its data) and register
//! observers with [`LayoutStore::subscribe`]; every applied mutation is
//! broadcast synchronously as a [`SceneEvent`].

pub mod error;
pub mod observer;
pub mod patch;
pub mod store;
pub mod validation;
pub mod viewport;

pub use error::{Error, Result};
pub use observer::{SceneEvent, SubscriptionId};
pub use patch::{FurniturePatch, RoomPatch};
pub use store::{LayoutStore, SceneState};
pub use validation::{dangling_references, validate_layout, DanglingReference};
pub use viewport::Viewport;
