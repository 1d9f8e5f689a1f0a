// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Homeplan Walkthrough
//!
//! Camera walkthroughs and room boxes for the 3D view of a floor plan.
//!
//! The room list is turned into an ordered keyframe path
//! ([`generate_keyframes`]) and a [`Walkthrough`] advances a [`Camera`] along
//! it once per rendered frame.
//!
//! ```rust
//! use homeplan_walkthrough::{Camera, PlaybackState, Walkthrough};
//!
//! let mut walkthrough = Walkthrough::default();
//! let mut camera = Camera::default();
//! walkthrough.play(&[]);
//! while walkthrough.tick(1.0 / 60.0, &mut camera) == PlaybackState::Playing {}
//! assert_eq!(walkthrough.state(), PlaybackState::Completed);
//! ```

pub mod animator;
pub mod boxes;
pub mod camera;
pub mod easing;
pub mod error;
pub mod keyframes;

pub use animator::{PlaybackState, Walkthrough, WalkthroughConfig, DEFAULT_DAMPING, SPEED_PRESETS};
pub use boxes::{room_boxes, RoomBox};
pub use camera::Camera;
pub use error::{Error, Result};
pub use keyframes::{generate_keyframes, total_duration, Keyframe};
