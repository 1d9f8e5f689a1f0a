// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Keyframe playback driving the walkthrough camera
//!
//! ```text
//!            play / restart                 last keyframe done
//!   Idle ─────────────────────► Playing ──────────────────────► Completed
//!    ▲                          │    ▲                              │
//!    │                    pause │    │ play / resume                │
//!    │                          ▼    │                              │
//!    │                          Paused                              │
//!    └──────────────── stop (from any state) ◄──────────────────────┘
//! ```
//!
//! `play` while already playing does nothing; `restart` always regenerates the
//! path from the rooms it is given. Room edits during playback only take
//! effect on the next `play` from Idle/Completed or an explicit `restart`.
//!
//! Each [`Walkthrough::tick`] advances the clock by `delta * speed` and skips
//! every keyframe whose duration has been used up, so a long frame may cross
//! several short keyframes at once. The camera target is eased between the
//! previous and the active keyframe, then the camera position is damped toward
//! it rather than snapped.

use homeplan_core::Room;

use crate::camera::{lerp, Camera};
use crate::easing::ease_in_out_cubic;
use crate::error::{Error, Result};
use crate::keyframes::{generate_keyframes, total_duration, Keyframe};

/// Per-tick fraction of the remaining distance the camera covers
pub const DEFAULT_DAMPING: f64 = 0.1;

/// Speed multipliers offered by the playback controls
pub const SPEED_PRESETS: [f64; 4] = [0.5, 1.0, 1.5, 2.0];

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
    Completed,
}

/// Playback parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkthroughConfig {
    /// Playback speed multiplier
    pub speed: f64,
    /// Camera smoothing factor per tick, in (0, 1]
    pub damping: f64,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            damping: DEFAULT_DAMPING,
        }
    }
}

fn check_speed(speed: f64) -> Result<f64> {
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(Error::InvalidSpeed(speed))
    }
}

/// Walkthrough animator
pub struct Walkthrough {
    keyframes: Vec<Keyframe>,
    state: PlaybackState,
    /// Seconds into the active keyframe
    elapsed: f64,
    /// Index of the active keyframe
    index: usize,
    /// Summed durations of keyframes already passed
    passed: f64,
    speed: f64,
    damping: f64,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for Walkthrough {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walkthrough")
            .field("state", &self.state)
            .field("keyframes", &self.keyframes.len())
            .field("index", &self.index)
            .field("elapsed", &self.elapsed)
            .field("speed", &self.speed)
            .finish()
    }
}

impl Default for Walkthrough {
    fn default() -> Self {
        Self {
            keyframes: Vec::new(),
            state: PlaybackState::Idle,
            elapsed: 0.0,
            index: 0,
            passed: 0.0,
            speed: 1.0,
            damping: DEFAULT_DAMPING,
            on_complete: None,
        }
    }
}

impl Walkthrough {
    pub fn new(config: WalkthroughConfig) -> Result<Self> {
        let speed = check_speed(config.speed)?;
        if !(config.damping > 0.0 && config.damping <= 1.0) {
            return Err(Error::InvalidDamping(config.damping));
        }
        Ok(Self {
            speed,
            damping: config.damping,
            ..Self::default()
        })
    }

    /// Register the callback fired once each time playback completes
    pub fn on_complete<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Index of the keyframe currently being approached
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        self.speed = check_speed(speed)?;
        Ok(())
    }

    /// Fraction of the path covered, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        match self.state {
            PlaybackState::Idle => 0.0,
            PlaybackState::Completed => 1.0,
            PlaybackState::Playing | PlaybackState::Paused => {
                let total = total_duration(&self.keyframes);
                if total <= 0.0 {
                    return 0.0;
                }
                let current = self
                    .keyframes
                    .get(self.index)
                    .map_or(0.0, |k| self.elapsed.min(k.duration));
                ((self.passed + current) / total).clamp(0.0, 1.0)
            }
        }
    }

    /// Start playback, or resume it when paused. No-op while playing.
    ///
    /// Returns `true` if the state changed.
    pub fn play(&mut self, rooms: &[Room]) -> bool {
        match self.state {
            PlaybackState::Playing => false,
            PlaybackState::Paused => self.resume(),
            PlaybackState::Idle | PlaybackState::Completed => {
                self.restart(rooms);
                true
            }
        }
    }

    /// Regenerate the path from `rooms` and play it from the beginning
    pub fn restart(&mut self, rooms: &[Room]) {
        self.keyframes = generate_keyframes(rooms);
        self.elapsed = 0.0;
        self.index = 0;
        self.passed = 0.0;
        self.state = PlaybackState::Playing;
        tracing::info!(
            keyframes = self.keyframes.len(),
            speed = self.speed,
            "Walkthrough started"
        );
    }

    /// Freeze playback, keeping position in the path
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        self.state = PlaybackState::Paused;
        tracing::info!(index = self.index, "Walkthrough paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != PlaybackState::Paused {
            return false;
        }
        self.state = PlaybackState::Playing;
        tracing::info!(index = self.index, "Walkthrough resumed");
        true
    }

    /// Return to Idle from any state. Repeated calls are harmless.
    pub fn stop(&mut self) {
        if self.state != PlaybackState::Idle {
            tracing::info!(index = self.index, "Walkthrough stopped");
        }
        self.keyframes.clear();
        self.elapsed = 0.0;
        self.index = 0;
        self.passed = 0.0;
        self.state = PlaybackState::Idle;
    }

    /// Advance by one rendered frame of `delta` seconds and move `camera`.
    ///
    /// Only mutates the camera while playing. Returns the state after the tick.
    pub fn tick(&mut self, delta: f64, camera: &mut Camera) -> PlaybackState {
        if self.state != PlaybackState::Playing || self.keyframes.is_empty() {
            return self.state;
        }

        self.elapsed += delta.max(0.0) * self.speed;

        let last = self.keyframes.len() - 1;
        while self.index < last && self.elapsed > self.keyframes[self.index].duration {
            let duration = self.keyframes[self.index].duration;
            self.elapsed -= duration;
            self.passed += duration;
            self.index += 1;
        }

        if self.index >= last && self.elapsed > self.keyframes[last].duration {
            self.complete();
            return self.state;
        }

        let current = &self.keyframes[self.index];
        let previous = &self.keyframes[self.index.saturating_sub(1)];
        let progress = if current.duration > 0.0 {
            (self.elapsed / current.duration).min(1.0)
        } else {
            1.0
        };
        let eased = ease_in_out_cubic(progress);

        let position = lerp(&previous.position, &current.position, eased);
        let target = lerp(&previous.target, &current.target, eased);

        camera.approach(&position, self.damping);
        camera.look_at = target;

        self.state
    }

    fn complete(&mut self) {
        self.passed = total_duration(&self.keyframes);
        self.elapsed = 0.0;
        self.state = PlaybackState::Completed;
        tracing::info!(keyframes = self.keyframes.len(), "Walkthrough completed");
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
    }
}
