// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plays full walkthroughs at frame rate and checks completion timing.

use std::cell::Cell;
use std::rc::Rc;

use homeplan_core::generate_variants;
use homeplan_walkthrough::{total_duration, Camera, PlaybackState, Walkthrough, WalkthroughConfig, SPEED_PRESETS};

fn play_to_end(speed: f64, bedrooms: u32) -> (f64, f64, u32) {
    let rooms = generate_variants(bedrooms, 1800.0, "").unwrap().remove(0).rooms;
    let mut walkthrough = Walkthrough::new(WalkthroughConfig {
        speed,
        ..Default::default()
    })
    .unwrap();
    let fired = Rc::new(Cell::new(0u32));
    let f = Rc::clone(&fired);
    walkthrough.on_complete(move || f.set(f.get() + 1));

    let mut camera = Camera::default();
    walkthrough.play(&rooms);
    assert_eq!(walkthrough.keyframes().len(), 2 + 3 * rooms.len());
    let total = total_duration(walkthrough.keyframes());

    let dt = 1.0 / 60.0;
    let mut wall = 0.0;
    let mut completed_at = None;
    for _ in 0..100_000 {
        wall += dt;
        if walkthrough.tick(dt, &mut camera) == PlaybackState::Completed && completed_at.is_none() {
            completed_at = Some(wall);
        }
    }
    (total, completed_at.expect("walkthrough never completed"), fired.get())
}

#[test]
fn completes_once_after_full_path_at_every_speed() {
    for speed in SPEED_PRESETS {
        let (total, completed_at, fired) = play_to_end(speed, 2);
        assert_eq!(fired, 1, "speed {speed}");
        assert!(completed_at * speed >= total, "speed {speed}: {completed_at} * {speed} < {total}");
        // No later than one frame past the end
        assert!(completed_at * speed <= total + 2.0 / 60.0 * speed, "speed {speed}");
    }
}

#[test]
fn camera_ends_near_the_final_approach() {
    let rooms = generate_variants(1, 1200.0, "").unwrap().remove(0).rooms;
    let mut walkthrough = Walkthrough::default();
    let mut camera = Camera::default();
    walkthrough.play(&rooms);

    let mut last = camera;
    while walkthrough.tick(1.0 / 60.0, &mut camera) == PlaybackState::Playing {
        last = camera;
    }

    // The last keyframe pulls back to (0, 1.7, 5) looking at the origin
    assert!((last.position.x).abs() < 0.5);
    assert!((last.position.z - 5.0).abs() < 0.5);
    assert!((last.look_at.y - 1.5).abs() < 1e-9);
}

#[test]
fn replay_after_completion_fires_again() {
    let mut walkthrough = Walkthrough::default();
    let fired = Rc::new(Cell::new(0u32));
    let f = Rc::clone(&fired);
    walkthrough.on_complete(move || f.set(f.get() + 1));
    let mut camera = Camera::default();

    for _ in 0..2 {
        assert!(walkthrough.play(&[]));
        while walkthrough.tick(0.25, &mut camera) == PlaybackState::Playing {}
    }
    assert_eq!(fired.get(), 2);
}
