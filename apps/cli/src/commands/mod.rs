// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subcommand implementations.

pub mod export;
pub mod score;
pub mod variants;
pub mod walkthrough;

use std::path::Path;

use anyhow::{Context, Result};
use homeplan_core::Layout;
use homeplan_scene::LayoutStore;

/// Read a layout blob from disk and load it into a validated scene.
///
/// With `snap`, every room and furniture origin is moved onto the store grid.
pub fn load_scene(path: &Path, grid_size: f64, snap: bool) -> Result<LayoutStore> {
    let json = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let layout = Layout::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))?;

    let mut store = LayoutStore::with_grid_size(grid_size);
    store
        .load_layout(layout)
        .with_context(|| format!("invalid layout in {}", path.display()))?;
    if snap {
        snap_to_grid(&mut store);
    }
    Ok(store)
}

fn snap_to_grid(store: &mut LayoutStore) {
    let rooms: Vec<_> = store.state().rooms().iter().map(|r| (r.id.clone(), r.x, r.y)).collect();
    let furniture: Vec<_> = store
        .state()
        .furniture()
        .iter()
        .map(|f| (f.id.clone(), f.x, f.y))
        .collect();

    let rooms_snapped = rooms
        .iter()
        .filter(|(id, x, y)| store.move_room_snapped(id, *x, *y))
        .count();
    let furniture_snapped = furniture
        .iter()
        .filter(|(id, x, y)| store.move_furniture_snapped(id, *x, *y))
        .count();
    tracing::debug!(
        grid_size = store.grid_size(),
        rooms_snapped,
        furniture_snapped,
        "Snapped layout to grid"
    );
}

pub fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}


#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::*;

    #[test]
    fn test_load_scene_reads_layout() {
        let path = fixtures::write("load", &fixtures::layout().to_json().unwrap());
        let store = load_scene(&path, 40.0, false).unwrap();
        assert_eq!(store.state().rooms().len(), 2);
        assert_eq!(store.state().furniture().len(), 1);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_scene_rejects_dangling_furniture() {
        let mut layout = fixtures::layout();
        layout.rooms.retain(|room| room.id.as_str() != "living");
        let path = fixtures::write("dangling", &layout.to_json().unwrap());
        let err = load_scene(&path, 40.0, false).unwrap_err();
        assert!(err.to_string().contains("invalid layout"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_scene_snaps_to_configured_grid() {
        let mut layout = fixtures::layout();
        layout.rooms[0].x = 13.0;
        layout.rooms[0].y = 27.0;
        layout.furniture[0].x = 52.0;
        layout.furniture[0].y = 8.0;
        let path = fixtures::write("snap", &layout.to_json().unwrap());

        let unsnapped = load_scene(&path, 20.0, false).unwrap();
        assert_eq!((unsnapped.state().rooms()[0].x, unsnapped.state().rooms()[0].y), (13.0, 27.0));

        let store = load_scene(&path, 20.0, true).unwrap();
        let room = &store.state().rooms()[0];
        assert_eq!((room.x, room.y), (20.0, 20.0));
        let sofa = &store.state().furniture()[0];
        assert_eq!((sofa.x, sofa.y), (60.0, 0.0));
        // Already on the grid
        let kitchen = &store.state().rooms()[1];
        assert_eq!((kitchen.x, kitchen.y), (400.0, 0.0));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_scene_missing_file() {
        let err = load_scene(Path::new("/nonexistent/homeplan.json"), 40.0, false).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
