// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The editable scene: rooms, furniture, selection and viewport
//!
//! [`LayoutStore`] is the single writer. Every mutation is applied in full
//! before observers are notified, so no observer sees a half-applied change.
//! The store is single-threaded (`!Send`); wrap it in a mutex or an actor to
//! share it across threads.
//!
//! Referential integrity between furniture and rooms is enforced here:
//! furniture can only be placed in existing rooms, deleting a room deletes
//! its furniture, and loaded layouts are validated first.

use homeplan_core::geometry::{overlapping_pairs, snap_to_grid};
use homeplan_core::{Furniture, FurnitureId, Layout, NewFurniture, NewRoom, Rect, Room, RoomId, GRID_SIZE};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::observer::{SceneEvent, Subscribers, SubscriptionId};
use crate::patch::{FurniturePatch, RoomPatch};
use crate::validation::validate_layout;
use crate::viewport::Viewport;

/// Read-only view of the scene handed to observers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneState {
    rooms: Vec<Room>,
    furniture: Vec<Furniture>,
    selected_room: Option<RoomId>,
    selected_furniture: Option<FurnitureId>,
    viewport: Viewport,
}

impl SceneState {
    /// Rooms in insertion order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn furniture(&self) -> &[Furniture] {
        &self.furniture
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    pub fn furniture_item(&self, id: &FurnitureId) -> Option<&Furniture> {
        self.furniture.iter().find(|f| &f.id == id)
    }

    pub fn furniture_in_room<'a>(&'a self, room: &'a RoomId) -> impl Iterator<Item = &'a Furniture> + 'a {
        self.furniture.iter().filter(move |f| &f.room_id == room)
    }

    /// Selected room id, which may name a room that does not exist
    pub fn selected_room(&self) -> Option<&RoomId> {
        self.selected_room.as_ref()
    }

    pub fn selected_furniture(&self) -> Option<&FurnitureId> {
        self.selected_furniture.as_ref()
    }

    /// Whether `id` should be drawn highlighted
    pub fn is_room_highlighted(&self, id: &RoomId) -> bool {
        self.selected_room.as_ref() == Some(id) && self.room(id).is_some()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Snapshot in the persisted blob shape
    pub fn to_layout(&self) -> Layout {
        Layout::new(self.rooms.clone(), self.furniture.clone())
    }

    /// Id pairs of rooms whose rectangles overlap
    pub fn overlapping_rooms(&self) -> Vec<(RoomId, RoomId)> {
        let rects: Vec<Rect> = self.rooms.iter().map(Room::rect).collect();
        overlapping_pairs(&rects)
            .into_iter()
            .map(|(i, j)| (self.rooms[i].id.clone(), self.rooms[j].id.clone()))
            .collect()
    }

    fn room_index(&self, id: &RoomId) -> Option<usize> {
        self.rooms.iter().position(|r| &r.id == id)
    }

    fn furniture_index(&self, id: &FurnitureId) -> Option<usize> {
        self.furniture.iter().position(|f| &f.id == id)
    }
}

/// Observable room/furniture store
///
/// # Example
///
/// ```
/// use homeplan_core::{NewRoom, Rect, RoomType};
/// use homeplan_scene::LayoutStore;
///
/// let mut store = LayoutStore::new();
/// let id = store.add_room(NewRoom::new("Kitchen", RoomType::Kitchen, Rect::new(0.0, 0.0, 120.0, 80.0)));
///
/// assert_eq!(store.state().rooms().len(), 1);
/// assert!(store.delete_room(&id).is_some());
/// ```
#[derive(Debug)]
pub struct LayoutStore {
    state: SceneState,
    subscribers: Subscribers,
    grid_size: f64,
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::with_grid_size(GRID_SIZE)
    }

    /// Store whose snapped moves use `grid_size` cells
    pub fn with_grid_size(grid_size: f64) -> Self {
        Self {
            state: SceneState::default(),
            subscribers: Subscribers::default(),
            grid_size,
        }
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Register an observer called after every applied mutation
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SceneState, &SceneEvent) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, event: SceneEvent) {
        self.subscribers.notify(&self.state, &event);
    }

    fn next_room_id(&self) -> RoomId {
        loop {
            let id = RoomId::new(Uuid::new_v4().to_string());
            if self.state.room(&id).is_none() {
                return id;
            }
        }
    }

    fn next_furniture_id(&self) -> FurnitureId {
        loop {
            let id = FurnitureId::new(Uuid::new_v4().to_string());
            if self.state.furniture_item(&id).is_none() {
                return id;
            }
        }
    }

    // ---------------------------------------------------------------------
    // Rooms
    // ---------------------------------------------------------------------

    pub fn add_room(&mut self, room: NewRoom) -> RoomId {
        let id = self.next_room_id();
        tracing::debug!(room = %id, name = %room.name, room_type = %room.room_type, "Adding room");
        self.state.rooms.push(room.into_room(id.clone()));
        self.notify(SceneEvent::RoomAdded(id.clone()));
        id
    }

    /// Apply `patch` to the room. Unknown ids are a no-op returning `false`.
    pub fn update_room(&mut self, id: &RoomId, patch: RoomPatch) -> bool {
        let Some(index) = self.state.room_index(id) else {
            return false;
        };
        patch.apply(&mut self.state.rooms[index]);
        self.notify(SceneEvent::RoomUpdated(id.clone()));
        true
    }

    /// Move a room, snapping its origin to the store grid
    pub fn move_room_snapped(&mut self, id: &RoomId, x: f64, y: f64) -> bool {
        let x = snap_to_grid(x, self.grid_size);
        let y = snap_to_grid(y, self.grid_size);
        self.update_room(id, RoomPatch::new().position(x, y))
    }

    /// Remove a room and every furniture item in it.
    ///
    /// Clears the room selection if it pointed at this room, and the furniture
    /// selection if it pointed at a removed item.
    pub fn delete_room(&mut self, id: &RoomId) -> Option<Room> {
        let index = self.state.room_index(id)?;
        let room = self.state.rooms.remove(index);

        let mut removed = Vec::new();
        self.state.furniture.retain(|f| {
            if &f.room_id == id {
                removed.push(f.id.clone());
                false
            } else {
                true
            }
        });

        if self.state.selected_room.as_ref() == Some(id) {
            self.state.selected_room = None;
        }
        if self
            .state
            .selected_furniture
            .as_ref()
            .is_some_and(|selected| removed.contains(selected))
        {
            self.state.selected_furniture = None;
        }

        tracing::debug!(room = %id, cascaded = removed.len(), "Deleted room");
        self.notify(SceneEvent::RoomDeleted {
            room: id.clone(),
            furniture: removed,
        });
        Some(room)
    }

    /// Select a room by id, or clear with `None`. The id need not exist.
    pub fn select_room(&mut self, id: Option<RoomId>) {
        if self.state.selected_room == id {
            return;
        }
        self.state.selected_room = id;
        self.notify(SceneEvent::SelectionChanged);
    }

    // ---------------------------------------------------------------------
    // Furniture
    // ---------------------------------------------------------------------

    /// Place furniture in an existing room
    pub fn add_furniture(&mut self, item: NewFurniture) -> Result<FurnitureId> {
        if self.state.room(&item.room_id).is_none() {
            tracing::warn!(room = %item.room_id, name = %item.name, "Rejected furniture for missing room");
            return Err(Error::UnknownRoom(item.room_id));
        }
        let id = self.next_furniture_id();
        tracing::debug!(furniture = %id, room = %item.room_id, "Adding furniture");
        self.state.furniture.push(item.into_furniture(id.clone()));
        self.notify(SceneEvent::FurnitureAdded(id.clone()));
        Ok(id)
    }

    /// Apply `patch` to a furniture item.
    ///
    /// Unknown ids are a no-op returning `Ok(false)`. Moving the item to a
    /// room that does not exist fails without changing anything.
    pub fn update_furniture(&mut self, id: &FurnitureId, patch: FurniturePatch) -> Result<bool> {
        let Some(index) = self.state.furniture_index(id) else {
            return Ok(false);
        };
        if let Some(room) = &patch.room_id {
            if self.state.room(room).is_none() {
                return Err(Error::UnknownRoom(room.clone()));
            }
        }
        patch.apply(&mut self.state.furniture[index]);
        self.notify(SceneEvent::FurnitureUpdated(id.clone()));
        Ok(true)
    }

    /// Move a furniture item, snapping its origin to the store grid
    pub fn move_furniture_snapped(&mut self, id: &FurnitureId, x: f64, y: f64) -> bool {
        let x = snap_to_grid(x, self.grid_size);
        let y = snap_to_grid(y, self.grid_size);
        // A position-only patch cannot reference a missing room
        self.update_furniture(id, FurniturePatch::new().position(x, y))
            .unwrap_or(false)
    }

    pub fn delete_furniture(&mut self, id: &FurnitureId) -> Option<Furniture> {
        let index = self.state.furniture_index(id)?;
        let item = self.state.furniture.remove(index);
        if self.state.selected_furniture.as_ref() == Some(id) {
            self.state.selected_furniture = None;
        }
        self.notify(SceneEvent::FurnitureDeleted(id.clone()));
        Some(item)
    }

    /// Select a furniture item by id, or clear with `None`. The id need not exist.
    pub fn select_furniture(&mut self, id: Option<FurnitureId>) {
        if self.state.selected_furniture == id {
            return;
        }
        self.state.selected_furniture = id;
        self.notify(SceneEvent::SelectionChanged);
    }

    // ---------------------------------------------------------------------
    // Viewport
    // ---------------------------------------------------------------------

    pub fn set_zoom(&mut self, zoom: f64) {
        if self.state.viewport.set_zoom(zoom) {
            self.notify(SceneEvent::ViewportChanged);
        }
    }

    pub fn zoom_by_wheel(&mut self, delta_y: f64) {
        if self.state.viewport.zoom_by_wheel(delta_y) {
            self.notify(SceneEvent::ViewportChanged);
        }
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        if self.state.viewport.set_pan(x, y) {
            self.notify(SceneEvent::ViewportChanged);
        }
    }

    // ---------------------------------------------------------------------
    // Whole-scene operations
    // ---------------------------------------------------------------------

    /// Clear rooms, furniture, selection and viewport
    pub fn reset(&mut self) {
        self.state = SceneState::default();
        tracing::debug!("Scene reset");
        self.notify(SceneEvent::Reset);
    }

    /// Replace the rooms and furniture with a persisted or generated layout.
    ///
    /// The layout is validated first; on error the scene is unchanged.
    /// Selection is cleared and the viewport is kept.
    pub fn load_layout(&mut self, layout: Layout) -> Result<()> {
        if let Err(err) = validate_layout(&layout.rooms, &layout.furniture) {
            tracing::warn!(error = %err, "Rejected layout");
            return Err(err);
        }
        tracing::debug!(
            rooms = layout.rooms.len(),
            furniture = layout.furniture.len(),
            "Loading layout"
        );
        self.state.rooms = layout.rooms;
        self.state.furniture = layout.furniture;
        self.state.selected_room = None;
        self.state.selected_furniture = None;
        self.notify(SceneEvent::LayoutLoaded);
        Ok(())
    }

    pub fn to_layout(&self) -> Layout {
        self.state.to_layout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeplan_core::RoomType;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bedroom(x: f64) -> NewRoom {
        NewRoom::new("Bedroom", RoomType::Bedroom, Rect::new(x, 0.0, 120.0, 120.0))
    }

    fn bed(room: &RoomId) -> NewFurniture {
        NewFurniture::new("Bed", "bed", Rect::new(10.0, 10.0, 60.0, 80.0), room.clone())
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = LayoutStore::new();
        let a = store.add_room(bedroom(0.0));
        let b = store.add_room(bedroom(200.0));
        assert_ne!(a, b);
        assert_eq!(store.state().rooms().len(), 2);
    }

    #[test]
    fn test_delete_room_cascades_furniture() {
        let mut store = LayoutStore::new();
        let a = store.add_room(bedroom(0.0));
        let b = store.add_room(bedroom(200.0));
        store.add_furniture(bed(&a)).unwrap();
        store.add_furniture(bed(&a)).unwrap();
        let keep = store.add_furniture(bed(&b)).unwrap();

        store.delete_room(&a).unwrap();

        assert_eq!(store.state().rooms().len(), 1);
        assert_eq!(store.state().furniture().len(), 1);
        assert_eq!(store.state().furniture()[0].id, keep);
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut store = LayoutStore::new();
        let a = store.add_room(bedroom(0.0));
        let f = store.add_furniture(bed(&a)).unwrap();
        store.select_room(Some(a.clone()));
        store.select_furniture(Some(f));

        store.delete_room(&a);

        assert!(store.state().selected_room().is_none());
        assert!(store.state().selected_furniture().is_none());
    }

    #[test]
    fn test_delete_other_room_keeps_selection() {
        let mut store = LayoutStore::new();
        let a = store.add_room(bedroom(0.0));
        let b = store.add_room(bedroom(200.0));
        store.select_room(Some(a.clone()));
        store.delete_room(&b);
        assert_eq!(store.state().selected_room(), Some(&a));
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let mut store = LayoutStore::new();
        store.add_room(bedroom(0.0));
        let before = store.state().clone();

        let missing = RoomId::new("missing");
        assert!(!store.update_room(&missing, RoomPatch::new().name("x")));
        assert!(store.delete_room(&missing).is_none());
        assert!(!store
            .update_furniture(&FurnitureId::new("nope"), FurniturePatch::new().rotation(1.0))
            .unwrap());
        assert!(store.delete_furniture(&FurnitureId::new("nope")).is_none());

        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_selecting_missing_room_is_allowed_but_not_highlighted() {
        let mut store = LayoutStore::new();
        let ghost = RoomId::new("ghost");
        store.select_room(Some(ghost.clone()));
        assert_eq!(store.state().selected_room(), Some(&ghost));
        assert!(!store.state().is_room_highlighted(&ghost));
    }

    #[test]
    fn test_furniture_requires_existing_room() {
        let mut store = LayoutStore::new();
        let err = store.add_furniture(bed(&RoomId::new("nowhere"))).unwrap_err();
        assert!(matches!(err, Error::UnknownRoom(_)));

        let a = store.add_room(bedroom(0.0));
        let f = store.add_furniture(bed(&a)).unwrap();
        let err = store
            .update_furniture(&f, FurniturePatch::new().room("nowhere"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownRoom(_)));
        assert_eq!(store.state().furniture_item(&f).unwrap().room_id, a);
    }

    #[test]
    fn test_snapped_moves() {
        let mut store = LayoutStore::new();
        let a = store.add_room(bedroom(0.0));
        assert!(store.move_room_snapped(&a, 53.0, 18.0));
        let room = store.state().room(&a).unwrap();
        assert_eq!((room.x, room.y), (40.0, 0.0));

        let f = store.add_furniture(bed(&a)).unwrap();
        assert!(store.move_furniture_snapped(&f, 79.0, 101.0));
        let item = store.state().furniture_item(&f).unwrap();
        assert_eq!((item.x, item.y), (80.0, 120.0));
    }

    #[test]
    fn test_observers_see_complete_mutations() {
        let mut store = LayoutStore::new();
        let a = store.add_room(bedroom(0.0));
        store.add_furniture(bed(&a)).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state, event| {
            sink.borrow_mut()
                .push((event.clone(), state.rooms().len(), state.furniture().len()));
        });

        store.delete_room(&a);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        let (event, rooms, furniture) = &seen[0];
        assert!(matches!(event, SceneEvent::RoomDeleted { furniture, .. } if furniture.len() == 1));
        assert_eq!((*rooms, *furniture), (0, 0));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = LayoutStore::new();
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        let id = store.subscribe(move |_, _| *c.borrow_mut() += 1);

        store.add_room(bedroom(0.0));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_room(bedroom(100.0));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_no_notification_for_no_ops() {
        let mut store = LayoutStore::new();
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        store.subscribe(move |_, _| *c.borrow_mut() += 1);

        store.update_room(&RoomId::new("missing"), RoomPatch::new().name("x"));
        store.select_room(None);
        store.set_pan(0.0, 0.0);
        store.set_zoom(1.0);

        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_reset() {
        let mut store = LayoutStore::new();
        let a = store.add_room(bedroom(0.0));
        store.add_furniture(bed(&a)).unwrap();
        store.select_room(Some(a));
        store.set_zoom(2.0);
        store.set_pan(5.0, 5.0);

        store.reset();

        assert_eq!(store.state(), &SceneState::default());
        assert_eq!(store.state().viewport().zoom, 1.0);
    }

    #[test]
    fn test_load_layout_validates() {
        let mut store = LayoutStore::new();
        let a = store.add_room(bedroom(0.0));
        let mut layout = store.to_layout();
        layout.furniture.push(
            bed(&RoomId::new("gone")).into_furniture(FurnitureId::new("f")),
        );

        let mut other = LayoutStore::new();
        assert!(matches!(
            other.load_layout(layout.clone()),
            Err(Error::DanglingFurniture { .. })
        ));
        assert!(other.state().rooms().is_empty());

        layout.furniture.clear();
        other.load_layout(layout).unwrap();
        assert_eq!(other.state().rooms()[0].id, a);
    }

    #[test]
    fn test_overlapping_rooms() {
        let mut store = LayoutStore::new();
        let a = store.add_room(bedroom(0.0));
        let b = store.add_room(bedroom(100.0));
        store.add_room(bedroom(1000.0));
        assert_eq!(store.state().overlapping_rooms(), vec![(a, b)]);
    }
}
