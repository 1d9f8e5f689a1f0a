// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Change notifications for scene observers
//!
//! Observers are called synchronously, in subscription order, after a
//! mutation has been fully applied. They receive a shared borrow of the
//! scene, so they can read but never mutate it from inside a callback.

use homeplan_core::{FurnitureId, RoomId};

use crate::store::SceneState;

/// What changed in the scene
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    RoomAdded(RoomId),
    RoomUpdated(RoomId),
    /// A room and every furniture item that referenced it
    RoomDeleted {
        room: RoomId,
        furniture: Vec<FurnitureId>,
    },
    FurnitureAdded(FurnitureId),
    FurnitureUpdated(FurnitureId),
    FurnitureDeleted(FurnitureId),
    SelectionChanged,
    ViewportChanged,
    LayoutLoaded,
    Reset,
}

/// Handle returned by [`crate::LayoutStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&SceneState, &SceneEvent)>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, state: &SceneState, event: &SceneEvent) {
        for (_, callback) in self.entries.iter_mut() {
            callback(state, event);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
