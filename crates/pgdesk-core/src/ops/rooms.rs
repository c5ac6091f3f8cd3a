//! Room container operations.

use crate::console::Console;
use crate::convert;
use crate::error::CoreError;
use crate::fallback;
use crate::model::{Room, RoomDraft};

use super::is_blank;

impl Console {
    /// Fetch the room list, optionally server-side filtered by `q`.
    pub async fn fetch_rooms(&self, q: Option<&str>) -> Result<(), CoreError> {
        let res = &self.inner.store.rooms;
        let token = res.begin_fetch(q.unwrap_or(""));

        match self.inner.rooms.list(q).await {
            Ok(wire) => {
                let rooms: Vec<Room> = wire.into_iter().map(convert::room_from_wire).collect();
                res.finish_fetch(token, Ok(rooms), Some(&fallback::rooms()));
                Ok(())
            }
            Err(e) => {
                res.finish_fetch(token, Err(e.server_message()), Some(&fallback::rooms()));
                Err(e.into())
            }
        }
    }

    /// Fetch one room by id; sets `current` and upserts into the cache.
    pub async fn fetch_room(&self, id: i64) -> Result<Room, CoreError> {
        let res = &self.inner.store.rooms;
        res.begin_fetch_one();

        match self.inner.rooms.get(id).await {
            Ok(wire) => {
                let room = convert::room_from_wire(wire);
                res.finish_fetch_one(Ok(room.clone()));
                Ok(room)
            }
            Err(e) => {
                res.finish_fetch_one(Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Create a room. Returns `Ok(None)` when validation aborts the
    /// operation before any request is issued.
    pub async fn create_room(&self, draft: RoomDraft) -> Result<Option<Room>, CoreError> {
        if is_blank(&draft.name) {
            return Ok(None);
        }

        let res = &self.inner.store.rooms;
        let _gate = res.gate().lock().await;
        res.begin_save();

        let request = convert::room_request(&draft);
        match self.inner.rooms.create(&request).await {
            Ok(echo) => {
                let room = echo
                    .map(convert::room_from_wire)
                    .unwrap_or_else(|| convert::room_from_draft(draft));
                res.finish_create(Ok(room.clone()));
                Ok(Some(room))
            }
            Err(e) => {
                res.finish_create(Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Update a room by id, replacing it in place in the cache.
    pub async fn update_room(&self, id: i64, draft: RoomDraft) -> Result<Option<Room>, CoreError> {
        if is_blank(&draft.name) {
            return Ok(None);
        }

        let res = &self.inner.store.rooms;
        let _gate = res.gate().lock().await;
        res.begin_save();

        let request = convert::room_request(&draft);
        match self.inner.rooms.update(id, &request).await {
            Ok(echo) => {
                let room = echo
                    .map(convert::room_from_wire)
                    .unwrap_or_else(|| convert::room_from_update(id, draft));
                res.finish_update(Ok(room.clone()));
                Ok(Some(room))
            }
            Err(e) => {
                res.finish_update(Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Server-side occupancy increment. The cached entity is replaced
    /// in place; the operation is ignored if the room is not cached.
    pub async fn allocate_room(&self, id: i64) -> Result<Room, CoreError> {
        let res = &self.inner.store.rooms;
        let _gate = res.gate().lock().await;
        res.begin_save();

        match self.inner.rooms.allocate(id).await {
            Ok(wire) => {
                let room = convert::room_from_wire(wire);
                res.finish_replace(Ok(room.clone()));
                Ok(room)
            }
            Err(e) => {
                res.finish_replace(Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Delete a room; the cache entry goes away only on a successful
    /// acknowledgment.
    pub async fn delete_room(&self, id: i64) -> Result<(), CoreError> {
        let res = &self.inner.store.rooms;
        let _gate = res.gate().lock().await;
        res.begin_save();

        match self.inner.rooms.delete(id).await {
            Ok(()) => {
                res.finish_delete(&id, Ok(()));
                Ok(())
            }
            Err(e) => {
                res.finish_delete(&id, Err(e.server_message()));
                Err(e.into())
            }
        }
    }
}
