// Room operations.

use std::collections::HashMap;

use super::Home;
use crate::error::Error;
use crate::models::{ResourceIdentifier, RoomGet, RoomPut};

impl Home {
    /// All rooms, keyed by resource id.
    pub async fn rooms(&self) -> Result<HashMap<String, RoomGet>, Error> {
        let data: Vec<RoomGet> = self.get_list("room").await?;
        Ok(data.into_iter().map(|r| (r.id.clone(), r)).collect())
    }

    /// A single room by id.
    pub async fn room(&self, id: &str) -> Result<RoomGet, Error> {
        self.get_single(&format!("room/{id}")).await
    }

    /// Create a room, returning its identifier.
    pub async fn create_room(&self, body: &RoomPut) -> Result<ResourceIdentifier, Error> {
        self.post_single("room", body).await
    }

    /// Update a room's metadata or children.
    pub async fn update_room(&self, id: &str, body: &RoomPut) -> Result<(), Error> {
        self.put_ack(&format!("room/{id}"), body).await
    }

    /// Delete a room. Its devices become unassigned, not removed.
    pub async fn delete_room(&self, id: &str) -> Result<(), Error> {
        self.delete_ack(&format!("room/{id}")).await
    }
}
