// Zone operations. Zones group services across rooms.

use std::collections::HashMap;

use super::Home;
use crate::error::Error;
use crate::models::{ResourceIdentifier, ZoneGet, ZonePut};

impl Home {
    /// All zones, keyed by resource id.
    pub async fn zones(&self) -> Result<HashMap<String, ZoneGet>, Error> {
        let data: Vec<ZoneGet> = self.get_list("zone").await?;
        Ok(data.into_iter().map(|z| (z.id.clone(), z)).collect())
    }

    /// A single zone by id.
    pub async fn zone(&self, id: &str) -> Result<ZoneGet, Error> {
        self.get_single(&format!("zone/{id}")).await
    }

    /// Create a zone, returning its identifier.
    pub async fn create_zone(&self, body: &ZonePut) -> Result<ResourceIdentifier, Error> {
        self.post_single("zone", body).await
    }

    /// Update a zone's metadata or children.
    pub async fn update_zone(&self, id: &str, body: &ZonePut) -> Result<(), Error> {
        self.put_ack(&format!("zone/{id}"), body).await
    }

    /// Delete a zone.
    pub async fn delete_zone(&self, id: &str) -> Result<(), Error> {
        self.delete_ack(&format!("zone/{id}")).await
    }
}
