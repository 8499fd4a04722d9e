// Smart-scene operations (time-slotted scene schedules).

use std::collections::HashMap;

use super::Home;
use crate::error::Error;
use crate::models::{ResourceIdentifier, SmartSceneGet, SmartScenePut};

impl Home {
    /// All smart scenes, keyed by resource id.
    pub async fn smart_scenes(&self) -> Result<HashMap<String, SmartSceneGet>, Error> {
        let data: Vec<SmartSceneGet> = self.get_list("smart_scene").await?;
        Ok(data.into_iter().map(|s| (s.id.clone(), s)).collect())
    }

    /// A single smart scene by id.
    pub async fn smart_scene(&self, id: &str) -> Result<SmartSceneGet, Error> {
        self.get_single(&format!("smart_scene/{id}")).await
    }

    /// Create a smart scene, returning its identifier.
    pub async fn create_smart_scene(
        &self,
        body: &SmartScenePut,
    ) -> Result<ResourceIdentifier, Error> {
        self.post_single("smart_scene", body).await
    }

    /// Update a smart scene (including activate/deactivate recalls).
    pub async fn update_smart_scene(&self, id: &str, body: &SmartScenePut) -> Result<(), Error> {
        self.put_ack(&format!("smart_scene/{id}"), body).await
    }

    /// Delete a smart scene.
    pub async fn delete_smart_scene(&self, id: &str) -> Result<(), Error> {
        self.delete_ack(&format!("smart_scene/{id}")).await
    }
}
