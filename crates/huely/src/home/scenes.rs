// Scene operations.

use std::collections::HashMap;

use super::Home;
use crate::error::Error;
use crate::models::{ResourceIdentifier, SceneGet, ScenePut};

impl Home {
    /// All scenes, keyed by resource id.
    pub async fn scenes(&self) -> Result<HashMap<String, SceneGet>, Error> {
        let data: Vec<SceneGet> = self.get_list("scene").await?;
        Ok(data.into_iter().map(|s| (s.id.clone(), s)).collect())
    }

    /// A single scene by id.
    pub async fn scene(&self, id: &str) -> Result<SceneGet, Error> {
        self.get_single(&format!("scene/{id}")).await
    }

    /// Create a scene, returning its identifier.
    pub async fn create_scene(&self, body: &ScenePut) -> Result<ResourceIdentifier, Error> {
        self.post_single("scene", body).await
    }

    /// Update a scene.
    pub async fn update_scene(&self, id: &str, body: &ScenePut) -> Result<(), Error> {
        self.put_ack(&format!("scene/{id}"), body).await
    }

    /// Delete a scene.
    pub async fn delete_scene(&self, id: &str) -> Result<(), Error> {
        self.delete_ack(&format!("scene/{id}")).await
    }

    /// Recall a scene: shorthand for an update with `recall.action = "active"`.
    pub async fn activate_scene(&self, id: &str) -> Result<(), Error> {
        self.update_scene(id, &ScenePut::recall_active()).await
    }
}
