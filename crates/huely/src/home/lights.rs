// Light and grouped-light operations.

use std::collections::HashMap;

use super::Home;
use crate::error::Error;
use crate::models::{GroupedLightGet, GroupedLightPut, LightGet, LightPut};

impl Home {
    /// All lights known to the bridge, keyed by resource id.
    pub async fn lights(&self) -> Result<HashMap<String, LightGet>, Error> {
        let data: Vec<LightGet> = self.get_list("light").await?;
        Ok(data.into_iter().map(|l| (l.id.clone(), l)).collect())
    }

    /// A single light by id.
    pub async fn light(&self, id: &str) -> Result<LightGet, Error> {
        self.get_single(&format!("light/{id}")).await
    }

    /// Update a light. Toggling is `update_light(id, LightPut { on: Some(light.toggle()), .. })`.
    pub async fn update_light(&self, id: &str, body: &LightPut) -> Result<(), Error> {
        self.put_ack(&format!("light/{id}"), body).await
    }

    /// All grouped lights (per-room/zone aggregates), keyed by resource id.
    pub async fn grouped_lights(&self) -> Result<HashMap<String, GroupedLightGet>, Error> {
        let data: Vec<GroupedLightGet> = self.get_list("grouped_light").await?;
        Ok(data.into_iter().map(|g| (g.id.clone(), g)).collect())
    }

    /// A single grouped light by id.
    pub async fn grouped_light(&self, id: &str) -> Result<GroupedLightGet, Error> {
        self.get_single(&format!("grouped_light/{id}")).await
    }

    /// Update a grouped light, switching or dimming a whole room at once.
    pub async fn update_grouped_light(
        &self,
        id: &str,
        body: &GroupedLightPut,
    ) -> Result<(), Error> {
        self.put_ack(&format!("grouped_light/{id}"), body).await
    }
}
