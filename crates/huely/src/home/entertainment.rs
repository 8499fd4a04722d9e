// Entertainment configuration operations (streaming areas).

use std::collections::HashMap;

use super::Home;
use crate::error::Error;
use crate::models::{
    EntertainmentAction, EntertainmentConfigurationGet, EntertainmentConfigurationPut,
};

impl Home {
    /// All entertainment configurations, keyed by resource id.
    pub async fn entertainment_configurations(
        &self,
    ) -> Result<HashMap<String, EntertainmentConfigurationGet>, Error> {
        let data: Vec<EntertainmentConfigurationGet> =
            self.get_list("entertainment_configuration").await?;
        Ok(data.into_iter().map(|e| (e.id.clone(), e)).collect())
    }

    /// A single entertainment configuration by id.
    pub async fn entertainment_configuration(
        &self,
        id: &str,
    ) -> Result<EntertainmentConfigurationGet, Error> {
        self.get_single(&format!("entertainment_configuration/{id}"))
            .await
    }

    /// Update an entertainment configuration.
    pub async fn update_entertainment_configuration(
        &self,
        id: &str,
        body: &EntertainmentConfigurationPut,
    ) -> Result<(), Error> {
        self.put_ack(&format!("entertainment_configuration/{id}"), body)
            .await
    }

    /// Start streaming on an entertainment area.
    pub async fn start_entertainment(&self, id: &str) -> Result<(), Error> {
        self.update_entertainment_configuration(
            id,
            &EntertainmentConfigurationPut::action(EntertainmentAction::Start),
        )
        .await
    }

    /// Stop streaming on an entertainment area.
    pub async fn stop_entertainment(&self, id: &str) -> Result<(), Error> {
        self.update_entertainment_configuration(
            id,
            &EntertainmentConfigurationPut::action(EntertainmentAction::Stop),
        )
        .await
    }
}
