// Device operations.

use std::collections::HashMap;

use super::Home;
use crate::error::Error;
use crate::models::DeviceGet;

impl Home {
    /// All devices paired with the bridge, keyed by resource id.
    pub async fn devices(&self) -> Result<HashMap<String, DeviceGet>, Error> {
        let data: Vec<DeviceGet> = self.get_list("device").await?;
        Ok(data.into_iter().map(|d| (d.id.clone(), d)).collect())
    }

    /// A single device by id.
    pub async fn device(&self, id: &str) -> Result<DeviceGet, Error> {
        self.get_single(&format!("device/{id}")).await
    }

    /// Unpair a device from the bridge.
    pub async fn delete_device(&self, id: &str) -> Result<(), Error> {
        self.delete_ack(&format!("device/{id}")).await
    }
}
