// Bridge and bridge-home operations.

use std::collections::HashMap;

use super::Home;
use crate::error::Error;
use crate::models::{BridgeGet, BridgeHomeGet};

impl Home {
    /// The bridge resources, keyed by id. In practice exactly one.
    pub async fn bridges(&self) -> Result<HashMap<String, BridgeGet>, Error> {
        let data: Vec<BridgeGet> = self.get_list("bridge").await?;
        Ok(data.into_iter().map(|b| (b.id.clone(), b)).collect())
    }

    /// A single bridge resource by id.
    pub async fn bridge(&self, id: &str) -> Result<BridgeGet, Error> {
        self.get_single(&format!("bridge/{id}")).await
    }

    /// The home attached to the bridge.
    ///
    /// Bridges with more than one home are not supported yet.
    pub async fn bridge_home(&self) -> Result<BridgeHomeGet, Error> {
        let mut data: Vec<BridgeHomeGet> = self.get_list("bridge_home").await?;
        match data.len() {
            0 => Err(Error::EmptyResponse),
            1 => Ok(data.remove(0)),
            _ => Err(Error::UnsupportedOperation(
                "more than one home attached to the bridge",
            )),
        }
    }
}
