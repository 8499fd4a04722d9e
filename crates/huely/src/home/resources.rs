// Whole-catalog resource listing.

use std::collections::HashMap;

use super::Home;
use crate::error::Error;
use crate::models::ResourceGet;

impl Home {
    /// Every resource known to the bridge, keyed by id. Useful for
    /// walking ownership chains across resource families.
    pub async fn resources(&self) -> Result<HashMap<String, ResourceGet>, Error> {
        let data: Vec<ResourceGet> = self.get_list("").await?;
        Ok(data.into_iter().map(|r| (r.id.clone(), r)).collect())
    }
}
