use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{Metadata, ResourceIdentifier, ResourceType};

/// A room as returned by `GET /clip/v2/resource/room`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    /// Devices assigned to the room.
    #[serde(default)]
    pub children: Vec<ResourceIdentifier>,
    /// Grouped services operating on the room, e.g. its grouped light.
    #[serde(default)]
    pub services: Vec<ResourceIdentifier>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl RoomGet {
    /// The room's services keyed by service id.
    pub fn services(&self) -> HashMap<String, ResourceType> {
        services_by_id(&self.services)
    }
}

/// Create/update body for a room.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoomPut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResourceIdentifier>,
}

/// A zone: same shape as a room, but grouping services instead of devices.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub children: Vec<ResourceIdentifier>,
    #[serde(default)]
    pub services: Vec<ResourceIdentifier>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl ZoneGet {
    /// The zone's services keyed by service id.
    pub fn services(&self) -> HashMap<String, ResourceType> {
        services_by_id(&self.services)
    }
}

/// Create/update body for a zone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ZonePut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResourceIdentifier>,
}

fn services_by_id(services: &[ResourceIdentifier]) -> HashMap<String, ResourceType> {
    services
        .iter()
        .map(|s| (s.rid.clone(), s.rtype))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_are_keyed_by_id() {
        let room = RoomGet {
            id: "room-1".into(),
            id_v1: None,
            children: vec![],
            services: vec![
                ResourceIdentifier {
                    rid: "gl-1".into(),
                    rtype: ResourceType::GroupedLight,
                },
                ResourceIdentifier {
                    rid: "m-1".into(),
                    rtype: ResourceType::Motion,
                },
            ],
            metadata: Metadata::default(),
        };

        let services = room.services();
        assert_eq!(services.len(), 2);
        assert_eq!(services.get("gl-1"), Some(&ResourceType::GroupedLight));
        assert_eq!(services.get("m-1"), Some(&ResourceType::Motion));
    }
}
