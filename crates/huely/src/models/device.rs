use serde::Deserialize;

use super::common::{Metadata, ResourceIdentifier, ResourceType};

/// Manufacturer information attached to a device.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductData {
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub manufacturer_name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_archetype: Option<String>,
    #[serde(default)]
    pub software_version: Option<String>,
}

/// A device as returned by `GET /clip/v2/resource/device`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub product_data: ProductData,
    #[serde(default)]
    pub metadata: Metadata,
    /// The services the device exposes (lights, sensors, connectivity).
    #[serde(default)]
    pub services: Vec<ResourceIdentifier>,
}

/// The bridge device itself.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    /// The Zigbee bridge id (serial-like identifier).
    #[serde(default)]
    pub bridge_id: Option<String>,
    #[serde(default)]
    pub owner: Option<ResourceIdentifier>,
    #[serde(default)]
    pub time_zone: Option<TimeZone>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeZone {
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// The home grouping everything attached to one bridge.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeHomeGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub children: Vec<ResourceIdentifier>,
    #[serde(default)]
    pub services: Vec<ResourceIdentifier>,
}

/// A catalog entry from the whole-resource listing, type plus id only.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceGet {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub owner: Option<ResourceIdentifier>,
}
