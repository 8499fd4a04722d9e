use serde::{Deserialize, Serialize};

/// Reference to another resource: an opaque id plus its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// The referenced resource id.
    pub rid: String,
    /// The referenced resource type.
    pub rtype: ResourceType,
}

/// Every addressable resource type the bridge exposes.
///
/// The catalog grows with firmware releases; unrecognized values decode
/// to [`ResourceType::Unknown`] instead of failing the whole envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Device,
    BridgeHome,
    Room,
    Zone,
    Light,
    Button,
    RelativeRotary,
    Temperature,
    LightLevel,
    Motion,
    Entertainment,
    GroupedLight,
    DevicePower,
    ZigbeeConnectivity,
    ZgpConnectivity,
    Bridge,
    Homekit,
    Matter,
    MatterFabric,
    Scene,
    SmartScene,
    EntertainmentConfiguration,
    PublicImage,
    BehaviorScript,
    BehaviorInstance,
    Geofence,
    GeofenceClient,
    Geolocation,
    #[serde(other)]
    Unknown,
}

/// Human-readable name plus archetype, shared by most resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
}

/// On/off state of a light-like resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct On {
    pub on: bool,
}
