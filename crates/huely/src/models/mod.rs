//! Hand-written types for the CLIP v2 resource API.
//!
//! Only the fields the facade works with are modelled; the bridge sends
//! more and serde ignores the rest. GET types keep `id` required and
//! everything else optional where the API allows it, PUT types are
//! sparse bodies serialized with `skip_serializing_if`.

mod common;
mod device;
mod entertainment;
mod light;
mod room;
mod scene;
mod sensor;

pub use common::{Metadata, On, ResourceIdentifier, ResourceType};
pub use device::{BridgeGet, BridgeHomeGet, DeviceGet, ProductData, ResourceGet};
pub use entertainment::{
    EntertainmentAction, EntertainmentConfigurationGet, EntertainmentConfigurationPut,
};
pub use light::{
    Color, ColorTemperature, Dimming, GroupedLightGet, GroupedLightPut, LightGet, LightPut,
    Toggleable, Xy,
};
pub use room::{RoomGet, RoomPut, ZoneGet, ZonePut};
pub use scene::{
    Recall, RecallAction, SceneGet, ScenePut, SmartSceneGet, SmartScenePut, SmartSceneRecall,
    SmartSceneRecallAction,
};
pub use sensor::{
    DevicePowerGet, LightLevelGet, LightLevelPut, LightLevelReport, MotionGet, MotionPut,
    MotionReport, PowerState, TemperatureGet, TemperaturePut, TemperatureReport,
};
