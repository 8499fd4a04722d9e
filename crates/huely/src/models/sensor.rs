use serde::{Deserialize, Serialize};

use super::common::ResourceIdentifier;

/// Motion sensor state.
#[derive(Debug, Clone, Deserialize)]
pub struct MotionGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub owner: Option<ResourceIdentifier>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub motion: Option<MotionReport>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MotionReport {
    #[serde(default)]
    pub motion: Option<bool>,
    #[serde(default)]
    pub motion_valid: Option<bool>,
}

/// Update body for a motion sensor (enable/disable only).
#[derive(Debug, Clone, Default, Serialize)]
pub struct MotionPut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Temperature sensor state.
#[derive(Debug, Clone, Deserialize)]
pub struct TemperatureGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub owner: Option<ResourceIdentifier>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub temperature: Option<TemperatureReport>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemperatureReport {
    /// Degrees Celsius.
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub temperature_valid: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemperaturePut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Ambient light level sensor state.
#[derive(Debug, Clone, Deserialize)]
pub struct LightLevelGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub owner: Option<ResourceIdentifier>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub light: Option<LightLevelReport>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LightLevelReport {
    /// `10000 * log10(lux) + 1`, the scale the hardware reports in.
    #[serde(default)]
    pub light_level: Option<u32>,
    #[serde(default)]
    pub light_level_valid: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LightLevelPut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Battery state of a sensor or switch.
#[derive(Debug, Clone, Deserialize)]
pub struct DevicePowerGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub owner: Option<ResourceIdentifier>,
    #[serde(default)]
    pub power_state: Option<PowerState>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PowerState {
    /// "normal", "low", or "critical".
    #[serde(default)]
    pub battery_state: Option<String>,
    /// Percentage, when the hardware reports one.
    #[serde(default)]
    pub battery_level: Option<u8>,
}
