use serde::{Deserialize, Serialize};

use super::common::{Metadata, On, ResourceIdentifier};

/// Resources with an on/off state, mainly lights and grouped lights.
pub trait Toggleable {
    /// The current on state.
    fn is_on(&self) -> bool;

    /// A new on state that is the logical negation of the current one.
    /// Pure: the receiver is never mutated.
    fn toggle(&self) -> On {
        On { on: !self.is_on() }
    }
}

/// Brightness as a percentage of the light's maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimming {
    pub brightness: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_dim_level: Option<f64>,
}

/// CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub xy: Xy,
}

/// Color temperature in mirek (1,000,000 / Kelvin).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorTemperature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirek: Option<u32>,
}

/// A light as returned by `GET /clip/v2/resource/light`.
#[derive(Debug, Clone, Deserialize)]
pub struct LightGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub owner: Option<ResourceIdentifier>,
    #[serde(default)]
    pub metadata: Metadata,
    pub on: On,
    #[serde(default)]
    pub dimming: Option<Dimming>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub color_temperature: Option<ColorTemperature>,
}

impl Toggleable for LightGet {
    fn is_on(&self) -> bool {
        self.on.on
    }
}

/// Sparse update body for a light.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LightPut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<On>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimming: Option<Dimming>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<ColorTemperature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// The aggregated light state of a room or zone.
///
/// The CLIP schema marks `on` optional here; an absent value reads as off.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupedLightGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub owner: Option<ResourceIdentifier>,
    #[serde(default)]
    pub on: Option<On>,
    #[serde(default)]
    pub dimming: Option<Dimming>,
}

impl Toggleable for GroupedLightGet {
    fn is_on(&self) -> bool {
        self.on.is_some_and(|o| o.on)
    }
}

/// Sparse update body for a grouped light.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedLightPut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<On>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimming: Option<Dimming>,
}
