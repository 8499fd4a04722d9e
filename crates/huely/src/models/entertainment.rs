use serde::{Deserialize, Serialize};

use super::common::Metadata;

/// An entertainment configuration (streaming area over a set of lights).
#[derive(Debug, Clone, Deserialize)]
pub struct EntertainmentConfigurationGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    /// "screen", "monitor", "music", "3dspace" or "other".
    #[serde(default)]
    pub configuration_type: Option<String>,
    /// "active" while a stream holds the area, otherwise "inactive".
    #[serde(default)]
    pub status: Option<String>,
}

/// Streaming control verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntertainmentAction {
    Start,
    Stop,
}

/// Update body for an entertainment configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EntertainmentConfigurationPut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<EntertainmentAction>,
}

impl EntertainmentConfigurationPut {
    pub fn action(action: EntertainmentAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }
}
