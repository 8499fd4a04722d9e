use serde::{Deserialize, Serialize};

use super::common::{Metadata, ResourceIdentifier};

/// A scene as returned by `GET /clip/v2/resource/scene`.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    /// The room or zone the scene belongs to.
    #[serde(default)]
    pub group: Option<ResourceIdentifier>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub auto_dynamic: Option<bool>,
}

/// How to recall a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecallAction {
    Active,
    DynamicPalette,
    Static,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Recall {
    pub action: RecallAction,
}

/// Create/update body for a scene. Recalling is an update with `recall`
/// set and nothing else.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenePut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall: Option<Recall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_dynamic: Option<bool>,
}

impl ScenePut {
    /// The body that activates a scene.
    pub fn recall_active() -> Self {
        Self {
            recall: Some(Recall {
                action: RecallAction::Active,
            }),
            ..Self::default()
        }
    }
}

/// A smart scene (time-slotted scene schedule).
#[derive(Debug, Clone, Deserialize)]
pub struct SmartSceneGet {
    pub id: String,
    #[serde(default)]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub group: Option<ResourceIdentifier>,
    #[serde(default)]
    pub metadata: Metadata,
    /// "active" or "inactive".
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmartSceneRecallAction {
    Activate,
    Deactivate,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SmartSceneRecall {
    pub action: SmartSceneRecallAction,
}

/// Create/update body for a smart scene.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SmartScenePut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall: Option<SmartSceneRecall>,
}
