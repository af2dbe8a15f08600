use crate::index::ResourceKey;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Descriptor of a single bone, owned by the model and shared read-only
/// with the bone's proxy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoneAsset {
    pub name: String,
    /// Per-bone scale contribution, multiplied with the model scale.
    pub scale: f32,
    /// Structural bones exist only to carry children and are never drawn.
    pub parent_only: bool,
    /// Item used for the base appearance, `None` falls back to the
    /// configured bone item.
    pub appearance: Option<ResourceKey>,
    pub custom_model_data: i32,
}

impl BoneAsset {
    pub fn new(name: impl Into<String>, custom_model_data: i32) -> Self {
        Self {
            name: name.into(),
            scale: 1.0,
            parent_only: false,
            appearance: None,
            custom_model_data,
        }
    }

    pub fn structural(name: impl Into<String>) -> Self {
        Self {
            parent_only: true,
            ..Self::new(name, 0)
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_appearance(mut self, appearance: ResourceKey) -> Self {
        self.appearance = Some(appearance);
        self
    }
}
