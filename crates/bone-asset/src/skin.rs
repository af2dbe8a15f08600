#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arm width of a player skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SkinModel {
    #[default]
    Classic,
    Slim,
}

/// A signed player skin texture. Both `value` and `signature` are
/// forwarded untouched to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkinAsset {
    pub value: String,
    pub signature: Option<String>,
    pub model: SkinModel,
}

impl SkinAsset {
    pub fn new(value: impl Into<String>, signature: Option<String>, model: SkinModel) -> Self {
        Self {
            value: value.into(),
            signature,
            model,
        }
    }

    pub fn is_slim(&self) -> bool {
        self.model == SkinModel::Slim
    }
}
