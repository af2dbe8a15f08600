use bone_asset::{index::ResourceKey, skin::SkinAsset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Color;

pub const TEXTURES_PROPERTY: &str = "textures";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    pub signature: Option<String>,
}

/// Game profile attached to a player head item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeadProfile {
    pub name: Option<String>,
    pub uuid: Option<Uuid>,
    pub properties: Vec<ProfileProperty>,
}

impl HeadProfile {
    /// An anonymous profile carrying only the skin texture.
    pub fn from_skin(skin: &SkinAsset) -> Self {
        Self {
            name: None,
            uuid: None,
            properties: vec![ProfileProperty {
                name: String::from(TEXTURES_PROPERTY),
                value: skin.value.clone(),
                signature: skin.signature.clone(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: ResourceKey,
    pub custom_model_data: Vec<f32>,
    pub profile: Option<HeadProfile>,
    pub dyed_color: Option<Color>,
}

impl ItemStack {
    pub fn new(material: ResourceKey) -> Self {
        Self {
            material,
            custom_model_data: Vec::new(),
            profile: None,
            dyed_color: None,
        }
    }

    pub fn with_custom_model_data(mut self, custom_model_data: i32) -> Self {
        self.custom_model_data = vec![custom_model_data as f32];
        self
    }

    pub fn with_profile(mut self, profile: HeadProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_dyed_color(mut self, color: Color) -> Self {
        self.dyed_color = Some(color);
        self
    }
}

/// The whole visual of a display entity. Replaced as one value, never patched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum DisplayItem {
    #[default]
    Empty,
    Stack(ItemStack),
}

impl DisplayItem {
    pub fn stack(&self) -> Option<&ItemStack> {
        match self {
            DisplayItem::Empty => None,
            DisplayItem::Stack(stack) => Some(stack),
        }
    }
}

impl From<ItemStack> for DisplayItem {
    fn from(stack: ItemStack) -> Self {
        DisplayItem::Stack(stack)
    }
}
