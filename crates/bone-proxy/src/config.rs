use bone_asset::index::ResourceKey;
use bone_protocol::metadata::DisplayContext;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub display_context: DisplayContext,
    /// Client side transform interpolation, in ticks
    pub interpolation_duration: i32,
    pub view_range: f32,
    pub no_gravity: bool,
    pub silent: bool,
    /// Item for bones without their own appearance
    pub bone_item: ResourceKey,
    /// Item carrying the skin of player-derived parts
    pub player_head_item: ResourceKey,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            display_context: DisplayContext::ThirdPersonLeftHand,
            interpolation_duration: 3,
            view_range: 1000.0,
            no_gravity: true,
            silent: true,
            bone_item: ResourceKey::from_static("minecraft", "leather_horse_armor"),
            player_head_item: ResourceKey::from_static("minecraft", "player_head"),
        }
    }
}
