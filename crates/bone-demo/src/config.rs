use bone_proxy::{
    asset::skin::{SkinAsset, SkinModel},
    config::ProxyConfig,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub proxy: ProxyConfig,
    pub model_scale: f32,
    pub ticks: u64,
    /// Skin equipped on the player rig, if any
    pub skin: Option<SkinAsset>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            proxy: ProxyConfig::default(),
            model_scale: 1.0,
            ticks: 40,
            skin: Some(SkinAsset::new(
                "e3sidGV4dHVyZXMiOnt9fQ==",
                None,
                SkinModel::Classic,
            )),
        }
    }
}
