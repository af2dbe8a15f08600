use bone_asset::skin::SkinAsset;
use glam::Vec3;

use super::{AnyBoneModifier, BoneModifier, BoneModifierType};

/// Layout of one player body part inside the skin resource pack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBoneType {
    /// Vertical displacement of the part model, in model units
    pub offset: f32,
    pub model_data: i32,
    pub slim_model_data: i32,
}

impl PlayerBoneType {
    pub const HEAD: Self = Self::new(0.0, 1, 1);
    pub const RIGHT_ARM: Self = Self::new(-1.0, 2, 7);
    pub const LEFT_ARM: Self = Self::new(-2.0, 3, 8);
    pub const TORSO: Self = Self::new(-3.0, 4, 4);
    pub const RIGHT_LEG: Self = Self::new(-4.0, 5, 5);
    pub const LEFT_LEG: Self = Self::new(-5.0, 6, 6);

    pub const fn new(offset: f32, model_data: i32, slim_model_data: i32) -> Self {
        Self {
            offset,
            model_data,
            slim_model_data,
        }
    }

    /// Looks up a standard part by its rig bone name, e.g. `right_arm`.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "head" => Some(Self::HEAD),
            "right_arm" => Some(Self::RIGHT_ARM),
            "left_arm" => Some(Self::LEFT_ARM),
            "torso" | "body" => Some(Self::TORSO),
            "right_leg" => Some(Self::RIGHT_LEG),
            "left_leg" => Some(Self::LEFT_LEG),
            _ => None,
        }
    }

    pub fn model_data_for(&self, skin: &SkinAsset) -> i32 {
        if skin.is_slim() {
            self.slim_model_data
        } else {
            self.model_data
        }
    }
}

/// Marks a bone as a part of a player whose look comes from a skin.
///
/// Either half may be missing while a rig is being equipped, in which
/// case the bone keeps its base appearance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerPartModifier {
    bone_type: Option<PlayerBoneType>,
    skin: Option<SkinAsset>,
}

impl PlayerPartModifier {
    pub fn new(bone_type: Option<PlayerBoneType>, skin: Option<SkinAsset>) -> Self {
        Self { bone_type, skin }
    }

    pub fn bone_type(&self) -> Option<&PlayerBoneType> {
        self.bone_type.as_ref()
    }

    pub fn set_bone_type(&mut self, bone_type: Option<PlayerBoneType>) {
        self.bone_type = bone_type;
    }

    pub fn skin(&self) -> Option<&SkinAsset> {
        self.skin.as_ref()
    }

    pub fn set_skin(&mut self, skin: Option<SkinAsset>) {
        self.skin = skin;
    }

    /// Offset added to the unscaled bone position. Rotation and scale
    /// are never touched by this modifier.
    pub fn position_offset(&self, bone_scale: f32) -> Vec3 {
        match &self.bone_type {
            Some(bone_type) => Vec3::new(0.0, bone_type.offset / bone_scale, 0.0),
            None => Vec3::ZERO,
        }
    }

    pub fn appearance(&self) -> Option<(&PlayerBoneType, &SkinAsset)> {
        self.bone_type.as_ref().zip(self.skin.as_ref())
    }
}

impl From<PlayerPartModifier> for AnyBoneModifier {
    fn from(modifier: PlayerPartModifier) -> Self {
        AnyBoneModifier::PlayerPart(modifier)
    }
}

impl BoneModifier for PlayerPartModifier {
    const TYPE: BoneModifierType = BoneModifierType::PlayerPart;

    fn from_any(modifier: AnyBoneModifier) -> Option<Self> {
        match modifier {
            AnyBoneModifier::PlayerPart(modifier) => Some(modifier),
        }
    }

    fn from_any_ref(modifier: &AnyBoneModifier) -> Option<&Self> {
        match modifier {
            AnyBoneModifier::PlayerPart(modifier) => Some(modifier),
        }
    }

    fn from_any_mut(modifier: &mut AnyBoneModifier) -> Option<&mut Self> {
        match modifier {
            AnyBoneModifier::PlayerPart(modifier) => Some(modifier),
        }
    }
}

#[cfg(test)]
mod test {
    use bone_asset::skin::{SkinAsset, SkinModel};
    use glam::Vec3;

    use super::{PlayerBoneType, PlayerPartModifier};

    #[test]
    fn test_slim_model_data() {
        let classic = SkinAsset::new("texture", None, SkinModel::Classic);
        let slim = SkinAsset::new("texture", None, SkinModel::Slim);
        assert_eq!(PlayerBoneType::RIGHT_ARM.model_data_for(&classic), 2);
        assert_eq!(PlayerBoneType::RIGHT_ARM.model_data_for(&slim), 7);
        assert_eq!(PlayerBoneType::HEAD.model_data_for(&slim), 1);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(
            PlayerBoneType::by_name("Left_Leg"),
            Some(PlayerBoneType::LEFT_LEG)
        );
        assert_eq!(PlayerBoneType::by_name("tail"), None);
    }

    #[test]
    fn test_offset_divided_by_bone_scale() {
        let modifier = PlayerPartModifier::new(Some(PlayerBoneType::new(4.0, 1, 1)), None);
        assert_eq!(modifier.position_offset(2.0), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(
            PlayerPartModifier::default().position_offset(2.0),
            Vec3::ZERO
        );
    }

    #[test]
    fn test_incomplete_modifier_has_no_appearance() {
        let skin = SkinAsset::new("texture", None, SkinModel::Classic);
        assert!(PlayerPartModifier::new(None, Some(skin.clone()))
            .appearance()
            .is_none());
        assert!(PlayerPartModifier::new(Some(PlayerBoneType::HEAD), None)
            .appearance()
            .is_none());
        assert!(PlayerPartModifier::new(Some(PlayerBoneType::HEAD), Some(skin))
            .appearance()
            .is_some());
    }
}
