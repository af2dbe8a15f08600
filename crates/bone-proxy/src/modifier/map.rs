use std::collections::BTreeMap;

use log::debug;

use super::{AnyBoneModifier, BoneModifier, BoneModifierType};

/// Holds at most one modifier per category for a single bone.
///
/// Mutating the map does not touch the rendering layer: the owner
/// decides when to recompute transform and appearance.
#[derive(Debug, Clone, Default)]
pub struct BoneModifierMap {
    modifiers: BTreeMap<BoneModifierType, AnyBoneModifier>,
}

impl BoneModifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `modifier`, returning the one it replaced in the same category.
    pub fn set<M: BoneModifier>(&mut self, modifier: M) -> Option<M> {
        debug!("Set {} bone modifier", M::TYPE);
        self.modifiers
            .insert(M::TYPE, modifier.into())
            .and_then(M::from_any)
    }

    pub fn get<M: BoneModifier>(&self) -> Option<&M> {
        self.modifiers.get(&M::TYPE).and_then(M::from_any_ref)
    }

    pub fn get_mut<M: BoneModifier>(&mut self) -> Option<&mut M> {
        self.modifiers.get_mut(&M::TYPE).and_then(M::from_any_mut)
    }

    pub fn get_any(&self, modifier_type: BoneModifierType) -> Option<&AnyBoneModifier> {
        self.modifiers.get(&modifier_type)
    }

    pub fn clear(&mut self, modifier_type: BoneModifierType) -> Option<AnyBoneModifier> {
        let removed = self.modifiers.remove(&modifier_type);
        if removed.is_some() {
            debug!("Cleared {} bone modifier", modifier_type);
        }
        removed
    }

    pub fn take<M: BoneModifier>(&mut self) -> Option<M> {
        self.clear(M::TYPE).and_then(M::from_any)
    }
}

#[cfg(test)]
mod test {
    use bone_asset::skin::{SkinAsset, SkinModel};

    use super::BoneModifierMap;
    use crate::modifier::{
        player::{PlayerBoneType, PlayerPartModifier},
        AnyBoneModifier, BoneModifierType,
    };

    #[test]
    fn test_set_replaces_previous() {
        let mut map = BoneModifierMap::new();
        let head = PlayerPartModifier::new(Some(PlayerBoneType::HEAD), None);
        let arm = PlayerPartModifier::new(Some(PlayerBoneType::LEFT_ARM), None);

        assert_eq!(map.set(head.clone()), None);
        assert_eq!(map.set(arm.clone()), Some(head));
        assert_eq!(map.get::<PlayerPartModifier>(), Some(&arm));
    }

    #[test]
    fn test_clear() {
        let mut map = BoneModifierMap::new();
        assert!(map.clear(BoneModifierType::PlayerPart).is_none());

        map.set(PlayerPartModifier::default());
        assert_eq!(
            map.get_any(BoneModifierType::PlayerPart)
                .map(AnyBoneModifier::modifier_type),
            Some(BoneModifierType::PlayerPart)
        );
        assert!(matches!(
            map.clear(BoneModifierType::PlayerPart),
            Some(AnyBoneModifier::PlayerPart(_))
        ));
        assert!(map.get_any(BoneModifierType::PlayerPart).is_none());
        assert!(map.get::<PlayerPartModifier>().is_none());
    }

    #[test]
    fn test_mutate_in_place() {
        let mut map = BoneModifierMap::new();
        map.set(PlayerPartModifier::new(Some(PlayerBoneType::TORSO), None));

        let skin = SkinAsset::new("texture", Some(String::from("sig")), SkinModel::Slim);
        if let Some(modifier) = map.get_mut::<PlayerPartModifier>() {
            modifier.set_skin(Some(skin.clone()));
        }

        let modifier = map.take::<PlayerPartModifier>().unwrap();
        assert_eq!(modifier.skin(), Some(&skin));
        assert!(map.get::<PlayerPartModifier>().is_none());
    }
}
