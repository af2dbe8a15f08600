use std::{f32::consts::PI, mem, sync::Arc};

use bone_proxy::{
    asset::{bone::BoneAsset, skin::SkinAsset},
    config::ProxyConfig,
    error::TransformError,
    modifier::{
        player::{PlayerBoneType, PlayerPartModifier},
        BoneModifierType,
    },
    protocol::{color::Color, metadata::MetadataUpdate},
    proxy::BoneProxy,
};
use glam::{Quat, Vec3};
use log::{debug, info};
use serde::Serialize;
use uuid::Uuid;

type Bone = BoneProxy<Vec<MetadataUpdate>>;

const SHOULDER: Vec3 = Vec3::new(0.0, 1.5, 0.0);

#[derive(Debug, Clone, Serialize)]
pub struct TickOutput {
    pub model: Uuid,
    pub tick: u64,
    pub writes: Vec<(String, MetadataUpdate)>,
}

/// A player shaped model: one structural root plus the six player parts.
pub fn player_skeleton() -> Vec<BoneAsset> {
    vec![
        BoneAsset::structural("root"),
        BoneAsset::new("head", 1),
        BoneAsset::new("torso", 2),
        BoneAsset::new("right_arm", 3),
        BoneAsset::new("left_arm", 4),
        BoneAsset::new("right_leg", 5),
        BoneAsset::new("left_leg", 6),
    ]
}

#[derive(Debug)]
pub struct ModelView {
    id: Uuid,
    tick: u64,
    bones: Vec<Bone>,
}

impl ModelView {
    pub fn new(
        bones: Vec<BoneAsset>,
        model_scale: f32,
        config: &ProxyConfig,
    ) -> Result<Self, TransformError> {
        let bones = bones
            .into_iter()
            .map(|bone| {
                BoneProxy::new(
                    Arc::new(bone),
                    model_scale,
                    Vec3::ZERO,
                    Quat::IDENTITY,
                    config,
                    Vec::new(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let id = Uuid::new_v4();
        info!("Spawned model {} with {} bones", id, bones.len());
        Ok(Self { id, tick: 0, bones })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Marks every bone named after a player part as part of the rig.
    pub fn equip_player_rig(&mut self, skin: Option<&SkinAsset>) {
        for bone in &mut self.bones {
            let Some(bone_type) = PlayerBoneType::by_name(&bone.bone().name) else {
                continue;
            };
            debug!("Equip player part {} of model {}", bone.bone().name, self.id);
            bone.modifiers_mut()
                .set(PlayerPartModifier::new(Some(bone_type), skin.cloned()));
            bone.refresh_appearance();
        }
    }

    pub fn unequip_player_rig(&mut self) {
        for bone in &mut self.bones {
            if bone
                .modifiers_mut()
                .clear(BoneModifierType::PlayerPart)
                .is_some()
            {
                bone.refresh_appearance();
            }
        }
    }

    pub fn colorize(&mut self, color: Color) {
        for bone in &mut self.bones {
            bone.colorize(color);
        }
    }

    pub fn set_invisible(&mut self, invisible: bool) {
        for bone in &mut self.bones {
            bone.set_invisible(invisible);
        }
    }

    /// Advances the walk cycle by one tick.
    pub fn tick(&mut self) -> Result<(), TransformError> {
        self.tick += 1;
        let phase = (self.tick as f32 / 20.0) * 2.0 * PI;
        let swing = phase.sin() * 0.6;

        for bone in &mut self.bones {
            let (position, rotation) = match bone.bone().name.as_str() {
                "right_arm" | "left_leg" => (SHOULDER, Quat::from_rotation_x(swing)),
                "left_arm" | "right_leg" => (SHOULDER, Quat::from_rotation_x(-swing)),
                // nods only on the forward half of the cycle
                "head" => (SHOULDER, Quat::from_rotation_x(swing.max(0.0) * 0.2)),
                _ => (Vec3::ZERO, Quat::IDENTITY),
            };
            bone.update(position, rotation, Vec3::ONE)?;
        }
        Ok(())
    }

    /// Collects everything written since the last call.
    pub fn take_output(&mut self) -> TickOutput {
        let writes = self
            .bones
            .iter_mut()
            .flat_map(|bone| {
                let name = bone.bone().name.clone();
                mem::take(bone.display_mut())
                    .into_iter()
                    .map(move |update| (name.clone(), update))
            })
            .collect();
        TickOutput {
            model: self.id,
            tick: self.tick,
            writes,
        }
    }
}

#[cfg(test)]
mod test {
    use bone_proxy::{
        asset::skin::{SkinAsset, SkinModel},
        config::ProxyConfig,
        protocol::{color::Color, item::DisplayItem},
    };

    use super::{player_skeleton, ModelView};

    #[test]
    fn test_spawn_and_idle() {
        let mut model = ModelView::new(player_skeleton(), 1.0, &ProxyConfig::default()).unwrap();
        let spawn = model.take_output();
        assert_eq!(spawn.writes.len(), 7);

        // torso and root never move, the rest do
        model.tick().unwrap();
        let output = model.take_output();
        assert_eq!(output.tick, 1);
        assert_eq!(output.writes.len(), 5);
        assert!(output
            .writes
            .iter()
            .all(|(name, _)| name != "root" && name != "torso"));
    }

    #[test]
    fn test_rig_equip_cycle() {
        let mut model = ModelView::new(player_skeleton(), 1.0, &ProxyConfig::default()).unwrap();
        model.take_output();

        let skin = SkinAsset::new("value", None, SkinModel::Slim);
        model.equip_player_rig(Some(&skin));
        let output = model.take_output();
        assert_eq!(output.writes.len(), 6);
        assert!(output.writes.iter().all(|(_, update)| update
            .item()
            .and_then(DisplayItem::stack)
            .is_some_and(|stack| stack.profile.is_some())));

        model.unequip_player_rig();
        let output = model.take_output();
        assert_eq!(output.writes.len(), 6);
        assert!(output.writes.iter().all(|(_, update)| update
            .item()
            .and_then(DisplayItem::stack)
            .is_some_and(|stack| stack.profile.is_none())));
    }

    #[test]
    fn test_colorize_only_changed() {
        let mut model = ModelView::new(player_skeleton(), 1.0, &ProxyConfig::default()).unwrap();
        model.take_output();

        model.colorize(Color::WHITE);
        assert!(model.take_output().writes.is_empty());

        model.colorize(Color::from_rgb(0xFF0000));
        assert_eq!(model.take_output().writes.len(), 7);
    }
}
