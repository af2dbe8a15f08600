use std::sync::Arc;

use bone_asset::{bone::BoneAsset, index::ResourceKey, transform::BoneTransform};
use bone_protocol::{
    color::Color,
    item::{DisplayItem, HeadProfile, ItemStack},
    metadata::{DisplayMetadata, MetadataUpdate},
};
use glam::{Quat, Vec3};
use log::{debug, trace, warn};

use crate::{
    config::ProxyConfig,
    display::DisplayHandle,
    error::{Axis, TransformError, TransformField},
    modifier::{map::BoneModifierMap, player::PlayerPartModifier},
    state::BoneState,
};

/// Display entity standing in for one bone of a model instance.
#[derive(Debug)]
pub struct BoneProxy<D: DisplayHandle> {
    bone: Arc<BoneAsset>,
    model_scale: f32,
    bone_item: ResourceKey,
    player_head_item: ResourceKey,
    state: BoneState,
    invisible: bool,
    modifiers: BoneModifierMap,
    display: D,
}

impl<D: DisplayHandle> BoneProxy<D> {
    /// Creates the proxy and sends its spawn metadata as a single batch.
    pub fn new(
        bone: Arc<BoneAsset>,
        model_scale: f32,
        initial_position: Vec3,
        initial_rotation: Quat,
        config: &ProxyConfig,
        display: D,
    ) -> Result<Self, TransformError> {
        validate_scale_factor(model_scale)?;
        validate_scale_factor(bone.scale)?;
        let initial = BoneTransform::from_position_rotation(initial_position, initial_rotation);
        validate(&initial)?;

        let mut proxy = Self {
            bone,
            model_scale,
            bone_item: config.bone_item.clone(),
            player_head_item: config.player_head_item.clone(),
            state: BoneState::new(initial, Color::WHITE),
            invisible: false,
            modifiers: BoneModifierMap::new(),
            display,
        };

        let mut update = MetadataUpdate::new();
        update.push(DisplayMetadata::DisplayContext(config.display_context));
        update.push(DisplayMetadata::InterpolationDuration(
            config.interpolation_duration,
        ));
        update.push(DisplayMetadata::ViewRange(config.view_range));
        update.push(DisplayMetadata::NoGravity(config.no_gravity));
        update.push(DisplayMetadata::Silent(config.silent));
        proxy.push_transform(&mut update, &initial);
        update.push(DisplayMetadata::Item(proxy.resolve_item()));
        proxy.display.apply(update);

        Ok(proxy)
    }

    pub fn bone(&self) -> &BoneAsset {
        &self.bone
    }

    pub fn model_scale(&self) -> f32 {
        self.model_scale
    }

    pub fn color(&self) -> Color {
        self.state.color()
    }

    pub fn last_transform(&self) -> &BoneTransform {
        self.state.transform()
    }

    pub fn is_invisible(&self) -> bool {
        self.invisible
    }

    pub fn modifiers(&self) -> &BoneModifierMap {
        &self.modifiers
    }

    /// Changes here take effect on the next [`update`](Self::update) or
    /// [`refresh_appearance`](Self::refresh_appearance).
    pub fn modifiers_mut(&mut self) -> &mut BoneModifierMap {
        &mut self.modifiers
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Applies this tick's local transform. Returns `Ok(false)` when the
    /// effective transform did not change and nothing was written.
    pub fn update(
        &mut self,
        position: Vec3,
        rotation: Quat,
        scale: Vec3,
    ) -> Result<bool, TransformError> {
        let mut candidate = BoneTransform::new(position, rotation, scale);
        if let Err(err) = validate(&candidate) {
            warn!("Rejected transform for bone {}: {}", self.bone.name, err);
            return Err(err);
        }

        if let Some(player_part) = self.modifiers.get::<PlayerPartModifier>() {
            candidate.position += player_part.position_offset(self.bone.scale);
            if let Err(err) = validate(&candidate) {
                warn!(
                    "Rejected player part offset for bone {}: {}",
                    self.bone.name, err
                );
                return Err(err);
            }
        }

        if !self.state.replace_transform(candidate) {
            trace!("Bone {} unchanged, skip update", self.bone.name);
            return Ok(false);
        }

        let mut update = MetadataUpdate::new();
        self.push_transform(&mut update, &candidate);
        self.display.apply(update);
        Ok(true)
    }

    /// Tints the bone. Returns whether the appearance was rewritten.
    pub fn colorize(&mut self, color: Color) -> bool {
        if !self.state.replace_color(color) {
            trace!("Bone {} already has color {}", self.bone.name, color);
            return false;
        }
        self.refresh_appearance();
        true
    }

    pub fn colorize_rgb(&mut self, red: u8, green: u8, blue: u8) -> bool {
        self.colorize(Color::new(red, green, blue))
    }

    pub fn set_invisible(&mut self, invisible: bool) {
        self.invisible = invisible;

        let mut update = MetadataUpdate::new();
        update.push(DisplayMetadata::Invisible(invisible));
        update.push(DisplayMetadata::Item(self.resolve_item()));
        self.display.apply(update);
    }

    /// Rebuilds the displayed item from scratch and replaces the current one.
    pub fn refresh_appearance(&mut self) {
        let item = self.resolve_item();
        debug!("Refresh appearance of bone {}", self.bone.name);

        let mut update = MetadataUpdate::new();
        update.push(DisplayMetadata::Item(item));
        self.display.apply(update);
    }

    fn resolve_item(&self) -> DisplayItem {
        if self.bone.parent_only || self.invisible {
            return DisplayItem::Empty;
        }

        let player_part = self
            .modifiers
            .get::<PlayerPartModifier>()
            .and_then(PlayerPartModifier::appearance);
        let stack = match player_part {
            Some((bone_type, skin)) => ItemStack::new(self.player_head_item.clone())
                .with_profile(HeadProfile::from_skin(skin))
                .with_custom_model_data(bone_type.model_data_for(skin)),
            None => ItemStack::new(
                self.bone
                    .appearance
                    .clone()
                    .unwrap_or_else(|| self.bone_item.clone()),
            )
            .with_custom_model_data(self.bone.custom_model_data),
        };
        stack.with_dyed_color(self.state.color()).into()
    }

    fn push_transform(&self, update: &mut MetadataUpdate, transform: &BoneTransform) {
        let factor = self.model_scale * self.bone.scale;
        update.push(DisplayMetadata::InterpolationStartDelta(0));
        update.push(DisplayMetadata::Translation(transform.position * factor));
        update.push(DisplayMetadata::RightRotation(transform.rotation.to_array()));
        update.push(DisplayMetadata::Scale(transform.scale * factor));
    }
}

fn validate_scale_factor(value: f32) -> Result<(), TransformError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TransformError::InvalidScaleFactor { value })
    }
}

fn validate(transform: &BoneTransform) -> Result<(), TransformError> {
    if !transform.position.is_finite() {
        return Err(TransformError::NonFinite {
            field: TransformField::Position,
        });
    }
    if !transform.rotation.is_finite() {
        return Err(TransformError::NonFinite {
            field: TransformField::Rotation,
        });
    }
    if !transform.scale.is_finite() {
        return Err(TransformError::NonFinite {
            field: TransformField::Scale,
        });
    }
    let scale = transform.scale;
    for (axis, value) in [(Axis::X, scale.x), (Axis::Y, scale.y), (Axis::Z, scale.z)] {
        if value < 0.0 {
            return Err(TransformError::NegativeScale { axis, value });
        }
    }
    Ok(())
}
