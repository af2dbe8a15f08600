use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::item::DisplayItem;

/// Item transform context used by the client when rendering the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayContext {
    #[default]
    None,
    ThirdPersonLeftHand,
    ThirdPersonRightHand,
    FirstPersonLeftHand,
    FirstPersonRightHand,
    Head,
    Gui,
    Ground,
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayMetadata {
    DisplayContext(DisplayContext),
    InterpolationDuration(i32),
    InterpolationStartDelta(i32),
    ViewRange(f32),
    NoGravity(bool),
    Silent(bool),
    Invisible(bool),
    Translation(Vec3),
    /// Quaternion as `[x, y, z, w]`
    RightRotation([f32; 4]),
    Scale(Vec3),
    Item(DisplayItem),
}

/// A batch of metadata entries applied atomically by the rendering layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetadataUpdate {
    pub entries: Vec<DisplayMetadata>,
}

impl MetadataUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: DisplayMetadata) {
        self.entries.push(entry);
    }

    pub fn translation(&self) -> Option<Vec3> {
        self.entries.iter().rev().find_map(|entry| match entry {
            DisplayMetadata::Translation(translation) => Some(*translation),
            _ => None,
        })
    }

    pub fn rotation(&self) -> Option<[f32; 4]> {
        self.entries.iter().rev().find_map(|entry| match entry {
            DisplayMetadata::RightRotation(rotation) => Some(*rotation),
            _ => None,
        })
    }

    pub fn scale(&self) -> Option<Vec3> {
        self.entries.iter().rev().find_map(|entry| match entry {
            DisplayMetadata::Scale(scale) => Some(*scale),
            _ => None,
        })
    }

    pub fn item(&self) -> Option<&DisplayItem> {
        self.entries.iter().rev().find_map(|entry| match entry {
            DisplayMetadata::Item(item) => Some(item),
            _ => None,
        })
    }
}
