//! Per-bone overrides of transform and appearance.
//!
//! Modifiers are grouped in a fixed set of categories. A bone holds at
//! most one modifier of each category in its [`map::BoneModifierMap`]
//! and asks the map for the categories it knows how to honour.

use std::fmt::{self, Display, Formatter};

use player::PlayerPartModifier;

pub mod map;
pub mod player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoneModifierType {
    /// The bone renders a part of a player skin
    PlayerPart,
}

impl Display for BoneModifierType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BoneModifierType::PlayerPart => write!(f, "PlayerPart"),
        }
    }
}

/// A modifier of any category, as stored in the map.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyBoneModifier {
    PlayerPart(PlayerPartModifier),
}

impl AnyBoneModifier {
    pub fn modifier_type(&self) -> BoneModifierType {
        match self {
            AnyBoneModifier::PlayerPart(_) => BoneModifierType::PlayerPart,
        }
    }
}

/// Typed view of one modifier category.
pub trait BoneModifier: Into<AnyBoneModifier> + Sized {
    const TYPE: BoneModifierType;

    fn from_any(modifier: AnyBoneModifier) -> Option<Self>;
    fn from_any_ref(modifier: &AnyBoneModifier) -> Option<&Self>;
    fn from_any_mut(modifier: &mut AnyBoneModifier) -> Option<&mut Self>;
}
