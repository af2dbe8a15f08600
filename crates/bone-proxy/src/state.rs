use bone_asset::transform::BoneTransform;
use bone_protocol::color::Color;

/// What was last pushed to the rendering layer, kept for change detection.
#[derive(Debug, Clone, Default)]
pub struct BoneState {
    transform: BoneTransform,
    color: Color,
}

impl BoneState {
    pub fn new(transform: BoneTransform, color: Color) -> Self {
        Self { transform, color }
    }

    pub fn transform(&self) -> &BoneTransform {
        &self.transform
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Stores `transform` if it differs from the last one. Returns
    /// whether the caller has to push it.
    #[must_use]
    pub fn replace_transform(&mut self, transform: BoneTransform) -> bool {
        if self.transform == transform {
            return false;
        }
        self.transform = transform;
        true
    }

    #[must_use]
    pub fn replace_color(&mut self, color: Color) -> bool {
        if self.color == color {
            return false;
        }
        self.color = color;
        true
    }
}
