use std::fmt::{self, Display, Formatter, LowerHex};

use serde::{Deserialize, Serialize};

/// An opaque RGB color packed as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFFFF);

    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0xFFFFFF)
    }

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    pub const fn rgb(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl LowerHex for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self)
    }
}

#[cfg(test)]
mod test {
    use super::Color;

    #[test]
    fn test_channels() {
        let color = Color::new(0x12, 0x34, 0x56);
        assert_eq!(color.rgb(), 0x123456);
        assert_eq!(
            (color.red(), color.green(), color.blue()),
            (0x12, 0x34, 0x56)
        );
        assert_eq!(color.to_string(), "#123456");
    }

    #[test]
    fn test_alpha_is_dropped() {
        assert_eq!(Color::from_rgb(0xFFFF0000), Color::new(0xFF, 0, 0));
    }
}
