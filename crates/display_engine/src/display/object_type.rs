//! Runtime type tags for display object kinds

use serde::{Deserialize, Serialize};

/// Stable tag identifying the concrete kind of a display object
///
/// Discriminants are part of the serialized form and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ObjectType {
    /// Animated, physics-capable sprite
    Sprite = 0,
    /// Clickable button
    Button = 1,
    /// Light-weight static image
    Image = 2,
    /// Vector graphics
    Graphics = 3,
    /// Text label
    Text = 4,
    /// Repeating tiled sprite
    TileSprite = 5,
    /// Bitmap font text
    BitmapText = 6,
    /// Container of display objects
    Group = 7,
    /// Render target texture
    RenderTexture = 8,
}

impl ObjectType {
    /// Numeric tag
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::Sprite => "Sprite",
            Self::Button => "Button",
            Self::Image => "Image",
            Self::Graphics => "Graphics",
            Self::Text => "Text",
            Self::TileSprite => "TileSprite",
            Self::BitmapText => "BitmapText",
            Self::Group => "Group",
            Self::RenderTexture => "RenderTexture",
        }
    }
}

impl TryFrom<u8> for ObjectType {
    type Error = u8;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Ok(match tag {
            0 => Self::Sprite,
            1 => Self::Button,
            2 => Self::Image,
            3 => Self::Graphics,
            4 => Self::Text,
            5 => Self::TileSprite,
            6 => Self::BitmapText,
            7 => Self::Group,
            8 => Self::RenderTexture,
            other => return Err(other),
        })
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        assert_eq!(ObjectType::Image.as_u8(), 2);
        assert_eq!(ObjectType::try_from(2), Ok(ObjectType::Image));
        assert_eq!(ObjectType::try_from(200), Err(200));
    }

    #[test]
    fn test_serialized_name() {
        let encoded = ron::to_string(&ObjectType::Image).unwrap();
        assert_eq!(encoded, "Image");
    }
}
