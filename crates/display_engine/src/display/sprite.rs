//! Textured quad primitive underlying every display object
//!
//! Holds transform and visibility state plus the texture rectangle being
//! shown. Drawing is left to the renderer; this type only answers
//! geometric questions such as [`Sprite::bounds`].

use crate::foundation::math::{Point2, Rect, Rotation2, Vec2};

/// Texture sampling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Bilinear filtering
    #[default]
    Linear,
    /// Nearest-neighbour filtering
    Nearest,
}

/// Rendering primitive state
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Position of the anchor point in world space
    pub position: Point2,
    /// Scale factors
    pub scale: Vec2,
    /// Normalized anchor (0,0 top-left, 1,1 bottom-right)
    pub anchor: Vec2,
    /// Rotation in radians, clockwise
    pub rotation: f32,
    /// Opacity
    pub alpha: f32,
    /// Whether the object and its update are visible
    pub visible: bool,
    /// Whether the renderer should draw it this frame
    pub renderable: bool,
    /// Texture sampling mode
    pub scale_mode: ScaleMode,
    source_rect: Rect,
}

impl Sprite {
    /// Create a primitive showing the given texture rectangle
    pub fn new(source_rect: Rect) -> Self {
        Self {
            position: Point2::origin(),
            scale: Vec2::new(1.0, 1.0),
            anchor: Vec2::zeros(),
            rotation: 0.0,
            alpha: 1.0,
            visible: true,
            renderable: true,
            scale_mode: ScaleMode::default(),
            source_rect,
        }
    }

    /// Texture rectangle currently shown
    pub fn source_rect(&self) -> Rect {
        self.source_rect
    }

    /// Change the texture rectangle shown
    pub fn set_source_rect(&mut self, rect: Rect) {
        self.source_rect = rect;
    }

    /// Displayed width in world units
    pub fn width(&self) -> f32 {
        (self.source_rect.width * self.scale.x).abs()
    }

    /// Displayed height in world units
    pub fn height(&self) -> f32 {
        (self.source_rect.height * self.scale.y).abs()
    }

    /// Axis-aligned world-space bounds of the rotated quad
    pub fn bounds(&self) -> Rect {
        let width = self.source_rect.width * self.scale.x;
        let height = self.source_rect.height * self.scale.y;
        let left = -self.anchor.x * width;
        let top = -self.anchor.y * height;
        let rotation = Rotation2::new(self.rotation);
        let corners = [
            Vec2::new(left, top),
            Vec2::new(left + width, top),
            Vec2::new(left, top + height),
            Vec2::new(left + width, top + height),
        ]
        .map(|corner| self.position + rotation * corner);
        Rect::enclosing(&corners)
    }
}
