//! Frames: named sub-rectangles of a texture

use crate::foundation::math::Rect;

/// Sub-rectangle of a texture selected for display
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Position of the frame within its texture's frame list
    pub index: usize,
    /// Frame name, unique within its texture
    pub name: String,
    /// Source rectangle in texture pixels
    pub rect: Rect,
}

impl Frame {
    /// Create a new frame
    pub fn new(index: usize, name: impl Into<String>, rect: Rect) -> Self {
        Self {
            index,
            name: name.into(),
            rect,
        }
    }

    /// Frame width in pixels
    pub fn width(&self) -> f32 {
        self.rect.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> f32 {
        self.rect.height
    }
}

/// Which frame of a texture to display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FrameSelector {
    /// The texture's default frame
    #[default]
    Default,
    /// Frame by name
    Name(String),
    /// Frame by position in the texture's frame list
    Index(usize),
}

impl From<&str> for FrameSelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for FrameSelector {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for FrameSelector {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<T: Into<FrameSelector>> From<Option<T>> for FrameSelector {
    fn from(selector: Option<T>) -> Self {
        selector.map_or(Self::Default, Into::into)
    }
}
