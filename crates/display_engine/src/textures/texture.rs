//! Textures: shared image resources divided into frames

use std::collections::HashMap;
use std::sync::Arc;

use super::frame::{Frame, FrameSelector};
use crate::config::AtlasFrame;
use crate::foundation::math::Rect;

/// Image resource owned by the texture cache
///
/// A texture always has at least one frame; frame 0 is its default frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    key: String,
    width: u32,
    height: u32,
    frames: Vec<Frame>,
    names: HashMap<String, usize>,
}

impl Texture {
    /// Texture with a single frame covering the whole image
    pub fn single(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self::with_frames(key.into(), width, height, Vec::new())
    }

    /// Texture divided into a uniform row-major grid
    ///
    /// Frames are named by their index. Partial cells at the right and
    /// bottom edges are dropped.
    pub fn sheet(key: impl Into<String>, width: u32, height: u32, frame_width: u32, frame_height: u32) -> Self {
        let mut frames = Vec::new();
        if frame_width > 0 && frame_height > 0 {
            let columns = width / frame_width;
            let rows = height / frame_height;
            for row in 0..rows {
                for column in 0..columns {
                    let index = frames.len();
                    let rect = Rect::new(
                        (column * frame_width) as f32,
                        (row * frame_height) as f32,
                        frame_width as f32,
                        frame_height as f32,
                    );
                    frames.push(Frame::new(index, index.to_string(), rect));
                }
            }
        }
        Self::with_frames(key.into(), width, height, frames)
    }

    /// Texture with explicitly named frames
    pub fn atlas(key: impl Into<String>, width: u32, height: u32, atlas_frames: &[AtlasFrame]) -> Self {
        let frames = atlas_frames
            .iter()
            .enumerate()
            .map(|(index, frame)| Frame::new(index, frame.name.clone(), frame.rect))
            .collect();
        Self::with_frames(key.into(), width, height, frames)
    }

    fn with_frames(key: String, width: u32, height: u32, mut frames: Vec<Frame>) -> Self {
        if frames.is_empty() {
            frames.push(Frame::new(0, "__base", Rect::new(0.0, 0.0, width as f32, height as f32)));
        }
        let names = frames
            .iter()
            .map(|frame| (frame.name.clone(), frame.index))
            .collect();
        Self {
            key,
            width,
            height,
            frames,
            names,
        }
    }

    /// Cache key this texture was registered under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The frame shown when no valid selector is given
    pub fn default_frame(&self) -> &Frame {
        &self.frames[0]
    }

    /// Look up a frame, `None` if the selector does not name one
    pub fn try_get(&self, selector: &FrameSelector) -> Option<&Frame> {
        match selector {
            FrameSelector::Default => Some(self.default_frame()),
            FrameSelector::Name(name) => self.names.get(name).map(|&index| &self.frames[index]),
            FrameSelector::Index(index) => self.frames.get(*index),
        }
    }

    /// Resolve a frame, falling back to the default frame
    pub fn get(&self, selector: &FrameSelector) -> &Frame {
        self.try_get(selector).unwrap_or_else(|| {
            log::debug!(
                "Texture '{}' has no frame {:?}, using default frame",
                self.key,
                selector
            );
            self.default_frame()
        })
    }
}

/// Where a display object gets its texture from
#[derive(Debug, Clone, Default)]
pub enum TextureSource {
    /// The cache's built-in default texture
    #[default]
    Default,
    /// A cache key
    Key(String),
    /// A texture reference held directly by the caller
    Texture(Arc<Texture>),
}

impl From<&str> for TextureSource {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for TextureSource {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<Arc<Texture>> for TextureSource {
    fn from(texture: Arc<Texture>) -> Self {
        Self::Texture(texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_texture_default_frame() {
        let texture = Texture::single("logo", 64, 32);
        assert_eq!(texture.frame_count(), 1);
        assert_eq!(texture.default_frame().rect, Rect::new(0.0, 0.0, 64.0, 32.0));
    }

    #[test]
    fn test_sheet_frames_row_major() {
        let texture = Texture::sheet("tiles", 64, 48, 32, 16);
        assert_eq!(texture.frame_count(), 6);

        let frame = texture.get(&FrameSelector::Index(3));
        assert_eq!(frame.rect, Rect::new(32.0, 16.0, 32.0, 16.0));
        assert_eq!(texture.get(&"5".into()).index, 5);
    }

    #[test]
    fn test_sheet_larger_than_texture_keeps_whole_frame() {
        let texture = Texture::sheet("tiny", 8, 8, 16, 16);
        assert_eq!(texture.frame_count(), 1);
        assert_eq!(texture.default_frame().width(), 8.0);
    }

    #[test]
    fn test_atlas_lookup_by_name() {
        let texture = Texture::atlas(
            "ui",
            128,
            128,
            &[
                AtlasFrame { name: "button".into(), rect: Rect::new(0.0, 0.0, 64.0, 20.0) },
                AtlasFrame { name: "panel".into(), rect: Rect::new(0.0, 20.0, 100.0, 100.0) },
            ],
        );
        assert_eq!(texture.get(&"panel".into()).index, 1);
        assert!(texture.try_get(&"missing".into()).is_none());
    }

    #[test]
    fn test_invalid_selector_falls_back() {
        let texture = Texture::sheet("tiles", 64, 64, 32, 32);
        assert_eq!(texture.get(&FrameSelector::Index(99)).index, 0);
        assert_eq!(texture.get(&"nope".into()).index, 0);
    }
}
