//! Configuration system
//!
//! Host configuration for the display layer: viewport, world bounds, the
//! fixed simulation step, and the texture manifest used to populate the
//! texture cache before any display object is created.

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Rect;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Camera view size in pixels (width, height)
    pub viewport: (u32, u32),

    /// Area the world considers in bounds
    pub world_bounds: Rect,

    /// Length of one simulation frame in milliseconds
    pub fixed_step_ms: f32,

    /// Textures registered in the cache at startup
    pub textures: Vec<TextureEntry>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: (800, 600),
            world_bounds: Rect::new(0.0, 0.0, 800.0, 600.0),
            fixed_step_ms: 1000.0 / 60.0,
            textures: Vec::new(),
        }
    }
}

impl Config for GameConfig {}

/// One texture in the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureEntry {
    /// Cache key
    pub key: String,
    /// Texture width in pixels
    pub width: u32,
    /// Texture height in pixels
    pub height: u32,
    /// How the texture is divided into frames
    #[serde(default)]
    pub layout: TextureLayout,
}

/// Frame layout of a texture
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TextureLayout {
    /// One frame covering the whole texture
    #[default]
    Single,
    /// Uniform grid of frames, row-major, named by index
    Sheet {
        /// Width of one cell
        frame_width: u32,
        /// Height of one cell
        frame_height: u32,
    },
    /// Named frames at explicit rectangles
    Atlas {
        /// Frames in index order
        frames: Vec<AtlasFrame>,
    },
}

/// Named rectangle inside an atlas texture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasFrame {
    /// Frame name
    pub name: String,
    /// Source rectangle in texture pixels
    pub rect: Rect,
}
