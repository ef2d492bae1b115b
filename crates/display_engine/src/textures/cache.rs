//! Texture cache shared by every display object of a game

use std::collections::HashMap;
use std::sync::Arc;

use super::texture::{Texture, TextureSource};
use crate::config::{AtlasFrame, TextureEntry, TextureLayout};
use crate::display::DisplayError;

/// Key of the built-in texture used when no source is given
pub const DEFAULT_KEY: &str = "__default";

/// Key of the built-in placeholder texture
pub const MISSING_KEY: &str = "__missing";

/// Key to texture lookup
///
/// Populated before display objects are created and treated as read-only
/// afterwards, so lookups need no locking.
#[derive(Debug, Clone)]
pub struct TextureCache {
    textures: HashMap<String, Arc<Texture>>,
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureCache {
    /// Create a cache holding only the built-in textures
    pub fn new() -> Self {
        let mut cache = Self {
            textures: HashMap::new(),
        };
        cache.add(Texture::single(DEFAULT_KEY, 32, 32));
        cache.add(Texture::single(MISSING_KEY, 32, 32));
        cache
    }

    /// Create a cache from a texture manifest
    pub fn from_manifest(entries: &[TextureEntry]) -> Self {
        let mut cache = Self::new();
        for entry in entries {
            let texture = match &entry.layout {
                TextureLayout::Single => Texture::single(&*entry.key, entry.width, entry.height),
                TextureLayout::Sheet { frame_width, frame_height } => {
                    Texture::sheet(&*entry.key, entry.width, entry.height, *frame_width, *frame_height)
                }
                TextureLayout::Atlas { frames } => {
                    Texture::atlas(&*entry.key, entry.width, entry.height, frames)
                }
            };
            cache.add(texture);
        }
        log::info!("Texture cache populated with {} texture(s)", cache.len());
        cache
    }

    /// Register a texture, replacing any texture with the same key
    pub fn add(&mut self, texture: Texture) -> Arc<Texture> {
        let texture = Arc::new(texture);
        if self.textures.insert(texture.key().to_string(), Arc::clone(&texture)).is_some() {
            log::warn!("Replaced texture '{}' in cache", texture.key());
        }
        texture
    }

    /// Register a single-frame texture
    pub fn add_image(&mut self, key: &str, width: u32, height: u32) -> Arc<Texture> {
        self.add(Texture::single(key, width, height))
    }

    /// Register a texture divided into a uniform grid of frames
    pub fn add_sprite_sheet(&mut self, key: &str, width: u32, height: u32, frame_width: u32, frame_height: u32) -> Arc<Texture> {
        self.add(Texture::sheet(key, width, height, frame_width, frame_height))
    }

    /// Register a texture with explicitly named frame rectangles
    pub fn add_atlas(&mut self, key: &str, width: u32, height: u32, frames: &[AtlasFrame]) -> Arc<Texture> {
        self.add(Texture::atlas(key, width, height, frames))
    }

    /// Look up a texture by key
    pub fn get(&self, key: &str) -> Result<Arc<Texture>, DisplayError> {
        self.textures
            .get(key)
            .cloned()
            .ok_or_else(|| DisplayError::ResourceNotFound(key.to_string()))
    }

    /// Resolve a texture source to a texture reference
    pub fn resolve(&self, source: &TextureSource) -> Result<Arc<Texture>, DisplayError> {
        match source {
            TextureSource::Default => self.get(DEFAULT_KEY),
            TextureSource::Key(key) => self.get(key),
            TextureSource::Texture(texture) => Ok(Arc::clone(texture)),
        }
    }

    /// Whether a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    /// Number of registered textures, built-ins included
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Rect;

    #[test]
    fn test_builtin_textures() {
        let cache = TextureCache::new();
        assert!(cache.contains(DEFAULT_KEY));
        assert!(cache.contains(MISSING_KEY));
        assert_eq!(cache.resolve(&TextureSource::Default).unwrap().key(), DEFAULT_KEY);
    }

    #[test]
    fn test_missing_key_is_resource_not_found() {
        let cache = TextureCache::new();
        match cache.get("nope") {
            Err(DisplayError::ResourceNotFound(key)) => assert_eq!(key, "nope"),
            other => panic!("expected ResourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_direct_texture_source_bypasses_cache() {
        let cache = TextureCache::new();
        let texture = Arc::new(Texture::single("loose", 4, 4));
        let resolved = cache.resolve(&TextureSource::from(Arc::clone(&texture))).unwrap();
        assert!(Arc::ptr_eq(&resolved, &texture));
        assert!(!cache.contains("loose"));
    }

    #[test]
    fn test_from_manifest() {
        let cache = TextureCache::from_manifest(&[
            TextureEntry { key: "logo".into(), width: 64, height: 32, layout: TextureLayout::Single },
            TextureEntry {
                key: "tiles".into(),
                width: 64,
                height: 64,
                layout: TextureLayout::Sheet { frame_width: 32, frame_height: 32 },
            },
            TextureEntry {
                key: "ui".into(),
                width: 64,
                height: 64,
                layout: TextureLayout::Atlas {
                    frames: vec![AtlasFrame { name: "knob".into(), rect: Rect::new(0.0, 0.0, 8.0, 8.0) }],
                },
            },
        ]);
        assert_eq!(cache.len(), 5);
        assert_eq!(cache.get("tiles").unwrap().frame_count(), 4);
        assert_eq!(cache.get("ui").unwrap().default_frame().name, "knob");
    }
}
