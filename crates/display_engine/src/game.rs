//! Host context shared by every display object
//!
//! A [`Game`] owns the texture cache, the assembled display types and the
//! per-frame view state (camera, world bounds, frame clock). Objects hold
//! an `Arc<Game>` until they are destroyed.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::capabilities::{CapabilityCatalog, CompositionError, DisplayType};
use crate::config::GameConfig;
use crate::display::Image;
use crate::foundation::math::Rect;
use crate::foundation::time::FrameClock;
use crate::textures::TextureCache;

/// View state written by the host between sweeps
#[derive(Debug, Clone, Copy, PartialEq)]
struct ViewState {
    camera: Rect,
    world_bounds: Rect,
    clock: FrameClock,
}

/// Host context
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    textures: TextureCache,
    catalog: CapabilityCatalog,
    image_type: Arc<DisplayType>,
    view: RwLock<ViewState>,
}

impl Game {
    /// Create a game whose texture cache is populated from the config's
    /// texture manifest
    pub fn new(config: GameConfig) -> Result<Arc<Self>, CompositionError> {
        let textures = TextureCache::from_manifest(&config.textures);
        Self::with_textures(config, textures)
    }

    /// Create a game around an already populated texture cache
    ///
    /// Display types are assembled here, so a broken catalog fails before
    /// any object exists.
    pub fn with_textures(config: GameConfig, textures: TextureCache) -> Result<Arc<Self>, CompositionError> {
        Self::with_catalog(config, textures, CapabilityCatalog::standard())
    }

    /// Create a game assembling its display types from a custom catalog
    pub fn with_catalog(
        config: GameConfig,
        textures: TextureCache,
        catalog: CapabilityCatalog,
    ) -> Result<Arc<Self>, CompositionError> {
        let image_type = Arc::new(Image::define(&catalog)?);
        let (width, height) = config.viewport;
        let view = ViewState {
            camera: Rect::new(0.0, 0.0, width as f32, height as f32),
            world_bounds: config.world_bounds,
            clock: FrameClock::default(),
        };

        log::info!(
            "Game ready: viewport {}x{}, {} texture(s), {} capabilities",
            width,
            height,
            textures.len(),
            catalog.names().len()
        );

        Ok(Arc::new(Self {
            config,
            textures,
            catalog,
            image_type,
            view: RwLock::new(view),
        }))
    }

    /// Configuration the game was created with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Texture cache
    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    /// Capability catalog the display types were assembled from
    pub fn catalog(&self) -> &CapabilityCatalog {
        &self.catalog
    }

    /// Assembled image type
    pub fn image_type(&self) -> &Arc<DisplayType> {
        &self.image_type
    }

    fn view(&self) -> RwLockReadGuard<'_, ViewState> {
        self.view.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn view_mut(&self) -> RwLockWriteGuard<'_, ViewState> {
        self.view.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Area of the world the camera shows
    pub fn camera_view(&self) -> Rect {
        self.view().camera
    }

    /// Move the camera's top-left corner
    pub fn set_camera_position(&self, x: f32, y: f32) {
        let mut view = self.view_mut();
        view.camera.x = x;
        view.camera.y = y;
    }

    /// Area the world considers in bounds
    pub fn world_bounds(&self) -> Rect {
        self.view().world_bounds
    }

    /// Replace the world bounds
    pub fn set_world_bounds(&self, bounds: Rect) {
        self.view_mut().world_bounds = bounds;
    }

    /// Frame clock
    pub fn clock(&self) -> FrameClock {
        self.view().clock
    }

    /// Advance the frame clock by the given number of milliseconds
    pub fn advance(&self, elapsed_ms: f32) {
        self.view_mut().clock.advance(elapsed_ms);
    }

    /// Advance the frame clock by one fixed step
    pub fn step(&self) {
        self.advance(self.config.fixed_step_ms);
    }
}
