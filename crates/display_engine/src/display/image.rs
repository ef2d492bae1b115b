//! Static image display objects
//!
//! An image shows one frame of a texture and carries the full set of
//! optional capabilities. The type is assembled once per [`Game`] and
//! every [`Image`] shares it.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use super::error::{CallError, DisplayError};
use super::object::DisplayObject;
use super::object_type::ObjectType;
use super::update_chain::{UpdateChain, UpdateOutcome};
use super::value::Value;
use crate::capabilities::{
    angle, auto_cull, bounds, bring_to_top, core, crop, destroy, fixed_to_camera, in_world, input_enabled, install,
    life_span, overlap, reset, scale_min_max, smoothed, CapabilityCatalog, CompositionError,
    DisplayType, InputHandler,
};
use crate::foundation::math::Rect;
use crate::game::Game;
use crate::textures::{FrameSelector, TextureSource};

/// Capabilities installed onto every image, in installation order
pub const IMAGE_CAPABILITIES: [&str; 13] = [
    angle::NAME,
    auto_cull::NAME,
    bounds::NAME,
    bring_to_top::NAME,
    crop::NAME,
    destroy::NAME,
    fixed_to_camera::NAME,
    input_enabled::NAME,
    life_span::NAME,
    overlap::NAME,
    reset::NAME,
    scale_min_max::NAME,
    smoothed::NAME,
];

/// Static image
///
/// Dereferences to [`DisplayObject`] for the generic surface; the methods
/// here are typed shortcuts over the same members.
#[derive(Debug, Clone)]
pub struct Image {
    object: DisplayObject,
}

impl Image {
    /// Assemble the image type from a catalog
    ///
    /// The update chain runs the InWorld stage before the Core stage.
    pub fn define(catalog: &CapabilityCatalog) -> Result<DisplayType, CompositionError> {
        let chain = UpdateChain::<DisplayObject>::new()
            .then(in_world::STAGE, in_world::pre_update)
            .then(core::STAGE, core::pre_update);
        Ok(install(ObjectType::Image, catalog, &IMAGE_CAPABILITIES)?.with_update_chain(chain))
    }

    /// Create an image at `(x, y)`, both defaulting to 0
    ///
    /// Fails when the texture does not resolve; an unknown frame falls back
    /// to the texture's default frame.
    pub fn new(
        game: &Arc<Game>,
        x: Option<f32>,
        y: Option<f32>,
        source: impl Into<TextureSource>,
        frame: impl Into<FrameSelector>,
    ) -> Result<Self, DisplayError> {
        let object = DisplayObject::new(game.image_type(), game, x, y, source, frame)?;
        Ok(Self { object })
    }

    /// Create an image at the origin showing the texture's default frame
    pub fn at_origin(game: &Arc<Game>, source: impl Into<TextureSource>) -> Result<Self, DisplayError> {
        Self::new(game, None, None, source, FrameSelector::Default)
    }

    /// Run the update chain; `false` means skip the object this frame
    pub fn pre_update(&mut self) -> bool {
        self.object.pre_update()
    }

    /// Run the update chain and report how far it got
    pub fn pre_update_outcome(&mut self) -> UpdateOutcome {
        self.object.pre_update_outcome()
    }

    /// Rotation in degrees
    pub fn angle(&self) -> Result<f32, CallError> {
        number(self.object.get(angle::ANGLE)?, angle::ANGLE)
    }

    /// Set the rotation in degrees
    pub fn set_angle(&mut self, degrees: f32) -> Result<(), CallError> {
        self.object.set(angle::ANGLE, degrees)
    }

    /// Show only part of the frame; `None` removes the crop
    pub fn crop(&mut self, rect: Option<Rect>) -> Result<(), CallError> {
        self.object.call(crop::CROP, &[Value::from(rect)]).map(|_| ())
    }

    /// Tear the image down; `false` if it was already destroyed
    pub fn destroy(&mut self) -> Result<bool, CallError> {
        flag(self.object.call(destroy::DESTROY, &[])?, destroy::DESTROY)
    }

    /// Kill the image
    pub fn kill(&mut self) -> Result<(), CallError> {
        self.object.call(life_span::KILL, &[]).map(|_| ())
    }

    /// Revive the image, with full health when none is given
    pub fn revive(&mut self, health: Option<f32>) -> Result<(), CallError> {
        let args: Vec<Value> = health.map(Value::from).into_iter().collect();
        self.object.call(life_span::REVIVE, &args).map(|_| ())
    }

    /// Move the image and make it fresh and alive again
    pub fn reset(&mut self, x: f32, y: f32, health: Option<f32>) -> Result<(), CallError> {
        let mut args = vec![Value::from(x), Value::from(y)];
        args.extend(health.map(Value::from));
        self.object.call(reset::RESET, &args).map(|_| ())
    }

    /// Whether the bounds intersect the camera view
    pub fn in_camera(&self) -> Result<bool, CallError> {
        flag(self.object.get(auto_cull::IN_CAMERA)?, auto_cull::IN_CAMERA)
    }

    /// Whether the bounds intersect another rectangle
    pub fn overlap(&mut self, other: Rect) -> Result<bool, CallError> {
        flag(self.object.call(overlap::OVERLAP, &[Value::from(other)])?, overlap::OVERLAP)
    }

    /// Input handler, if input was ever enabled
    pub fn input(&self) -> Option<&InputHandler> {
        self.object.fields().get(input_enabled::INPUT).and_then(Value::as_input)
    }

    /// Start or stop receiving input
    pub fn set_input_enabled(&mut self, enabled: bool) -> Result<(), CallError> {
        self.object.set(input_enabled::INPUT_ENABLED, enabled)
    }

    /// Whether the image is pinned to the camera
    pub fn fixed_to_camera(&self) -> Result<bool, CallError> {
        flag(self.object.get(fixed_to_camera::FIXED_TO_CAMERA)?, fixed_to_camera::FIXED_TO_CAMERA)
    }

    /// Pin the image at its current position relative to the camera
    pub fn set_fixed_to_camera(&mut self, fixed: bool) -> Result<(), CallError> {
        self.object.set(fixed_to_camera::FIXED_TO_CAMERA, fixed)
    }

    /// Clamp the scale to `[min, max]` on both axes; `None` lifts a limit
    pub fn set_scale_min_max(&mut self, min: Option<f32>, max: Option<f32>) -> Result<(), CallError> {
        self.object
            .call(scale_min_max::SET_SCALE_MIN_MAX, &[Value::from(min), Value::from(max)])
            .map(|_| ())
    }

    /// Whether the texture is sampled with smoothing
    pub fn smoothed(&self) -> Result<bool, CallError> {
        flag(self.object.get(smoothed::SMOOTHED)?, smoothed::SMOOTHED)
    }

    /// Switch texture smoothing
    pub fn set_smoothed(&mut self, smoothed: bool) -> Result<(), CallError> {
        self.object.set(smoothed::SMOOTHED, smoothed)
    }

    /// Stored lifespan in milliseconds
    pub fn lifespan(&self) -> Result<f32, CallError> {
        number(self.object.get(life_span::LIFESPAN)?, life_span::LIFESPAN)
    }

    /// Store a lifespan in milliseconds
    ///
    /// The image chain has no LifeSpan stage, so the value is kept but
    /// never counted down; kinds that splice in `preUpdateLifeSpan` expire.
    pub fn set_lifespan(&mut self, ms: f32) -> Result<(), CallError> {
        self.object.set(life_span::LIFESPAN, ms)
    }

    /// Unwrap the generic display object
    pub fn into_inner(self) -> DisplayObject {
        self.object
    }
}

fn flag(value: Value, member: &str) -> Result<bool, CallError> {
    value.as_bool().ok_or_else(|| CallError::bad_argument(member, "a flag"))
}

fn number(value: Value, member: &str) -> Result<f32, CallError> {
    value.as_number().ok_or_else(|| CallError::bad_argument(member, "a number"))
}

impl Deref for Image {
    type Target = DisplayObject;

    fn deref(&self) -> &Self::Target {
        &self.object
    }
}

impl DerefMut for Image {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.object
    }
}

impl From<Image> for DisplayObject {
    fn from(image: Image) -> Self {
        image.object
    }
}
