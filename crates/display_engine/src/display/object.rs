//! Composed display object instances
//!
//! A [`DisplayObject`] pairs the rendering primitive with the field set and
//! behavior surface of its [`DisplayType`]. All capability behavior is
//! reached through the surface, so overrides chosen at type-assembly time
//! apply to every call.

use std::sync::Arc;

use super::error::{CallError, DisplayError};
use super::events::DisplayEvent;
use super::object_type::ObjectType;
use super::sprite::Sprite;
use super::update_chain::{ChainOutcome, UpdateOutcome};
use super::value::{FieldSet, Value};
use crate::capabilities::core;
use crate::capabilities::{Capability, DisplayType, Member};
use crate::foundation::math::{Point2, Rect};
use crate::game::Game;
use crate::textures::{Frame, FrameSelector, Texture, TextureSource};

/// Instance of a composed display type
#[derive(Debug, Clone)]
pub struct DisplayObject {
    kind: Arc<DisplayType>,
    pub(crate) game: Option<Arc<Game>>,
    pub(crate) sprite: Sprite,
    texture: Arc<Texture>,
    frame: Frame,
    pub(crate) fields: FieldSet,
    pub(crate) events: Vec<DisplayEvent>,
    pub(crate) in_world: bool,
    pub(crate) core_checks: u64,
}

impl DisplayObject {
    /// Construct an object of the given type
    ///
    /// `x` and `y` default to 0. The texture must resolve in the game's
    /// cache; an unknown frame selector falls back to the texture's default
    /// frame.
    pub fn new(
        kind: &Arc<DisplayType>,
        game: &Arc<Game>,
        x: Option<f32>,
        y: Option<f32>,
        source: impl Into<TextureSource>,
        frame: impl Into<FrameSelector>,
    ) -> Result<Self, DisplayError> {
        let x = x.unwrap_or(0.0);
        let y = y.unwrap_or(0.0);

        let texture = game.textures().resolve(&source.into())?;
        let frame = texture.get(&frame.into()).clone();

        let mut object = Self {
            kind: Arc::clone(kind),
            game: None,
            sprite: Sprite::new(frame.rect),
            texture,
            frame,
            fields: kind.surface().instantiate_fields(),
            events: Vec::new(),
            in_world: false,
            core_checks: 0,
        };
        core::init(&mut object, game, x, y);

        log::trace!(
            "Created {} at ({}, {}) with texture '{}' frame '{}'",
            kind.name(),
            x,
            y,
            object.texture.key(),
            object.frame.name
        );
        Ok(object)
    }

    /// Runtime type tag
    pub fn object_type(&self) -> ObjectType {
        self.kind.object_type()
    }

    /// Assembled type of this object
    pub fn kind(&self) -> &Arc<DisplayType> {
        &self.kind
    }

    /// Whether a built-in capability is installed on this object's type
    pub fn has(&self, capability: Capability) -> bool {
        self.kind.has(capability)
    }

    /// Game this object belongs to; `None` once destroyed
    pub fn game(&self) -> Option<&Arc<Game>> {
        self.game.as_ref()
    }

    /// Whether the object has been destroyed
    pub fn is_destroyed(&self) -> bool {
        self.game.is_none()
    }

    /// Whether the object is attached to a world
    pub fn in_world(&self) -> bool {
        self.in_world
    }

    /// Rendering primitive
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Mutable rendering primitive
    pub fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    /// Texture reference
    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    /// Frame currently shown
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Show another frame of the same texture
    ///
    /// Falls back to the default frame like construction does. An active
    /// crop is re-applied to the new frame.
    pub fn set_frame(&mut self, selector: impl Into<FrameSelector>) {
        self.frame = self.texture.get(&selector.into()).clone();
        self.sprite.set_source_rect(self.frame.rect);
        if self.fields.rect(crate::capabilities::crop::CROP_RECT).is_some() {
            crate::capabilities::crop::update_crop(self);
        }
    }

    /// Merged field values
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Position
    pub fn position(&self) -> Point2 {
        self.sprite.position
    }

    /// Move the object
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.sprite.position = Point2::new(x, y);
    }

    /// World-space bounds
    pub fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }

    /// Number of times the Core stage has evaluated this object
    pub fn core_checks(&self) -> u64 {
        self.core_checks
    }

    /// Take every queued event
    pub fn drain_events(&mut self) -> Vec<DisplayEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: DisplayEvent) {
        self.events.push(event);
    }

    /// Run the type's update chain for this frame
    pub fn pre_update(&mut self) -> bool {
        let kind = Arc::clone(&self.kind);
        kind.update_chain().run(self)
    }

    /// Run the update chain and report how far it got
    pub fn pre_update_outcome(&mut self) -> UpdateOutcome {
        let kind = Arc::clone(&self.kind);
        let chain = kind.update_chain();
        match chain.run_traced(self) {
            ChainOutcome::Completed => UpdateOutcome::Ready,
            ChainOutcome::Halted { index, .. } => match chain.position(core::STAGE) {
                Some(core_index) if index >= core_index => UpdateOutcome::CoreChecked,
                _ => UpdateOutcome::Skipped,
            },
        }
    }

    /// Per-frame logic hook
    pub fn update(&mut self) -> Result<(), CallError> {
        self.call(core::UPDATE, &[]).map(|_| ())
    }

    /// End of frame hook: the type's `postUpdate`, then scale clamping
    /// when the type supports it
    pub fn post_update(&mut self) -> Result<(), CallError> {
        self.call(core::POST_UPDATE, &[])?;
        if self.has_member(crate::capabilities::scale_min_max::CHECK_TRANSFORM) {
            self.call(crate::capabilities::scale_min_max::CHECK_TRANSFORM, &[])?;
        }
        Ok(())
    }

    /// Whether the type's surface has a member
    pub fn has_member(&self, name: &str) -> bool {
        self.kind.surface().contains(name)
    }

    /// Module that supplied a member
    pub fn member_origin(&self, name: &str) -> Option<&'static str> {
        self.kind.surface().origin(name)
    }

    /// Read a field or property
    pub fn get(&self, name: &str) -> Result<Value, CallError> {
        let installed = self
            .kind
            .surface()
            .get(name)
            .ok_or_else(|| CallError::MissingMember(name.to_string()))?;
        match &installed.member {
            Member::Field(default) => Ok(self.fields.get(name).cloned().unwrap_or_else(|| default.clone())),
            Member::Property { get, .. } => Ok(get(self)),
            _ => Err(CallError::NotReadable(name.to_string())),
        }
    }

    /// Write a field or property
    ///
    /// A field only accepts values of its default's kind; fields whose
    /// default is empty accept anything.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), CallError> {
        let kind = Arc::clone(&self.kind);
        let surface = kind.surface();
        let (key, installed) = surface
            .key(name)
            .zip(surface.get(name))
            .ok_or_else(|| CallError::MissingMember(name.to_string()))?;
        match &installed.member {
            Member::Field(default) => {
                let value = value.into();
                if !default.is_empty() && !value.same_kind(default) {
                    return Err(CallError::bad_argument(name, default.kind_name()));
                }
                self.fields.set(key, value);
                Ok(())
            }
            Member::Property { set: Some(set), .. } => set(self, value.into()),
            _ => Err(CallError::ReadOnly(name.to_string())),
        }
    }

    /// Call a method or update stage
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        let kind = Arc::clone(&self.kind);
        let installed = kind
            .surface()
            .get(name)
            .ok_or_else(|| CallError::MissingMember(name.to_string()))?;
        match &installed.member {
            Member::Method(method) => method(self, args),
            Member::Stage(stage) => Ok(Value::Bool(stage(self))),
            Member::ListMethod(_) => Err(CallError::RequiresContainer(name.to_string())),
            _ => Err(CallError::NotAMethod(name.to_string())),
        }
    }
}
