//! FixedToCamera: pin an object to a screen position
//!
//! Replaces Core's `postUpdate` so that pinned objects follow the camera
//! after everything else has moved this frame.

use super::core;
use super::module::CapabilityModule;
use crate::display::{CallError, DisplayObject, Value};
use crate::foundation::math::Point2;

/// Module name
pub const NAME: &str = "FixedToCamera";

/// Whether the object is pinned
pub const FIXED_TO_CAMERA: &str = "fixedToCamera";
/// Backing flag of [`FIXED_TO_CAMERA`]
pub const CAMERA_FIXED: &str = "cameraFixed";
/// Position relative to the camera view's top-left corner
pub const CAMERA_OFFSET: &str = "cameraOffset";

/// FixedToCamera members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .field(CAMERA_FIXED, false)
        .field(CAMERA_OFFSET, Point2::origin())
        .property(FIXED_TO_CAMERA, get_fixed, set_fixed)
        .method(core::POST_UPDATE, post_update)
}

fn get_fixed(object: &DisplayObject) -> Value {
    Value::Bool(object.fields.flag(CAMERA_FIXED))
}

/// Pinning records the current position as the camera offset
fn set_fixed(object: &mut DisplayObject, value: Value) -> Result<(), CallError> {
    let fixed = value
        .as_bool()
        .ok_or_else(|| CallError::bad_argument(FIXED_TO_CAMERA, "a flag"))?;
    object.fields.set(CAMERA_FIXED, fixed);
    if fixed {
        let position = object.sprite.position;
        object.fields.set(CAMERA_OFFSET, position);
    }
    Ok(())
}

fn post_update(object: &mut DisplayObject, args: &[Value]) -> Result<Value, CallError> {
    if object.fields.flag(CAMERA_FIXED) {
        if let Some(view) = object.game.as_ref().map(|game| game.camera_view()) {
            let offset = object.fields.point(CAMERA_OFFSET).unwrap_or_else(Point2::origin);
            object.sprite.position = Point2::new(view.x + offset.x, view.y + offset.y);
        }
    }
    core::post_update(object, args)
}
