//! Reset: move an object and return it to a fresh, live state

use super::module::CapabilityModule;
use super::{core, in_world};
use crate::display::{CallError, DisplayObject, Value};
use crate::foundation::math::Point2;

/// Module name
pub const NAME: &str = "Reset";

/// Health value
pub const HEALTH: &str = "health";
/// Reset the object
pub const RESET: &str = "reset";

/// Health given by `reset` when none is passed
pub const DEFAULT_RESET_HEALTH: f32 = 1.0;

/// Reset members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .field(HEALTH, DEFAULT_RESET_HEALTH)
        .method(RESET, reset_method)
}

/// Place the object and make it fresh, existing, visible and alive
pub fn reset(object: &mut DisplayObject, x: f32, y: f32, health: f32) {
    object.sprite.position = Point2::new(x, y);
    object.sprite.visible = true;
    object.sprite.renderable = true;
    object.fields.set(core::FRESH, true);
    object.fields.set(core::EXISTS, true);
    object.fields.set(core::ALIVE, true);
    if object.fields.contains(in_world::OUT_OF_BOUNDS_FIRED) {
        object.fields.set(in_world::OUT_OF_BOUNDS_FIRED, false);
    }
    object.fields.set(HEALTH, health);
}

fn reset_method(object: &mut DisplayObject, args: &[Value]) -> Result<Value, CallError> {
    let (x, y, health) = match args {
        [Value::Number(x), Value::Number(y)] => (*x, *y, DEFAULT_RESET_HEALTH),
        [Value::Number(x), Value::Number(y), Value::Number(health)] => (*x, *y, *health),
        _ => return Err(CallError::bad_argument(RESET, "x, y and an optional health")),
    };
    reset(object, x, y, health);
    Ok(Value::Empty)
}
