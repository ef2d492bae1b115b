//! Bounds: edge and anchor offset properties
//!
//! Edges ignore rotation; they are derived from position, anchor and the
//! displayed size. Setting an edge moves the object.

use super::module::CapabilityModule;
use crate::display::{CallError, DisplayObject, Value};

/// Module name
pub const NAME: &str = "Bounds";

/// Horizontal distance from the left edge to the anchor
pub const OFFSET_X: &str = "offsetX";
/// Vertical distance from the top edge to the anchor
pub const OFFSET_Y: &str = "offsetY";
/// Left edge
pub const LEFT: &str = "left";
/// Right edge
pub const RIGHT: &str = "right";
/// Top edge
pub const TOP: &str = "top";
/// Bottom edge
pub const BOTTOM: &str = "bottom";

/// Bounds members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .getter(OFFSET_X, get_offset_x)
        .getter(OFFSET_Y, get_offset_y)
        .property(LEFT, get_left, set_left)
        .property(RIGHT, get_right, set_right)
        .property(TOP, get_top, set_top)
        .property(BOTTOM, get_bottom, set_bottom)
}

fn offset_x(object: &DisplayObject) -> f32 {
    object.sprite.anchor.x * object.sprite.width()
}

fn offset_y(object: &DisplayObject) -> f32 {
    object.sprite.anchor.y * object.sprite.height()
}

fn get_offset_x(object: &DisplayObject) -> Value {
    Value::Number(offset_x(object))
}

fn get_offset_y(object: &DisplayObject) -> Value {
    Value::Number(offset_y(object))
}

fn left(object: &DisplayObject) -> f32 {
    object.sprite.position.x - offset_x(object)
}

fn top(object: &DisplayObject) -> f32 {
    object.sprite.position.y - offset_y(object)
}

fn get_left(object: &DisplayObject) -> Value {
    Value::Number(left(object))
}

fn get_right(object: &DisplayObject) -> Value {
    Value::Number(left(object) + object.sprite.width())
}

fn get_top(object: &DisplayObject) -> Value {
    Value::Number(top(object))
}

fn get_bottom(object: &DisplayObject) -> Value {
    Value::Number(top(object) + object.sprite.height())
}

fn edge(member: &str, value: &Value) -> Result<f32, CallError> {
    value.as_number().ok_or_else(|| CallError::bad_argument(member, "a number"))
}

fn set_left(object: &mut DisplayObject, value: Value) -> Result<(), CallError> {
    object.sprite.position.x = edge(LEFT, &value)? + offset_x(object);
    Ok(())
}

fn set_right(object: &mut DisplayObject, value: Value) -> Result<(), CallError> {
    object.sprite.position.x = edge(RIGHT, &value)? - object.sprite.width() + offset_x(object);
    Ok(())
}

fn set_top(object: &mut DisplayObject, value: Value) -> Result<(), CallError> {
    object.sprite.position.y = edge(TOP, &value)? + offset_y(object);
    Ok(())
}

fn set_bottom(object: &mut DisplayObject, value: Value) -> Result<(), CallError> {
    object.sprite.position.y = edge(BOTTOM, &value)? - object.sprite.height() + offset_y(object);
    Ok(())
}
