//! ScaleMinMax: clamp the object's scale

use super::module::CapabilityModule;
use crate::display::{CallError, DisplayObject, Value};
use crate::foundation::math::{utils::clamp, Point2};

/// Module name
pub const NAME: &str = "ScaleMinMax";

/// Minimum scale per axis, or empty for no lower limit
pub const SCALE_MIN: &str = "scaleMin";
/// Maximum scale per axis, or empty for no upper limit
pub const SCALE_MAX: &str = "scaleMax";
/// Set both limits
pub const SET_SCALE_MIN_MAX: &str = "setScaleMinMax";
/// Apply the limits to the current scale
pub const CHECK_TRANSFORM: &str = "checkTransform";

const EXPECTED: &str = "1, 2 or 4 numbers (empty clears a limit)";

/// ScaleMinMax members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .field(SCALE_MIN, Value::Empty)
        .field(SCALE_MAX, Value::Empty)
        .method(SET_SCALE_MIN_MAX, set_scale_min_max)
        .method(CHECK_TRANSFORM, check_transform_method)
}

/// Combine an x/y pair into a limit; an empty x clears the limit and an
/// empty y repeats x
fn limit(x: &Value, y: &Value) -> Result<Value, CallError> {
    match (x, y) {
        (Value::Empty, _) => Ok(Value::Empty),
        (Value::Number(x), Value::Number(y)) => Ok(Value::Point(Point2::new(*x, *y))),
        (Value::Number(x), Value::Empty) => Ok(Value::Point(Point2::new(*x, *x))),
        _ => Err(CallError::bad_argument(SET_SCALE_MIN_MAX, EXPECTED)),
    }
}

/// One value sets every limit, two set min and max for both axes, four
/// set min x, min y, max x, max y
fn set_scale_min_max(object: &mut DisplayObject, args: &[Value]) -> Result<Value, CallError> {
    let (min, max) = match args {
        [all] => (limit(all, all)?, limit(all, all)?),
        [min, max] => (limit(min, min)?, limit(max, max)?),
        [min_x, min_y, max_x, max_y] => (limit(min_x, min_y)?, limit(max_x, max_y)?),
        _ => return Err(CallError::bad_argument(SET_SCALE_MIN_MAX, EXPECTED)),
    };
    object.fields.set(SCALE_MIN, min);
    object.fields.set(SCALE_MAX, max);
    check_transform(object);
    Ok(Value::Empty)
}

fn check_transform_method(object: &mut DisplayObject, _args: &[Value]) -> Result<Value, CallError> {
    check_transform(object);
    Ok(Value::Empty)
}

/// Clamp the scale into the configured limits
pub fn check_transform(object: &mut DisplayObject) {
    let min = object.fields.point(SCALE_MIN);
    let max = object.fields.point(SCALE_MAX);
    let scale = &mut object.sprite.scale;
    if let Some(min) = min {
        scale.x = scale.x.max(min.x);
        scale.y = scale.y.max(min.y);
    }
    if let Some(max) = max {
        scale.x = clamp(scale.x, f32::MIN, max.x);
        scale.y = clamp(scale.y, f32::MIN, max.y);
    }
}
