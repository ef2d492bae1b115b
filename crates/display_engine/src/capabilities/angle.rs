//! Angle: rotation expressed in degrees

use super::module::CapabilityModule;
use crate::display::{CallError, DisplayObject, Value};
use crate::foundation::math::utils::{deg_to_rad, rad_to_deg, wrap_angle};

/// Module name
pub const NAME: &str = "Angle";

/// Rotation in degrees, wrapped to `[-180, 180)`
pub const ANGLE: &str = "angle";

/// Angle members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME).property(ANGLE, get_angle, set_angle)
}

fn get_angle(object: &DisplayObject) -> Value {
    Value::Number(wrap_angle(rad_to_deg(object.sprite.rotation)))
}

fn set_angle(object: &mut DisplayObject, value: Value) -> Result<(), CallError> {
    let degrees = value
        .as_number()
        .ok_or_else(|| CallError::bad_argument(ANGLE, "a number of degrees"))?;
    object.sprite.rotation = deg_to_rad(wrap_angle(degrees));
    Ok(())
}
