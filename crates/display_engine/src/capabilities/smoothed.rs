//! Smoothed: texture filtering switch

use super::module::CapabilityModule;
use crate::display::{CallError, DisplayObject, ScaleMode, Value};

/// Module name
pub const NAME: &str = "Smoothed";

/// Bilinear (`true`) or nearest-neighbour (`false`) sampling
pub const SMOOTHED: &str = "smoothed";

/// Smoothed members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME).property(SMOOTHED, get_smoothed, set_smoothed)
}

fn get_smoothed(object: &DisplayObject) -> Value {
    Value::Bool(object.sprite.scale_mode == ScaleMode::Linear)
}

fn set_smoothed(object: &mut DisplayObject, value: Value) -> Result<(), CallError> {
    let smoothed = value
        .as_bool()
        .ok_or_else(|| CallError::bad_argument(SMOOTHED, "a flag"))?;
    object.sprite.scale_mode = if smoothed { ScaleMode::Linear } else { ScaleMode::Nearest };
    Ok(())
}
