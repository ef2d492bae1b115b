//! Overlap: bounds intersection test

use super::module::CapabilityModule;
use crate::display::{CallError, DisplayObject, Value};

/// Module name
pub const NAME: &str = "Overlap";

/// Whether the object's bounds intersect the given rectangle
pub const OVERLAP: &str = "overlap";

/// Overlap members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME).method(OVERLAP, overlap)
}

fn overlap(object: &mut DisplayObject, args: &[Value]) -> Result<Value, CallError> {
    match args {
        [Value::Rect(other)] => Ok(Value::Bool(object.bounds().intersects(other))),
        _ => Err(CallError::bad_argument(OVERLAP, "the other object's bounds")),
    }
}
