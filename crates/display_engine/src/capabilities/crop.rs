//! Crop: show only part of the current frame

use super::module::CapabilityModule;
use crate::display::{CallError, DisplayObject, Value};
use crate::foundation::math::Rect;

/// Module name
pub const NAME: &str = "Crop";

/// Crop rectangle relative to the frame's top-left corner, or empty
pub const CROP_RECT: &str = "cropRect";
/// Set or clear the crop rectangle
pub const CROP: &str = "crop";
/// Re-apply the crop rectangle to the current frame
pub const UPDATE_CROP: &str = "updateCrop";

/// Crop members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .field(CROP_RECT, Value::Empty)
        .method(CROP, crop)
        .method(UPDATE_CROP, update_crop_method)
}

fn crop(object: &mut DisplayObject, args: &[Value]) -> Result<Value, CallError> {
    match args.first() {
        Some(Value::Rect(rect)) => {
            object.fields.set(CROP_RECT, *rect);
            update_crop(object);
        }
        None | Some(Value::Empty) => {
            object.fields.set(CROP_RECT, Value::Empty);
            let frame = object.frame().rect;
            object.sprite.set_source_rect(frame);
        }
        Some(_) => return Err(CallError::bad_argument(CROP, "a rectangle or nothing")),
    }
    Ok(Value::Empty)
}

fn update_crop_method(object: &mut DisplayObject, _args: &[Value]) -> Result<Value, CallError> {
    update_crop(object);
    Ok(Value::Empty)
}

/// Show the intersection of the crop rectangle and the frame
///
/// A crop entirely outside the frame leaves an empty rectangle. Does
/// nothing when no crop is set.
pub fn update_crop(object: &mut DisplayObject) {
    let Some(crop) = object.fields.rect(CROP_RECT) else {
        return;
    };
    let frame = object.frame().rect;
    let shifted = crop.translated(frame.x, frame.y);
    let shown = frame.intersection(&shifted).unwrap_or_else(|| {
        Rect::new(frame.x.max(shifted.x), frame.y.max(shifted.y), 0.0, 0.0)
    });
    object.sprite.set_source_rect(shown);
}
