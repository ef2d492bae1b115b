//! AutoCull: skip drawing objects outside the camera view
//!
//! The culling itself happens in the InWorld stage; this module only owns
//! the switch and the `inCamera` query.

use super::module::CapabilityModule;
use crate::display::{DisplayObject, Value};

/// Module name
pub const NAME: &str = "AutoCull";

/// Cull against the camera every frame
pub const AUTO_CULL: &str = "autoCull";
/// Whether the bounds intersect the camera view
pub const IN_CAMERA: &str = "inCamera";

/// AutoCull members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .field(AUTO_CULL, false)
        .getter(IN_CAMERA, in_camera)
}

fn in_camera(object: &DisplayObject) -> Value {
    let visible = object
        .game
        .as_ref()
        .is_some_and(|game| game.camera_view().intersects(&object.bounds()));
    Value::Bool(visible)
}
