//! Destroy: teardown
//!
//! Destroying releases the game reference and leaves the object inert. The
//! owning world drops destroyed objects at the end of its sweep. Repeated
//! calls are no-ops.

use super::module::CapabilityModule;
use super::{core, crop, input_enabled};
use crate::display::{CallError, DisplayEvent, DisplayObject, Value};

/// Module name
pub const NAME: &str = "Destroy";

/// Set while teardown runs, guards against re-entry
pub const DESTROY_PHASE: &str = "destroyPhase";
/// Tear the object down
pub const DESTROY: &str = "destroy";

/// Destroy members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .field(DESTROY_PHASE, false)
        .method(DESTROY, destroy_method)
}

fn destroy_method(object: &mut DisplayObject, _args: &[Value]) -> Result<Value, CallError> {
    Ok(Value::Bool(destroy(object)))
}

/// Tear the object down; `false` if it was already destroyed
pub fn destroy(object: &mut DisplayObject) -> bool {
    if object.game.is_none() || object.fields.flag(DESTROY_PHASE) {
        return false;
    }
    let tracks_phase = object.fields.contains(DESTROY_PHASE);
    if tracks_phase {
        object.fields.set(DESTROY_PHASE, true);
    }
    object.emit(DisplayEvent::Destroyed);
    object.in_world = false;

    if object.fields.contains(input_enabled::INPUT) {
        object.fields.set(input_enabled::INPUT, Value::Empty);
    }
    if object.fields.contains(crop::CROP_RECT) {
        object.fields.set(crop::CROP_RECT, Value::Empty);
        let frame = object.frame().rect;
        object.sprite.set_source_rect(frame);
    }

    object.fields.set(core::ALIVE, false);
    object.fields.set(core::EXISTS, false);
    object.sprite.visible = false;
    object.sprite.renderable = false;
    object.game = None;

    if tracks_phase {
        object.fields.set(DESTROY_PHASE, false);
    }
    object.fields.set(core::PENDING_DESTROY, false);

    log::debug!("Destroyed {}", object.object_type());
    true
}
