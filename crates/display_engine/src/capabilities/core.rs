//! Core lifecycle
//!
//! Always installed, before any optional capability. Provides the
//! liveness fields, construction-time initialization and the Core stage
//! of the update chain. Later capabilities may override any of these
//! members (FixedToCamera replaces `postUpdate`, LifeSpan re-declares
//! `alive`).

use std::sync::Arc;

use super::module::CapabilityModule;
use crate::display::{CallError, DisplayObject, Value};
use crate::foundation::math::Point2;
use crate::game::Game;

/// Module name
pub const NAME: &str = "Core";

/// Whether the object takes part in updates
pub const EXISTS: &str = "exists";
/// Whether the object is alive
pub const ALIVE: &str = "alive";
/// Set at creation and reset, cleared after the first post-update
pub const FRESH: &str = "fresh";
/// Request destruction by the owning world after this frame's sweep
pub const PENDING_DESTROY: &str = "pendingDestroy";

/// Surface key of the Core stage
pub const PRE_UPDATE: &str = "preUpdate";
/// Update chain name of the Core stage
pub const STAGE: &str = "preUpdateCore";
/// Per-frame logic hook
pub const UPDATE: &str = "update";
/// End of frame hook
pub const POST_UPDATE: &str = "postUpdate";

/// Core baseline members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .field(EXISTS, true)
        .field(ALIVE, true)
        .field(FRESH, true)
        .field(PENDING_DESTROY, false)
        .stage(PRE_UPDATE, pre_update)
        .method(UPDATE, update)
        .method(POST_UPDATE, post_update)
}

/// Record the game, place the object and mark it live
///
/// Transform defaults (scale, alpha, visibility, rotation) were already set
/// by the primitive and are left alone.
pub fn init(object: &mut DisplayObject, game: &Arc<Game>, x: f32, y: f32) {
    object.game = Some(Arc::clone(game));
    object.sprite.position = Point2::new(x, y);
    object.fields.set(EXISTS, true);
    object.fields.set(ALIVE, true);
    object.fields.set(FRESH, true);
    object.fields.set(PENDING_DESTROY, false);
}

/// Core stage: `false` when the object should be skipped this frame
///
/// Only reads state; the sole side effect is the `core_checks` counter,
/// which is not touched at all for destroyed objects.
pub fn pre_update(object: &mut DisplayObject) -> bool {
    if object.game.is_none() {
        return false;
    }
    object.core_checks += 1;

    object.in_world
        && object.fields.flag(EXISTS)
        && object.fields.flag(ALIVE)
        && !object.fields.flag(PENDING_DESTROY)
}

fn update(_object: &mut DisplayObject, _args: &[Value]) -> Result<Value, CallError> {
    Ok(Value::Empty)
}

/// Baseline end of frame work: clears `fresh`
pub fn post_update(object: &mut DisplayObject, _args: &[Value]) -> Result<Value, CallError> {
    if object.fields.flag(FRESH) {
        object.fields.set(FRESH, false);
    }
    Ok(Value::Empty)
}
