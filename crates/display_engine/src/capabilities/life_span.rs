//! LifeSpan: timed life, kill and revive

use super::module::CapabilityModule;
use super::{core, reset};
use crate::display::{CallError, DisplayEvent, DisplayObject, Value};

/// Module name
pub const NAME: &str = "LifeSpan";

/// Remaining life in milliseconds; 0 or less means unlimited
pub const LIFESPAN: &str = "lifespan";
/// Kill the object
pub const KILL: &str = "kill";
/// Bring a killed object back
pub const REVIVE: &str = "revive";

/// Update chain name of the LifeSpan stage
pub const STAGE: &str = "preUpdateLifeSpan";

/// Health given by `revive` when none is passed
pub const DEFAULT_REVIVE_HEALTH: f32 = 100.0;

/// LifeSpan members
///
/// Re-declares Core's `alive` field with the same default.
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .field(core::ALIVE, true)
        .field(LIFESPAN, 0.0)
        .stage(STAGE, pre_update)
        .method(KILL, kill_method)
        .method(REVIVE, revive_method)
}

/// LifeSpan stage: counts the lifespan down by the frame's elapsed time
/// and kills the object when it runs out
pub fn pre_update(object: &mut DisplayObject) -> bool {
    let Some(elapsed_ms) = object.game.as_ref().map(|game| game.clock().elapsed_ms) else {
        return false;
    };
    let lifespan = object.fields.number(LIFESPAN).unwrap_or(0.0);
    if lifespan > 0.0 {
        let remaining = lifespan - elapsed_ms;
        object.fields.set(LIFESPAN, remaining);
        if remaining <= 0.0 {
            kill(object);
            return false;
        }
    }
    true
}

/// Clear `alive`, `exists` and visibility
pub fn kill(object: &mut DisplayObject) {
    object.fields.set(core::ALIVE, false);
    object.fields.set(core::EXISTS, false);
    object.sprite.visible = false;
    object.emit(DisplayEvent::Killed);
}

/// Restore `alive`, `exists` and visibility with the given health
pub fn revive(object: &mut DisplayObject, health: f32) {
    object.fields.set(core::ALIVE, true);
    object.fields.set(core::EXISTS, true);
    object.sprite.visible = true;
    if object.fields.contains(reset::HEALTH) {
        object.fields.set(reset::HEALTH, health);
    }
    object.emit(DisplayEvent::Revived);
}

fn kill_method(object: &mut DisplayObject, _args: &[Value]) -> Result<Value, CallError> {
    kill(object);
    Ok(Value::Empty)
}

fn revive_method(object: &mut DisplayObject, args: &[Value]) -> Result<Value, CallError> {
    let health = match args {
        [] => DEFAULT_REVIVE_HEALTH,
        [Value::Number(health)] => *health,
        _ => return Err(CallError::bad_argument(REVIVE, "an optional health number")),
    };
    revive(object, health);
    Ok(Value::Empty)
}
