//! InWorld: world bounds tracking and camera culling
//!
//! Supplies the first stage of the update chain. It is cheap when neither
//! `autoCull` nor `checkWorldBounds` is set and only computes bounds when
//! one of them is.

use super::module::CapabilityModule;
use super::{auto_cull, life_span};
use crate::display::{DisplayEvent, DisplayObject};

/// Module name
pub const NAME: &str = "InWorld";

/// Track entering and leaving the world bounds
pub const CHECK_WORLD_BOUNDS: &str = "checkWorldBounds";
/// Kill the object when it leaves the world bounds
pub const OUT_OF_BOUNDS_KILL: &str = "outOfBoundsKill";
/// Set once the out-of-bounds event fired, cleared on re-entry
pub const OUT_OF_BOUNDS_FIRED: &str = "outOfBoundsFired";

/// Update chain name of the InWorld stage
pub const STAGE: &str = "preUpdateInWorld";

/// InWorld members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .field(CHECK_WORLD_BOUNDS, false)
        .field(OUT_OF_BOUNDS_KILL, false)
        .field(OUT_OF_BOUNDS_FIRED, false)
        .stage(STAGE, pre_update)
}

/// InWorld stage: `false` when the object is destroyed or was just killed
/// for leaving the world
///
/// Culled objects stay in the frame with `renderable` cleared so their
/// transform keeps updating. Types without the InWorld fields read every
/// switch as off.
pub fn pre_update(object: &mut DisplayObject) -> bool {
    let Some(game) = object.game.as_ref() else {
        return false;
    };
    let auto_cull = object.fields.flag(auto_cull::AUTO_CULL);
    let check_bounds = object.fields.flag(CHECK_WORLD_BOUNDS);
    if !auto_cull && !check_bounds {
        return true;
    }

    let camera = game.camera_view();
    let world = game.world_bounds();
    let bounds = object.bounds();

    if auto_cull {
        object.sprite.renderable = camera.intersects(&bounds);
    }

    if check_bounds {
        let inside = world.intersects(&bounds);
        let fired = object.fields.flag(OUT_OF_BOUNDS_FIRED);
        if fired && inside {
            object.fields.set(OUT_OF_BOUNDS_FIRED, false);
            object.emit(DisplayEvent::EnterBounds);
        } else if !fired && !inside {
            object.fields.set(OUT_OF_BOUNDS_FIRED, true);
            object.emit(DisplayEvent::OutOfBounds);
            if object.fields.flag(OUT_OF_BOUNDS_KILL) {
                life_span::kill(object);
                return false;
            }
        }
    }

    true
}
