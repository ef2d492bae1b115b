//! BringToTop: display order changes
//!
//! These members act on the owning world's display list, so they are
//! called through [`crate::world::World::call_list`].

use super::module::CapabilityModule;
use crate::foundation::collections::DisplayList;

/// Module name
pub const NAME: &str = "BringToTop";

/// Move to the top of the display list
pub const BRING_TO_TOP: &str = "bringToTop";
/// Move to the bottom of the display list
pub const SEND_TO_BACK: &str = "sendToBack";
/// Swap with the object above
pub const MOVE_UP: &str = "moveUp";
/// Swap with the object below
pub const MOVE_DOWN: &str = "moveDown";

/// BringToTop members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .list_method(BRING_TO_TOP, DisplayList::bring_to_top)
        .list_method(SEND_TO_BACK, DisplayList::send_to_back)
        .list_method(MOVE_UP, DisplayList::move_up)
        .list_method(MOVE_DOWN, DisplayList::move_down)
}
