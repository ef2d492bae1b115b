//! InputEnabled: per-object input handler state
//!
//! Only the handler's state lives here; pointer hit testing and event
//! dispatch belong to the input manager.

use super::module::CapabilityModule;
use crate::display::{CallError, DisplayEvent, DisplayObject, Value};

/// Module name
pub const NAME: &str = "InputEnabled";

/// The object's input handler, empty until input is first enabled
pub const INPUT: &str = "input";
/// Whether the input handler exists and is enabled
pub const INPUT_ENABLED: &str = "inputEnabled";

/// Input handler attached to a display object
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputHandler {
    /// Whether the handler receives input
    pub enabled: bool,
    /// Priority among overlapping objects, higher wins
    pub priority_id: u32,
    /// Show a hand cursor while hovered
    pub use_hand_cursor: bool,
    /// Use alpha-tested clicks
    pub pixel_perfect_click: bool,
    /// Use alpha-tested hover
    pub pixel_perfect_over: bool,
}

impl InputHandler {
    /// Start receiving input
    pub fn start(&mut self, priority_id: u32) {
        self.priority_id = priority_id;
        self.enabled = true;
    }

    /// Stop receiving input
    pub fn stop(&mut self) {
        self.enabled = false;
    }
}

/// InputEnabled members
pub fn module() -> CapabilityModule {
    CapabilityModule::new(NAME)
        .field(INPUT, Value::Empty)
        .property(INPUT_ENABLED, get_enabled, set_enabled)
}

fn handler(object: &DisplayObject) -> Option<&InputHandler> {
    object.fields.get(INPUT).and_then(Value::as_input)
}

fn get_enabled(object: &DisplayObject) -> Value {
    Value::Bool(handler(object).is_some_and(|handler| handler.enabled))
}

fn set_enabled(object: &mut DisplayObject, value: Value) -> Result<(), CallError> {
    let enable = value
        .as_bool()
        .ok_or_else(|| CallError::bad_argument(INPUT_ENABLED, "a flag"))?;
    let event = match handler(object).cloned() {
        None if enable => {
            let mut created = InputHandler::default();
            created.start(0);
            object.fields.set(INPUT, Value::Input(created));
            DisplayEvent::InputEnabled
        }
        Some(mut existing) if enable && !existing.enabled => {
            existing.start(existing.priority_id);
            object.fields.set(INPUT, Value::Input(existing));
            DisplayEvent::InputEnabled
        }
        Some(mut existing) if !enable && existing.enabled => {
            existing.stop();
            object.fields.set(INPUT, Value::Input(existing));
            DisplayEvent::InputDisabled
        }
        _ => return Ok(()),
    };
    object.emit(event);
    Ok(())
}
