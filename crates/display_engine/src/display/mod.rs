//! Display objects
//!
//! Composed display object instances, the rendering primitive they wrap,
//! the dynamic values in their field sets and the update chain driving
//! them each frame. [`Image`] is the concrete static-image kind.

pub mod error;
pub mod value;
pub mod object_type;
pub mod events;
pub mod sprite;
pub mod update_chain;
pub mod object;
pub mod image;

#[cfg(test)]
mod tests;

pub use error::{CallError, DisplayError};
pub use value::{FieldSet, Value};
pub use object_type::ObjectType;
pub use events::DisplayEvent;
pub use sprite::{ScaleMode, Sprite};
pub use update_chain::{ChainOutcome, Stage, UpdateChain, UpdateOutcome};
pub use object::DisplayObject;
pub use image::{Image, IMAGE_CAPABILITIES};
