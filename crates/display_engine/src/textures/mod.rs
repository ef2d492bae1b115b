//! Texture and frame resolution
//!
//! Textures are declared by size and frame layout and shared through an
//! immutable-after-populate [`TextureCache`]. Display objects hold an
//! `Arc<Texture>` plus a copy of the [`Frame`] they currently show.

pub mod frame;
pub mod texture;
pub mod cache;

pub use frame::{Frame, FrameSelector};
pub use texture::{Texture, TextureSource};
pub use cache::{TextureCache, DEFAULT_KEY, MISSING_KEY};
