//! # Display Engine
//!
//! Composable 2D display objects for a frame-driven scene.
//!
//! ## Features
//!
//! - **Capability composition**: display types are assembled once from a
//!   catalog of independent capability modules, last module wins
//! - **Short-circuit update chain**: explicit ordered stages, halting on
//!   the first `false`
//! - **Texture cache**: textures declared by size and frame layout, frames
//!   resolved by name or index with default fallback
//! - **World**: display order, per-frame sweep and removal of destroyed
//!   objects
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use display_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let game = Game::new(GameConfig::default())?;
//!     let mut world = World::new(game.clone());
//!
//!     let image = Image::new(&game, Some(100.0), Some(50.0), "__default", None::<usize>)?;
//!     world.add(image);
//!
//!     let stats = world.step()?;
//!     println!("{} ready", stats.ready);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod textures;
pub mod capabilities;
pub mod display;
pub mod world;

mod game;

pub use game::Game;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Game,
        capabilities::{Capability, CapabilityCatalog, CompositionError, DisplayType, install},
        config::{Config, ConfigError, GameConfig, TextureEntry, TextureLayout},
        display::{
            CallError, DisplayError, DisplayEvent, DisplayObject, Image, ObjectType, UpdateChain,
            UpdateOutcome, Value, IMAGE_CAPABILITIES,
        },
        foundation::math::{Point2, Rect, Vec2},
        textures::{Frame, FrameSelector, Texture, TextureCache, TextureSource},
        world::{FrameStats, World},
    };
}
