//! Capability modules and the composition installer
//!
//! Each capability is a self-contained bundle of fields and members that
//! can be grafted onto any display type. Types are assembled once from a
//! [`CapabilityCatalog`] by [`install`]; see the installer for the
//! override rules.

pub mod module;
pub mod catalog;
pub mod installer;

pub mod core;
pub mod angle;
pub mod auto_cull;
pub mod bounds;
pub mod bring_to_top;
pub mod crop;
pub mod destroy;
pub mod fixed_to_camera;
pub mod input_enabled;
pub mod in_world;
pub mod life_span;
pub mod overlap;
pub mod reset;
pub mod scale_min_max;
pub mod smoothed;

pub use module::{CapabilityModule, Member, MethodFn, GetterFn, SetterFn, ListMethodFn, StageFn};
pub use catalog::{Capability, CapabilityCatalog, CapabilitySet, CompositionError};
pub use installer::{install, BehaviorSurface, DisplayType, InstalledMember, Override};
pub use input_enabled::InputHandler;
