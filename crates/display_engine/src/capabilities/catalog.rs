//! The capability catalog
//!
//! Maps capability names to their modules. Entity types are assembled from
//! names looked up here; a name missing from the catalog is a
//! configuration error raised at type-assembly time.

use std::collections::HashMap;

use bitflags::bitflags;
use thiserror::Error;

use super::module::CapabilityModule;
use super::{
    angle, auto_cull, bounds, bring_to_top, crop, destroy, fixed_to_camera, in_world,
    input_enabled, life_span, overlap, reset, scale_min_max, smoothed,
};

/// Errors raised while assembling a display type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// Capability name is not in the catalog
    #[error("Unknown capability '{0}'")]
    UnknownCapability(String),
}

/// Built-in capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Rotation in degrees
    Angle,
    /// Camera culling
    AutoCull,
    /// Edge and offset properties
    Bounds,
    /// Display order changes
    BringToTop,
    /// Texture cropping
    Crop,
    /// Teardown
    Destroy,
    /// Camera pinning
    FixedToCamera,
    /// Input handler
    InputEnabled,
    /// World bounds tracking
    InWorld,
    /// Timed life, kill and revive
    LifeSpan,
    /// Bounds overlap test
    Overlap,
    /// Reset to a fresh state
    Reset,
    /// Scale clamping
    ScaleMinMax,
    /// Texture smoothing
    Smoothed,
}

impl Capability {
    /// Every built-in capability
    pub const ALL: [Capability; 14] = [
        Self::Angle,
        Self::AutoCull,
        Self::Bounds,
        Self::BringToTop,
        Self::Crop,
        Self::Destroy,
        Self::FixedToCamera,
        Self::InputEnabled,
        Self::InWorld,
        Self::LifeSpan,
        Self::Overlap,
        Self::Reset,
        Self::ScaleMinMax,
        Self::Smoothed,
    ];

    /// Catalog name
    pub fn name(self) -> &'static str {
        match self {
            Self::Angle => angle::NAME,
            Self::AutoCull => auto_cull::NAME,
            Self::Bounds => bounds::NAME,
            Self::BringToTop => bring_to_top::NAME,
            Self::Crop => crop::NAME,
            Self::Destroy => destroy::NAME,
            Self::FixedToCamera => fixed_to_camera::NAME,
            Self::InputEnabled => input_enabled::NAME,
            Self::InWorld => in_world::NAME,
            Self::LifeSpan => life_span::NAME,
            Self::Overlap => overlap::NAME,
            Self::Reset => reset::NAME,
            Self::ScaleMinMax => scale_min_max::NAME,
            Self::Smoothed => smoothed::NAME,
        }
    }

    /// Look up a built-in capability by catalog name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|capability| capability.name() == name)
    }

    /// Module implementing this capability
    pub fn module(self) -> CapabilityModule {
        match self {
            Self::Angle => angle::module(),
            Self::AutoCull => auto_cull::module(),
            Self::Bounds => bounds::module(),
            Self::BringToTop => bring_to_top::module(),
            Self::Crop => crop::module(),
            Self::Destroy => destroy::module(),
            Self::FixedToCamera => fixed_to_camera::module(),
            Self::InputEnabled => input_enabled::module(),
            Self::InWorld => in_world::module(),
            Self::LifeSpan => life_span::module(),
            Self::Overlap => overlap::module(),
            Self::Reset => reset::module(),
            Self::ScaleMinMax => scale_min_max::module(),
            Self::Smoothed => smoothed::module(),
        }
    }

    /// Flag of this capability in a [`CapabilitySet`]
    pub fn flag(self) -> CapabilitySet {
        match self {
            Self::Angle => CapabilitySet::ANGLE,
            Self::AutoCull => CapabilitySet::AUTO_CULL,
            Self::Bounds => CapabilitySet::BOUNDS,
            Self::BringToTop => CapabilitySet::BRING_TO_TOP,
            Self::Crop => CapabilitySet::CROP,
            Self::Destroy => CapabilitySet::DESTROY,
            Self::FixedToCamera => CapabilitySet::FIXED_TO_CAMERA,
            Self::InputEnabled => CapabilitySet::INPUT_ENABLED,
            Self::InWorld => CapabilitySet::IN_WORLD,
            Self::LifeSpan => CapabilitySet::LIFE_SPAN,
            Self::Overlap => CapabilitySet::OVERLAP,
            Self::Reset => CapabilitySet::RESET,
            Self::ScaleMinMax => CapabilitySet::SCALE_MIN_MAX,
            Self::Smoothed => CapabilitySet::SMOOTHED,
        }
    }
}

bitflags! {
    /// Set of built-in capabilities installed on a type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CapabilitySet: u16 {
        /// [`Capability::Angle`]
        const ANGLE = 1 << 0;
        /// [`Capability::AutoCull`]
        const AUTO_CULL = 1 << 1;
        /// [`Capability::Bounds`]
        const BOUNDS = 1 << 2;
        /// [`Capability::BringToTop`]
        const BRING_TO_TOP = 1 << 3;
        /// [`Capability::Crop`]
        const CROP = 1 << 4;
        /// [`Capability::Destroy`]
        const DESTROY = 1 << 5;
        /// [`Capability::FixedToCamera`]
        const FIXED_TO_CAMERA = 1 << 6;
        /// [`Capability::InputEnabled`]
        const INPUT_ENABLED = 1 << 7;
        /// [`Capability::InWorld`]
        const IN_WORLD = 1 << 8;
        /// [`Capability::LifeSpan`]
        const LIFE_SPAN = 1 << 9;
        /// [`Capability::Overlap`]
        const OVERLAP = 1 << 10;
        /// [`Capability::Reset`]
        const RESET = 1 << 11;
        /// [`Capability::ScaleMinMax`]
        const SCALE_MIN_MAX = 1 << 12;
        /// [`Capability::Smoothed`]
        const SMOOTHED = 1 << 13;
    }
}

impl CapabilitySet {
    /// Whether the set contains a capability
    pub fn has(self, capability: Capability) -> bool {
        self.contains(capability.flag())
    }
}

/// Name to module lookup used by the installer
#[derive(Debug, Clone, Default)]
pub struct CapabilityCatalog {
    modules: HashMap<&'static str, CapabilityModule>,
}

impl CapabilityCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding every built-in capability
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for capability in Capability::ALL {
            catalog.register(capability.module());
        }
        catalog
    }

    /// Add a module, returning the module it replaced
    pub fn register(&mut self, module: CapabilityModule) -> Option<CapabilityModule> {
        let replaced = self.modules.insert(module.name(), module);
        if let Some(previous) = &replaced {
            log::debug!("Capability '{}' replaced in catalog", previous.name());
        }
        replaced
    }

    /// Look up a module by name
    pub fn get(&self, name: &str) -> Result<&CapabilityModule, CompositionError> {
        self.modules
            .get(name)
            .ok_or_else(|| CompositionError::UnknownCapability(name.to_string()))
    }

    /// Whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.modules.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_has_every_capability() {
        let catalog = CapabilityCatalog::standard();
        for capability in Capability::ALL {
            assert!(catalog.contains(capability.name()), "{}", capability.name());
            assert_eq!(catalog.get(capability.name()).unwrap().name(), capability.name());
        }
        assert_eq!(catalog.names().len(), Capability::ALL.len());
    }

    #[test]
    fn test_unknown_name() {
        let catalog = CapabilityCatalog::standard();
        assert_eq!(
            catalog.get("Teleport").unwrap_err(),
            CompositionError::UnknownCapability("Teleport".to_string())
        );
    }

    #[test]
    fn test_name_round_trip() {
        for capability in Capability::ALL {
            assert_eq!(Capability::from_name(capability.name()), Some(capability));
        }
        assert_eq!(Capability::from_name("Core"), None);
    }

    #[test]
    fn test_capability_set() {
        let set = Capability::Crop.flag() | Capability::Angle.flag();
        assert!(set.has(Capability::Crop));
        assert!(!set.has(Capability::Reset));
    }
}
