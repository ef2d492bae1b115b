//! Composition installer
//!
//! Assembles a display type by merging capability modules into a single
//! behavior surface. Core's members go in first, then each named module in
//! order; a key that recurs is overwritten by the later module. Later
//! modules may override Core members too, this is an intended extension
//! path and not reported as a conflict.

use std::collections::HashMap;

use super::catalog::{Capability, CapabilityCatalog, CapabilitySet, CompositionError};
use super::core;
use super::module::{CapabilityModule, Member, StageFn};
use crate::display::{DisplayObject, FieldSet, ObjectType, UpdateChain, Value};

/// Member as installed on a surface, with the module that supplied it
#[derive(Debug, Clone)]
pub struct InstalledMember {
    /// Name of the module that supplied the member
    pub origin: &'static str,
    /// The member itself
    pub member: Member,
}

/// Record of one member replacing another during installation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    /// Member key
    pub key: &'static str,
    /// Module whose member was replaced
    pub replaced: &'static str,
    /// Module whose member won
    pub by: &'static str,
}

/// Merged member table of a display type
#[derive(Debug, Clone, Default)]
pub struct BehaviorSurface {
    members: HashMap<&'static str, InstalledMember>,
    overrides: Vec<Override>,
}

impl BehaviorSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy every member of a module onto the surface, last write wins
    pub fn apply(&mut self, module: &CapabilityModule) {
        for (key, member) in module.members() {
            self.insert(key, module.name(), member.clone());
        }
    }

    /// Install a single member, replacing any existing one with this key
    pub fn insert(&mut self, key: &'static str, origin: &'static str, member: Member) {
        let installed = InstalledMember { origin, member };
        if let Some(previous) = self.members.insert(key, installed) {
            log::debug!(
                "Member '{}' from '{}' overridden by '{}'",
                key,
                previous.origin,
                origin
            );
            self.overrides.push(Override {
                key,
                replaced: previous.origin,
                by: origin,
            });
        }
    }

    /// Installed member for a key
    pub fn get(&self, key: &str) -> Option<&InstalledMember> {
        self.members.get(key)
    }

    /// Key as stored on the surface, for use as a field key
    pub fn key(&self, key: &str) -> Option<&'static str> {
        self.members.get_key_value(key).map(|(stored, _)| *stored)
    }

    /// Module that supplied a member
    pub fn origin(&self, key: &str) -> Option<&'static str> {
        self.members.get(key).map(|installed| installed.origin)
    }

    /// Whether a member is installed
    pub fn contains(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    /// Installed keys, sorted
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.members.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Overrides that happened during installation, in order
    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }

    /// Number of installed members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the surface holds no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Fresh field set holding every field default
    pub fn instantiate_fields(&self) -> FieldSet {
        self.members
            .iter()
            .filter_map(|(key, installed)| match &installed.member {
                Member::Field(default) => Some((*key, default.clone())),
                _ => None,
            })
            .collect()
    }
}

/// Concrete display type assembled from capabilities
///
/// Built once per kind and shared by every instance through an `Arc`.
#[derive(Debug, Clone)]
pub struct DisplayType {
    object_type: ObjectType,
    capabilities: Vec<&'static str>,
    flags: CapabilitySet,
    surface: BehaviorSurface,
    chain: UpdateChain<DisplayObject>,
}

impl DisplayType {
    /// Runtime type tag
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Type name
    pub fn name(&self) -> &'static str {
        self.object_type.name()
    }

    /// Installed capability names in installation order
    pub fn capabilities(&self) -> &[&'static str] {
        &self.capabilities
    }

    /// Whether a built-in capability is installed
    pub fn has(&self, capability: Capability) -> bool {
        self.flags.has(capability)
    }

    /// Built-in capabilities installed on this type
    pub fn capability_set(&self) -> CapabilitySet {
        self.flags
    }

    /// Merged member table
    pub fn surface(&self) -> &BehaviorSurface {
        &self.surface
    }

    /// Per-frame update chain
    pub fn update_chain(&self) -> &UpdateChain<DisplayObject> {
        &self.chain
    }

    /// Replace the update chain
    ///
    /// Each stage is also installed on the surface under its own name, and
    /// `preUpdate` is bound to the whole chain, both attributed to this type.
    pub fn with_update_chain(mut self, chain: UpdateChain<DisplayObject>) -> Self {
        let origin = self.name();
        for (name, stage) in chain.stages() {
            self.surface.insert(name, origin, Member::Stage(stage));
        }
        self.surface.insert(PRE_UPDATE, origin, Member::Method(run_update_chain));
        self.chain = chain;
        self
    }

    /// Add a member attributed to this type itself
    pub fn with_member(mut self, key: &'static str, member: Member) -> Self {
        let origin = self.name();
        self.surface.insert(key, origin, member);
        self
    }
}

/// Surface key of the composed per-frame entry point
pub const PRE_UPDATE: &str = "preUpdate";

fn run_update_chain(object: &mut DisplayObject, _args: &[Value]) -> Result<Value, crate::display::CallError> {
    Ok(Value::Bool(object.pre_update()))
}

/// Assemble a display type from capability names
///
/// Every name is resolved before anything is installed, so an unknown name
/// fails the whole assembly. The default update chain holds only the Core
/// stage.
pub fn install(
    object_type: ObjectType,
    catalog: &CapabilityCatalog,
    names: &[&str],
) -> Result<DisplayType, CompositionError> {
    let modules = names
        .iter()
        .map(|name| catalog.get(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut surface = BehaviorSurface::new();
    surface.apply(&core::module());

    let mut capabilities = Vec::with_capacity(modules.len());
    let mut flags = CapabilitySet::empty();
    for module in modules {
        surface.apply(module);
        capabilities.push(module.name());
        if let Some(capability) = Capability::from_name(module.name()) {
            flags |= capability.flag();
        }
    }

    log::debug!(
        "Assembled {} from {} capabilities ({} members, {} overrides)",
        object_type,
        capabilities.len(),
        surface.len(),
        surface.overrides().len()
    );

    Ok(DisplayType {
        object_type,
        capabilities,
        flags,
        surface,
        chain: UpdateChain::new().then(core::STAGE, core::pre_update as StageFn),
    })
}
