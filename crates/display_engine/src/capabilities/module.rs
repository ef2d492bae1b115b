//! Capability modules: named bundles of fields and members

use crate::display::{CallError, DisplayObject, Value};
use crate::foundation::collections::{DisplayList, ObjectId};

/// Method callable on a single object
pub type MethodFn = fn(&mut DisplayObject, &[Value]) -> Result<Value, CallError>;

/// Property getter
pub type GetterFn = fn(&DisplayObject) -> Value;

/// Property setter
pub type SetterFn = fn(&mut DisplayObject, Value) -> Result<(), CallError>;

/// Method acting on the display list of the object's owning world
pub type ListMethodFn = fn(&mut DisplayList, ObjectId) -> bool;

/// Update chain stage: `true` to continue, `false` to halt this frame
pub type StageFn = fn(&mut DisplayObject) -> bool;

/// One entry a capability contributes to a type's behavior surface
#[derive(Clone)]
pub enum Member {
    /// Per-instance field with its default value
    Field(Value),
    /// Method on the object
    Method(MethodFn),
    /// Computed property
    Property {
        /// Getter
        get: GetterFn,
        /// Setter, `None` for read-only properties
        set: Option<SetterFn>,
    },
    /// Method on the owning world's display list
    ListMethod(ListMethodFn),
    /// Update chain stage, callable on its own
    Stage(StageFn),
}

impl Member {
    /// Short description of the member kind, for logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::Method(_) => "method",
            Self::Property { .. } => "property",
            Self::ListMethod(_) => "list method",
            Self::Stage(_) => "stage",
        }
    }
}

impl std::fmt::Debug for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(default) => f.debug_tuple("Field").field(default).finish(),
            other => f.write_str(other.kind_name()),
        }
    }
}

/// Named, independently defined bundle of members
///
/// Members keep their declaration order; within one module a repeated key
/// replaces the earlier declaration.
#[derive(Debug, Clone)]
pub struct CapabilityModule {
    name: &'static str,
    members: Vec<(&'static str, Member)>,
}

impl CapabilityModule {
    /// Create an empty module
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            members: Vec::new(),
        }
    }

    /// Declare a field with its default value
    pub fn field(self, key: &'static str, default: impl Into<Value>) -> Self {
        self.member(key, Member::Field(default.into()))
    }

    /// Declare a method
    pub fn method(self, key: &'static str, method: MethodFn) -> Self {
        self.member(key, Member::Method(method))
    }

    /// Declare a read-only property
    pub fn getter(self, key: &'static str, get: GetterFn) -> Self {
        self.member(key, Member::Property { get, set: None })
    }

    /// Declare a read-write property
    pub fn property(self, key: &'static str, get: GetterFn, set: SetterFn) -> Self {
        self.member(key, Member::Property { get, set: Some(set) })
    }

    /// Declare a display list method
    pub fn list_method(self, key: &'static str, method: ListMethodFn) -> Self {
        self.member(key, Member::ListMethod(method))
    }

    /// Declare an update chain stage
    pub fn stage(self, key: &'static str, stage: StageFn) -> Self {
        self.member(key, Member::Stage(stage))
    }

    /// Declare any member
    pub fn member(mut self, key: &'static str, member: Member) -> Self {
        self.members.retain(|(existing, _)| *existing != key);
        self.members.push((key, member));
        self
    }

    /// Catalog name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Members in declaration order
    pub fn members(&self) -> impl Iterator<Item = (&'static str, &Member)> + '_ {
        self.members.iter().map(|(key, member)| (*key, member))
    }

    /// Whether the module declares a member
    pub fn defines(&self, key: &str) -> bool {
        self.members.iter().any(|(existing, _)| *existing == key)
    }
}
