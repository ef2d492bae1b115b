//! Display object errors

use thiserror::Error;

/// Errors raised while constructing display objects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// Texture key does not resolve in the host's texture cache
    #[error("Texture '{0}' not found in cache")]
    ResourceNotFound(String),
}

/// Errors raised by dynamic member access on a display object
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// No installed capability supplies this member
    #[error("No member named '{0}'")]
    MissingMember(String),

    /// Member is a method and has no value to read
    #[error("Member '{0}' cannot be read")]
    NotReadable(String),

    /// Property has no setter, or the member is a method
    #[error("Member '{0}' is read-only")]
    ReadOnly(String),

    /// Member is a field or property, not a method
    #[error("Member '{0}' is not a method")]
    NotAMethod(String),

    /// Method operates on the owning container's display list
    #[error("Method '{0}' must be called through the owning world")]
    RequiresContainer(String),

    /// Argument list does not match what the member accepts
    #[error("Bad argument for '{member}': expected {expected}")]
    BadArgument {
        /// Member that rejected the arguments
        member: String,
        /// Human readable description of the accepted arguments
        expected: &'static str,
    },
}

impl CallError {
    pub(crate) fn bad_argument(member: &str, expected: &'static str) -> Self {
        Self::BadArgument {
            member: member.to_string(),
            expected,
        }
    }
}
