//! Lifecycle events queued by display objects

/// Event raised by a capability on a display object
///
/// Objects queue events; the host drains them after each sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayEvent {
    /// Object was killed (alive and exists cleared)
    Killed,
    /// Object was revived
    Revived,
    /// Object was destroyed and released its game reference
    Destroyed,
    /// Object left the world bounds
    OutOfBounds,
    /// Object re-entered the world bounds
    EnterBounds,
    /// Input handling was started
    InputEnabled,
    /// Input handling was stopped
    InputDisabled,
}
