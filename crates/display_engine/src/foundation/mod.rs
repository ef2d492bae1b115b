//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - 2D math types and rectangle geometry
//! - Handle-based collections
//! - Simulation frame clock
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod time;
pub mod logging;
