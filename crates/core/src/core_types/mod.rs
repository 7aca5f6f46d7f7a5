//! Core types and utilities

pub mod force;
pub mod vec2;

pub use force::{DiagramSpec, Force, ForceEntry, ForceSystemResult};
pub use vec2::{Polar, Vec2};
