//! Freebody Core Library
//!
//! Unit-aware physics computation for force problems: quantity arithmetic
//! with SI-base reduction, normalization of heterogeneous vector notations
//! into canonical 2D components, force-system calculations, and
//! deterministic free-body diagram rendering.
//!
//! All operations are synchronous, stateless pure functions; the only
//! process-wide state is the immutable unit registry, built once on first
//! use. The [`tools`] module is the flat-argument surface an external tool
//! dispatcher consumes (strings in, strings or SVG markup out, failures as
//! `"Error: …"` text); the typed modules underneath are the library API.

// Core types and utilities
pub mod core_types;

pub mod diagram;
pub mod error;
pub mod eval;
pub mod forces;
pub mod tools;
pub mod units;
pub mod vector;

// Re-export core types
pub use core_types::{DiagramSpec, Force, ForceEntry, ForceSystemResult, Polar, Vec2};

pub use error::{Error, Result};
pub use units::{Dimension, Quantity, Unit};
pub use vector::{normalize, to_polar, Normalized, VectorInput};
