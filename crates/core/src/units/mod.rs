//! Unit-aware quantity arithmetic and SI-base reduction
//!
//! The registry maps unit tokens to dimensions and scale factors, the
//! dimension type tracks exponents over the SI base units, and [`Quantity`]
//! carries values through parsing, conversion, and base reduction.

pub mod dimension;
pub mod quantity;
pub mod registry;

pub use dimension::Dimension;
pub use quantity::{format_sig, Quantity, Unit};
pub use registry::{lookup, UnitDef};
