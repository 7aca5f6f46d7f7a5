//! Vector type alias for 2D forces and the derived polar form.

use serde::{Deserialize, Serialize};

/// 2D vector type for force components.
///
/// This is a simple alias for `nalgebra::Vector2<f64>`, used throughout the
/// crate for force components in Newtons with +x right and +y up.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Polar form of a 2D vector: magnitude plus angle in degrees CCW from +x.
///
/// Always derived from components on demand, never stored alongside them, so
/// the two representations cannot drift apart.
///
/// # Invariants
/// - `magnitude >= 0`
/// - `angle_deg` in `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    /// Euclidean norm of the vector.
    pub magnitude: f64,
    /// Direction in degrees, counter-clockwise from the +x axis.
    pub angle_deg: f64,
}
