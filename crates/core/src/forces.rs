//! Force-system calculations
//!
//! Pure functions over force values and vectors: weight, friction, tension,
//! normal force on an incline, and net-force summation. No hidden state and
//! no rounding; results carry full `f64` precision and the caller formats.

use crate::core_types::{Force, ForceSystemResult, Vec2};
use crate::vector::{normalize, VectorInput};

/// Standard gravitational acceleration used as the default, in m/s².
pub const GRAVITY: f64 = 9.8;

/// Weight force (N) as mass × gravity.
pub fn weight(mass_kg: f64, gravity: f64) -> f64 {
    mass_kg * gravity
}

/// Friction force (N) as μ × normal force.
pub fn friction(normal_force: f64, coefficient: f64) -> f64 {
    normal_force * coefficient
}

/// The applied force, unchanged (N).
pub fn applied_force(force: f64) -> f64 {
    force
}

/// Tension in a rope supporting a hanging mass (N).
///
/// A supplied weight takes precedence over a supplied mass; with neither,
/// the tension is zero.
pub fn tension(weight_n: Option<f64>, mass_kg: Option<f64>, gravity: f64) -> f64 {
    if let Some(w) = weight_n {
        return w;
    }
    if let Some(m) = mass_kg {
        return m * gravity;
    }
    0.0
}

/// Normal force (N): weight on a flat surface, `m·g·cos(θ)` on an incline.
pub fn normal_force(mass_kg: f64, gravity: f64, incline_angle_deg: f64) -> f64 {
    let theta = incline_angle_deg.to_radians();
    if incline_angle_deg == 0.0 {
        mass_kg * gravity
    } else {
        mass_kg * gravity * theta.cos()
    }
}

/// Net force of signed 1-D force values (positive right/up, negative
/// left/down).
pub fn net_force_1d(forces: &[f64]) -> f64 {
    forces.iter().sum()
}

/// Componentwise vector sum. Empty input sums to the zero vector.
pub fn net_force(vectors: &[Vec2]) -> Vec2 {
    vectors.iter().fold(Vec2::zeros(), |acc, v| acc + v)
}

/// Describe the canonical force relationships of a scenario.
///
/// This is a keyword lookup against a fixed table of equilibrium
/// relationships, not inference; unmatched text gets a generic prompt.
pub fn force_breakdown(situation: &str) -> &'static str {
    let situation = situation.to_lowercase();
    if situation.contains("hanging") || situation.contains("elevator") {
        return "If at rest or moving at constant velocity, Tension = Weight = m * g";
    }
    if situation.contains("block on table") {
        return "Normal force = Weight, Friction = μ * Normal force";
    }
    "Describe your situation with objects, surfaces, and directions for a breakdown."
}

impl ForceSystemResult {
    /// Normalize a list of vector inputs tolerantly and sum them.
    ///
    /// Malformed entries degrade to zero vectors (see
    /// [`normalize`](crate::vector::normalize)) so one bad entry cannot abort
    /// the system. Entries get generated `F{n}` labels.
    pub fn resolve(inputs: &[VectorInput]) -> ForceSystemResult {
        let components: Vec<Force> = inputs
            .iter()
            .enumerate()
            .map(|(i, input)| Force::new(format!("F{}", i + 1), normalize(input).vector))
            .collect();
        let net = net_force(&components.iter().map(|f| f.vector).collect::<Vec<_>>());
        ForceSystemResult { net, components }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::to_polar;
    use approx::assert_relative_eq;

    #[test]
    fn test_weight_default_gravity() {
        assert_eq!(weight(10.0, GRAVITY), 98.0);
    }

    #[test]
    fn test_friction_scales_normal() {
        assert_relative_eq!(friction(98.0, 0.3), 29.4);
    }

    #[test]
    fn test_tension_weight_takes_precedence() {
        assert_eq!(tension(Some(50.0), Some(10.0), GRAVITY), 50.0);
        assert_eq!(tension(None, Some(10.0), GRAVITY), 98.0);
        assert_eq!(tension(None, None, GRAVITY), 0.0);
    }

    #[test]
    fn test_normal_force_flat_and_inclined() {
        assert_eq!(normal_force(5.0, 9.8, 0.0), 49.0);
        // 5 * 9.8 * cos(30°) ≈ 42.44
        assert_relative_eq!(
            normal_force(5.0, 9.8, 30.0),
            42.435244785437404,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_net_force_components_and_polar() {
        let net = net_force(&[Vec2::new(3.0, 4.0), Vec2::new(0.0, 5.0)]);
        assert_eq!(net, Vec2::new(3.0, 9.0));
        let polar = to_polar(net.x, net.y);
        assert_relative_eq!(polar.magnitude, 9.486832980505138, max_relative = 1e-12);
        assert_relative_eq!(polar.angle_deg, 71.56505117707799, max_relative = 1e-12);

        assert_eq!(net_force(&[]), Vec2::zeros());
        assert_relative_eq!(net_force_1d(&[10.0, -4.0, 1.5]), 7.5);
    }

    #[test]
    fn test_force_breakdown_table() {
        assert!(force_breakdown("A mass hanging from a rope").contains("Tension = Weight"));
        assert!(force_breakdown("an ELEVATOR at rest").contains("Tension = Weight"));
        assert!(force_breakdown("block on table with friction").contains("Normal force = Weight"));
        assert!(force_breakdown("two carts colliding").contains("Describe your situation"));
    }

    #[test]
    fn test_resolve_tolerates_bad_entries() {
        let inputs = [
            VectorInput::Components([3.0, 4.0]),
            VectorInput::Text("garbled".to_string()),
            VectorInput::Scalar(2.0),
        ];
        let system = ForceSystemResult::resolve(&inputs);
        assert_eq!(system.net, Vec2::new(5.0, 4.0));
        assert_eq!(system.components.len(), 3);
        assert_eq!(system.components[1].vector, Vec2::zeros());
        assert_eq!(system.components[0].label.as_deref(), Some("F1"));
    }
}
