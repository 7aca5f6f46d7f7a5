//! Flat-argument operation surface
//!
//! These are the functions an external tool dispatcher calls: each takes a
//! flat set of named arguments (vector arguments arrive as JSON-like
//! values), returns a formatted string or SVG markup, and reports failures
//! as `"Error: …"` text rather than raising across the tool boundary.
//!
//! Display precision here follows the formatting contract: 6 significant
//! digits for conversions, 4 for derived physics results, two fixed decimals
//! for vector component readouts.

use serde_json::Value;

use crate::core_types::{DiagramSpec, ForceEntry, Vec2};
use crate::diagram;
use crate::eval;
use crate::forces;
use crate::units::{format_sig, Quantity};
use crate::vector::{self, normalize, VectorInput};

/// Shape hint returned when a vector argument is unusable.
const VECTOR_SHAPE_HINT: &str =
    "Error: Each vector must be components [x, y] (in N), or dict with 'magnitude' and 'angle_deg'.";

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Convert a value with units to another unit (`100 g` → `kg`).
pub fn convert_units(value: f64, from_unit: &str, to_unit: &str) -> String {
    let quantity = match Quantity::parse(from_unit) {
        // A numeric factor in the unit text ("2 m") scales the value
        Ok(parsed) => Quantity {
            value: value * parsed.value,
            unit: parsed.unit,
        },
        Err(e) => return format!("Error: {e}"),
    };
    match quantity.convert(to_unit) {
        Ok(converted) => format!(
            "{value} {from_unit} = {} {to_unit}",
            format_sig(converted.value, 6)
        ),
        Err(e) => format!("Error: {e}"),
    }
}

/// Break a unit down into SI base units (`N` → `kg·m/s^2`).
pub fn simplify_unit(unit_expr: &str) -> String {
    match Quantity::parse(unit_expr) {
        Ok(q) => {
            let base = q.reduce_to_base();
            format!(
                "{unit_expr} = {} {}",
                format_sig(base.value, 6),
                base.unit.label
            )
        }
        Err(e) => format!("Error: {e}"),
    }
}

/// Reduce a full quantity expression to SI base units.
pub fn simplify_expression(expr: &str) -> String {
    simplify_unit(expr)
}

/// Force from mass and acceleration in arbitrary units, converted to SI
/// before multiplying.
pub fn smart_force(
    mass_value: f64,
    mass_unit: &str,
    accel_value: f64,
    accel_unit: Option<&str>,
) -> String {
    let accel_unit = accel_unit.unwrap_or("m/s^2");
    let mass = match Quantity::parse(&format!("{mass_value} {mass_unit}"))
        .and_then(|q| q.convert("kg"))
    {
        Ok(q) => q,
        Err(e) => return format!("Error: {e}"),
    };
    let accel = match Quantity::parse(&format!("{accel_value} {accel_unit}"))
        .and_then(|q| q.convert("m/s^2"))
    {
        Ok(q) => q,
        Err(e) => return format!("Error: {e}"),
    };
    let force = mass.value * accel.value;
    format!(
        "Force = {} kg × {} m/s² = {} N\n(Simplified: {} kg·m/s^2)",
        format_sig(mass.value, 4),
        format_sig(accel.value, 4),
        format_sig(force, 4),
        format_sig(force, 4)
    )
}

// ---------------------------------------------------------------------------
// Math
// ---------------------------------------------------------------------------

/// Evaluate a math expression, with or without units.
pub fn evaluate(expr: &str) -> String {
    match eval::evaluate(expr) {
        Ok(rendered) => rendered,
        Err(e) => format!("Error: {e}"),
    }
}

/// Evaluate a quantity expression and convert the answer to another unit.
pub fn convert_answer(expr: &str, to_unit: &str) -> String {
    match Quantity::parse(expr).and_then(|q| q.convert(to_unit)) {
        Ok(converted) => format!("{expr} = {} {to_unit}", format_sig(converted.value, 6)),
        Err(e) => format!("Error: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Vectors
// ---------------------------------------------------------------------------

/// Add two force vectors given in any supported notation.
pub fn add_vectors(vector1: &Value, vector2: &Value) -> String {
    combine_vectors(vector1, vector2, 1.0, "Sum of vectors")
}

/// Subtract `vector2` from `vector1`.
pub fn subtract_vectors(vector1: &Value, vector2: &Value) -> String {
    combine_vectors(vector1, vector2, -1.0, "Difference of vectors")
}

fn combine_vectors(vector1: &Value, vector2: &Value, sign: f64, heading: &str) -> String {
    let (Ok(v1), Ok(v2)) = (
        VectorInput::from_value(vector1).resolve(),
        VectorInput::from_value(vector2).resolve(),
    ) else {
        return VECTOR_SHAPE_HINT.to_string();
    };
    let result = v1 + v2 * sign;
    format!("{heading}:\n{}", vector_display(result))
}

/// Convert magnitude/angle to components.
pub fn to_components(magnitude: f64, angle_deg: f64) -> String {
    let v = vector::from_polar(magnitude, angle_deg);
    format!("Components: ({:.2} N, {:.2} N)", v.x, v.y)
}

/// Convert components to magnitude and direction.
pub fn to_polar(x: f64, y: f64) -> String {
    let polar = vector::to_polar(x, y);
    format!(
        "Magnitude: {:.2} N\nDirection: {:.2}° CCW from +x axis",
        polar.magnitude, polar.angle_deg
    )
}

/// Components, magnitude, and direction of a vector in one readout.
fn vector_display(v: Vec2) -> String {
    let polar = vector::to_polar(v.x, v.y);
    format!(
        "Components: ({:.2} N, {:.2} N)\nMagnitude: {:.2} N\nDirection: {:.2}° CCW from +x axis",
        v.x, v.y, polar.magnitude, polar.angle_deg
    )
}

// ---------------------------------------------------------------------------
// Forces
// ---------------------------------------------------------------------------

/// Weight force (N); gravity defaults to 9.8 m/s².
pub fn weight(mass_kg: f64, gravity: Option<f64>) -> String {
    format_sig(
        forces::weight(mass_kg, gravity.unwrap_or(forces::GRAVITY)),
        4,
    )
}

/// Friction force (N) from normal force and coefficient.
pub fn friction(normal_force: f64, coefficient: f64) -> String {
    format_sig(forces::friction(normal_force, coefficient), 4)
}

/// The applied force value (N), echoed back.
pub fn applied_force(force: f64) -> String {
    format_sig(forces::applied_force(force), 4)
}

/// Tension for a hanging mass; weight takes precedence over mass.
pub fn tension(weight_n: Option<f64>, mass_kg: Option<f64>, gravity: Option<f64>) -> String {
    format_sig(
        forces::tension(weight_n, mass_kg, gravity.unwrap_or(forces::GRAVITY)),
        4,
    )
}

/// Normal force; flat surface unless an incline angle is given.
pub fn normal_force(mass_kg: f64, gravity: Option<f64>, incline_angle_deg: Option<f64>) -> String {
    format_sig(
        forces::normal_force(
            mass_kg,
            gravity.unwrap_or(forces::GRAVITY),
            incline_angle_deg.unwrap_or(0.0),
        ),
        4,
    )
}

/// Net of signed 1-D force values.
pub fn net_force(values: &[f64]) -> String {
    format_sig(forces::net_force_1d(values), 4)
}

/// Canonical force relationships for a described situation.
pub fn force_breakdown(situation: &str) -> String {
    forces::force_breakdown(situation).to_string()
}

// ---------------------------------------------------------------------------
// Diagrams
// ---------------------------------------------------------------------------

/// Render a free-body diagram from labeled force entries.
pub fn free_body(forces: &Value, object_name: &str) -> String {
    let entries: Vec<ForceEntry> = match serde_json::from_value(forces.clone()) {
        Ok(entries) => entries,
        Err(e) => return format!("Error: invalid force list: {e}"),
    };
    diagram::render(&DiagramSpec {
        object_name: object_name.to_string(),
        forces: entries,
    })
}

/// Net force of a list of vectors in any supported notation.
///
/// Malformed entries degrade to zero vectors; each degrade is reported in a
/// trailing note instead of aborting the request.
pub fn net_force_vectors(forces: &Value) -> String {
    let Some(items) = forces.as_array() else {
        return VECTOR_SHAPE_HINT.to_string();
    };
    let mut net = Vec2::zeros();
    let mut notes = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let normalized = normalize(&VectorInput::from_value(item));
        net += normalized.vector;
        if let Some(diagnostic) = normalized.diagnostic {
            notes.push(format!("Note: force {} ignored: {diagnostic}", index + 1));
        }
    }
    let polar = vector::to_polar(net.x, net.y);
    let mut out = format!(
        "Net force: {:.2} N at {:.1}° (from +x axis, CCW)\nComponents: ({:.2} N, {:.2} N)",
        polar.magnitude, polar.angle_deg, net.x, net.y
    );
    for note in notes {
        out.push('\n');
        out.push_str(&note);
    }
    out
}

/// Build and render a diagram from heterogeneous force descriptions.
///
/// Labeled entries pass through; bare vectors get generated `F{n}` labels;
/// plain-text entries that evaluate numerically become +x-directed forces,
/// and entries that fit nothing are skipped, as one bad entry must not
/// abort the diagram.
pub fn smart_diagram(forces: &Value, object_name: &str) -> String {
    let Some(items) = forces.as_array() else {
        return VECTOR_SHAPE_HINT.to_string();
    };
    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if let Some(map) = item.as_object() {
            if let (Some(label), Some(vector)) = (map.get("label"), map.get("vector")) {
                entries.push(ForceEntry {
                    label: label.as_str().map(ToString::to_string),
                    vector: VectorInput::from_value(vector),
                });
                continue;
            }
        }
        let input = VectorInput::from_value(item);
        let input = match &input {
            VectorInput::Text(text) if input.resolve().is_err() => {
                match exmex::eval_str::<f64>(text) {
                    Ok(magnitude) => VectorInput::Scalar(magnitude),
                    Err(_) => {
                        tracing::warn!(entry = index + 1, "unusable force entry skipped");
                        continue;
                    }
                }
            }
            _ => input,
        };
        entries.push(ForceEntry {
            label: Some(format!("F{}", index + 1)),
            vector: input,
        });
    }
    diagram::render(&DiagramSpec {
        object_name: object_name.to_string(),
        forces: entries,
    })
}
