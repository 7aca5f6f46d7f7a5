//! Vector input normalization
//!
//! Callers describe force vectors in several notations: raw `[x, y]`
//! components, `{magnitude, angle_deg}` polar form, free text like
//! `"3 N at 30"`, or a bare scalar. All of them resolve once at this
//! boundary into the canonical [`Vec2`] component form.
//!
//! Two resolution paths exist on purpose. [`VectorInput::resolve`] is strict
//! and returns [`Error::VectorFormat`] on unrecognized input. [`normalize`]
//! is tolerant: it degrades to a zero vector plus a diagnostic, so one
//! malformed entry cannot abort a multi-force computation that composes
//! vectors additively.

use serde::{Deserialize, Serialize};

use crate::core_types::{Polar, Vec2};
use crate::error::{Error, Result};

/// A force vector in any of the supported input notations.
///
/// Deserializes untagged from the caller's JSON-like value, so a mapping
/// becomes [`Polar`](VectorInput::Polar), a two-element array
/// [`Components`](VectorInput::Components), a number
/// [`Scalar`](VectorInput::Scalar), and a string
/// [`Text`](VectorInput::Text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VectorInput {
    /// Polar form: magnitude plus angle in degrees CCW from +x.
    Polar {
        /// Vector magnitude (Newtons by convention).
        magnitude: f64,
        /// Direction in degrees, CCW from the +x axis.
        angle_deg: f64,
    },
    /// Raw `[x, y]` components in Newtons.
    Components([f64; 2]),
    /// A bare scalar, treated as a +x-directed magnitude.
    Scalar(f64),
    /// Free text, e.g. `"3 N at 30"` or `"F=5N at 90 deg"`.
    Text(String),
}

/// A normalized vector plus the diagnostic of a tolerated parse failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Canonical component form (zero vector when parsing failed).
    pub vector: Vec2,
    /// Present when the input was malformed and degraded to zero.
    pub diagnostic: Option<String>,
}

impl VectorInput {
    /// Wrap a JSON-like value, never failing: values that match no supported
    /// shape carry through as text so the tolerant path can report them.
    pub fn from_value(value: &serde_json::Value) -> VectorInput {
        serde_json::from_value(value.clone())
            .unwrap_or_else(|_| VectorInput::Text(value.to_string()))
    }

    /// Strictly resolve into canonical component form.
    ///
    /// # Errors
    /// [`Error::VectorFormat`] when free text matches neither the
    /// `"<number> at <number>"` pattern nor a bare scalar.
    pub fn resolve(&self) -> Result<Vec2> {
        match self {
            VectorInput::Components([x, y]) => Ok(Vec2::new(*x, *y)),
            VectorInput::Polar {
                magnitude,
                angle_deg,
            } => Ok(from_polar(*magnitude, *angle_deg)),
            VectorInput::Scalar(value) => Ok(Vec2::new(*value, 0.0)),
            VectorInput::Text(text) => parse_force_text(text),
        }
    }
}

/// Tolerantly normalize any vector input.
///
/// Unrecognized input yields the zero vector and a diagnostic rather than an
/// error; the degrade is also logged.
pub fn normalize(input: &VectorInput) -> Normalized {
    match input.resolve() {
        Ok(vector) => Normalized {
            vector,
            diagnostic: None,
        },
        Err(err) => {
            tracing::warn!(%err, "vector input degraded to zero");
            Normalized {
                vector: Vec2::zeros(),
                diagnostic: Some(err.to_string()),
            }
        }
    }
}

/// Convert polar form to components: angle in degrees, CCW from +x.
pub fn from_polar(magnitude: f64, angle_deg: f64) -> Vec2 {
    let angle_rad = angle_deg.to_radians();
    Vec2::new(magnitude * angle_rad.cos(), magnitude * angle_rad.sin())
}

/// Convert components to polar form.
///
/// Magnitude is the Euclidean norm; the angle is normalized into `[0, 360)`,
/// including the case where rounding lands exactly on 360.
pub fn to_polar(x: f64, y: f64) -> Polar {
    let magnitude = x.hypot(y);
    let mut angle_deg = y.atan2(x).to_degrees();
    if angle_deg < 0.0 {
        angle_deg += 360.0;
    }
    if angle_deg >= 360.0 {
        angle_deg -= 360.0;
    }
    Polar {
        magnitude,
        angle_deg,
    }
}

/// Parse free-text force notation.
///
/// `"3 N at 30"`, `"F=3N at 30 deg"` and the like parse as magnitude/angle
/// (case-insensitive, unit suffixes ignored); any other text that parses as
/// a bare scalar becomes `[scalar, 0]`.
fn parse_force_text(text: &str) -> Result<Vec2> {
    // ASCII lowering keeps byte offsets aligned with the original text
    let lowered = text.to_ascii_lowercase();
    if let Some(at) = lowered.find(" at ") {
        let (lhs, rhs) = (&text[..at], &text[at + 4..]);
        // An "F=" / "label=" prefix on the magnitude side is cosmetic
        let lhs = lhs.rsplit('=').next().unwrap_or(lhs);
        if let (Some(magnitude), Some(angle_deg)) = (leading_number(lhs), leading_number(rhs)) {
            return Ok(from_polar(magnitude, angle_deg));
        }
    } else if let Ok(value) = text.trim().parse::<f64>() {
        return Ok(Vec2::new(value, 0.0));
    }
    Err(Error::VectorFormat(format!(
        "expected [x, y], {{magnitude, angle_deg}}, or \"<number> at <number>\"; got '{}'",
        text.trim()
    )))
}

/// Extract the leading numeric token of a string, ignoring a trailing unit
/// suffix (`"3N"` → 3, `" 30 deg"` → 30).
fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.' || *c == '-' || *c == '+')
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    trimmed[..end].parse().ok()
}
