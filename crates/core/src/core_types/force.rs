//! Force and force-system data types
//!
//! Everything here is constructed fresh per request and discarded once the
//! response is formatted; nothing is shared across calls.

use serde::{Deserialize, Serialize};

use crate::core_types::vec2::Vec2;
use crate::vector::VectorInput;

/// A single named force, already normalized to component form.
///
/// The render color is positional (diagram order), so it is not stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// Caller-supplied label. `None` renders as a generated description.
    pub label: Option<String>,
    /// Force components in Newtons.
    pub vector: Vec2,
}

impl Force {
    /// Create a labeled force from components.
    pub fn new(label: impl Into<String>, vector: Vec2) -> Self {
        Self {
            label: Some(label.into()),
            vector,
        }
    }

    /// Create an unlabeled force from components.
    pub fn unlabeled(vector: Vec2) -> Self {
        Self {
            label: None,
            vector,
        }
    }
}

/// Net force of a system plus the normalized per-force components.
///
/// Immutable once computed; `net` is always the componentwise sum of the
/// component vectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForceSystemResult {
    /// Vector sum of all component forces.
    pub net: Vec2,
    /// The individual forces, in input order, with generated labels filled in.
    pub components: Vec<Force>,
}

/// One force entry of a diagram request, before normalization.
///
/// The vector is still in whatever notation the caller supplied; it is
/// resolved once at the rendering boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceEntry {
    /// Optional caller-supplied label for the arrow.
    #[serde(default)]
    pub label: Option<String>,
    /// Force vector in any supported input notation.
    pub vector: VectorInput,
}

/// Full description of a free-body diagram to render.
///
/// Force order is significant only for deterministic color assignment
/// (color = index mod palette size).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSpec {
    /// Label drawn beneath the anchor circle.
    pub object_name: String,
    /// Forces to draw, in color-assignment order.
    pub forces: Vec<ForceEntry>,
}
