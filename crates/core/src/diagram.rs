//! Deterministic free-body diagram rendering
//!
//! Renders a [`DiagramSpec`] into SVG markup: an anchor circle for the
//! object, one scaled and colored arrow per force, a shared arrowhead
//! marker, and a label at each arrow's midpoint. The renderer is a pure
//! function of its input; identical specs produce byte-identical markup
//! (no timestamps, no randomness, one fixed number formatter).

use std::fmt::Write;

use crate::core_types::{DiagramSpec, Polar};
use crate::vector::normalize;

/// Canvas edge length in pixels.
const CANVAS_SIZE: u32 = 400;
/// Anchor position (canvas center), x and y.
const CENTER: f64 = 200.0;
/// Anchor circle radius.
const ANCHOR_RADIUS: u32 = 20;
/// Pixels of arrow per Newton.
const SCALE: f64 = 30.0;
/// Smallest on-canvas arrow; keeps tiny forces visible.
const MIN_ARROW_LENGTH: f64 = 30.0;
/// Label offset from the arrow midpoint, in pixels.
const LABEL_OFFSET: (f64, f64) = (10.0, -10.0);

/// Arrow stroke colors, cycled by force index.
const PALETTE: [&str; 7] = [
    "red", "blue", "green", "purple", "orange", "brown", "darkcyan",
];

/// Render a force system as an SVG free-body diagram.
///
/// Forces are drawn in order; stroke color is `PALETTE[index % 7]`, so
/// identical input order always yields identical colors. Malformed vector
/// entries degrade to zero vectors (drawn as minimum-length +x arrows)
/// rather than aborting the whole diagram.
pub fn render(spec: &DiagramSpec) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS_SIZE}\" height=\"{CANVAS_SIZE}\" viewBox=\"0 0 {CANVAS_SIZE} {CANVAS_SIZE}\">"
    );

    // One arrowhead marker, referenced by every arrow
    svg.push_str(
        "<defs><marker id=\"arrow\" markerWidth=\"10\" markerHeight=\"10\" refX=\"10\" refY=\"5\" orient=\"auto\"><polygon points=\"0,0 10,5 0,10\" fill=\"black\" /></marker></defs>",
    );

    // Anchor circle with the object label beneath it
    let _ = write!(
        svg,
        "<circle cx=\"{}\" cy=\"{}\" r=\"{ANCHOR_RADIUS}\" fill=\"lightgrey\" stroke=\"black\" stroke-width=\"2\" />",
        fmt_coord(CENTER),
        fmt_coord(CENTER)
    );
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{}\" font-size=\"16px\" fill=\"black\">{}</text>",
        fmt_coord(CENTER - 22.0),
        fmt_coord(CENTER + 45.0),
        escape_text(&spec.object_name)
    );

    for (index, force) in spec.forces.iter().enumerate() {
        let vector = normalize(&force.vector).vector;
        let polar = crate::vector::to_polar(vector.x, vector.y);
        let angle_rad = vector.y.atan2(vector.x);
        let length = (polar.magnitude * SCALE).max(MIN_ARROW_LENGTH);
        // Canvas y grows downward while physics y grows upward, so the
        // vertical component is flipped
        let x2 = CENTER + length * angle_rad.cos();
        let y2 = CENTER - length * angle_rad.sin();
        let color = PALETTE[index % PALETTE.len()];

        let _ = write!(
            svg,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{color}\" stroke-width=\"4\" marker-end=\"url(#arrow)\" />",
            fmt_coord(CENTER),
            fmt_coord(CENTER),
            fmt_coord(x2),
            fmt_coord(y2)
        );

        let label = force
            .label
            .clone()
            .unwrap_or_else(|| describe_polar(&polar));
        let label_x = (CENTER + x2) / 2.0 + LABEL_OFFSET.0;
        let label_y = (CENTER + y2) / 2.0 + LABEL_OFFSET.1;
        let _ = write!(
            svg,
            "<text x=\"{}\" y=\"{}\" font-size=\"12px\" fill=\"{color}\">{}</text>",
            fmt_coord(label_x),
            fmt_coord(label_y),
            escape_text(&label)
        );
    }

    svg.push_str("</svg>");
    svg
}

/// Generated label for an unlabeled force: `"3.00 N @ 30.0°"`.
fn describe_polar(polar: &Polar) -> String {
    format!("{:.2} N @ {:.1}°", polar.magnitude, polar.angle_deg)
}

/// Deterministic coordinate formatting: two decimals, trailing zeros
/// trimmed, negative zero collapsed.
fn fmt_coord(value: f64) -> String {
    let mut text = format!("{value:.2}");
    if text.contains('.') {
        text.truncate(text.trim_end_matches('0').trim_end_matches('.').len());
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Minimal XML escaping for label text.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
