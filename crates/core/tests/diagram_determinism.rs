//! Rendering invariants: byte-identical output for identical specs,
//! deterministic palette cycling, and tolerant handling of bad entries.
use freebody_core::diagram::render;
use freebody_core::{tools, DiagramSpec, ForceEntry, VectorInput};
use serde_json::json;

fn entry(label: Option<&str>, vector: VectorInput) -> ForceEntry {
    ForceEntry {
        label: label.map(ToString::to_string),
        vector,
    }
}

#[test]
fn test_identical_specs_render_byte_identical_markup() {
    let spec = DiagramSpec {
        object_name: "Crate".to_string(),
        forces: vec![
            entry(Some("Weight"), VectorInput::Polar {
                magnitude: 4.9,
                angle_deg: 270.0,
            }),
            entry(Some("Normal"), VectorInput::Polar {
                magnitude: 4.9,
                angle_deg: 90.0,
            }),
            entry(Some("Pull"), VectorInput::Components([3.0, 0.0])),
        ],
    };
    let first = render(&spec);
    let second = render(&spec);
    assert_eq!(first, second);

    // And through the tool surface with equivalent JSON input
    let forces = json!([
        { "label": "Weight", "vector": { "magnitude": 4.9, "angle_deg": 270.0 } },
        { "label": "Normal", "vector": { "magnitude": 4.9, "angle_deg": 90.0 } },
        { "label": "Pull", "vector": [3.0, 0.0] },
    ]);
    assert_eq!(
        tools::free_body(&forces, "Crate"),
        tools::free_body(&forces, "Crate")
    );
}

#[test]
fn test_palette_cycles_by_index() {
    // Nine forces: the eighth and ninth reuse the first two colors
    let forces: Vec<ForceEntry> = (0..9)
        .map(|i| {
            entry(None, VectorInput::Polar {
                magnitude: 2.0,
                angle_deg: f64::from(i) * 40.0,
            })
        })
        .collect();
    let svg = render(&DiagramSpec {
        object_name: "Hub".to_string(),
        forces,
    });
    assert_eq!(svg.matches("stroke=\"red\"").count(), 2);
    assert_eq!(svg.matches("stroke=\"blue\"").count(), 2);
    assert_eq!(svg.matches("stroke=\"darkcyan\"").count(), 1);
}

#[test]
fn test_one_malformed_force_does_not_abort_the_render() {
    let forces = json!([
        { "label": "Good", "vector": [1.0, 2.0] },
        { "label": "Bad", "vector": "no such notation" },
    ]);
    let svg = tools::free_body(&forces, "Body");
    assert!(svg.starts_with("<svg"), "render aborted: {svg}");
    assert!(svg.contains(">Good</text>"));
    // The bad entry degrades to a zero vector but still draws
    assert!(svg.contains(">Bad</text>"));
    assert_eq!(svg.matches("url(#arrow)").count(), 2);
}

#[test]
fn test_marker_is_defined_once_and_shared() {
    let forces = json!([
        { "vector": [1.0, 0.0] },
        { "vector": [0.0, 1.0] },
        { "vector": [-1.0, 0.0] },
    ]);
    let svg = tools::free_body(&forces, "Body");
    assert_eq!(svg.matches("<defs>").count(), 1);
    assert_eq!(svg.matches("<marker").count(), 1);
    assert_eq!(svg.matches("url(#arrow)").count(), 3);
}
