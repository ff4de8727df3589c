//! End-to-end export checks: layout, SVG document, DXF round-trip.

use boxkit_core::{generate_panels, BoxParameters};
use boxkit_export::{arrange, export_file_name, save_dxf, save_svg, to_drawing, to_svg};
use dxf::entities::EntityType;
use dxf::Drawing;

fn panels_and_layout() -> ([boxkit_core::PanelPath; 6], boxkit_export::SheetLayout) {
    let panels = generate_panels(&BoxParameters::default()).expect("default parameters are valid");
    let layout = arrange(&panels);
    (panels, layout)
}

#[test]
fn test_svg_export_writes_complete_document() {
    let (panels, layout) = panels_and_layout();
    let svg = to_svg(&layout, &panels);

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<g transform=").count(), 6);
    assert!(!svg.contains("NaN"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(export_file_name(&BoxParameters::default(), "svg"));
    save_svg(&path, &layout, &panels).expect("SVG save must succeed");
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, svg);
}

#[test]
fn test_dxf_export_round_trips() {
    let (panels, layout) = panels_and_layout();

    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(export_file_name(&BoxParameters::default(), "dxf"));
    save_dxf(&path, &layout, &panels).expect("DXF save must succeed");

    let mut file = std::fs::File::open(&path).unwrap();
    let drawing = Drawing::load(&mut file).expect("written DXF must parse back");

    let mut closed_polylines = 0;
    for entity in drawing.entities() {
        if let EntityType::LwPolyline(polyline) = &entity.specific {
            if polyline.flags & 1 != 0 {
                closed_polylines += 1;
            }
            assert!(polyline.vertices.len() > 4);
        }
    }
    assert_eq!(closed_polylines, 6);
}

#[test]
fn test_dxf_vertices_sit_inside_their_placements() {
    let (panels, layout) = panels_and_layout();
    let drawing = to_drawing(&layout, &panels);

    for (entity, placement) in drawing.entities().zip(&layout.placements) {
        if let EntityType::LwPolyline(polyline) = &entity.specific {
            for vertex in &polyline.vertices {
                assert!(
                    vertex.x >= placement.x - 1e-9
                        && vertex.x <= placement.x + placement.width + 1e-9,
                    "x {} outside placement {:?}",
                    vertex.x,
                    placement
                );
                assert!(
                    vertex.y >= placement.y - 1e-9
                        && vertex.y <= placement.y + placement.height + 1e-9
                );
            }
        }
    }
}
