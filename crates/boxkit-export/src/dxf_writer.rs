//! DXF serialization of panel outlines.
//!
//! Produces a minimal R2000 drawing with one closed lightweight polyline
//! per panel, coordinates un-scaled from the input parameters.

use std::fs::File;
use std::path::Path;

use dxf::entities::{Entity, EntityType, LwPolyline};
use dxf::enums::AcadVersion;
use dxf::{Drawing, LwPolylineVertex};
use tracing::debug;

use boxkit_core::PanelPath;

use crate::error::ExportResult;
use crate::layout::SheetLayout;

// LwPolyline flags bit 0 marks the polyline as closed.
const LWPOLYLINE_CLOSED: i32 = 1;

/// Build a DXF drawing from the placed panel outlines.
pub fn to_drawing(layout: &SheetLayout, panels: &[PanelPath; 6]) -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2000;

    for (panel, placement) in panels.iter().zip(&layout.placements) {
        let mut points = panel.outline(placement.origin_x, placement.origin_y);
        // The closed flag supplies the final edge; drop the duplicated
        // return-to-origin vertex.
        if points.len() > 1 {
            let first = points[0];
            let last = points[points.len() - 1];
            if (first.0 - last.0).abs() < 1e-9 && (first.1 - last.1).abs() < 1e-9 {
                points.pop();
            }
        }

        let mut polyline = LwPolyline::default();
        polyline.flags |= LWPOLYLINE_CLOSED;
        for (x, y) in points {
            polyline.vertices.push(LwPolylineVertex {
                x,
                y,
                ..Default::default()
            });
        }
        drawing.add_entity(Entity::new(EntityType::LwPolyline(polyline)));
    }

    drawing
}

/// Write the drawing to `path`.
pub fn save_dxf(path: &Path, layout: &SheetLayout, panels: &[PanelPath; 6]) -> ExportResult<()> {
    let drawing = to_drawing(layout, panels);
    let mut file = File::create(path)?;
    drawing.save(&mut file)?;
    debug!(path = %path.display(), "wrote DXF export");
    Ok(())
}
