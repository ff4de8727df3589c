//! SVG serialization of panel outlines.
//!
//! Each panel becomes one closed `<path>` built from relative pen moves,
//! grouped with a centered label. The document viewBox matches the sheet
//! extents in millimeters.

use std::fs;
use std::path::Path;

use tracing::debug;

use boxkit_core::PanelPath;

use crate::error::ExportResult;
use crate::layout::SheetLayout;

const OUTLINE_STROKE: &str = "#2c3e50";
const LABEL_FILL: &str = "#007bff";

/// Render the placed panels as a standalone SVG document.
pub fn to_svg(layout: &SheetLayout, panels: &[PanelPath; 6]) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
            r#"viewBox="0 0 {w} {h}" width="{w}mm" height="{h}mm">"#,
            "\n"
        ),
        w = layout.sheet_width,
        h = layout.sheet_height
    ));

    for (panel, placement) in panels.iter().zip(&layout.placements) {
        svg.push_str(&format!(
            "  <g transform=\"translate({} {})\">\n",
            placement.origin_x, placement.origin_y
        ));
        svg.push_str(&format!(
            "    <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"0.5\"/>\n",
            path_data(panel),
            OUTLINE_STROKE
        ));
        svg.push_str(&format!(
            concat!(
                r#"    <text x="{}" y="{}" text-anchor="middle" "#,
                r#"dominant-baseline="middle" fill="{}" font-size="12">{}</text>"#,
                "\n"
            ),
            panel.w / 2.0,
            panel.h / 2.0,
            LABEL_FILL,
            panel.label()
        ));
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

/// Path data for one panel: relative `h`/`v`/`l` commands from the panel
/// origin, closed with `Z`.
fn path_data(panel: &PanelPath) -> String {
    let mut d = String::from("M 0 0");
    for (dx, dy) in panel.moves() {
        if dy == 0.0 {
            d.push_str(&format!(" h {}", dx));
        } else if dx == 0.0 {
            d.push_str(&format!(" v {}", dy));
        } else {
            d.push_str(&format!(" l {} {}", dx, dy));
        }
    }
    d.push_str(" Z");
    d
}

/// Write the SVG document to `path`.
pub fn save_svg(path: &Path, layout: &SheetLayout, panels: &[PanelPath; 6]) -> ExportResult<()> {
    let document = to_svg(layout, panels);
    fs::write(path, &document)?;
    debug!(path = %path.display(), bytes = document.len(), "wrote SVG export");
    Ok(())
}
