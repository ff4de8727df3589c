//! Sheet layout: non-overlapping placement of the six panels.
//!
//! Panels are placed in two rows of three with a fixed margin and spacing.
//! Bounding boxes come from the actual outline vertices, since slot bulges
//! extend past the nominal panel rectangle.

use serde::{Deserialize, Serialize};

use boxkit_core::PanelPath;

/// Clearance between the sheet border and the outermost outlines.
pub const SHEET_MARGIN: f64 = 20.0;

/// Clearance between neighboring panel outlines.
pub const PANEL_SPACING: f64 = 40.0;

#[derive(Clone, Copy, Debug)]
struct LayoutCursor {
    x: f64,
    y: f64,
    spacing: f64,
}

impl LayoutCursor {
    fn new(margin: f64, spacing: f64) -> Self {
        Self {
            x: margin,
            y: margin,
            spacing,
        }
    }

    fn place(&mut self, width: f64) -> (f64, f64) {
        let position = (self.x, self.y);
        self.x += width + self.spacing;
        position
    }

    fn next_row(&mut self, height: f64, margin: f64) {
        self.y += height + self.spacing;
        self.x = margin;
    }
}

/// Sheet position of one panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Top-left corner of the panel's bounding box on the sheet.
    pub x: f64,
    pub y: f64,
    /// Sheet position of the panel's local origin (its nominal top-left
    /// corner), offset from `(x, y)` by any outward slot bulges.
    pub origin_x: f64,
    pub origin_y: f64,
    /// Bounding box size, tab excursions included.
    pub width: f64,
    pub height: f64,
}

/// Placements for all six panels plus the overall sheet extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub placements: [Placement; 6],
    pub sheet_width: f64,
    pub sheet_height: f64,
}

/// Place the six panels in two rows of three, in generation order:
/// front, back, left on the first row; right, top, bottom on the second.
pub fn arrange(panels: &[PanelPath; 6]) -> SheetLayout {
    let mut cursor = LayoutCursor::new(SHEET_MARGIN, PANEL_SPACING);
    let mut placements = [Placement::default(); 6];
    let mut row_height: f64 = 0.0;
    let mut sheet_width: f64 = 0.0;

    for (i, panel) in panels.iter().enumerate() {
        if i == 3 {
            cursor.next_row(row_height, SHEET_MARGIN);
            row_height = 0.0;
        }

        let (min_x, min_y, max_x, max_y) = panel.bounds();
        let width = max_x - min_x;
        let height = max_y - min_y;
        let (x, y) = cursor.place(width);

        placements[i] = Placement {
            x,
            y,
            origin_x: x - min_x,
            origin_y: y - min_y,
            width,
            height,
        };
        row_height = row_height.max(height);
        sheet_width = sheet_width.max(x + width + SHEET_MARGIN);
    }

    SheetLayout {
        placements,
        sheet_width,
        sheet_height: cursor.y + row_height + SHEET_MARGIN,
    }
}
