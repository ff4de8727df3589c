//! Panel outline assembly.
//!
//! A panel's four edges are traced clockwise from its origin corner
//! (top, right, bottom, left) and concatenated into one closed outline.
//! Closure is asserted after assembly; a failure there is an internal
//! fault, not a parameter problem.

use tracing::debug;

use crate::edge::{trace_edge, EdgeSegment, JointProfile, Orientation};
use crate::error::{BoxError, BoxResult};
use crate::params::BoxParameters;
use crate::topology::{panels_for, PanelId, PanelSpec, Side};

// Relative tolerance for the closure check.
const CLOSURE_TOLERANCE: f64 = 1e-9;

// Vertices closer than this collapse into one outline point.
const POINT_MERGE_EPS: f64 = 1e-9;

/// Closed cut outline for one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPath {
    pub id: PanelId,
    /// Nominal panel width, before tab excursions.
    pub w: f64,
    /// Nominal panel height, before tab excursions.
    pub h: f64,
    pub segments: Vec<EdgeSegment>,
}

impl PanelPath {
    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    /// Relative pen moves for the whole outline, starting and ending at the
    /// panel's origin corner.
    pub fn moves(&self) -> Vec<(f64, f64)> {
        self.segments.iter().flat_map(EdgeSegment::moves).collect()
    }

    /// Absolute outline vertices starting from `(origin_x, origin_y)`.
    /// Consecutive duplicate points are dropped; the final vertex returns
    /// to the origin.
    pub fn outline(&self, origin_x: f64, origin_y: f64) -> Vec<(f64, f64)> {
        let mut points = vec![(origin_x, origin_y)];
        let (mut x, mut y) = (origin_x, origin_y);
        for (dx, dy) in self.moves() {
            x += dx;
            y += dy;
            let (lx, ly) = points[points.len() - 1];
            if (x - lx).abs() > POINT_MERGE_EPS || (y - ly).abs() > POINT_MERGE_EPS {
                points.push((x, y));
            }
        }
        points
    }

    /// Bounding box `(min_x, min_y, max_x, max_y)` of the outline in the
    /// panel's local frame. Slot bulges extend past the nominal rectangle.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for (x, y) in self.outline(0.0, 0.0) {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        (min_x, min_y, max_x, max_y)
    }
}

/// Trace all four edges of one panel and check that the outline closes.
pub fn assemble_panel(spec: &PanelSpec, profile: &JointProfile) -> BoxResult<PanelPath> {
    let mut segments = Vec::new();
    for side in Side::CLOCKWISE {
        let (length, orientation, direction) = match side {
            Side::Top => (spec.w, Orientation::Horizontal, 1.0),
            Side::Right => (spec.h, Orientation::Vertical, 1.0),
            Side::Bottom => (spec.w, Orientation::Horizontal, -1.0),
            Side::Left => (spec.h, Orientation::Vertical, -1.0),
        };
        segments.extend(trace_edge(
            length,
            spec.roles.role(side),
            orientation,
            direction,
            profile,
        ));
    }

    let (dx, dy) = segments.iter().fold((0.0, 0.0), |(x, y), segment| {
        let (sx, sy) = segment.displacement();
        (x + sx, y + sy)
    });
    let tolerance = CLOSURE_TOLERANCE * spec.w.max(spec.h);
    if dx.abs() > tolerance || dy.abs() > tolerance {
        return Err(BoxError::Geometry(format!(
            "{} outline does not close: residual displacement ({:e}, {:e})",
            spec.id, dx, dy
        )));
    }

    debug!(
        panel = %spec.id,
        segments = segments.len(),
        "assembled panel outline"
    );

    Ok(PanelPath {
        id: spec.id,
        w: spec.w,
        h: spec.h,
        segments,
    })
}

/// Generate closed cut outlines for all six panels of the box.
///
/// Validates the parameters once, then assembles every panel. Either all
/// six outlines are produced or the first error is returned with no
/// partial output.
pub fn generate_panels(params: &BoxParameters) -> BoxResult<[PanelPath; 6]> {
    params.validate()?;

    let profile = JointProfile::from_parameters(params);
    let [front, back, left, right, top, bottom] = panels_for(params);
    Ok([
        assemble_panel(&front, &profile)?,
        assemble_panel(&back, &profile)?,
        assemble_panel(&left, &profile)?,
        assemble_panel(&right, &profile)?,
        assemble_panel(&top, &profile)?,
        assemble_panel(&bottom, &profile)?,
    ])
}
