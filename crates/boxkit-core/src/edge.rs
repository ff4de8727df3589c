//! Finger-joint edge tracing.
//!
//! An edge of length `L` is tiled with alternating finger-phase and
//! gap-phase segments, finger-phase first. Finger-phase segments are plain
//! runs; gap-phase segments carry a thickness-deep perpendicular excursion
//! whose direction depends on the edge role: tab edges dip into the panel
//! (carving the gap between protruding tabs), slot edges bulge out of it
//! (cutting the notch that receives the neighbor's tab).

use serde::{Deserialize, Serialize};

use crate::params::BoxParameters;
use crate::topology::EdgeRole;

/// Axis an edge runs along in the panel's 2D frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One leg of an edge trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EdgeSegment {
    /// Straight run of signed `length` along the edge axis.
    Run { orientation: Orientation, length: f64 },
    /// Perpendicular in-step of signed `depth`, a run of signed `length`,
    /// then the mirroring out-step. Net perpendicular displacement is zero.
    Step {
        orientation: Orientation,
        length: f64,
        depth: f64,
    },
}

impl EdgeSegment {
    /// Signed run length along the edge axis.
    pub fn run_length(&self) -> f64 {
        match *self {
            EdgeSegment::Run { length, .. } | EdgeSegment::Step { length, .. } => length,
        }
    }

    /// Net displacement contributed by this segment.
    pub fn displacement(&self) -> (f64, f64) {
        match *self {
            EdgeSegment::Run {
                orientation: Orientation::Horizontal,
                length,
            }
            | EdgeSegment::Step {
                orientation: Orientation::Horizontal,
                length,
                ..
            } => (length, 0.0),
            EdgeSegment::Run {
                orientation: Orientation::Vertical,
                length,
            }
            | EdgeSegment::Step {
                orientation: Orientation::Vertical,
                length,
                ..
            } => (0.0, length),
        }
    }

    /// Relative pen moves tracing this segment.
    pub fn moves(&self) -> Vec<(f64, f64)> {
        match *self {
            EdgeSegment::Run {
                orientation: Orientation::Horizontal,
                length,
            } => vec![(length, 0.0)],
            EdgeSegment::Run {
                orientation: Orientation::Vertical,
                length,
            } => vec![(0.0, length)],
            EdgeSegment::Step {
                orientation: Orientation::Horizontal,
                length,
                depth,
            } => vec![(0.0, depth), (length, 0.0), (0.0, -depth)],
            EdgeSegment::Step {
                orientation: Orientation::Vertical,
                length,
                depth,
            } => vec![(depth, 0.0), (0.0, length), (-depth, 0.0)],
        }
    }
}

/// Finger/gap widths and kerf-resolved excursion depths derived from one
/// parameter snapshot.
///
/// Male tabs are cut `thickness - kerf` tall and female notches
/// `thickness + kerf` deep, so that after the beam removes its kerf on both
/// sides of the cut line the assembled joint is friction-fit with no net
/// clearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointProfile {
    pub finger_width: f64,
    pub gap_width: f64,
    pub tab_depth: f64,
    pub slot_depth: f64,
}

impl JointProfile {
    pub fn from_parameters(params: &BoxParameters) -> Self {
        // Zero spacing means the symmetric joint: gaps as wide as fingers.
        let gap_width = if params.finger_spacing > 0.0 {
            params.finger_spacing
        } else {
            params.finger_width
        };
        Self {
            finger_width: params.finger_width,
            gap_width,
            tab_depth: params.thickness - params.kerf,
            slot_depth: params.thickness + params.kerf,
        }
    }

    /// Excursion magnitude for an edge of the given role.
    pub fn depth_for(&self, role: EdgeRole) -> f64 {
        match role {
            EdgeRole::TabEmitting => self.tab_depth,
            EdgeRole::SlotAccepting => self.slot_depth,
        }
    }
}

// Residual below which an edge counts as fully tiled, relative to its length.
const REMAINDER_EPS: f64 = 1e-12;

/// Trace one edge of `length` in the panel's clockwise winding.
///
/// `direction` is +1 for the top and right edges and -1 for the bottom and
/// left edges. The nominal run lengths of the returned segments sum to
/// `length` exactly; a final partial segment is emitted at whatever phase
/// the alternation has reached, pinned to the far end of the edge.
pub fn trace_edge(
    length: f64,
    role: EdgeRole,
    orientation: Orientation,
    direction: f64,
    profile: &JointProfile,
) -> Vec<EdgeSegment> {
    // Inward perpendicular for a clockwise-wound rectangle.
    let inward = match orientation {
        Orientation::Horizontal => direction,
        Orientation::Vertical => -direction,
    };
    let depth = match role {
        EdgeRole::TabEmitting => inward * profile.depth_for(role),
        EdgeRole::SlotAccepting => -inward * profile.depth_for(role),
    };

    let eps = length * REMAINDER_EPS;
    let mut segments = Vec::new();
    let mut pos = 0.0;
    let mut finger_phase = true;

    while length - pos > eps {
        let nominal = if finger_phase {
            profile.finger_width
        } else {
            profile.gap_width
        };
        let run = nominal.min(length - pos) * direction;
        if finger_phase {
            segments.push(EdgeSegment::Run {
                orientation,
                length: run,
            });
        } else {
            segments.push(EdgeSegment::Step {
                orientation,
                length: run,
                depth,
            });
        }
        pos += run.abs();
        finger_phase = !finger_phase;
    }

    segments
}
