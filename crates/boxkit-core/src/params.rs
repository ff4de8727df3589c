//! Box parameter set and the validation gate.
//!
//! Validation happens once, at this boundary. The topology and edge
//! generation stages are pure and total and never re-check their inputs.

use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult};

/// User-supplied box dimensions and joint settings, in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxParameters {
    /// Nominal span of the front/back panels along the sheet X axis.
    pub width: f64,
    /// Nominal span of the side panels along the sheet Y axis.
    pub height: f64,
    /// Nominal depth of the box.
    pub depth: f64,
    /// Material sheet thickness.
    pub thickness: f64,
    /// Nominal tab/slot width along an edge.
    pub finger_width: f64,
    /// Gap between fingers; zero means gaps as wide as the fingers.
    pub finger_spacing: f64,
    /// Width of material removed by the cutting beam.
    pub kerf: f64,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            depth: 100.0,
            thickness: 3.0,
            finger_width: 15.0,
            finger_spacing: 5.0,
            kerf: 0.1,
        }
    }
}

impl BoxParameters {
    /// Length of the shortest panel edge.
    pub fn shortest_edge(&self) -> f64 {
        self.width.min(self.height).min(self.depth)
    }

    /// Check every field against its valid range, naming the offending
    /// field on failure. Generation never runs on unvalidated input.
    pub fn validate(&self) -> ParameterResult<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
            ("thickness", self.thickness),
            ("finger_width", self.finger_width),
        ];
        for (name, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: format!("must be a positive finite number, got {}", value),
                });
            }
        }

        if !(self.finger_spacing >= 0.0) || !self.finger_spacing.is_finite() {
            return Err(ParameterError::InvalidValue {
                name: "finger_spacing".to_string(),
                reason: format!("must not be negative, got {}", self.finger_spacing),
            });
        }

        // Tab excursions are thickness - kerf deep; a kerf at or above the
        // material thickness leaves no tab to mate.
        if !self.kerf.is_finite() || self.kerf < 0.0 || self.kerf >= self.thickness {
            return Err(ParameterError::OutOfRange {
                name: "kerf".to_string(),
                value: self.kerf,
                min: 0.0,
                max: self.thickness,
            });
        }

        let shortest = self.shortest_edge();
        if self.finger_width >= shortest {
            return Err(ParameterError::InvalidValue {
                name: "finger_width".to_string(),
                reason: format!(
                    "must be smaller than the shortest panel edge ({}), or edges degenerate to a single segment",
                    shortest
                ),
            });
        }

        Ok(())
    }
}
