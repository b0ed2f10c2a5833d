use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Ring size used by the Today screen.
pub const DEFAULT_DIAMETER: f64 = 240.0;
pub const DEFAULT_STROKE: f64 = 16.0;

/// Outer diameter and stroke thickness of a progress ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    pub diameter: f64,
    pub stroke_thickness: f64,
}

impl RingGeometry {
    pub fn new(diameter: f64, stroke_thickness: f64) -> Self {
        Self {
            diameter,
            stroke_thickness,
        }
    }

    /// Radius of the stroke's center line.
    pub fn radius(&self) -> f64 {
        (self.diameter - self.stroke_thickness) / 2.0
    }

    pub fn describe(&self, progress: f64) -> ArcDescriptor {
        progress_arc(progress, self.diameter, self.stroke_thickness)
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_DIAMETER, DEFAULT_STROKE)
    }
}

/// How much of a ring outline is drawn for a given progress value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcDescriptor {
    /// Progress after clamping to `[0, 1]`.
    pub progress: f64,
    pub radius: f64,
    pub circumference: f64,
    /// Stroke dash offset: `circumference` hides the whole ring, `0` shows it all.
    pub dash_offset: f64,
}

impl ArcDescriptor {
    /// True when the geometry cannot be drawn (stroke at least as thick as
    /// the ring, or non-finite inputs). Callers skip rendering.
    pub fn is_degenerate(&self) -> bool {
        !(self.radius.is_finite() && self.radius > 0.0)
    }

    /// Length of the drawn part of the outline.
    pub fn drawn_length(&self) -> f64 {
        self.circumference - self.dash_offset
    }

    /// Dash pattern `(drawn, circumference)`: an alternative to the dash
    /// offset that draws the filled arc followed by a full-length gap.
    pub fn dash_array(&self) -> (f64, f64) {
        (self.drawn_length(), self.circumference)
    }
}

/// Clamp a progress value to `[0, 1]`. NaN clamps to 0.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Describe a progress ring of `diameter` with the given stroke thickness.
///
/// Never fails: out-of-range progress is clamped and degenerate geometry is
/// reported through [`ArcDescriptor::is_degenerate`].
pub fn progress_arc(progress: f64, diameter: f64, stroke_thickness: f64) -> ArcDescriptor {
    let progress = clamp_progress(progress);
    let radius = (diameter - stroke_thickness) / 2.0;
    let circumference = 2.0 * PI * radius;
    ArcDescriptor {
        progress,
        radius,
        circumference,
        dash_offset: circumference * (1.0 - progress),
    }
}

/// Ratio of an observed count to its goal, e.g. steps walked over the daily
/// step goal. A non-positive goal yields 0. The result is not clamped.
pub fn goal_progress(observed: f64, goal: f64) -> f64 {
    if goal > 0.0 && observed.is_finite() {
        observed / goal
    } else {
        0.0
    }
}
