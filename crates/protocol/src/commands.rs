use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for each view. Renderers consume
/// this list sequentially — each command carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle with optional rounded corners and a
    /// tooltip-style label.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        corner_radius: f64,
        label: Option<String>,
    },

    /// Draw a circle outline and/or fill. `rotation` is in degrees around
    /// the center and only matters when `dash` is set (it moves where the
    /// dash pattern starts).
    DrawCircle {
        center: Point,
        radius: f64,
        fill: Option<ThemeToken>,
        stroke: Option<ThemeToken>,
        stroke_width: f64,
        dash: Option<StrokeDash>,
        rotation: f64,
    },

    /// Draw a polyline path, optionally closed and filled.
    DrawPath {
        path: PathData,
        fill: Option<ThemeToken>,
        fill_opacity: f64,
        stroke: Option<ThemeToken>,
        stroke_width: f64,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
        dash: Option<StrokeDash>,
    },

    /// Push a translation applied to all subsequent commands until the
    /// matching `PopTransform`.
    PushTransform { translate: Point },

    /// Pop the most recent transform.
    PopTransform,

    /// Begin a logical group (e.g. one card of a dashboard).
    BeginGroup { id: String, label: Option<String> },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Stroke dash pattern: alternating drawn/gap lengths plus a start offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeDash {
    pub array: Vec<f64>,
    pub offset: f64,
}

impl StrokeDash {
    pub fn new(array: Vec<f64>, offset: f64) -> Self {
        Self { array, offset }
    }

    /// An evenly spaced dash pattern.
    pub fn even(len: f64) -> Self {
        Self::new(vec![len, len], 0.0)
    }
}

/// A polyline through `points`, optionally closed back to the first one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathData {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl PathData {
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// SVG path data: `M x y L x y ...`, with a trailing `Z` when closed.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::with_capacity(self.points.len() * 16);
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            let verb = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{verb} {} {}", p.x, p.y);
        }
        if self.closed && !self.points.is_empty() {
            d.push_str(" Z");
        }
        d
    }
}
