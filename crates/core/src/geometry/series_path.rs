use serde::{Deserialize, Serialize};
use stride_protocol::{Insets, PathData, Point, Viewport};

use crate::error::GeometryError;

/// Chart height and padding used by the report screen's line chart.
pub const CHART_HEIGHT: f64 = 160.0;
pub const CHART_PADDING: Insets = Insets {
    top: 8.0,
    right: 8.0,
    bottom: 24.0,
    left: 8.0,
};

/// A sample series scaled into a viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPath {
    /// One vertex per sample, in sample order.
    pub points: Vec<Point>,
    /// Y coordinate of the plot area's bottom edge, where the area closes.
    pub baseline: f64,
    /// Pixel position of the highlighted sample, if the index was in range.
    pub highlight: Option<Point>,
    /// Value mapped to `baseline`.
    pub min: f64,
    /// Value mapped to the top of the plot area.
    pub max: f64,
}

impl SeriesPath {
    /// The open line through every sample.
    pub fn line(&self) -> PathData {
        PathData::open(self.points.clone())
    }

    /// The line closed along the bottom edge: after the last vertex it
    /// drops to `(last.x, baseline)` then runs back to `(first.x, baseline)`.
    pub fn area(&self) -> PathData {
        let mut points = Vec::with_capacity(self.points.len() + 2);
        points.extend_from_slice(&self.points);
        if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
            points.push(Point::new(last.x, self.baseline));
            points.push(Point::new(first.x, self.baseline));
        }
        PathData::closed(points)
    }

    pub fn line_path_data(&self) -> String {
        self.line().to_svg_d()
    }

    pub fn area_path_data(&self) -> String {
        self.area().to_svg_d()
    }
}

/// Scale `samples` into `viewport`.
///
/// The vertical range always includes 0 and 1 (`max >= 1`, `min <= 0`), and
/// a zero range is replaced by 1 so flat series stay finite. Samples are
/// spaced evenly across the usable width; a single sample sits at the left
/// edge of the plot area.
///
/// `highlight` outside `0..samples.len()` is ignored.
pub fn build_series_path(
    samples: &[f64],
    viewport: &Viewport,
    highlight: Option<usize>,
) -> Result<SeriesPath, GeometryError> {
    if samples.is_empty() {
        return Err(GeometryError::EmptySeries);
    }
    if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(GeometryError::NonFiniteSample { index, value });
    }

    let max = samples.iter().copied().fold(1.0_f64, f64::max);
    let min = samples.iter().copied().fold(0.0_f64, f64::min);
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    let usable_width = viewport.usable_width();
    let usable_height = viewport.usable_height();
    let step_x = if samples.len() > 1 {
        usable_width / (samples.len() - 1) as f64
    } else {
        usable_width
    };

    let project = |i: usize, value: f64| {
        let x = viewport.padding.left + i as f64 * step_x;
        let y = viewport.padding.top + usable_height - ((value - min) / range) * usable_height;
        Point::new(x, y)
    };

    let points: Vec<Point> = samples
        .iter()
        .enumerate()
        .map(|(i, &v)| project(i, v))
        .collect();

    let highlight = match highlight {
        Some(i) if i < points.len() => Some(points[i]),
        Some(i) => {
            tracing::debug!(index = i, len = points.len(), "highlight index out of range");
            None
        }
        None => None,
    };

    Ok(SeriesPath {
        points,
        baseline: viewport.bottom(),
        highlight,
        min,
        max,
    })
}
