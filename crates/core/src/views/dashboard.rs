use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stride_protocol::{Insets, Point, RenderCommand, Viewport};

use crate::error::GeometryError;
use crate::geometry::series_path::{CHART_HEIGHT, CHART_PADDING};
use crate::geometry::{RingGeometry, week_window};
use crate::views::date_strip::{render_date_strip, today_index};
use crate::views::line_chart::render_line_chart;
use crate::views::progress_ring::{RingLabel, render_progress_ring};

const STRIP_HEIGHT: f64 = 64.0;
const SECTION_GAP: f64 = 24.0;
const SIDE_MARGIN: f64 = 16.0;

/// Everything the Today screen needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInput {
    pub width: f64,
    pub reference_date: NaiveDate,
    /// Caller-owned strip selection; defaults to the reference date.
    pub selected_day: Option<usize>,
    pub progress: f64,
    pub ring: RingGeometry,
    pub ring_value: Option<String>,
    pub ring_caption: Option<String>,
    pub samples: Vec<f64>,
    pub labels: Vec<String>,
    pub highlight: Option<usize>,
}

/// A composed draw list and the size it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<RenderCommand>,
}

/// Stack the date strip, progress ring and line chart vertically.
pub fn render_dashboard(input: &DashboardInput) -> Result<Dashboard, GeometryError> {
    let mut commands = Vec::new();
    let mut y = 0.0;

    let days = week_window(input.reference_date);
    let selected = input.selected_day.or_else(|| today_index(&days));
    let strip_vp = Viewport::new(
        input.width,
        STRIP_HEIGHT,
        Insets::new(8.0, SIDE_MARGIN, 8.0, SIDE_MARGIN),
    );
    push_section(&mut commands, Point::new(0.0, y), render_date_strip(&days, selected, &strip_vp));
    y += STRIP_HEIGHT + SECTION_GAP;

    let label = input.ring_value.as_ref().map(|value| {
        let label = RingLabel::new(value.clone());
        match &input.ring_caption {
            Some(caption) => label.with_caption(caption.clone()),
            None => label,
        }
    });
    let ring = render_progress_ring(input.progress, &input.ring, label.as_ref());
    if !ring.is_empty() {
        let x = ((input.width - input.ring.diameter) / 2.0).max(0.0);
        push_section(&mut commands, Point::new(x, y), ring);
        y += input.ring.diameter + SECTION_GAP;
    }

    let chart_vp = Viewport::new(input.width - 2.0 * SIDE_MARGIN, CHART_HEIGHT, CHART_PADDING);
    let chart = render_line_chart(&input.samples, &input.labels, input.highlight, &chart_vp)?;
    push_section(&mut commands, Point::new(SIDE_MARGIN, y), chart);
    y += CHART_HEIGHT;

    Ok(Dashboard {
        width: input.width,
        height: y,
        commands,
    })
}

fn push_section(commands: &mut Vec<RenderCommand>, origin: Point, section: Vec<RenderCommand>) {
    commands.push(RenderCommand::PushTransform { translate: origin });
    commands.extend(section);
    commands.push(RenderCommand::PopTransform);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::line_chart::default_labels;

    fn input() -> DashboardInput {
        DashboardInput {
            width: 360.0,
            reference_date: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date"),
            selected_day: None,
            progress: 0.5499,
            ring: RingGeometry::default(),
            ring_value: Some("5,499".into()),
            ring_caption: Some("Steps".into()),
            samples: vec![3200.0, 5400.0, 2800.0, 6100.0, 4900.0, 7200.0, 5499.0],
            labels: default_labels(),
            highlight: Some(6),
        }
    }

    #[test]
    fn stacks_three_sections() {
        let dash = render_dashboard(&input()).expect("dashboard");
        let pushes = dash
            .commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::PushTransform { .. }))
            .count();
        let pops = dash
            .commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::PopTransform))
            .count();
        assert_eq!(pushes, 3);
        assert_eq!(pops, 3);
        assert_eq!(dash.height, 64.0 + 24.0 + 240.0 + 24.0 + 160.0);
    }

    #[test]
    fn degenerate_ring_is_left_out() {
        let mut input = input();
        input.ring = RingGeometry::new(10.0, 10.0);
        let dash = render_dashboard(&input).expect("dashboard");
        let pushes = dash
            .commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::PushTransform { .. }))
            .count();
        assert_eq!(pushes, 2);
        assert_eq!(dash.height, 64.0 + 24.0 + 160.0);
    }

    #[test]
    fn empty_samples_fail() {
        let mut input = input();
        input.samples.clear();
        assert_eq!(render_dashboard(&input), Err(GeometryError::EmptySeries));
    }
}
