use stride_protocol::{Point, RenderCommand, StrokeDash, TextAlign, ThemeToken, Viewport};

use crate::error::GeometryError;
use crate::geometry::build_series_path;

const LINE_WIDTH: f64 = 2.5;
const AREA_OPACITY: f64 = 0.4;
const GUIDE_WIDTH: f64 = 1.5;
const GUIDE_DASH: f64 = 4.0;
const MARKER_RADIUS: f64 = 5.0;
const LABEL_FONT_SIZE: f64 = 12.0;

/// Weekday labels used when the caller supplies none.
pub const DEFAULT_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Render a line chart with a filled area under the line.
///
/// `labels[i]` is drawn under sample `i`; extra labels are ignored and
/// missing ones are skipped. A highlighted sample gets a dashed guide down
/// to the baseline and a marker dot.
pub fn render_line_chart(
    samples: &[f64],
    labels: &[String],
    highlight: Option<usize>,
    viewport: &Viewport,
) -> Result<Vec<RenderCommand>, GeometryError> {
    let series = build_series_path(samples, viewport, highlight)?;
    let mut commands = Vec::with_capacity(series.points.len() + 8);

    commands.push(RenderCommand::BeginGroup {
        id: "line-chart".into(),
        label: None,
    });

    commands.push(RenderCommand::DrawPath {
        path: series.area(),
        fill: Some(ThemeToken::ChartArea),
        fill_opacity: AREA_OPACITY,
        stroke: None,
        stroke_width: 0.0,
    });

    commands.push(RenderCommand::DrawPath {
        path: series.line(),
        fill: None,
        fill_opacity: 0.0,
        stroke: Some(ThemeToken::ChartLine),
        stroke_width: LINE_WIDTH,
    });

    // Axis labels sit centered in the bottom padding band.
    let label_y = viewport.bottom() + (viewport.padding.bottom + LABEL_FONT_SIZE) / 2.0;
    for (point, label) in series.points.iter().zip(labels) {
        commands.push(RenderCommand::DrawText {
            position: Point::new(point.x, label_y),
            text: label.clone(),
            color: ThemeToken::TextMuted,
            font_size: LABEL_FONT_SIZE,
            align: TextAlign::Center,
        });
    }

    if let Some(point) = series.highlight {
        commands.push(RenderCommand::DrawLine {
            from: point,
            to: Point::new(point.x, series.baseline),
            color: ThemeToken::ChartGuide,
            width: GUIDE_WIDTH,
            dash: Some(StrokeDash::even(GUIDE_DASH)),
        });
        commands.push(RenderCommand::DrawCircle {
            center: point,
            radius: MARKER_RADIUS,
            fill: Some(ThemeToken::ChartMarker),
            stroke: None,
            stroke_width: 0.0,
            dash: None,
            rotation: 0.0,
        });
    }

    commands.push(RenderCommand::EndGroup);
    Ok(commands)
}

pub fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::series_path::{CHART_HEIGHT, CHART_PADDING};

    const WALKING: [f64; 7] = [3200.0, 5400.0, 2800.0, 6100.0, 4900.0, 7200.0, 5499.0];

    fn chart_viewport() -> Viewport {
        Viewport::new(320.0, CHART_HEIGHT, CHART_PADDING)
    }

    #[test]
    fn renders_area_line_and_labels() {
        let cmds = render_line_chart(&WALKING, &default_labels(), None, &chart_viewport())
            .expect("chart");
        let paths = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawPath { .. }))
            .count();
        let texts = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawText { .. }))
            .count();
        assert_eq!(paths, 2);
        assert_eq!(texts, 7);
        assert!(!cmds.iter().any(|c| matches!(c, RenderCommand::DrawCircle { .. })));
    }

    #[test]
    fn area_path_is_closed_and_line_is_open() {
        let cmds = render_line_chart(&WALKING, &[], None, &chart_viewport()).expect("chart");
        let closed: Vec<bool> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawPath { path, .. } => Some(path.closed),
                _ => None,
            })
            .collect();
        assert_eq!(closed, vec![true, false]);
    }

    #[test]
    fn highlight_draws_guide_to_baseline() {
        let vp = chart_viewport();
        let cmds = render_line_chart(&WALKING, &default_labels(), Some(6), &vp).expect("chart");
        let guide = cmds.iter().find_map(|c| match c {
            RenderCommand::DrawLine { from, to, dash, .. } => Some((*from, *to, dash.clone())),
            _ => None,
        });
        let (from, to, dash) = guide.expect("guide line");
        assert_eq!(from.x, to.x);
        assert!((from.x - (vp.padding.left + vp.usable_width())).abs() < 1e-9);
        assert_eq!(to.y, vp.bottom());
        assert_eq!(dash, Some(StrokeDash::even(4.0)));
        assert!(cmds.iter().any(|c| matches!(
            c,
            RenderCommand::DrawCircle { radius, .. } if *radius == 5.0
        )));
    }

    #[test]
    fn short_label_list_is_fine() {
        let labels: Vec<String> = ["Sat", "Sun"].iter().map(|s| (*s).to_string()).collect();
        let cmds = render_line_chart(&WALKING, &labels, None, &chart_viewport()).expect("chart");
        let texts = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawText { .. }))
            .count();
        assert_eq!(texts, 2);
    }

    #[test]
    fn empty_series_propagates_error() {
        assert_eq!(
            render_line_chart(&[], &[], None, &chart_viewport()),
            Err(GeometryError::EmptySeries)
        );
    }
}
