use stride_protocol::{Point, RenderCommand, StrokeDash, TextAlign, ThemeToken};

use crate::geometry::RingGeometry;

const VALUE_FONT_SIZE: f64 = 36.0;
const CAPTION_FONT_SIZE: f64 = 14.0;
const CAPTION_GAP: f64 = 8.0;

/// Text shown in the middle of a ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingLabel {
    pub value: String,
    pub caption: Option<String>,
}

impl RingLabel {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Render a progress ring inside a `diameter`-sized square at the origin.
///
/// The progress stroke starts at 12 o'clock and runs clockwise. Returns an
/// empty list when the geometry is degenerate.
pub fn render_progress_ring(
    progress: f64,
    geometry: &RingGeometry,
    label: Option<&RingLabel>,
) -> Vec<RenderCommand> {
    let arc = geometry.describe(progress);
    if arc.is_degenerate() {
        tracing::debug!(
            diameter = geometry.diameter,
            stroke = geometry.stroke_thickness,
            "skipping degenerate progress ring"
        );
        return Vec::new();
    }

    let half = geometry.diameter / 2.0;
    let center = Point::new(half, half);
    let mut commands = Vec::with_capacity(6);

    commands.push(RenderCommand::BeginGroup {
        id: "progress-ring".into(),
        label: Some(format!("{:.0}%", arc.progress * 100.0)),
    });

    // Track
    commands.push(RenderCommand::DrawCircle {
        center,
        radius: arc.radius,
        fill: None,
        stroke: Some(ThemeToken::RingTrack),
        stroke_width: geometry.stroke_thickness,
        dash: None,
        rotation: 0.0,
    });

    commands.push(RenderCommand::DrawCircle {
        center,
        radius: arc.radius,
        fill: None,
        stroke: Some(ThemeToken::RingProgress),
        stroke_width: geometry.stroke_thickness,
        dash: Some(StrokeDash::new(vec![arc.circumference], arc.dash_offset)),
        rotation: -90.0,
    });

    if let Some(label) = label {
        // Scale text down for small rings (report cards use 72px rings).
        let scale = (geometry.diameter / 240.0).min(1.0);
        let value_size = VALUE_FONT_SIZE * scale;
        let value_y = match label.caption {
            Some(_) => half,
            None => half + value_size * 0.35,
        };
        commands.push(RenderCommand::DrawText {
            position: Point::new(half, value_y),
            text: label.value.clone(),
            color: ThemeToken::TextPrimary,
            font_size: value_size,
            align: TextAlign::Center,
        });
        if let Some(caption) = &label.caption {
            commands.push(RenderCommand::DrawText {
                position: Point::new(half, value_y + CAPTION_GAP + CAPTION_FONT_SIZE * scale),
                text: caption.clone(),
                color: ThemeToken::TextSecondary,
                font_size: CAPTION_FONT_SIZE * scale,
                align: TextAlign::Center,
            });
        }
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circles(cmds: &[RenderCommand]) -> Vec<&RenderCommand> {
        cmds.iter()
            .filter(|c| matches!(c, RenderCommand::DrawCircle { .. }))
            .collect()
    }

    #[test]
    fn renders_track_and_progress() {
        let cmds = render_progress_ring(0.5, &RingGeometry::default(), None);
        let rings = circles(&cmds);
        assert_eq!(rings.len(), 2);

        let RenderCommand::DrawCircle {
            center,
            radius,
            dash: Some(dash),
            rotation,
            ..
        } = rings[1]
        else {
            panic!("progress circle should carry a dash pattern");
        };
        assert_eq!(*center, Point::new(120.0, 120.0));
        assert_eq!(*radius, 112.0);
        assert_eq!(*rotation, -90.0);
        assert!((dash.offset - 351.858).abs() < 0.01);
    }

    #[test]
    fn label_and_caption() {
        let label = RingLabel::new("5,499").with_caption("Steps");
        let cmds = render_progress_ring(0.55, &RingGeometry::default(), Some(&label));
        let texts: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["5,499", "Steps"]);
    }

    #[test]
    fn degenerate_ring_renders_nothing() {
        let cmds = render_progress_ring(0.5, &RingGeometry::new(12.0, 14.0), None);
        assert!(cmds.is_empty());
    }

    #[test]
    fn group_label_uses_clamped_progress() {
        let cmds = render_progress_ring(3.0, &RingGeometry::new(72.0, 6.0), None);
        assert!(matches!(
            &cmds[0],
            RenderCommand::BeginGroup { label: Some(l), .. } if l == "100%"
        ));
    }
}
