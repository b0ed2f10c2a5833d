use stride_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::geometry::BarSeries;

const BAR_WIDTH_RATIO: f64 = 0.6;
const MAX_CORNER_RADIUS: f64 = 6.0;
const LABEL_FONT_SIZE: f64 = 12.0;

/// Render a bar chart whose bars grow up from the plot area's bottom edge.
///
/// `bars.heights` are already scaled; heights taller than the plot area
/// are drawn as-is. The peak bar uses the accent color.
pub fn render_bar_chart(
    bars: &BarSeries,
    labels: &[String],
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    if bars.heights.is_empty() {
        return Vec::new();
    }

    let inner = viewport.inner();
    let slot = inner.w / bars.heights.len() as f64;
    let bar_w = slot * BAR_WIDTH_RATIO;
    let bottom = viewport.bottom();
    let mut commands = Vec::with_capacity(bars.heights.len() * 2 + 2);

    commands.push(RenderCommand::BeginGroup {
        id: "bar-chart".into(),
        label: None,
    });

    for (i, &h) in bars.heights.iter().enumerate() {
        let slot_x = inner.x + i as f64 * slot;
        let color = if i == bars.peak {
            ThemeToken::BarPeak
        } else {
            ThemeToken::BarFill
        };
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(slot_x + (slot - bar_w) / 2.0, bottom - h, bar_w, h),
            color,
            border_color: None,
            corner_radius: (bar_w / 2.0).min(MAX_CORNER_RADIUS),
            label: labels.get(i).cloned(),
        });
        if let Some(label) = labels.get(i) {
            commands.push(RenderCommand::DrawText {
                position: Point::new(slot_x + slot / 2.0, bottom + LABEL_FONT_SIZE + 4.0),
                text: label.clone(),
                color: ThemeToken::TextMuted,
                font_size: LABEL_FONT_SIZE,
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
    use crate::geometry::bar_series;
    use crate::views::line_chart::default_labels;
    use stride_protocol::Insets;

    #[test]
    fn peak_bar_is_highlighted() {
        let bars = bar_series(&[35.0, 42.0, 38.0, 90.0, 45.0, 55.0, 48.0], 100.0, 100.0)
            .expect("bars");
        let vp = Viewport::new(350.0, 130.0, Insets::new(0.0, 0.0, 30.0, 0.0));
        let cmds = render_bar_chart(&bars, &default_labels(), &vp);

        let rects: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawRect { rect, color, .. } => Some((*rect, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 7);
        assert_eq!(rects[3].1, ThemeToken::BarPeak);
        assert_eq!(rects[0].1, ThemeToken::BarFill);
        // Bars sit on the bottom edge.
        assert_eq!(rects[3].0.y + rects[3].0.h, 100.0);
        assert_eq!(rects[3].0.h, 90.0);
        assert_eq!(rects[0].0.w, 30.0);
        assert_eq!(rects[0].0.x, 10.0);
    }

    #[test]
    fn empty_bars_render_nothing() {
        let bars = BarSeries {
            heights: Vec::new(),
            peak: 0,
        };
        let vp = Viewport::new(100.0, 100.0, Insets::zero());
        assert!(render_bar_chart(&bars, &[], &vp).is_empty());
    }
}
