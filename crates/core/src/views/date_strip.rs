use stride_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::geometry::DayDescriptor;

const CHIP_GAP: f64 = 8.0;
const MIN_CHIP_WIDTH: f64 = 56.0;
const DATE_FONT_SIZE: f64 = 16.0;
const DAY_FONT_SIZE: f64 = 12.0;

/// Render the rolling date strip: one pill-shaped chip per day.
///
/// `selected` is the caller-owned chip index; an index past the end
/// highlights nothing. Chips never shrink below 56px, so a narrow viewport
/// lets the strip overflow to the right the way a horizontal scroller would.
pub fn render_date_strip(
    days: &[DayDescriptor],
    selected: Option<usize>,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    if days.is_empty() {
        return Vec::new();
    }
    if let Some(index) = selected
        && index >= days.len()
    {
        tracing::debug!(index, len = days.len(), "selected day outside the strip");
    }

    let count = days.len() as f64;
    let inner = viewport.inner();
    let chip_w = ((inner.w - CHIP_GAP * (count - 1.0)) / count).max(MIN_CHIP_WIDTH);
    let chip_h = inner.h;
    let mut commands = Vec::with_capacity(days.len() * 3 + 2);

    commands.push(RenderCommand::BeginGroup {
        id: "date-strip".into(),
        label: None,
    });

    for (i, day) in days.iter().enumerate() {
        let rect = Rect::new(inner.x + i as f64 * (chip_w + CHIP_GAP), inner.y, chip_w, chip_h);
        let is_selected = selected == Some(i);
        let center = rect.center();

        if is_selected {
            commands.push(RenderCommand::DrawRect {
                rect,
                color: ThemeToken::ChipSelected,
                border_color: None,
                corner_radius: chip_w.min(chip_h) / 2.0,
                label: Some(day.date.to_string()),
            });
        }

        let text_color = if is_selected {
            ThemeToken::TextOnPrimary
        } else {
            ThemeToken::TextSecondary
        };
        commands.push(RenderCommand::DrawText {
            position: Point::new(center.x, center.y),
            text: day.chip_label(),
            color: text_color,
            font_size: DATE_FONT_SIZE,
            align: TextAlign::Center,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(center.x, center.y + DAY_FONT_SIZE + 4.0),
            text: day.weekday_name.clone(),
            color: text_color,
            font_size: DAY_FONT_SIZE,
            align: TextAlign::Center,
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

/// Index of the reference day within `days`, the strip's initial selection.
pub fn today_index(days: &[DayDescriptor]) -> Option<usize> {
    days.iter().position(|d| d.is_selected_today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::week_window;
    use chrono::NaiveDate;
    use stride_protocol::Insets;

    fn days() -> Vec<DayDescriptor> {
        week_window(NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"))
    }

    fn strip_viewport() -> Viewport {
        Viewport::new(400.0, 64.0, Insets::new(8.0, 16.0, 8.0, 16.0))
    }

    #[test]
    fn one_chip_per_day_with_selection() {
        let days = days();
        let cmds = render_date_strip(&days, today_index(&days), &strip_viewport());
        let rects: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawRect { rect, label, .. } => Some((*rect, label.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].1.as_deref(), Some("2024-01-01"));
        // 400 - 32 padding = 368 usable; (368 - 48) / 7 is below the minimum.
        assert_eq!(rects[0].0.w, 56.0);
        assert_eq!(rects[0].0.x, 16.0 + 3.0 * 64.0);

        let texts = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawText { .. }))
            .count();
        assert_eq!(texts, 14);
    }

    #[test]
    fn selected_text_uses_on_primary_color() {
        let days = days();
        let cmds = render_date_strip(&days, Some(0), &strip_viewport());
        assert!(matches!(
            &cmds[2],
            RenderCommand::DrawText { text, color: ThemeToken::TextOnPrimary, .. } if text == "29"
        ));
    }

    #[test]
    fn out_of_range_selection_highlights_nothing() {
        let days = days();
        let cmds = render_date_strip(&days, Some(9), &strip_viewport());
        assert!(!cmds.iter().any(|c| matches!(c, RenderCommand::DrawRect { .. })));
    }

    #[test]
    fn empty_strip() {
        assert!(render_date_strip(&[], Some(0), &strip_viewport()).is_empty());
        assert_eq!(today_index(&[]), None);
    }
}
