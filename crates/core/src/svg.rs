//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use std::fmt::Write as _;

use stride_protocol::{RenderCommand, StrokeDash, TextAlign, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:'DM Sans',system-ui,-apple-system,sans-serif">"#,
    );

    let bg = resolve_color(ThemeToken::Background, dark);
    let _ = write!(svg, r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#);

    // Groups and transforms both open a <g>; anything left open is closed at the end.
    let mut open = 0usize;

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                corner_radius,
                label,
            } => {
                let fill = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{corner_radius}" fill="{fill}""#,
                    rect.x, rect.y, rect.w, rect.h,
                );
                if let Some(border) = border_color {
                    let _ = write!(svg, r#" stroke="{}""#, resolve_color(*border, dark));
                }
                match label {
                    Some(label) => {
                        let _ = write!(svg, "><title>{}</title></rect>", escape_xml(label));
                    }
                    None => svg.push_str("/>"),
                }
            }
            RenderCommand::DrawCircle {
                center,
                radius,
                fill,
                stroke,
                stroke_width,
                dash,
                rotation,
            } => {
                let fill = fill.map_or("none", |t| resolve_color(t, dark));
                let _ = write!(
                    svg,
                    r#"<circle cx="{}" cy="{}" r="{radius}" fill="{fill}""#,
                    center.x, center.y,
                );
                if let Some(stroke) = stroke {
                    let _ = write!(
                        svg,
                        r#" stroke="{}" stroke-width="{stroke_width}""#,
                        resolve_color(*stroke, dark),
                    );
                }
                if let Some(dash) = dash {
                    push_dash(&mut svg, dash);
                    svg.push_str(r#" stroke-linecap="round""#);
                }
                if *rotation != 0.0 {
                    let _ = write!(
                        svg,
                        r#" transform="rotate({rotation} {} {})""#,
                        center.x, center.y,
                    );
                }
                svg.push_str("/>");
            }
            RenderCommand::DrawPath {
                path,
                fill,
                fill_opacity,
                stroke,
                stroke_width,
            } => {
                let _ = write!(svg, r#"<path d="{}""#, path.to_svg_d());
                match fill {
                    Some(fill) => {
                        let _ = write!(
                            svg,
                            r#" fill="{}" fill-opacity="{fill_opacity}""#,
                            resolve_color(*fill, dark),
                        );
                    }
                    None => svg.push_str(r#" fill="none""#),
                }
                if let Some(stroke) = stroke {
                    let _ = write!(
                        svg,
                        r#" stroke="{}" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round""#,
                        resolve_color(*stroke, dark),
                    );
                }
                svg.push_str("/>");
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
                dash,
            } => {
                let stroke = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}""#,
                    from.x, from.y, to.x, to.y,
                );
                if let Some(dash) = dash {
                    push_dash(&mut svg, dash);
                }
                svg.push_str("/>");
            }
            RenderCommand::DrawText {
                text,
                position,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color, dark);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                let _ = write!(
                    svg,
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                );
            }
            RenderCommand::PushTransform { translate } => {
                let _ = write!(
                    svg,
                    r#"<g transform="translate({} {})">"#,
                    translate.x, translate.y,
                );
                open += 1;
            }
            RenderCommand::BeginGroup { id, label } => {
                let _ = write!(svg, r#"<g id="{}">"#, escape_xml(id));
                if let Some(label) = label {
                    let _ = write!(svg, "<title>{}</title>", escape_xml(label));
                }
                open += 1;
            }
            RenderCommand::PopTransform | RenderCommand::EndGroup => {
                if open > 0 {
                    svg.push_str("</g>");
                    open -= 1;
                }
            }
        }
    }

    for _ in 0..open {
        svg.push_str("</g>");
    }
    svg.push_str("</svg>");
    svg
}

fn push_dash(svg: &mut String, dash: &StrokeDash) {
    let array: Vec<String> = dash.array.iter().map(f64::to_string).collect();
    let _ = write!(
        svg,
        r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
        array.join(" "),
        dash.offset,
    );
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::Background => "#0D0D0D",
            ThemeToken::Surface => "#121212",
            ThemeToken::SurfaceElevated | ThemeToken::RingTrack => "#1A1A1A",
            ThemeToken::Card => "#161616",
            ThemeToken::Border | ThemeToken::BarFill => "#27272A",
            ThemeToken::TextPrimary => "#FFFFFF",
            ThemeToken::TextSecondary => "#A0A0A0",
            ThemeToken::TextMuted => "#6B7280",
            ThemeToken::TextOnPrimary => "#0D0D0D",
            ThemeToken::PrimaryMuted => "#EAB308",
            ThemeToken::Success => "#22C55E",
            ThemeToken::Primary
            | ThemeToken::RingProgress
            | ThemeToken::ChartLine
            | ThemeToken::ChartArea
            | ThemeToken::ChartGuide
            | ThemeToken::ChartMarker
            | ThemeToken::BarPeak
            | ThemeToken::ChipSelected => "#FACC15",
        }
    } else {
        match token {
            ThemeToken::Background => "#F8F9FA",
            ThemeToken::Surface | ThemeToken::Card => "#FFFFFF",
            ThemeToken::SurfaceElevated | ThemeToken::RingTrack => "#E9ECEF",
            ThemeToken::Border | ThemeToken::BarFill => "#DEE2E6",
            ThemeToken::TextPrimary => "#11181C",
            ThemeToken::TextSecondary => "#687076",
            ThemeToken::TextMuted => "#6B7280",
            ThemeToken::TextOnPrimary => "#11181C",
            ThemeToken::PrimaryMuted => "#CA8A04",
            ThemeToken::Success => "#16A34A",
            ThemeToken::Primary
            | ThemeToken::RingProgress
            | ThemeToken::ChartLine
            | ThemeToken::ChartArea
            | ThemeToken::ChartGuide
            | ThemeToken::ChartMarker
            | ThemeToken::BarPeak
            | ThemeToken::ChipSelected => "#EAB308",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
