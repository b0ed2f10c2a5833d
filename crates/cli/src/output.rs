use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use stride_core::svg::render_svg;
use stride_protocol::RenderCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Standalone SVG document
    Svg,
    /// Render commands as JSON
    Json,
}

/// A rendered view and the canvas size it was laid out for.
#[derive(Debug, Serialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<RenderCommand>,
}

impl Frame {
    pub fn new(width: f64, height: f64, commands: Vec<RenderCommand>) -> Self {
        Self {
            width,
            height,
            commands,
        }
    }

    pub fn render(&self, format: Format, dark: bool) -> Result<String> {
        match format {
            Format::Svg => Ok(render_svg(&self.commands, self.width, self.height, dark)),
            Format::Json => {
                serde_json::to_string_pretty(self).context("failed to serialize render commands")
            }
        }
    }
}

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::geometry::RingGeometry;
    use stride_core::views::progress_ring::render_progress_ring;

    fn ring_frame() -> Frame {
        Frame::new(
            72.0,
            72.0,
            render_progress_ring(0.72, &RingGeometry::new(72.0, 6.0), None),
        )
    }

    #[test]
    fn svg_format() {
        let svg = ring_frame().render(Format::Svg, true).expect("render");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 72 72""#));
    }

    #[test]
    fn json_format() {
        let json = ring_frame().render(Format::Json, true).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["width"], 72.0);
        assert!(value["commands"].as_array().is_some_and(|c| c.len() == 4));
    }
}
