use chrono::NaiveDate;
use serde::Serialize;
use stride_core::geometry::{self, ArcDescriptor, DayDescriptor};
use stride_protocol::{Insets, Point, Viewport};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ArcJson {
    #[serde(flatten)]
    arc: ArcDescriptor,
    degenerate: bool,
}

#[derive(Serialize)]
struct SeriesJson {
    points: Vec<Point>,
    baseline: f64,
    highlight: Option<Point>,
    line_d: String,
    area_d: String,
}

/// Describe a progress ring as JSON: `{progress, radius, circumference,
/// dash_offset, degenerate}`.
#[wasm_bindgen]
pub fn progress_arc(
    progress: f64,
    diameter: f64,
    stroke_thickness: f64,
) -> Result<String, JsError> {
    arc_json(progress, diameter, stroke_thickness).map_err(|e| JsError::new(&e))
}

/// Scale samples into a chart viewport, returning points and SVG path data
/// as JSON. A negative or out-of-range `highlight` yields no highlight.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn series_path(
    samples: &[f64],
    width: f64,
    height: f64,
    pad_top: f64,
    pad_right: f64,
    pad_bottom: f64,
    pad_left: f64,
    highlight: Option<i32>,
) -> Result<String, JsError> {
    let viewport = Viewport::new(
        width,
        height,
        Insets::new(pad_top, pad_right, pad_bottom, pad_left),
    );
    series_json(samples, &viewport, highlight).map_err(|e| JsError::new(&e))
}

/// The 7-day window around a calendar date, as a JSON array.
#[wasm_bindgen]
pub fn week_window(year: i32, month: u32, day: u32) -> Result<String, JsError> {
    week_json(year, month, day).map_err(|e| JsError::new(&e))
}

/// ISO date (`YYYY-MM-DD`) for a tapped chip, or `undefined` when the index
/// is outside the window.
#[wasm_bindgen]
pub fn date_for_index(
    year: i32,
    month: u32,
    day: u32,
    index: usize,
) -> Result<Option<String>, JsError> {
    let reference = date(year, month, day).map_err(|e| JsError::new(&e))?;
    Ok(geometry::date_for_index(reference, index).map(|d| d.to_string()))
}

fn arc_json(progress: f64, diameter: f64, stroke_thickness: f64) -> Result<String, String> {
    let arc = geometry::progress_arc(progress, diameter, stroke_thickness);
    let json = ArcJson {
        arc,
        degenerate: arc.is_degenerate(),
    };
    serde_json::to_string(&json).map_err(|e| e.to_string())
}

fn series_json(
    samples: &[f64],
    viewport: &Viewport,
    highlight: Option<i32>,
) -> Result<String, String> {
    let highlight = highlight.and_then(|i| usize::try_from(i).ok());
    let path = geometry::build_series_path(samples, viewport, highlight)
        .map_err(|e| e.to_string())?;
    let json = SeriesJson {
        line_d: path.line_path_data(),
        area_d: path.area_path_data(),
        points: path.points,
        baseline: path.baseline,
        highlight: path.highlight,
    };
    serde_json::to_string(&json).map_err(|e| e.to_string())
}

fn week_json(year: i32, month: u32, day: u32) -> Result<String, String> {
    let days: Vec<DayDescriptor> = geometry::week_window(date(year, month, day)?);
    serde_json::to_string(&days).map_err(|e| e.to_string())
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, String> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("invalid date: {year:04}-{month:02}-{day:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_json_has_flat_fields() {
        let json = arc_json(0.5, 240.0, 16.0).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["radius"], 112.0);
        assert_eq!(value["degenerate"], false);
    }

    #[test]
    fn negative_highlight_is_ignored() {
        let vp = Viewport::new(100.0, 100.0, Insets::zero());
        let json = series_json(&[0.0, 10.0], &vp, Some(-1)).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert!(value["highlight"].is_null());
        assert_eq!(value["line_d"], "M 0 100 L 100 0");
    }

    #[test]
    fn empty_samples_error() {
        let vp = Viewport::new(100.0, 100.0, Insets::zero());
        assert_eq!(
            series_json(&[], &vp, None),
            Err("sample series is empty".to_string())
        );
    }

    #[test]
    fn week_json_rejects_bad_dates() {
        assert!(week_json(2024, 2, 30).is_err());
        let json = week_json(2024, 1, 1).expect("json");
        assert!(json.contains(r#""weekday_name":"Mon""#));
    }
}
