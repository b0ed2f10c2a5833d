//! TOML configuration for `stride dashboard`.
//!
//! ```toml
//! width = 360.0
//! date = "2024-01-01"        # defaults to today
//!
//! [ring]
//! observed = 5499.0
//! goal = 10000.0
//! metric = "steps"
//! caption = "Steps"
//!
//! [chart]
//! samples = [3200.0, 5400.0, 2800.0, 6100.0, 4900.0, 7200.0, 5499.0]
//! highlight = 6
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use stride_core::geometry::{RingGeometry, goal_progress};
use stride_core::model::Metric;
use stride_core::views::dashboard::DashboardInput;
use stride_core::views::line_chart::default_labels;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    pub date: Option<NaiveDate>,
    pub selected_day: Option<usize>,
    #[serde(default)]
    pub light: bool,
    #[serde(default)]
    pub ring: RingConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingConfig {
    /// Explicit progress; takes precedence over `observed / goal`.
    pub progress: Option<f64>,
    pub observed: f64,
    pub goal: f64,
    pub diameter: f64,
    pub stroke: f64,
    pub metric: Metric,
    pub caption: Option<String>,
}

impl Default for RingConfig {
    fn default() -> Self {
        let geometry = RingGeometry::default();
        Self {
            progress: None,
            observed: 5499.0,
            goal: 10_000.0,
            diameter: geometry.diameter,
            stroke: geometry.stroke_thickness,
            metric: Metric::Steps,
            caption: Some("Steps".into()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub samples: Vec<f64>,
    pub labels: Vec<String>,
    pub highlight: Option<usize>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            samples: vec![3200.0, 5400.0, 2800.0, 6100.0, 4900.0, 7200.0, 5499.0],
            labels: default_labels(),
            highlight: Some(6),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            date: None,
            selected_day: None,
            light: false,
            ring: RingConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

fn default_width() -> f64 {
    360.0
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Build the dashboard input, using `today` when no date is configured.
    pub fn to_input(&self, today: NaiveDate) -> DashboardInput {
        let ring = &self.ring;
        let progress = ring
            .progress
            .unwrap_or_else(|| goal_progress(ring.observed, ring.goal));
        DashboardInput {
            width: self.width,
            reference_date: self.date.unwrap_or(today),
            selected_day: self.selected_day,
            progress,
            ring: RingGeometry::new(ring.diameter, ring.stroke),
            ring_value: Some(ring.metric.format_value(ring.observed)),
            ring_caption: ring.caption.clone(),
            samples: self.chart.samples.clone(),
            labels: self.chart.labels.clone(),
            highlight: self.chart.highlight,
        }
    }
}
