use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Bar heights for a weekly bar chart (the water tracker's daily intake).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// Height of each bar in pixels, in sample order.
    pub heights: Vec<f64>,
    /// Index of the tallest bar; the first one wins ties.
    pub peak: usize,
}

/// Scale each sample against `full_scale` into `[0, max_height]`.
pub fn bar_series(
    samples: &[f64],
    full_scale: f64,
    max_height: f64,
) -> Result<BarSeries, GeometryError> {
    if samples.is_empty() {
        return Err(GeometryError::EmptySeries);
    }
    if !(full_scale.is_finite() && full_scale > 0.0) {
        return Err(GeometryError::InvalidScale(full_scale));
    }

    let mut heights = Vec::with_capacity(samples.len());
    let mut peak = 0;
    for (i, &value) in samples.iter().enumerate() {
        if !value.is_finite() {
            return Err(GeometryError::NonFiniteSample { index: i, value });
        }
        if value > samples[peak] {
            peak = i;
        }
        heights.push((value / full_scale).clamp(0.0, 1.0) * max_height);
    }

    Ok(BarSeries { heights, peak })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_week() {
        let bars = bar_series(&[35.0, 42.0, 38.0, 90.0, 45.0, 55.0, 48.0], 100.0, 100.0)
            .expect("bars");
        assert_eq!(bars.peak, 3);
        assert_eq!(bars.heights[3], 90.0);
        assert_eq!(bars.heights[0], 35.0);
    }

    #[test]
    fn heights_are_clamped() {
        let bars = bar_series(&[-5.0, 250.0], 100.0, 40.0).expect("bars");
        assert_eq!(bars.heights, vec![0.0, 40.0]);
        assert_eq!(bars.peak, 1);
    }

    #[test]
    fn first_peak_wins_ties() {
        let bars = bar_series(&[10.0, 20.0, 20.0], 20.0, 10.0).expect("bars");
        assert_eq!(bars.peak, 1);
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(bar_series(&[], 100.0, 10.0), Err(GeometryError::EmptySeries));
        assert_eq!(
            bar_series(&[1.0], 0.0, 10.0),
            Err(GeometryError::InvalidScale(0.0))
        );
        assert!(matches!(
            bar_series(&[1.0, f64::NAN], 10.0, 10.0),
            Err(GeometryError::NonFiniteSample { index: 1, .. })
        ));
    }
}
