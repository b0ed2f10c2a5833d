use serde::{Deserialize, Serialize};

use crate::geometry::progress_arc::clamp_progress;

/// A stepper-controlled value held within `[min, max]`, such as the water
/// tracker's ounces or the training screen's mileage target.
///
/// The caller owns the value; every operation returns the updated copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedTarget {
    pub value: f64,
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl BoundedTarget {
    /// Water intake: 0..100 oz in 8 oz steps.
    pub const WATER_OZ: Self = Self {
        value: 48.0,
        step: 8.0,
        min: 0.0,
        max: 100.0,
    };

    /// Mileage target: 0..5 mi in 0.1 mi steps.
    pub const MILEAGE: Self = Self {
        value: 2.1,
        step: 0.1,
        min: 0.0,
        max: 5.0,
    };

    pub fn new(value: f64, step: f64, min: f64, max: f64) -> Self {
        Self {
            value: value.clamp(min, max),
            step,
            min,
            max,
        }
    }

    #[must_use]
    pub fn set(self, value: f64) -> Self {
        let value = if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        };
        Self { value, ..self }
    }

    #[must_use]
    pub fn increment(self) -> Self {
        self.set(self.value + self.step)
    }

    #[must_use]
    pub fn decrement(self) -> Self {
        self.set(self.value - self.step)
    }

    /// Fraction of the way from `min` to `max`, for a progress ring.
    pub fn progress(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            clamp_progress((self.value - self.min) / span)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_steps_stay_in_bounds() {
        let mut t = BoundedTarget::WATER_OZ;
        for _ in 0..10 {
            t = t.increment();
        }
        assert_eq!(t.value, 100.0);
        assert_eq!(t.progress(), 1.0);
        for _ in 0..20 {
            t = t.decrement();
        }
        assert_eq!(t.value, 0.0);
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn water_progress() {
        assert_eq!(BoundedTarget::WATER_OZ.progress(), 0.48);
        assert_eq!(BoundedTarget::WATER_OZ.increment().value, 56.0);
    }

    #[test]
    fn mileage_progress() {
        let t = BoundedTarget::MILEAGE;
        assert!((t.progress() - 0.42).abs() < 1e-12);
        assert!((t.increment().value - 2.2).abs() < 1e-12);
    }

    #[test]
    fn new_clamps_initial_value() {
        assert_eq!(BoundedTarget::new(12.0, 1.0, 0.0, 10.0).value, 10.0);
        assert_eq!(BoundedTarget::new(5.0, 1.0, 0.0, 10.0).set(f64::NAN).value, 0.0);
    }

    #[test]
    fn empty_span_has_zero_progress() {
        assert_eq!(BoundedTarget::new(3.0, 1.0, 3.0, 3.0).progress(), 0.0);
    }
}
