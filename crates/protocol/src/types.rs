use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Per-side padding inside a drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// A fixed-size drawing area with padding.
///
/// `width`/`height` are the outer dimensions; the usable plot area is what
/// remains after subtracting `padding` on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: Insets,
}

impl Viewport {
    pub fn new(width: f64, height: f64, padding: Insets) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    pub fn usable_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    pub fn usable_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }

    /// Y coordinate of the bottom edge of the plot area.
    pub fn bottom(&self) -> f64 {
        self.height - self.padding.bottom
    }

    /// The plot area in viewport coordinates.
    pub fn inner(&self) -> Rect {
        Rect::new(
            self.padding.left,
            self.padding.top,
            self.usable_width(),
            self.usable_height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_area_subtracts_padding() {
        let vp = Viewport::new(320.0, 160.0, Insets::new(8.0, 8.0, 24.0, 8.0));
        assert_eq!(vp.usable_width(), 304.0);
        assert_eq!(vp.usable_height(), 128.0);
        assert_eq!(vp.bottom(), 136.0);
        assert_eq!(vp.inner(), Rect::new(8.0, 8.0, 304.0, 128.0));
    }

    #[test]
    fn padding_defaults_to_zero_when_missing() {
        let vp: Viewport = serde_json::from_str(r#"{"width":100.0,"height":50.0}"#)
            .expect("viewport should deserialize");
        assert_eq!(vp.padding, Insets::zero());
    }
}
