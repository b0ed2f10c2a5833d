use thiserror::Error;

/// Invalid-input conditions reported by the geometry builders.
///
/// Degenerate ring geometry and out-of-range highlight indices are not
/// errors; see [`crate::geometry::ArcDescriptor::is_degenerate`] and
/// [`crate::geometry::SeriesPath::highlight`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("sample series is empty")]
    EmptySeries,
    #[error("sample {index} is not finite ({value})")]
    NonFiniteSample { index: usize, value: f64 },
    #[error("full-scale value must be positive, got {0}")]
    InvalidScale(f64),
}
