use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    SurfaceElevated,
    Card,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,
    /// Text drawn on top of a primary-filled shape.
    TextOnPrimary,

    Primary,
    PrimaryMuted,
    Success,

    // Progress ring
    RingTrack,
    RingProgress,

    // Line / bar charts
    ChartLine,
    ChartArea,
    ChartGuide,
    ChartMarker,
    BarFill,
    BarPeak,

    // Date strip
    ChipSelected,
}
