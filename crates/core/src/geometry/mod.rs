pub mod bars;
pub mod progress_arc;
pub mod series_path;
pub mod week_window;

pub use bars::{BarSeries, bar_series};
pub use progress_arc::{ArcDescriptor, RingGeometry, clamp_progress, goal_progress, progress_arc};
pub use series_path::{SeriesPath, build_series_path};
pub use week_window::{
    DayDescriptor, WEEK_RADIUS, date_for_index, week_window, week_window_with_radius,
};
