pub mod bar_chart;
pub mod dashboard;
pub mod date_strip;
pub mod line_chart;
pub mod progress_ring;
