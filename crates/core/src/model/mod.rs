pub mod metric;
pub mod target;

pub use metric::Metric;
pub use target::BoundedTarget;
