//! Pure geometry and view transforms behind the stride fitness dashboard.
//!
//! Everything here is a stateless function from input values to output
//! values. Presentation code calls it once per state change and discards
//! the result.

pub mod error;
pub mod geometry;
pub mod model;
pub mod svg;
pub mod views;

pub use error::GeometryError;
