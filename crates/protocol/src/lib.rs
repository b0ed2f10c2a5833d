pub mod commands;
pub mod theme;
pub mod types;

pub use commands::{PathData, RenderCommand, StrokeDash, TextAlign};
pub use theme::ThemeToken;
pub use types::{Insets, Point, Rect, Viewport};
