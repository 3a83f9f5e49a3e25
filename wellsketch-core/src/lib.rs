//! Wellsketch Core Library
//!
//! Geometry engine for wellbore schematics: linear scales, range derivation,
//! hole / cement / casing shape builders and the composer that turns a well
//! configuration into an ordered list of draw commands.

pub mod types;
pub mod error;
pub mod scale;
pub mod ranges;
pub mod shapes;
pub mod style;
pub mod surface;
pub mod provider;
pub mod compose;
pub mod host;

// Re-export commonly used types and functions
pub use types::{Point, ElementKind, ElementConfig};
pub use error::{ConfigError, RenderError};
pub use scale::{LinearScale, Scales, Axis};
pub use ranges::{calculate_ranges, top_references, DerivedRange, DEFAULT_BASELINE_MD};
pub use shapes::{band, hole_points, cement_points, casing_shapes, shoe_incision, CasingShapes, Side};
pub use style::{Style, Fill, Gradient, GradientStop, Palette};
pub use surface::{RenderSurface, Resizable, DrawCommand, DrawPath, Scene, ShapeKind, RecordingSurface};
pub use provider::{ConfigProvider, StaticProvider};
pub use compose::{Composer, ComposerOptions, Margins};
pub use host::SketchHost;

/// Version information for the Wellsketch core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
