/*!
# Wellsketch Export

Render surfaces that turn a composed wellbore schematic into files:

1. **SVG**: [`SvgSurface`] collects `<path>` elements and gradient
   definitions and serializes them as a standalone document.
2. **PNG**: [`RasterSurface`] (feature `raster`) fills and strokes the same
   paths on a CPU pixel buffer.

[`VectorExporter`] is the front door used by the CLI: it wires a composer,
a configuration provider and one of the surfaces through a
[`wellsketch_core::SketchHost`] and writes the result.
*/

pub mod color;
pub mod vector_export;
#[cfg(feature = "raster")]
pub mod raster;

pub use color::{parse_hex_rgb, Rgb};
pub use vector_export::{ExportConfig, ExportFormat, SvgSurface, VectorExporter};
#[cfg(feature = "raster")]
pub use raster::RasterSurface;
