//! pxcanvas - a tiny RGBA rasterizer with a byte-exact PNG encoder.
//!
//! Build a [`PixelCanvas`], draw rectangles, triangles and 3x5 bitmap text
//! through a [`Rasterizer`], then hand the canvas to [`encode_png`].

pub mod cli;
pub mod error;
pub mod output;
pub mod render;
pub mod scene;
pub mod types;

pub use error::{CanvasError, Result};
pub use render::{encode_png, measure_text, write_png, PixelCanvas, PngChunk, Rasterizer};
pub use scene::Scene;
pub use types::{Colour, DrawCommand, Point};
