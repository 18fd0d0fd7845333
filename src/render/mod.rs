//! Rendering module for pxcanvas.
//!
//! This module owns the pixel canvas, the rasterizer that draws into it,
//! the built-in bitmap font, and the PNG encoder.

mod canvas;
pub mod font;
mod png;
mod raster;

pub use canvas::{PixelCanvas, BYTES_PER_PIXEL};
pub use png::{encode_png, write_png, PngChunk, PNG_SIGNATURE};
pub use raster::{measure_text, Rasterizer};
