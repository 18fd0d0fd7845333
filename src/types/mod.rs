//! Core value types for pxcanvas.
//!
//! - `Colour` - 8-bit RGBA colour values
//! - `Point` - fractional canvas positions
//! - `DrawCommand` - rect, triangle and text operations

mod colour;
mod command;
mod point;

pub use colour::Colour;
pub use command::{DrawCommand, DEFAULT_TEXT_SCALE};
pub use point::Point;
