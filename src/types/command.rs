//! Draw commands.
//!
//! A command is applied to a canvas once and then discarded; there is no
//! retained scene graph.

use serde::{Deserialize, Serialize};

use crate::types::{Colour, Point};

/// Default text scale when a scene file omits one.
pub const DEFAULT_TEXT_SCALE: u32 = 2;

fn default_scale() -> u32 {
    DEFAULT_TEXT_SCALE
}

/// A single drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawCommand {
    /// Solid rectangle covering `[x, x+w) x [y, y+h)`.
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        colour: Colour,
    },

    /// Solid scanline-filled triangle.
    Triangle { points: [Point; 3], colour: Colour },

    /// Bitmap-font text, left to right from `(x, y)`.
    Text {
        x: i32,
        y: i32,
        text: String,
        colour: Colour,
        #[serde(default = "default_scale")]
        scale: u32,
    },
}

impl DrawCommand {
    pub fn rect(x: i32, y: i32, w: i32, h: i32, colour: Colour) -> Self {
        Self::Rect { x, y, w, h, colour }
    }

    pub fn triangle(points: [impl Into<Point>; 3], colour: Colour) -> Self {
        Self::Triangle {
            points: points.map(Into::into),
            colour,
        }
    }

    pub fn text(x: i32, y: i32, text: impl Into<String>, colour: Colour, scale: u32) -> Self {
        Self::Text {
            x,
            y,
            text: text.into(),
            colour,
            scale,
        }
    }
}
