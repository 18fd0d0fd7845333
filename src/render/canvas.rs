//! RGBA pixel canvas.
//!
//! The canvas owns a single contiguous buffer of interleaved R,G,B,A bytes,
//! row-major with row 0 at the top. Every write is clipped to the canvas:
//! coordinates outside `[0, width) x [0, height)` are dropped silently so
//! rasterizers never need their own bounds checks.

use crate::error::{CanvasError, Result};
use crate::types::Colour;

/// Bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A fixed-size RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelCanvas {
    /// Create a canvas with every pixel set to `fill`.
    ///
    /// Zero-sized canvases are rejected with `InvalidDimension`.
    pub fn new(width: u32, height: u32, fill: Colour) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .filter(|&n| n > 0)
            .ok_or(CanvasError::InvalidDimension { width, height })?;

        let data = fill.to_rgba().repeat(len / BYTES_PER_PIXEL);
        debug_assert_eq!(data.len(), len);

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The whole buffer as interleaved RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// One row of interleaved RGBA bytes.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.stride())
    }

    /// Read a pixel. Returns None outside the canvas.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Colour> {
        let offset = self.offset(x, y)?;
        let px: [u8; 4] = self.data[offset..offset + BYTES_PER_PIXEL].try_into().ok()?;
        Some(Colour::from(px))
    }

    /// Write a single pixel. Out-of-bounds writes are a no-op.
    pub fn set_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(offset) = self.offset(x, y) {
            self.data[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());
        }
    }

    /// Write `len` pixels along row `y` starting at column `x`.
    ///
    /// The run is clipped to the row; it never wraps onto a neighbouring
    /// row. Rows outside the canvas and `len <= 0` write nothing.
    pub fn fill_span(&mut self, x: i64, y: i64, len: i64, colour: Colour) {
        if len <= 0 || y < 0 || y >= self.height as i64 {
            return;
        }
        let start = x.max(0);
        let end = x.saturating_add(len).min(self.width as i64);
        if start >= end {
            return;
        }

        let stride = self.stride();
        let row_start = y as usize * stride;
        let from = row_start + start as usize * BYTES_PER_PIXEL;
        let to = row_start + end as usize * BYTES_PER_PIXEL;
        let rgba = colour.to_rgba();
        for px in self.data[from..to].chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Fill the rectangle `[x, x+w) x [y, y+h)`.
    ///
    /// The rectangle is clipped row by row to the canvas, so partially or
    /// wholly off-canvas rectangles are safe. Non-positive sizes draw nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Colour) {
        if w <= 0 || h <= 0 {
            return;
        }
        let top = (y as i64).max(0);
        let bottom = (y as i64 + h as i64).min(self.height as i64);
        for row in top..bottom {
            self.fill_span(x as i64, row, w as i64, colour);
        }
    }

    fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BG: Colour = Colour::rgb(11, 16, 32);
    const RED: Colour = Colour::rgb(255, 0, 0);

    #[test]
    fn test_new_fills_every_pixel() {
        let canvas = PixelCanvas::new(7, 3, BG).unwrap();
        assert_eq!(canvas.as_bytes().len(), 7 * 3 * 4);
        for px in canvas.as_bytes().chunks_exact(4) {
            assert_eq!(px, &BG.to_rgba());
        }
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            PixelCanvas::new(0, 5, BG),
            Err(CanvasError::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(PixelCanvas::new(5, 0, BG).is_err());
    }

    #[test]
    fn test_set_pixel_in_bounds() {
        let mut canvas = PixelCanvas::new(4, 4, BG).unwrap();
        canvas.set_pixel(3, 2, RED);
        assert_eq!(canvas.get_pixel(3, 2), Some(RED));
        assert_eq!(canvas.get_pixel(2, 3), Some(BG));
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut canvas = PixelCanvas::new(4, 4, BG).unwrap();
        let before = canvas.clone();
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i32::MIN, i32::MAX), (100, 2)] {
            canvas.set_pixel(x, y, RED);
        }
        assert_eq!(canvas.as_bytes(), before.as_bytes());
        assert_eq!(canvas.get_pixel(-1, 0), None);
    }

    #[test]
    fn test_fill_rect_exact_region() {
        let mut canvas = PixelCanvas::new(8, 8, BG).unwrap();
        canvas.fill_rect(2, 3, 4, 2, RED);
        for y in 0..8 {
            for x in 0..8 {
                let inside = (2..6).contains(&x) && (3..5).contains(&y);
                let expected = if inside { RED } else { BG };
                assert_eq!(canvas.get_pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_rect_clips_per_row() {
        let mut canvas = PixelCanvas::new(4, 4, BG).unwrap();
        canvas.fill_rect(2, -1, 10, 2, RED);
        // Row 0 columns 2..4 only; nothing wraps into row 1.
        assert_eq!(canvas.get_pixel(1, 0), Some(BG));
        assert_eq!(canvas.get_pixel(2, 0), Some(RED));
        assert_eq!(canvas.get_pixel(3, 0), Some(RED));
        assert_eq!(canvas.get_pixel(0, 1), Some(BG));
        assert_eq!(canvas.get_pixel(2, 1), Some(BG));
    }

    #[test]
    fn test_fill_rect_empty_or_offscreen() {
        let mut canvas = PixelCanvas::new(4, 4, BG).unwrap();
        let before = canvas.clone();
        canvas.fill_rect(0, 0, 0, 4, RED);
        canvas.fill_rect(0, 0, 4, -2, RED);
        canvas.fill_rect(10, 10, 3, 3, RED);
        canvas.fill_rect(-5, 0, 3, 3, RED);
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_fill_span_clips_both_ends() {
        let mut canvas = PixelCanvas::new(5, 2, BG).unwrap();
        canvas.fill_span(-2, 1, 4, RED);
        assert_eq!(canvas.get_pixel(0, 1), Some(RED));
        assert_eq!(canvas.get_pixel(1, 1), Some(RED));
        assert_eq!(canvas.get_pixel(2, 1), Some(BG));

        canvas.fill_span(3, 0, 100, RED);
        assert_eq!(canvas.get_pixel(3, 0), Some(RED));
        assert_eq!(canvas.get_pixel(4, 0), Some(RED));
        assert_eq!(canvas.get_pixel(0, 1), Some(RED));
    }

    #[test]
    fn test_rows_are_top_to_bottom() {
        let mut canvas = PixelCanvas::new(2, 3, BG).unwrap();
        canvas.set_pixel(0, 2, RED);
        let rows: Vec<&[u8]> = canvas.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[2][..4], &RED.to_rgba());
        assert_eq!(canvas.row(2), rows[2]);
    }
}
