//! Rasterizer - draws rectangles, triangles and bitmap text onto a canvas.
//!
//! All drawing goes through the canvas's clipped write primitives, so any
//! part of a shape that falls outside the canvas is dropped silently.

use crate::types::{Colour, DrawCommand, Point};

use super::font::{self, GLYPH_COLUMNS};
use super::PixelCanvas;

/// Draws onto a mutably borrowed canvas.
pub struct Rasterizer<'a> {
    canvas: &'a mut PixelCanvas,
}

impl<'a> Rasterizer<'a> {
    pub fn new(canvas: &'a mut PixelCanvas) -> Self {
        Self { canvas }
    }

    /// Access the underlying canvas.
    pub fn canvas(&self) -> &PixelCanvas {
        &*self.canvas
    }

    /// Apply a single draw command.
    pub fn apply(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Rect { x, y, w, h, colour } => self.rect(*x, *y, *w, *h, *colour),
            DrawCommand::Triangle { points, colour } => self.triangle(*points, *colour),
            DrawCommand::Text {
                x,
                y,
                text,
                colour,
                scale,
            } => {
                self.draw_text(*x, *y, text, *colour, *scale);
            }
        }
    }

    /// Fill the rectangle `[x, x+w) x [y, y+h)`.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Colour) {
        self.canvas.fill_rect(x, y, w, h, colour);
    }

    /// Scanline-fill a triangle.
    ///
    /// Vertices are sorted top to bottom (P1, P2, P3). Each row takes one
    /// bound from the long edge P1-P3 and the other from P1-P2 while the
    /// row is strictly above P2, and from P2-P3 from P2's row onward. The
    /// inclusive run between the floored bounds is filled.
    pub fn triangle(&mut self, points: [Point; 3], colour: Colour) {
        let mut pts = points;
        pts.sort_by(|a, b| a.y.total_cmp(&b.y));
        let [p1, p2, p3] = pts;

        let last_row = self.canvas.height() as i64 - 1;
        // Bounds past either side of the canvas clip identically, so keep
        // them small enough for the span length to fit in an i64.
        let max_x = self.canvas.width() as f64;
        let y_min = (p1.y.floor() as i64).max(0);
        let y_max = (p3.y.floor() as i64).min(last_row);

        for y in y_min..=y_max {
            let row = y as f64;
            let mut xa = edge_x(row, p1, p3);
            let mut xb = if row < p2.y {
                edge_x(row, p1, p2)
            } else {
                edge_x(row, p2, p3)
            };
            if xa > xb {
                std::mem::swap(&mut xa, &mut xb);
            }

            let start = xa.clamp(-1.0, max_x).floor() as i64;
            let end = xb.clamp(-1.0, max_x).floor() as i64;
            self.canvas
                .fill_span(start, y, end.saturating_sub(start).saturating_add(1), colour);
        }
    }

    /// Draw one character and return its advance width.
    ///
    /// Characters without a glyph draw nothing and advance by zero.
    pub fn draw_char(&mut self, x: i32, y: i32, c: char, colour: Colour, scale: u32) -> i32 {
        let Some(glyph) = font::glyph(c) else {
            return 0;
        };

        let block = scale_to_i32(scale);
        for (col, row) in glyph.iter_set() {
            let px = x.saturating_add((col as i32).saturating_mul(block));
            let py = y.saturating_add((row as i32).saturating_mul(block));
            self.canvas.fill_rect(px, py, block, block, colour);
        }

        advance(scale)
    }

    /// Draw a string left to right and return the total advance.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, colour: Colour, scale: u32) -> i32 {
        let mut cursor = x;
        for c in text.chars() {
            cursor = cursor.saturating_add(self.draw_char(cursor, y, c, colour, scale));
        }
        cursor.saturating_sub(x)
    }
}

/// Width `draw_text` would advance for `text`, without drawing.
pub fn measure_text(text: &str, scale: u32) -> i32 {
    text.chars()
        .filter(|&c| font::glyph(c).is_some())
        .fold(0i32, |acc, _| acc.saturating_add(advance(scale)))
}

/// Advance for one supported glyph: its columns plus one column of spacing.
fn advance(scale: u32) -> i32 {
    scale_to_i32(GLYPH_COLUMNS)
        .saturating_mul(scale_to_i32(scale))
        .saturating_add(scale_to_i32(scale))
}

fn scale_to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// X on the edge `from`-`to` at row `y`. Horizontal edges yield `from.x`.
fn edge_x(y: f64, from: Point, to: Point) -> f64 {
    if to.y == from.y {
        return from.x;
    }
    from.x + (to.x - from.x) * (y - from.y) / (to.y - from.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PixelCanvas;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    const BG: Colour = Colour::BLACK;
    const FG: Colour = Colour::WHITE;

    fn canvas(w: u32, h: u32) -> PixelCanvas {
        PixelCanvas::new(w, h, BG).unwrap()
    }

    /// Render the canvas as text: `#` for non-background, `.` otherwise.
    fn ascii(canvas: &PixelCanvas) -> String {
        let (w, h) = canvas.size();
        let mut out = String::new();
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let c = canvas.get_pixel(x, y).unwrap();
                out.push(if c == BG { '.' } else { '#' });
            }
            out.push('\n');
        }
        out
    }

    fn painted(canvas: &PixelCanvas) -> usize {
        canvas
            .as_bytes()
            .chunks_exact(4)
            .filter(|px| *px != BG.to_rgba())
            .count()
    }

    #[test]
    fn test_edge_x_interpolates() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 10.0);
        assert_eq!(edge_x(5.0, a, b), 5.0);
        assert_eq!(edge_x(3.0, Point::new(4.0, 3.0), Point::new(9.0, 3.0)), 4.0);
    }

    #[test]
    fn test_triangle_right_angle() {
        let mut c = canvas(6, 5);
        Rasterizer::new(&mut c).triangle(
            [(0, 0).into(), (0, 4).into(), (4, 4).into()],
            FG,
        );
        assert_eq!(
            ascii(&c),
            "#.....\n##....\n###...\n####..\n#####.\n"
        );
    }

    #[test]
    fn test_triangle_play_icon_shape() {
        let mut c = canvas(6, 5);
        Rasterizer::new(&mut c).triangle(
            [(0, 0).into(), (0, 4).into(), (4, 2).into()],
            FG,
        );
        // Rows above P2 use P1-P2, rows from P2 down use P2-P3.
        assert_eq!(
            ascii(&c),
            "#.....\n###...\n#####.\n###...\n#.....\n"
        );
    }

    #[test]
    fn test_triangle_vertex_order_does_not_matter() {
        let pts: [Point; 3] = [(1, 0).into(), (5, 3).into(), (0, 6).into()];
        let mut a = canvas(8, 8);
        let mut b = canvas(8, 8);
        Rasterizer::new(&mut a).triangle(pts, FG);
        Rasterizer::new(&mut b).triangle([pts[2], pts[0], pts[1]], FG);
        assert_eq!(a, b);
    }

    #[test]
    fn test_triangle_is_idempotent() {
        let pts: [Point; 3] = [
            Point::new(1.5, 0.2),
            Point::new(7.9, 4.4),
            Point::new(0.1, 7.7),
        ];
        let mut once = canvas(10, 10);
        Rasterizer::new(&mut once).triangle(pts, FG);
        let mut twice = once.clone();
        Rasterizer::new(&mut twice).triangle(pts, FG);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_degenerate_triangles_stay_thin() {
        let cases: [[Point; 3]; 3] = [
            [(2, 2).into(), (2, 2).into(), (2, 2).into()],
            [(1, 3).into(), (4, 3).into(), (6, 3).into()],
            [(1, 1).into(), (3, 3).into(), (5, 5).into()],
        ];
        for pts in cases {
            let mut c = canvas(10, 10);
            Rasterizer::new(&mut c).triangle(pts, FG);
            let rows: Vec<usize> = (0..10)
                .map(|y| (0..10).filter(|&x| c.get_pixel(x, y) == Some(FG)).count())
                .collect();
            assert!(rows.iter().all(|&n| n < 10), "full scanline for {:?}", pts);
            assert!(painted(&c) <= 6, "too many pixels for {:?}", pts);
        }
    }

    #[test]
    fn test_triangle_clips_outside_canvas() {
        let mut c = canvas(4, 4);
        Rasterizer::new(&mut c).triangle(
            [Point::new(-10.0, -10.0), Point::new(20.0, -10.0), Point::new(2.0, 20.0)],
            FG,
        );
        assert!(painted(&c) > 0);
        assert_eq!(c.as_bytes().len(), 4 * 4 * 4);
    }

    #[test]
    fn test_triangle_with_huge_coordinates() {
        let mut c = canvas(4, 4);
        Rasterizer::new(&mut c).triangle(
            [Point::new(-5e18, 0.0), Point::new(5e18, 0.0), Point::new(0.0, 3.0)],
            FG,
        );
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(c.get_pixel(x, y), Some(FG), "pixel ({x}, {y})");
            }
        }
        assert_eq!(c.get_pixel(0, 3), Some(FG));
    }

    #[test]
    fn test_triangle_fully_offscreen() {
        let mut c = canvas(4, 4);
        Rasterizer::new(&mut c).triangle(
            [Point::new(0.0, -9.0), Point::new(3.0, -5.0), Point::new(1.0, -1.5)],
            FG,
        );
        assert_eq!(painted(&c), 0);
    }

    #[test]
    fn test_draw_char_advance() {
        let mut c = canvas(40, 40);
        let mut r = Rasterizer::new(&mut c);
        for scale in [1, 2, 3] {
            assert_eq!(r.draw_char(0, 0, 'A', FG, scale), (3 * scale + scale) as i32);
        }
    }

    #[test]
    fn test_draw_char_huge_scale_saturates() {
        let mut c = canvas(4, 4);
        let advance = Rasterizer::new(&mut c).draw_char(0, 0, 'E', FG, 600_000_000);
        assert_eq!(advance, i32::MAX);
        // The top-left block alone covers the whole canvas.
        assert_eq!(painted(&c), 16);
    }

    #[test]
    fn test_draw_char_unsupported_is_noop() {
        let mut c = canvas(8, 8);
        let before = c.clone();
        let advance = Rasterizer::new(&mut c).draw_char(1, 1, '!', FG, 2);
        assert_eq!(advance, 0);
        assert_eq!(c, before);
    }

    #[test]
    fn test_draw_char_scaled_blocks() {
        let mut c = canvas(8, 10);
        Rasterizer::new(&mut c).draw_char(0, 0, 't', FG, 2);
        assert_snapshot!(ascii(&c), @r"
        ######..
        ######..
        ..##....
        ..##....
        ..##....
        ..##....
        ..##....
        ..##....
        ..##....
        ..##....
        ");
    }

    #[test]
    fn test_draw_text_skips_unknown_without_advancing() {
        let mut c = canvas(12, 5);
        let total = Rasterizer::new(&mut c).draw_text(0, 0, "H!I", FG, 1);
        assert_eq!(total, 8);
        assert_snapshot!(ascii(&c), @r"
        #.#.###.....
        #.#..#......
        ###..#......
        #.#..#......
        #.#.###.....
        ");
    }

    #[test]
    fn test_draw_text_clips_at_edge() {
        let mut c = canvas(5, 5);
        let total = Rasterizer::new(&mut c).draw_text(3, 0, "OO", FG, 1);
        assert_eq!(total, 8);
        assert_eq!(c.get_pixel(4, 0), Some(FG));
    }

    #[test]
    fn test_measure_text_matches_draw() {
        let mut c = canvas(64, 16);
        let drawn = Rasterizer::new(&mut c).draw_text(0, 0, "Buffer: 1.8s", FG, 2);
        assert_eq!(measure_text("Buffer: 1.8s", 2), drawn);
        assert_eq!(measure_text("", 3), 0);
    }

    #[test]
    fn test_apply_commands() {
        let mut c = canvas(10, 10);
        let mut r = Rasterizer::new(&mut c);
        r.apply(&DrawCommand::rect(0, 0, 2, 2, FG));
        r.apply(&DrawCommand::text(4, 0, "-", FG, 1));
        r.apply(&DrawCommand::triangle([(6, 6), (6, 6), (6, 6)], FG));
        assert_eq!(r.canvas().get_pixel(1, 1), Some(FG));
        assert_eq!(c.get_pixel(5, 2), Some(FG));
        assert_eq!(c.get_pixel(6, 6), Some(FG));
        assert_eq!(c.get_pixel(5, 1), Some(BG));
    }
}
