//! Built-in 3x5 bitmap font.
//!
//! Each glyph is five rows, top to bottom. A row is a 3-bit mask where
//! bit 2 is the leftmost column. Only `A-Z`, `0-9`, space, `-` and `:`
//! exist; everything else has no glyph.

/// Glyph width in columns.
pub const GLYPH_COLUMNS: u32 = 3;

/// Glyph height in rows.
pub const GLYPH_ROWS: u32 = 5;

/// A 3x5 bitmap glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_ROWS as usize],
}

impl Glyph {
    const fn new(rows: [u8; GLYPH_ROWS as usize]) -> Self {
        Self { rows }
    }

    /// Whether the bit at (col, row) is set. Out-of-range cells are unset.
    pub fn is_set(&self, col: u32, row: u32) -> bool {
        if col >= GLYPH_COLUMNS || row >= GLYPH_ROWS {
            return false;
        }
        self.rows[row as usize] >> (GLYPH_COLUMNS - 1 - col) & 1 == 1
    }

    /// Iterate the set cells as (col, row).
    pub fn iter_set(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..GLYPH_ROWS).flat_map(move |row| {
            (0..GLYPH_COLUMNS)
                .filter(move |&col| self.is_set(col, row))
                .map(move |col| (col, row))
        })
    }
}

/// Look up the glyph for a character, ignoring case.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let g = match c.to_ascii_uppercase() {
        'A' => &A,
        'B' => &B,
        'C' => &C,
        'D' => &D,
        'E' => &E,
        'F' => &F,
        'G' => &G,
        'H' => &H,
        'I' => &I,
        'J' => &J,
        'K' => &K,
        'L' => &L,
        'M' => &M,
        'N' => &N,
        'O' => &O,
        'P' => &P,
        'Q' => &Q,
        'R' => &R,
        'S' => &S,
        'T' => &T,
        'U' => &U,
        'V' => &V,
        'W' => &W,
        'X' => &X,
        'Y' => &Y,
        'Z' => &Z,
        '0' => &DIGIT_0,
        '1' => &DIGIT_1,
        '2' => &DIGIT_2,
        '3' => &DIGIT_3,
        '4' => &DIGIT_4,
        '5' => &DIGIT_5,
        '6' => &DIGIT_6,
        '7' => &DIGIT_7,
        '8' => &DIGIT_8,
        '9' => &DIGIT_9,
        ' ' => &SPACE,
        '-' => &HYPHEN,
        ':' => &COLON,
        _ => return None,
    };
    Some(g)
}

const A: Glyph = Glyph::new([0b010, 0b101, 0b111, 0b101, 0b101]);
const B: Glyph = Glyph::new([0b110, 0b101, 0b110, 0b101, 0b110]);
const C: Glyph = Glyph::new([0b011, 0b100, 0b100, 0b100, 0b011]);
const D: Glyph = Glyph::new([0b110, 0b101, 0b101, 0b101, 0b110]);
const E: Glyph = Glyph::new([0b111, 0b100, 0b110, 0b100, 0b111]);
const F: Glyph = Glyph::new([0b111, 0b100, 0b110, 0b100, 0b100]);
const G: Glyph = Glyph::new([0b011, 0b100, 0b101, 0b101, 0b011]);
const H: Glyph = Glyph::new([0b101, 0b101, 0b111, 0b101, 0b101]);
const I: Glyph = Glyph::new([0b111, 0b010, 0b010, 0b010, 0b111]);
const J: Glyph = Glyph::new([0b001, 0b001, 0b001, 0b101, 0b010]);
const K: Glyph = Glyph::new([0b101, 0b101, 0b110, 0b101, 0b101]);
const L: Glyph = Glyph::new([0b100, 0b100, 0b100, 0b100, 0b111]);
const M: Glyph = Glyph::new([0b101, 0b111, 0b111, 0b101, 0b101]);
const N: Glyph = Glyph::new([0b101, 0b111, 0b111, 0b111, 0b101]);
const O: Glyph = Glyph::new([0b010, 0b101, 0b101, 0b101, 0b010]);
const P: Glyph = Glyph::new([0b110, 0b101, 0b110, 0b100, 0b100]);
const Q: Glyph = Glyph::new([0b010, 0b101, 0b101, 0b111, 0b011]);
const R: Glyph = Glyph::new([0b110, 0b101, 0b110, 0b101, 0b101]);
const S: Glyph = Glyph::new([0b011, 0b100, 0b010, 0b001, 0b110]);
const T: Glyph = Glyph::new([0b111, 0b010, 0b010, 0b010, 0b010]);
const U: Glyph = Glyph::new([0b101, 0b101, 0b101, 0b101, 0b111]);
const V: Glyph = Glyph::new([0b101, 0b101, 0b101, 0b101, 0b010]);
const W: Glyph = Glyph::new([0b101, 0b101, 0b111, 0b111, 0b101]);
const X: Glyph = Glyph::new([0b101, 0b101, 0b010, 0b101, 0b101]);
const Y: Glyph = Glyph::new([0b101, 0b101, 0b010, 0b010, 0b010]);
const Z: Glyph = Glyph::new([0b111, 0b001, 0b010, 0b100, 0b111]);
const DIGIT_0: Glyph = Glyph::new([0b111, 0b101, 0b101, 0b101, 0b111]);
const DIGIT_1: Glyph = Glyph::new([0b010, 0b110, 0b010, 0b010, 0b111]);
const DIGIT_2: Glyph = Glyph::new([0b111, 0b001, 0b111, 0b100, 0b111]);
const DIGIT_3: Glyph = Glyph::new([0b111, 0b001, 0b111, 0b001, 0b111]);
const DIGIT_4: Glyph = Glyph::new([0b101, 0b101, 0b111, 0b001, 0b001]);
const DIGIT_5: Glyph = Glyph::new([0b111, 0b100, 0b111, 0b001, 0b111]);
const DIGIT_6: Glyph = Glyph::new([0b111, 0b100, 0b111, 0b101, 0b111]);
const DIGIT_7: Glyph = Glyph::new([0b111, 0b001, 0b010, 0b100, 0b100]);
const DIGIT_8: Glyph = Glyph::new([0b111, 0b101, 0b111, 0b101, 0b111]);
const DIGIT_9: Glyph = Glyph::new([0b111, 0b101, 0b111, 0b001, 0b111]);
const SPACE: Glyph = Glyph::new([0b000; 5]);
const HYPHEN: Glyph = Glyph::new([0b000, 0b000, 0b111, 0b000, 0b000]);
const COLON: Glyph = Glyph::new([0b000, 0b010, 0b000, 0b010, 0b000]);
