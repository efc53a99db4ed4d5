//! Stroke font used by [`crate::Text`].
//!
//! Glyphs are drawn on a 3x5 point grid: `x` in `0..=2` (left to right) and
//! `y` in `0..=4` (top to bottom). Each stroke is a straight segment between
//! two grid points.

/// A segment between two grid points `((x0, y0), (x1, y1))`.
pub type Stroke = ((u8, u8), (u8, u8));

/// Grid columns spanned by a glyph (points `0..=GRID_WIDTH`).
pub const GRID_WIDTH: u8 = 2;

/// Grid rows spanned by a glyph (points `0..=GRID_HEIGHT`).
pub const GRID_HEIGHT: u8 = 4;

const A: &[Stroke] = &[((0, 4), (0, 1)), ((0, 1), (1, 0)), ((1, 0), (2, 1)), ((2, 1), (2, 4)), ((0, 2), (2, 2))];
const B: &[Stroke] = &[
    ((0, 0), (0, 4)),
    ((0, 0), (1, 0)),
    ((1, 0), (2, 1)),
    ((2, 1), (1, 2)),
    ((0, 2), (1, 2)),
    ((1, 2), (2, 3)),
    ((2, 3), (1, 4)),
    ((1, 4), (0, 4)),
];
const C: &[Stroke] = &[((2, 0), (0, 0)), ((0, 0), (0, 4)), ((0, 4), (2, 4))];
const D: &[Stroke] = &[
    ((0, 0), (0, 4)),
    ((0, 0), (1, 0)),
    ((1, 0), (2, 1)),
    ((2, 1), (2, 3)),
    ((2, 3), (1, 4)),
    ((1, 4), (0, 4)),
];
const E: &[Stroke] = &[((2, 0), (0, 0)), ((0, 0), (0, 4)), ((0, 4), (2, 4)), ((0, 2), (1, 2))];
const F: &[Stroke] = &[((2, 0), (0, 0)), ((0, 0), (0, 4)), ((0, 2), (1, 2))];
const G: &[Stroke] = &[((2, 0), (0, 0)), ((0, 0), (0, 4)), ((0, 4), (2, 4)), ((2, 4), (2, 2)), ((2, 2), (1, 2))];
const H: &[Stroke] = &[((0, 0), (0, 4)), ((2, 0), (2, 4)), ((0, 2), (2, 2))];
const I: &[Stroke] = &[((0, 0), (2, 0)), ((1, 0), (1, 4)), ((0, 4), (2, 4))];
const J: &[Stroke] = &[((2, 0), (2, 4)), ((2, 4), (0, 4)), ((0, 4), (0, 3))];
const K: &[Stroke] = &[((0, 0), (0, 4)), ((2, 0), (0, 2)), ((0, 2), (2, 4))];
const L: &[Stroke] = &[((0, 0), (0, 4)), ((0, 4), (2, 4))];
const M: &[Stroke] = &[((0, 4), (0, 0)), ((0, 0), (1, 2)), ((1, 2), (2, 0)), ((2, 0), (2, 4))];
const N: &[Stroke] = &[((0, 4), (0, 0)), ((0, 0), (2, 4)), ((2, 4), (2, 0))];
const O: &[Stroke] = &[((0, 0), (2, 0)), ((2, 0), (2, 4)), ((2, 4), (0, 4)), ((0, 4), (0, 0))];
const P: &[Stroke] = &[((0, 4), (0, 0)), ((0, 0), (2, 0)), ((2, 0), (2, 2)), ((2, 2), (0, 2))];
const Q: &[Stroke] = &[((0, 0), (2, 0)), ((2, 0), (2, 4)), ((2, 4), (0, 4)), ((0, 4), (0, 0)), ((1, 3), (2, 4))];
const R: &[Stroke] = &[((0, 4), (0, 0)), ((0, 0), (2, 0)), ((2, 0), (2, 2)), ((2, 2), (0, 2)), ((1, 2), (2, 4))];
const S: &[Stroke] = &[((2, 0), (0, 0)), ((0, 0), (0, 2)), ((0, 2), (2, 2)), ((2, 2), (2, 4)), ((2, 4), (0, 4))];
const T: &[Stroke] = &[((0, 0), (2, 0)), ((1, 0), (1, 4))];
const U: &[Stroke] = &[((0, 0), (0, 4)), ((0, 4), (2, 4)), ((2, 4), (2, 0))];
const V: &[Stroke] = &[((0, 0), (1, 4)), ((1, 4), (2, 0))];
const W: &[Stroke] = &[((0, 0), (0, 4)), ((0, 4), (1, 2)), ((1, 2), (2, 4)), ((2, 4), (2, 0))];
const X: &[Stroke] = &[((0, 0), (2, 4)), ((2, 0), (0, 4))];
const Y: &[Stroke] = &[((0, 0), (1, 2)), ((2, 0), (1, 2)), ((1, 2), (1, 4))];
const Z: &[Stroke] = &[((0, 0), (2, 0)), ((2, 0), (0, 4)), ((0, 4), (2, 4))];

const DIGIT_0: &[Stroke] = &[((0, 0), (2, 0)), ((2, 0), (2, 4)), ((2, 4), (0, 4)), ((0, 4), (0, 0)), ((0, 4), (2, 0))];
const DIGIT_1: &[Stroke] = &[((0, 1), (1, 0)), ((1, 0), (1, 4)), ((0, 4), (2, 4))];
const DIGIT_2: &[Stroke] = &[((0, 0), (2, 0)), ((2, 0), (2, 2)), ((2, 2), (0, 2)), ((0, 2), (0, 4)), ((0, 4), (2, 4))];
const DIGIT_3: &[Stroke] = &[((0, 0), (2, 0)), ((2, 0), (2, 4)), ((2, 4), (0, 4)), ((0, 2), (2, 2))];
const DIGIT_4: &[Stroke] = &[((0, 0), (0, 2)), ((0, 2), (2, 2)), ((2, 0), (2, 4))];
const DIGIT_6: &[Stroke] = &[((2, 0), (0, 0)), ((0, 0), (0, 4)), ((0, 4), (2, 4)), ((2, 4), (2, 2)), ((2, 2), (0, 2))];
const DIGIT_7: &[Stroke] = &[((0, 0), (2, 0)), ((2, 0), (1, 4))];
const DIGIT_8: &[Stroke] = &[((0, 0), (2, 0)), ((2, 0), (2, 4)), ((2, 4), (0, 4)), ((0, 4), (0, 0)), ((0, 2), (2, 2))];
const DIGIT_9: &[Stroke] = &[((2, 2), (0, 2)), ((0, 2), (0, 0)), ((0, 0), (2, 0)), ((2, 0), (2, 4)), ((2, 4), (0, 4))];

const DASH: &[Stroke] = &[((0, 2), (2, 2))];
const PLUS: &[Stroke] = &[((0, 2), (2, 2)), ((1, 1), (1, 3))];
const PERIOD: &[Stroke] = &[((1, 3), (1, 4))];
const BANG: &[Stroke] = &[((1, 0), (1, 2)), ((1, 3), (1, 4))];
const QUESTION: &[Stroke] = &[((0, 0), (2, 0)), ((2, 0), (2, 1)), ((2, 1), (1, 2)), ((1, 2), (1, 3))];
const SLASH: &[Stroke] = &[((0, 4), (2, 0))];
const EQUALS: &[Stroke] = &[((0, 1), (2, 1)), ((0, 3), (2, 3))];

/// Strokes for `ch` (looked up by its uppercase form).
///
/// Space and characters outside the table have no strokes.
pub fn glyph_strokes(ch: char) -> &'static [Stroke] {
    match ch.to_ascii_uppercase() {
        'A' => A,
        'B' => B,
        'C' => C,
        'D' => D,
        'E' => E,
        'F' => F,
        'G' => G,
        'H' => H,
        'I' => I,
        'J' => J,
        'K' => K,
        'L' => L,
        'M' => M,
        'N' => N,
        'O' => O,
        'P' => P,
        'Q' => Q,
        'R' => R,
        'S' | '5' => S,
        'T' => T,
        'U' => U,
        'V' => V,
        'W' => W,
        'X' => X,
        'Y' => Y,
        'Z' => Z,
        '0' => DIGIT_0,
        '1' => DIGIT_1,
        '2' => DIGIT_2,
        '3' => DIGIT_3,
        '4' => DIGIT_4,
        '6' => DIGIT_6,
        '7' => DIGIT_7,
        '8' => DIGIT_8,
        '9' => DIGIT_9,
        '-' => DASH,
        '+' => PLUS,
        '.' => PERIOD,
        '!' => BANG,
        '?' => QUESTION,
        '/' => SLASH,
        '=' => EQUALS,
        _ => &[],
    }
}
