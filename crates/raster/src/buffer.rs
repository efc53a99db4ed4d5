//! Depth-tested raster targets and their text encodings.
//!
//! Storage is flat and row-major (`y * width + x`). Every write is bounds
//! checked and silently dropped when it falls outside the raster.

use crate::types::{
    BRAILLE_BLANK, BRAILLE_CELL_HEIGHT, BRAILLE_CELL_WIDTH, BRAILLE_DITHER_THRESHOLDS,
    BRAILLE_DOT_BITS, BRAILLE_FALLBACK_DOT, DEFAULT_SHADING_RAMP,
};

/// A raster the rasterizer can draw into.
///
/// Depth tests use a strict `<`: a write wins only when it is nearer than
/// what is stored, so ties keep the existing value.
pub trait RasterTarget {
    /// Raster units across (cells for ASCII, dots for Braille).
    fn raster_width(&self) -> usize;
    fn raster_height(&self) -> usize;
    /// Reset every cell to empty and every depth to infinity.
    fn clear(&mut self);
    /// Plot a binary mark. `glyph` is used where the target has glyphs.
    fn plot(&mut self, x: i64, y: i64, depth: f64, glyph: char) -> bool;
    /// Write a brightness sample in `[0, 1]`.
    fn shade(&mut self, x: i64, y: i64, depth: f64, brightness: f64) -> bool;
    /// `height` lines of exactly `width` terminal cells, joined by `'\n'`.
    fn to_frame(&self) -> String;
}

fn index(x: i64, y: i64, width: usize, height: usize) -> Option<usize> {
    if x < 0 || y < 0 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    (x < width && y < height).then(|| y * width + x)
}

/// One glyph per terminal cell.
#[derive(Debug, Clone)]
pub struct AsciiBuffer {
    width: usize,
    height: usize,
    cells: Vec<char>,
    depth: Vec<f64>,
    ramp: Vec<char>,
}

impl AsciiBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_ramp(width, height, DEFAULT_SHADING_RAMP)
    }

    /// Buffer shading through `ramp` (dark to light). An empty ramp falls back
    /// to the default one.
    pub fn with_ramp(width: usize, height: usize, ramp: &str) -> Self {
        let ramp = if ramp.is_empty() { DEFAULT_SHADING_RAMP } else { ramp };
        Self {
            width,
            height,
            cells: vec![' '; width * height],
            depth: vec![f64::INFINITY; width * height],
            ramp: ramp.chars().collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph at `(x, y)`, if in range.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        index(x as i64, y as i64, self.width, self.height).map(|i| self.cells[i])
    }

    /// Stored depth at `(x, y)`, if in range.
    pub fn depth_at(&self, x: usize, y: usize) -> Option<f64> {
        index(x as i64, y as i64, self.width, self.height).map(|i| self.depth[i])
    }

    /// Ramp glyph for `brightness`: `round(b * (len - 1))`, clamped.
    pub fn ramp_char(&self, brightness: f64) -> char {
        let last = self.ramp.len().saturating_sub(1);
        let b = if brightness.is_finite() { brightness.clamp(0.0, 1.0) } else { 0.0 };
        let i = ((b * last as f64).round() as usize).min(last);
        self.ramp.get(i).copied().unwrap_or(' ')
    }

    fn write(&mut self, x: i64, y: i64, depth: f64, glyph: char) -> bool {
        let Some(i) = index(x, y, self.width, self.height) else {
            return false;
        };
        if depth < self.depth[i] {
            self.depth[i] = depth;
            self.cells[i] = glyph;
            true
        } else {
            false
        }
    }
}

impl RasterTarget for AsciiBuffer {
    fn raster_width(&self) -> usize {
        self.width
    }

    fn raster_height(&self) -> usize {
        self.height
    }

    fn clear(&mut self) {
        self.cells.fill(' ');
        self.depth.fill(f64::INFINITY);
    }

    fn plot(&mut self, x: i64, y: i64, depth: f64, glyph: char) -> bool {
        self.write(x, y, depth, glyph)
    }

    fn shade(&mut self, x: i64, y: i64, depth: f64, brightness: f64) -> bool {
        let glyph = self.ramp_char(brightness);
        self.write(x, y, depth, glyph)
    }

    fn to_frame(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (row, line) in self.cells.chunks(self.width).enumerate() {
            if row > 0 {
                out.push('\n');
            }
            out.extend(line.iter());
        }
        out
    }
}

/// 2x4 dots per terminal cell.
///
/// Dots set by [`BrailleBuffer::set_pixel`] are binary. Samples written by
/// [`BrailleBuffer::set_brightness`] are kept raw and dithered when the frame
/// is encoded. Both share one depth store, so the nearer write owns a
/// sub-pixel whichever kind it is.
#[derive(Debug, Clone)]
pub struct BrailleBuffer {
    cols: usize,
    rows: usize,
    dots: Vec<bool>,
    depth: Vec<f64>,
    brightness: Vec<f64>,
    shaded: Vec<bool>,
}

impl BrailleBuffer {
    /// Buffer covering `cols x rows` terminal cells.
    pub fn new(cols: usize, rows: usize) -> Self {
        let n = cols * BRAILLE_CELL_WIDTH * rows * BRAILLE_CELL_HEIGHT;
        Self {
            cols,
            rows,
            dots: vec![false; n],
            depth: vec![f64::INFINITY; n],
            brightness: vec![0.0; n],
            shaded: vec![false; n],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Sub-pixels across.
    pub fn pixel_width(&self) -> usize {
        self.cols * BRAILLE_CELL_WIDTH
    }

    /// Sub-pixels down.
    pub fn pixel_height(&self) -> usize {
        self.rows * BRAILLE_CELL_HEIGHT
    }

    fn slot(&self, x: i64, y: i64, depth: f64) -> Option<usize> {
        let i = index(x, y, self.pixel_width(), self.pixel_height())?;
        (depth < self.depth[i]).then_some(i)
    }

    /// Raise the dot at sub-pixel `(x, y)` if `depth` is nearer than the stored
    /// one. Returns whether anything changed.
    pub fn set_pixel(&mut self, x: i64, y: i64, depth: f64) -> bool {
        let Some(i) = self.slot(x, y, depth) else {
            return false;
        };
        self.depth[i] = depth;
        self.dots[i] = true;
        self.shaded[i] = false;
        true
    }

    /// Store a brightness sample at sub-pixel `(x, y)` if `depth` is nearer.
    pub fn set_brightness(&mut self, x: i64, y: i64, depth: f64, brightness: f64) -> bool {
        let Some(i) = self.slot(x, y, depth) else {
            return false;
        };
        self.depth[i] = depth;
        self.dots[i] = false;
        self.shaded[i] = true;
        self.brightness[i] = if brightness.is_finite() { brightness.clamp(0.0, 1.0) } else { 0.0 };
        true
    }

    /// Whether the binary dot at `(x, y)` is raised.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        index(x as i64, y as i64, self.pixel_width(), self.pixel_height())
            .is_some_and(|i| self.dots[i])
    }

    /// Stored depth at sub-pixel `(x, y)`, if in range.
    pub fn depth_at(&self, x: usize, y: usize) -> Option<f64> {
        index(x as i64, y as i64, self.pixel_width(), self.pixel_height()).map(|i| self.depth[i])
    }

    /// Dot mask of the terminal cell `(col, row)`.
    ///
    /// Binary dots map straight to their bits. Brightness samples raise their
    /// dot when they meet the ordered-dither threshold for their position; a
    /// cell whose samples all miss but are not black gets the fallback dot.
    pub fn cell_mask(&self, col: usize, row: usize) -> u8 {
        let pw = self.pixel_width();
        let mut mask = 0u8;
        let mut shade_mask = 0u8;
        let mut touched = 0usize;
        let mut total = 0.0;

        for (dy, bits) in BRAILLE_DOT_BITS.iter().enumerate() {
            for (dx, bit) in bits.iter().enumerate() {
                let x = col * BRAILLE_CELL_WIDTH + dx;
                let y = row * BRAILLE_CELL_HEIGHT + dy;
                let i = y * pw + x;
                if self.dots[i] {
                    mask |= bit;
                } else if self.shaded[i] {
                    touched += 1;
                    total += self.brightness[i];
                    if self.brightness[i] >= BRAILLE_DITHER_THRESHOLDS[dy][dx] {
                        shade_mask |= bit;
                    }
                }
            }
        }

        if touched > 0 && shade_mask == 0 && total / touched as f64 > 0.0 {
            shade_mask = BRAILLE_FALLBACK_DOT;
        }
        mask | shade_mask
    }

    /// Glyph for the terminal cell `(col, row)`.
    pub fn cell_char(&self, col: usize, row: usize) -> char {
        encode_braille(self.cell_mask(col, row))
    }
}

/// Braille glyph for a dot mask: `U+2800 + mask`.
pub fn encode_braille(mask: u8) -> char {
    char::from_u32(BRAILLE_BLANK as u32 + mask as u32).unwrap_or(BRAILLE_BLANK)
}

impl RasterTarget for BrailleBuffer {
    fn raster_width(&self) -> usize {
        self.pixel_width()
    }

    fn raster_height(&self) -> usize {
        self.pixel_height()
    }

    fn clear(&mut self) {
        self.dots.fill(false);
        self.depth.fill(f64::INFINITY);
        self.brightness.fill(0.0);
        self.shaded.fill(false);
    }

    fn plot(&mut self, x: i64, y: i64, depth: f64, _glyph: char) -> bool {
        self.set_pixel(x, y, depth)
    }

    fn shade(&mut self, x: i64, y: i64, depth: f64, brightness: f64) -> bool {
        self.set_brightness(x, y, depth, brightness)
    }

    fn to_frame(&self) -> String {
        if self.cols == 0 || self.rows == 0 {
            return String::new();
        }
        // Braille glyphs are 3 bytes in UTF-8.
        let mut out = String::with_capacity((self.cols * 3 + 1) * self.rows);
        for row in 0..self.rows {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.cols {
                out.push(self.cell_char(col, row));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_depth_test_keeps_nearer() {
        let mut buf = AsciiBuffer::new(4, 2);
        assert!(buf.plot(1, 1, 0.5, 'a'));
        assert!(!buf.plot(1, 1, 0.9, 'b'));
        // Ties keep the existing glyph.
        assert!(!buf.plot(1, 1, 0.5, 'c'));
        assert!(buf.plot(1, 1, 0.1, 'd'));
        assert_eq!(buf.get(1, 1), Some('d'));
        assert_eq!(buf.depth_at(1, 1), Some(0.1));
    }

    #[test]
    fn ascii_out_of_bounds_is_dropped() {
        let mut buf = AsciiBuffer::new(3, 3);
        assert!(!buf.plot(-1, 0, 0.0, 'x'));
        assert!(!buf.plot(3, 0, 0.0, 'x'));
        assert!(!buf.plot(0, 3, 0.0, 'x'));
        assert_eq!(buf.to_frame(), "   \n   \n   ");
    }

    #[test]
    fn ascii_ramp_rounding() {
        let buf = AsciiBuffer::new(1, 1);
        assert_eq!(buf.ramp_char(0.0), '.');
        assert_eq!(buf.ramp_char(1.0), '@');
        assert_eq!(buf.ramp_char(2.0), '@');
        assert_eq!(buf.ramp_char(-1.0), '.');
        // 0.5 * 11 = 5.5 rounds to index 6.
        assert_eq!(buf.ramp_char(0.5), '=');

        let custom = AsciiBuffer::with_ramp(1, 1, "ab");
        assert_eq!(custom.ramp_char(0.49), 'a');
        assert_eq!(custom.ramp_char(0.5), 'b');
    }

    #[test]
    fn ascii_clear_resets_depth() {
        let mut buf = AsciiBuffer::new(2, 1);
        buf.plot(0, 0, -0.5, '#');
        buf.clear();
        assert_eq!(buf.get(0, 0), Some(' '));
        assert_eq!(buf.depth_at(0, 0), Some(f64::INFINITY));
        assert!(buf.plot(0, 0, 0.9, '#'));
    }

    #[test]
    fn empty_ascii_frame() {
        assert_eq!(AsciiBuffer::new(0, 5).to_frame(), "");
        assert_eq!(AsciiBuffer::new(5, 0).to_frame(), "");
    }

    #[test]
    fn braille_set_pixel_keeps_nearer() {
        let mut buf = BrailleBuffer::new(2, 2);
        assert!(buf.set_pixel(1, 2, 1.0));
        assert!(!buf.set_pixel(1, 2, 5.0));
        assert!(buf.is_set(1, 2));
        assert_eq!(buf.depth_at(1, 2), Some(1.0));
    }

    #[test]
    fn braille_dot_bits() {
        let mut buf = BrailleBuffer::new(1, 1);
        buf.set_pixel(0, 0, 0.0);
        assert_eq!(buf.cell_char(0, 0), '\u{2801}');
        buf.set_pixel(1, 3, 0.0);
        assert_eq!(buf.cell_mask(0, 0), 0x81);

        let mut full = BrailleBuffer::new(1, 1);
        for y in 0..4 {
            for x in 0..2 {
                full.set_pixel(x, y, 0.0);
            }
        }
        assert_eq!(full.cell_char(0, 0), '\u{28FF}');
    }

    #[test]
    fn braille_pixel_maps_to_its_cell() {
        let mut buf = BrailleBuffer::new(3, 2);
        // Sub-pixel (5, 6) is column 1 of cell 2, row 2 of cell 1.
        buf.set_pixel(5, 6, 0.0);
        assert_eq!(buf.cell_mask(2, 1), 0x20);
        assert_eq!(buf.to_frame(), "\u{2800}\u{2800}\u{2800}\n\u{2800}\u{2800}\u{2820}");
    }

    #[test]
    fn braille_full_brightness_sets_every_dot() {
        let mut buf = BrailleBuffer::new(1, 1);
        for y in 0..4 {
            for x in 0..2 {
                buf.set_brightness(x, y, 0.0, 1.0);
            }
        }
        assert_eq!(buf.cell_mask(0, 0), 0xFF);
    }

    #[test]
    fn braille_dither_thresholds() {
        let mut buf = BrailleBuffer::new(1, 1);
        for y in 0..4 {
            for x in 0..2 {
                buf.set_brightness(x, y, 0.0, 0.5);
            }
        }
        // Thresholds below 0.5: (0,0) 0.0625, (1,1) 0.3125, (0,2) 0.1875, (1,3) 0.4375.
        assert_eq!(buf.cell_mask(0, 0), 0x01 | 0x10 | 0x04 | 0x80);
    }

    #[test]
    fn braille_low_brightness_gets_fallback_dot() {
        let mut buf = BrailleBuffer::new(1, 1);
        buf.set_brightness(1, 0, 0.0, 0.05);
        assert_eq!(buf.cell_mask(0, 0), BRAILLE_FALLBACK_DOT);

        let mut black = BrailleBuffer::new(1, 1);
        black.set_brightness(0, 0, 0.0, 0.0);
        assert_eq!(black.cell_mask(0, 0), 0);
    }

    #[test]
    fn braille_nearer_write_owns_subpixel() {
        let mut buf = BrailleBuffer::new(1, 1);
        buf.set_brightness(0, 0, 0.5, 1.0);
        assert!(buf.set_pixel(0, 0, 0.2));
        assert!(!buf.set_brightness(0, 0, 0.3, 1.0));
        assert_eq!(buf.cell_mask(0, 0), 0x01);
        assert!(buf.set_brightness(0, 0, 0.1, 0.0));
        assert!(!buf.is_set(0, 0));
        assert_eq!(buf.cell_mask(0, 0), 0);
    }

    #[test]
    fn encode_braille_range() {
        assert_eq!(encode_braille(0), BRAILLE_BLANK);
        assert_eq!(encode_braille(0xFF), '\u{28FF}');
    }
}
