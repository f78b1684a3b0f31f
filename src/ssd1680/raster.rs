//! Drawing primitives on a [`Framebuffer`]
//!
//! Point, line, rectangle and circle take 1-based coordinates: `(1, 1)` is
//! the top left logical pixel and anything at 0 falls off the surface. Text
//! and picture origins are 0-based.

use crate::ssd1680::color::Color;
use crate::ssd1680::font;
use crate::ssd1680::graphics::Framebuffer;
use crate::ssd1680::HEIGHT;

/// Outline or solid shapes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawMode {
    /// Border only
    #[default]
    Outline,
    /// Border and interior
    Filled,
}

impl Framebuffer<'_> {
    /// 1-based plot, shared by every primitive
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        let (Ok(x), Ok(y)) = (u16::try_from(x - 1), u16::try_from(y - 1)) else {
            return;
        };
        self.set_pixel(x, y, color);
    }

    /// Set the pixel at 1-based `(x, y)`
    pub fn draw_point(&mut self, x: u16, y: u16, color: Color) {
        self.plot(i32::from(x), i32::from(y), color);
    }

    /// Bresenham line, both endpoints included
    pub fn draw_line(&mut self, xs: u16, ys: u16, xe: u16, ye: u16, color: Color) {
        self.line(
            i32::from(xs),
            i32::from(ys),
            i32::from(xe),
            i32::from(ye),
            color,
        );
    }

    fn line(&mut self, xs: i32, ys: i32, xe: i32, ye: i32, color: Color) {
        let dx = (xe - xs).abs();
        let dy = -(ye - ys).abs();
        let x_step = if xs < xe { 1 } else { -1 };
        let y_step = if ys < ye { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (xs, ys);

        loop {
            self.plot(x, y, color);
            if 2 * err >= dy {
                if x == xe {
                    break;
                }
                err += dy;
                x += x_step;
            }
            if 2 * err <= dx {
                if y == ye {
                    break;
                }
                err += dx;
                y += y_step;
            }
        }
    }

    /// Rectangle with corners `(xs, ys)` and `(xe, ye)`.
    ///
    /// Filled rectangles stop one row short of `ye`.
    pub fn draw_rectangle(
        &mut self,
        xs: u16,
        ys: u16,
        xe: u16,
        ye: u16,
        color: Color,
        mode: DrawMode,
    ) {
        match mode {
            DrawMode::Filled => {
                for row in ys..ye {
                    self.draw_line(xs, row, xe, row, color);
                }
            }
            DrawMode::Outline => {
                self.draw_line(xs, ys, xe, ys, color);
                self.draw_line(xs, ys, xs, ye, color);
                self.draw_line(xe, ye, xe, ys, color);
                self.draw_line(xe, ye, xs, ye, color);
            }
        }
    }

    /// Midpoint circle around `(xc, yc)`
    pub fn draw_circle(&mut self, xc: u16, yc: u16, radius: u16, color: Color, mode: DrawMode) {
        let (xc, yc) = (i32::from(xc), i32::from(yc));
        let mut x = 0i32;
        let mut y = i32::from(radius);
        let mut err = 3 - 2 * y;

        while x <= y {
            match mode {
                DrawMode::Outline => self.octants(xc, yc, x, y, color),
                DrawMode::Filled => {
                    for s in x..=y {
                        self.octants(xc, yc, x, s, color);
                    }
                }
            }
            if err < 0 {
                err += 4 * x + 6;
            } else {
                err += 10 + 4 * (x - y);
                y -= 1;
            }
            x += 1;
        }
    }

    fn octants(&mut self, xc: i32, yc: i32, a: i32, b: i32, color: Color) {
        self.plot(xc + a, yc + b, color);
        self.plot(xc - a, yc + b, color);
        self.plot(xc - b, yc + a, color);
        self.plot(xc - b, yc - a, color);
        self.plot(xc - a, yc - b, color);
        self.plot(xc + a, yc - b, color);
        self.plot(xc + b, yc - a, color);
        self.plot(xc + b, yc + a, color);
    }

    /// Draw one glyph with its top left at 0-based `(x, y)`.
    ///
    /// Set glyph bits take `color`, clear ones the inverse, so the cell
    /// background is painted too. Characters without a glyph are counted in
    /// [`Framebuffer::ignored_requests`].
    pub fn show_char(&mut self, x: u16, y: u16, ch: u8, size: u16, color: Color) {
        let Some(glyph) = self.fonts.glyph(size, ch) else {
            self.note_ignored(size, ch);
            return;
        };
        let x0 = i32::from(x) + 1;
        let mut y0 = i32::from(y) + 1;
        if x0 - i32::from(size) > i32::from(HEIGHT) {
            return;
        }
        let column_width = i32::from(size / 2);
        let (mut px, mut py) = (x0, y0);

        for &byte in glyph {
            let mut bits = byte;
            for _ in 0..8 {
                let pen = if bits & 0x01 != 0 { color } else { !color };
                self.plot(px, py, pen);
                bits >>= 1;
                py += 1;
            }
            px += 1;
            if size != 8 && px - x0 == column_width {
                px = x0;
                y0 += 8;
            }
            py = y0;
        }
    }

    /// Draw `text` left to right from 0-based `(x, y)`
    pub fn show_string(&mut self, x: u16, y: u16, text: &str, size: u16, color: Color) {
        let mut x = x;
        for ch in text.bytes() {
            self.show_char(x, y, ch, size, color);
            x = x.saturating_add(font::advance(size));
        }
    }

    /// Draw `num` as exactly `len` decimal digits, zero padded.
    ///
    /// Digits above `len` are dropped.
    pub fn show_num(&mut self, x: u16, y: u16, num: u32, len: u16, size: u16, color: Color) {
        let extra = if size == 8 { 2 } else { 0 };
        let step = size / 2 + extra;

        for t in 0..len {
            let digit = 10u32
                .checked_pow(u32::from(len - t - 1))
                .map_or(0, |place| (num / place) % 10);
            // digit < 10, the cast cannot truncate
            let ch = b'0' + digit as u8;
            self.show_char(x.saturating_add(step.saturating_mul(t)), y, ch, size, color);
        }
    }

    /// Draw a `width` × `height` bitmap from 0-based `(x, y)`.
    ///
    /// The bitmap is stored like a glyph: bands of eight rows, one byte per
    /// column, least significant bit on top. Set bits take the inverse of
    /// `color`, clear bits `color`. Drawing stops early if `bitmap` runs out.
    pub fn show_picture(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        bitmap: &[u8],
        color: Color,
    ) {
        let x0 = i32::from(x) + 1;
        let mut y0 = i32::from(y) + 1;
        let (mut px, mut py) = (x0, y0);
        let mut bytes = bitmap.iter();

        for _ in 0..height.div_ceil(8) {
            for _ in 0..width {
                let Some(&byte) = bytes.next() else {
                    log::debug!("Bitmap ended before {}x{} were drawn", width, height);
                    return;
                };
                let mut bits = byte;
                for _ in 0..8 {
                    let pen = if bits & 0x01 != 0 { !color } else { color };
                    self.plot(px, py, pen);
                    bits >>= 1;
                    py += 1;
                }
                px += 1;
                if px - x0 == i32::from(width) {
                    px = x0;
                    y0 += 8;
                }
                py = y0;
            }
        }
    }
}
