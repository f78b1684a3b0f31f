//! Framebuffer with rotation and embedded-graphics support
//!
//! One bit per pixel, MSB leftmost, rows of `ceil(width / 8)` bytes in the
//! layout the controller RAM expects. Logical coordinates are translated to
//! physical ones according to the [`Rotation`]; with [`Rotation::Rotate0`]
//! and [`Rotation::Rotate180`] the panel is used in landscape, so the logical
//! width is the physical height.
//!
//! ```
//! use ssd1680_paint::{Color, Framebuffer, Rotation, BUFFER_SIZE, HEIGHT, WIDTH};
//!
//! let mut image = [0u8; BUFFER_SIZE];
//! let mut fb = Framebuffer::new(&mut image, WIDTH, HEIGHT, Rotation::Rotate0, Color::White)?;
//! fb.clear(Color::White);
//! fb.draw_point(1, 1, Color::Black);
//! assert_eq!(fb.pixel(0, 0), Some(Color::Black));
//! # Ok::<(), ssd1680_paint::Error>(())
//! ```

use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

use crate::ssd1680::color::Color;
use crate::ssd1680::error::Error;
use crate::ssd1680::font::FontSet;

/// Clockwise rotation of the logical drawing surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// Landscape
    #[default]
    Rotate0,
    /// Portrait, upside down
    Rotate90,
    /// Landscape, upside down
    Rotate180,
    /// Portrait, logical and physical coordinates coincide
    Rotate270,
}

impl Rotation {
    /// Map 0, 90, 180 or 270 to a rotation
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Rotate0),
            90 => Some(Rotation::Rotate90),
            180 => Some(Rotation::Rotate180),
            270 => Some(Rotation::Rotate270),
            _ => None,
        }
    }

    /// Rotation in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Rotate0 => 0,
            Rotation::Rotate90 => 90,
            Rotation::Rotate180 => 180,
            Rotation::Rotate270 => 270,
        }
    }

    fn is_landscape(self) -> bool {
        matches!(self, Rotation::Rotate0 | Rotation::Rotate180)
    }
}

/// Drawing surface over a caller-owned image buffer
pub struct Framebuffer<'a> {
    image: &'a mut [u8],
    width_memory: u16,
    height_memory: u16,
    width_byte: u16,
    width: u16,
    height: u16,
    rotation: Rotation,
    background: Color,
    pub(crate) fonts: FontSet<'a>,
    ignored: u32,
}

impl<'a> Framebuffer<'a> {
    /// Wrap `image` as a `width` × `height` physical surface.
    ///
    /// `image` must hold at least `ceil(width / 8) * height` bytes. The
    /// background color is what [`DrawTarget`] maps `BinaryColor::Off` to.
    pub fn new(
        image: &'a mut [u8],
        width: u16,
        height: u16,
        rotation: Rotation,
        background: Color,
    ) -> Result<Self, Error> {
        let width_byte = width.div_ceil(8);
        let required = usize::from(width_byte) * usize::from(height);
        if image.len() < required {
            log::error!(
                "Image of {} bytes cannot hold {}x{} pixels",
                image.len(),
                width,
                height
            );
            return Err(Error::BufferTooSmall {
                required,
                provided: image.len(),
            });
        }

        let (logical_width, logical_height) = if rotation.is_landscape() {
            (height, width)
        } else {
            (width, height)
        };
        log::debug!(
            "New {}x{} framebuffer, rotation {}",
            logical_width,
            logical_height,
            rotation.degrees()
        );

        Ok(Framebuffer {
            image,
            width_memory: width,
            height_memory: height,
            width_byte,
            width: logical_width,
            height: logical_height,
            rotation,
            background,
            fonts: FontSet::new(),
            ignored: 0,
        })
    }

    /// Use `fonts` for the text primitives
    pub fn with_fonts(mut self, fonts: FontSet<'a>) -> Self {
        self.fonts = fonts;
        self
    }

    /// Replace the font tables
    pub fn set_fonts(&mut self, fonts: FontSet<'a>) {
        self.fonts = fonts;
    }

    /// Redirect drawing to another buffer of the same geometry, handing back the old one
    pub fn select_image(&mut self, image: &'a mut [u8]) -> Result<&'a mut [u8], Error> {
        let required = self.required_len();
        if image.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: image.len(),
            });
        }
        Ok(core::mem::replace(&mut self.image, image))
    }

    /// Logical width after rotation
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Logical height after rotation
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Background color given at construction
    pub fn background(&self) -> Color {
        self.background
    }

    /// The packed image, ready for [`Ssd1680::display`](crate::Ssd1680::display)
    pub fn buffer(&self) -> &[u8] {
        &self.image[..self.required_len()]
    }

    /// Number of text draws dropped because no glyph was available
    pub fn ignored_requests(&self) -> u32 {
        self.ignored
    }

    pub(crate) fn note_ignored(&mut self, size: u16, ch: u8) {
        self.ignored = self.ignored.saturating_add(1);
        log::warn!("No size {} glyph for 0x{:02X}, skipped", size, ch);
    }

    fn required_len(&self) -> usize {
        usize::from(self.width_byte) * usize::from(self.height_memory)
    }

    /// Byte offset and bit mask of a logical pixel, `None` outside the surface
    fn locate(&self, x: u16, y: u16) -> Option<(usize, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let (px, py) = match self.rotation {
            Rotation::Rotate0 => (self.width_memory - y - 1, x),
            Rotation::Rotate90 => (self.width_memory - x - 1, self.height_memory - y - 1),
            Rotation::Rotate180 => (y, self.height_memory - x - 1),
            Rotation::Rotate270 => (x, y),
        };
        let addr = usize::from(px / 8) + usize::from(py) * usize::from(self.width_byte);
        Some((addr, 0x80 >> (px % 8)))
    }

    /// Set one logical pixel. Coordinates outside the surface are clipped.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        let Some((addr, mask)) = self.locate(x, y) else {
            log::trace!("Pixel ({}, {}) clipped", x, y);
            return;
        };
        match color {
            Color::Black => self.image[addr] &= !mask,
            Color::White => self.image[addr] |= mask,
        }
    }

    /// Read one logical pixel back
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        let (addr, mask) = self.locate(x, y)?;
        if self.image[addr] & mask == 0 {
            Some(Color::Black)
        } else {
            Some(Color::White)
        }
    }

    /// Fill the whole image with `color`
    pub fn clear(&mut self, color: Color) {
        self.fill(color.byte());
    }

    /// Fill every image byte with `pattern`, eight pixels at a time
    pub fn fill(&mut self, pattern: u8) {
        let len = self.required_len();
        self.image[..len].fill(pattern);
    }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let background = self.background;
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            let color = match color {
                BinaryColor::On => !background,
                BinaryColor::Off => background,
            };
            self.set_pixel(x, y, color);
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width), u32::from(self.height))
    }
}
