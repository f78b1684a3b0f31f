//! B/W color for the framebuffer

/// Pixel color as stored in the panel RAM, 0 = black, 1 = white
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    /// Ink
    Black,
    /// Paper
    #[default]
    White,
}

impl Color {
    /// Byte with all eight pixels in this color, for [`Framebuffer::clear`](crate::Framebuffer::clear)
    pub const fn byte(self) -> u8 {
        match self {
            Color::Black => 0x00,
            Color::White => 0xFF,
        }
    }

    /// The other color
    pub const fn inverse(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl core::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        self.inverse()
    }
}
